use std::fmt;

/// Stage of a conversion, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum Phase {
    Reading,
    Parsing,
    Extracting,
    ResolvingToc,
    FetchingScript,
    GeneratingViewer,
    BuildingArchive,
    Finalizing,
    Done,
}

impl Phase {
    /// Human-readable status text for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Reading => "Reading EPUB…",
            Phase::Parsing => "Parsing archive…",
            Phase::Extracting => "Extracting contents…",
            Phase::ResolvingToc => "Reading table of contents…",
            Phase::FetchingScript => "Fetching script…",
            Phase::GeneratingViewer => "Generating viewer…",
            Phase::BuildingArchive => "Building ZIP…",
            Phase::Finalizing => "Finalizing…",
            Phase::Done => "Done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point on the overall 0-100 progress scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ConversionProgress {
    pub phase: Phase,
    pub percent: u8,
}

/// Receives progress events from a conversion.
///
/// Within one conversion the observer sees percentages that never decrease.
/// A successful conversion ends with a `Done` event at 100; a failed one
/// simply stops sending events.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: ConversionProgress);
}

impl<F: FnMut(ConversionProgress)> ProgressObserver for F {
    fn on_progress(&mut self, progress: ConversionProgress) {
        self(progress)
    }
}

/// Enforces the observer contract on top of raw phase-local updates.
///
/// Events that would move backwards or repeat the previous event are
/// dropped, and nothing is forwarded once the conversion has finished or
/// failed.
pub(crate) struct ProgressTracker<'a> {
    observer: &'a mut dyn ProgressObserver,
    last: Option<ConversionProgress>,
    closed: bool,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(observer: &'a mut dyn ProgressObserver) -> Self {
        Self {
            observer,
            last: None,
            closed: false,
        }
    }

    pub(crate) fn emit(&mut self, phase: Phase, percent: u8) {
        if self.closed {
            return;
        }
        let percent = percent.min(100);
        if let Some(last) = self.last
            && (percent < last.percent || (percent == last.percent && phase == last.phase))
        {
            return;
        }

        let progress = ConversionProgress { phase, percent };
        self.last = Some(progress);
        self.observer.on_progress(progress);
    }

    /// Map `done / total` of a phase onto `[start, start + span]`.
    pub(crate) fn emit_fraction(&mut self, phase: Phase, start: u8, span: u8, done: u64, total: u64) {
        let offset = if total == 0 {
            span as u64
        } else {
            (done.min(total) * span as u64 + total / 2) / total
        };
        self.emit(phase, start + offset as u8);
    }

    pub(crate) fn finish(&mut self) {
        self.emit(Phase::Done, 100);
        self.closed = true;
    }

    pub(crate) fn fail(&mut self) {
        self.closed = true;
    }
}
