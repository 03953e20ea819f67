use super::{ConversionProgress, ConversionResult, ConversionSummary, Converter, ProgressObserver};
use crate::error::{Error, ErrorKind, Result};

/// Where a [`ConversionSession`] currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Converting(ConversionProgress),
    Done {
        name: String,
        summary: ConversionSummary,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

/// Caller-owned conversion state for a front end.
///
/// A session remembers the selected source name and is advanced only by the
/// progress events and the final result of a conversion. Front ends render
/// it instead of keeping their own progress and status flags.
#[derive(Debug, Clone)]
pub struct ConversionSession {
    source_name: Option<String>,
    state: SessionState,
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionSession {
    pub fn new() -> Self {
        Self {
            source_name: None,
            state: SessionState::Idle,
        }
    }

    /// Select a source file by its display name.
    ///
    /// Rejects names that do not end in `.epub`; on success any previous
    /// result is cleared.
    pub fn select(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_source_name(&name)?;
        self.source_name = Some(name);
        self.state = SessionState::Idle;
        Ok(())
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Overall progress; 0 unless a conversion is running or has succeeded.
    pub fn percent(&self) -> u8 {
        match &self.state {
            SessionState::Converting(progress) => progress.percent,
            SessionState::Done { .. } => 100,
            SessionState::Idle | SessionState::Failed { .. } => 0,
        }
    }

    /// Status line for the current phase; empty when not converting.
    pub fn status(&self) -> &'static str {
        match &self.state {
            SessionState::Converting(progress) => progress.phase.label(),
            _ => "",
        }
    }

    pub fn is_converting(&self) -> bool {
        matches!(self.state, SessionState::Converting(_))
    }

    /// Record the outcome of a conversion.
    ///
    /// A failure discards any progress reached so far and keeps only the
    /// error classification and message.
    pub fn finish(&mut self, result: &ConversionResult) {
        match result {
            Ok(archive) => {
                self.state = SessionState::Done {
                    name: archive.name.clone(),
                    summary: archive.summary.clone(),
                };
            }
            Err(e) => {
                self.state = SessionState::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                };
            }
        }
    }

    /// Convert `data` as the selected source, tracking progress and outcome.
    pub fn run(&mut self, converter: &Converter, data: &[u8]) -> ConversionResult {
        let Some(name) = self.source_name.clone() else {
            return Err(Error::InvalidInput("no source file selected".into()));
        };
        self.state = SessionState::Idle;
        let result = converter.convert(data, &name, self);
        self.finish(&result);
        result
    }

    /// Forget the selection and any result.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl ProgressObserver for ConversionSession {
    fn on_progress(&mut self, progress: ConversionProgress) {
        if matches!(self.state, SessionState::Idle | SessionState::Converting(_)) {
            self.state = SessionState::Converting(progress);
        }
    }
}

/// Check that a display name looks like an EPUB file.
///
/// # Examples
///
/// ```
/// use epubzip::validate_source_name;
///
/// assert!(validate_source_name("Book.EPUB").is_ok());
/// assert!(validate_source_name("book.pdf").is_err());
/// ```
pub fn validate_source_name(name: &str) -> Result<()> {
    let is_epub = name
        .len()
        .checked_sub(5)
        .and_then(|start| name.get(start..))
        .is_some_and(|ext| ext.eq_ignore_ascii_case(".epub"));
    if is_epub {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("{name} is not an .epub file")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Phase;

    #[test]
    fn test_validate_source_name() {
        assert!(validate_source_name("a.epub").is_ok());
        assert!(validate_source_name("A.EpUb").is_ok());
        assert!(validate_source_name(".epub").is_ok());
        assert!(validate_source_name("epub").is_err());
        assert!(validate_source_name("a.epub.zip").is_err());
        assert!(validate_source_name("книга.epub").is_ok());
        assert_eq!(
            validate_source_name("a.mobi").unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_select_rejects_wrong_extension() {
        let mut session = ConversionSession::new();
        assert!(session.select("notes.txt").is_err());
        assert_eq!(session.source_name(), None);
        session.select("book.epub").unwrap();
        assert_eq!(session.source_name(), Some("book.epub"));
    }

    #[test]
    fn test_progress_updates_state() {
        let mut session = ConversionSession::new();
        session.on_progress(ConversionProgress {
            phase: Phase::Extracting,
            percent: 30,
        });
        assert!(session.is_converting());
        assert_eq!(session.percent(), 30);
        assert_eq!(session.status(), "Extracting contents…");
    }

    #[test]
    fn test_failure_resets_progress() {
        let mut session = ConversionSession::new();
        session.on_progress(ConversionProgress {
            phase: Phase::BuildingArchive,
            percent: 80,
        });
        session.finish(&Err(Error::VendorFetch("x".into())));
        assert_eq!(session.percent(), 0);
        assert_eq!(session.status(), "");
        assert!(matches!(
            session.state(),
            SessionState::Failed {
                kind: ErrorKind::VendorFetch,
                ..
            }
        ));

        // Late events are ignored once the session is terminal.
        session.on_progress(ConversionProgress {
            phase: Phase::Finalizing,
            percent: 97,
        });
        assert_eq!(session.percent(), 0);
    }

    #[test]
    fn test_run_without_selection() {
        let mut session = ConversionSession::new();
        let err = session.run(&Converter::offline(), b"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
