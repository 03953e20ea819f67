//! Conversion configuration.
//!
//! Every knob has a default matching the expected EPUB layout (`EPUB/` content
//! root, pages under `xhtml/`, TOC at `xhtml/raw/contents.xhtml`) and the
//! fixed output layout (`index.html` plus `jquery.min.js`).

use std::time::Duration;

use crate::archive::WriterConfig;
use crate::transform::TransformConfig;
use crate::vendor::VendorConfig;
use crate::viewer::ViewerConfig;

/// Configuration for a [`Converter`](crate::Converter).
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub transform: TransformConfig,
    pub viewer: ViewerConfig,
    pub writer: WriterConfig,
    pub vendor: VendorConfig,
}

impl ConvertConfig {
    /// Transform entries on the rayon pool (default) or on the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.transform.parallel = parallel;
        self
    }

    /// Deflate level for the output archive, clamped to 1-9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.writer = self.writer.with_compression_level(level);
        self
    }

    /// Skip the script download and always bundle the placeholder.
    pub fn offline(mut self) -> Self {
        self.vendor.enabled = false;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.vendor.timeout = timeout;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.viewer.title = title.into();
        self
    }

    /// Use `name` for the vendored script, both in the archive and in the
    /// viewer's `<script src>`.
    pub fn with_script_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.viewer.script_name = name.clone();
        self.writer.script_name = name;
        self
    }
}
