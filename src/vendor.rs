//! Best-effort download of the script bundled next to the viewer.
//!
//! The fetch is allowed to fail in any way (no network, timeout, non-2xx
//! status, empty body). Every failure resolves to a fixed placeholder script
//! and is never reported to the caller as a conversion error.

use std::time::Duration;

use crate::error::{Error, Result};

/// Where the vendored script is downloaded from by default.
pub const DEFAULT_SCRIPT_URL: &str = "https://code.jquery.com/jquery-3.6.0.min.js";

/// Script written to the archive when the download fails.
pub const PLACEHOLDER_SCRIPT: &str = "/* jQuery unavailable */";

/// Configuration for the vendored script.
#[derive(Debug, Clone)]
pub struct VendorConfig {
    pub url: String,
    pub placeholder: String,
    /// Upper bound for the whole request.
    pub timeout: Duration,
    /// When false the placeholder is used without touching the network.
    pub enabled: bool,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SCRIPT_URL.to_string(),
            placeholder: PLACEHOLDER_SCRIPT.to_string(),
            timeout: Duration::from_secs(15),
            enabled: true,
        }
    }
}

/// Something that can produce the bytes behind a script URL.
pub trait ScriptSource: Send + Sync {
    /// Fetch `url`. Failures are reported as [`Error::VendorFetch`].
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;
}

/// A source that never reaches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl ScriptSource for OfflineSource {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>> {
        Err(Error::VendorFetch(format!("offline, not fetching {url}")))
    }
}

/// Fetches over HTTP(S) with a blocking client.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

#[cfg(feature = "fetch")]
impl ScriptSource for HttpSource {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        let fail = |e: reqwest::Error| Error::VendorFetch(format!("{url}: {e}"));

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(fail)?;
        let response = client
            .get(url)
            .send()
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?;
        let body = response.bytes().map_err(fail)?;

        Ok(body.to_vec())
    }
}

/// The script that ends up in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorScript {
    Fetched(Vec<u8>),
    Placeholder(String),
}

impl VendorScript {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            VendorScript::Fetched(bytes) => bytes,
            VendorScript::Placeholder(text) => text.as_bytes(),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, VendorScript::Fetched(_))
    }
}

/// Fetch the vendored script, substituting the placeholder on any failure.
pub fn resolve_script(source: &dyn ScriptSource, config: &VendorConfig) -> VendorScript {
    if !config.enabled {
        log::debug!("script fetch disabled, using placeholder");
        return VendorScript::Placeholder(config.placeholder.clone());
    }

    match source.fetch(&config.url, config.timeout) {
        Ok(bytes) if !bytes.is_empty() => {
            log::debug!("fetched {} bytes from {}", bytes.len(), config.url);
            VendorScript::Fetched(bytes)
        }
        Ok(_) => {
            log::warn!("{} returned an empty body, using placeholder", config.url);
            VendorScript::Placeholder(config.placeholder.clone())
        }
        Err(e) => {
            log::warn!("{e}; using placeholder");
            VendorScript::Placeholder(config.placeholder.clone())
        }
    }
}
