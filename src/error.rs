//! Error types for epubzip operations.

use thiserror::Error;

/// Errors that can occur while converting an EPUB into a viewer archive.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller selected something that is not an `.epub` file.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The source buffer is not a readable zip archive.
    #[error("Corrupt archive: {message}")]
    ArchiveDecode {
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },

    /// The vendored script could not be downloaded.
    ///
    /// Never returned from a conversion; the pipeline substitutes a placeholder.
    #[error("Script fetch failed: {0}")]
    VendorFetch(String),

    /// The output archive could not be produced.
    #[error("Failed to build archive: {message}")]
    ArchiveEncode {
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`], for callers that only need to
/// decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum ErrorKind {
    InvalidInput,
    ArchiveDecode,
    VendorFetch,
    ArchiveEncode,
    Io,
}

impl Error {
    pub(crate) fn decode(source: zip::result::ZipError) -> Self {
        Error::ArchiveDecode {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn encode(source: zip::result::ZipError) -> Self {
        Error::ArchiveEncode {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::ArchiveDecode { .. } => ErrorKind::ArchiveDecode,
            Error::VendorFetch(_) => ErrorKind::VendorFetch,
            Error::ArchiveEncode { .. } => ErrorKind::ArchiveEncode,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error aborts a conversion.
    ///
    /// Script fetch failures are absorbed by the pipeline; everything else is fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::VendorFetch(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
