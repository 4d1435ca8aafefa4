// ⚠️ Error Types
// Library-level failures for the record store and the regulation updaters

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing the JSON data files
#[derive(Debug, Error)]
pub enum StoreError {
    /// File exists but could not be read or written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not valid JSON of the expected shape
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory value could not be encoded
    #[error("Failed to serialize {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialize(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Serialize {
            path: path.into(),
            source,
        }
    }
}

/// Failures raised by a country updater
///
/// A country with no existing record is NOT an error for the placeholder
/// policy; that case is reported as `UpdateOutcome::SkippedMissing`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Invalid country code {code:?}: expected ISO 3166-1 alpha-2 (e.g. \"SG\")")]
    InvalidCountryCode { code: String },
}
