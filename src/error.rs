//! Error types for ncpreview.
//!
//! Container-level failures use [`PreviewError`] and abort the run. Faults on a
//! single attribute, dimension or variable are carried inline as [`ItemError`]
//! markers so the rest of the report can still be produced.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ncpreview operations.
pub type Result<T> = std::result::Result<T, PreviewError>;

/// Per-item result: the read value or the marker that replaces it.
pub type ItemResult<T> = std::result::Result<T, ItemError>;

/// Errors that abort a preview run.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Neither the resolved nor the raw input path exists.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The resolved path that was checked.
        path: PathBuf,
    },

    /// The container could not be opened by either path candidate.
    #[error("Failed to open netCDF file: {path}")]
    Open {
        /// The path of the last open attempt.
        path: PathBuf,
        /// The library fault from that attempt.
        #[source]
        source: netcdf::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PreviewError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an Open error.
    pub fn open(path: impl Into<PathBuf>, source: netcdf::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Marker substituted for an item that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("<error: {0}>")]
pub struct ItemError(pub String);

impl ItemError {
    /// Create a marker from any fault description.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The fault description without the marker decoration.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<netcdf::Error> for ItemError {
    fn from(err: netcdf::Error) -> Self {
        Self(err.to_string())
    }
}
