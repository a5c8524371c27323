//! Error types for NetCDF fx parsing operations.

use landsea_weighting::{FieldError, LoadError};
use thiserror::Error;

/// Result type for NetCDF parser operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF parsing.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<NetCdfError> for LoadError {
    fn from(err: NetCdfError) -> Self {
        match err {
            NetCdfError::NotFound(path) => LoadError::NotFound(path),
            NetCdfError::IoError(e) => LoadError::ReadFailed(e.to_string()),
            other => LoadError::InvalidFormat(other.to_string()),
        }
    }
}

impl From<NetCdfError> for FieldError {
    fn from(err: NetCdfError) -> Self {
        FieldError::compute_failed(err.to_string())
    }
}
