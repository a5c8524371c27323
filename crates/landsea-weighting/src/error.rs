//! Error types for land/sea fraction weighting.

use thiserror::Error;

/// Errors raised by the weighting operation.
#[derive(Error, Debug)]
pub enum WeightingError {
    /// A caller passed an argument outside its contract (e.g. an unknown
    /// area type).
    #[error("{0}")]
    InvalidArgument(String),

    /// No fx field could be resolved to a usable fraction and strict mode
    /// was requested.
    #[error("{0}")]
    WeightingUnavailable(String),

    /// The loader failed to load an fx field.
    #[error("failed to load fx field '{fx_var}': {source}")]
    Load {
        fx_var: String,
        #[source]
        source: LoadError,
    },

    /// Array arithmetic or data replacement failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl WeightingError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a WeightingUnavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::WeightingUnavailable(msg.into())
    }

    /// Wrap a loader error for the given fx variable.
    pub fn load(fx_var: impl Into<String>, source: LoadError) -> Self {
        Self::Load {
            fx_var: fx_var.into(),
            source,
        }
    }
}

/// Errors from field data operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Two shapes cannot be broadcast against each other.
    #[error("shapes {left} and {right} are not broadcastable")]
    IncompatibleShapes { left: String, right: String },

    /// Data does not have the shape it was declared or required to have.
    #[error("expected data with shape {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// A deferred producer failed while computing its values.
    #[error("failed to compute deferred data: {0}")]
    ComputeFailed(String),
}

impl FieldError {
    /// Create a ComputeFailed error.
    pub fn compute_failed(msg: impl Into<String>) -> Self {
        Self::ComputeFailed(msg.into())
    }
}

/// Errors an [`FxLoader`](crate::loader::FxLoader) can report.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The referenced source does not exist.
    #[error("fx source not found: {0}")]
    NotFound(String),

    /// The source exists but could not be read.
    #[error("failed to read fx source: {0}")]
    ReadFailed(String),

    /// The source was read but does not contain a usable field.
    #[error("invalid fx source: {0}")]
    InvalidFormat(String),
}

/// Result type for weighting operations.
pub type Result<T> = std::result::Result<T, WeightingError>;

/// Result type for field data operations.
pub type FieldResult<T> = std::result::Result<T, FieldError>;
