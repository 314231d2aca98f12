//! Error types for the reply matcher.
//!
//! Only caller contract violations, cancellation and serialization failures
//! are errors. Unknown categories and empty inputs are reported as
//! diagnostics instead (see [`crate::core::Diagnostic`]).

use thiserror::Error;

/// Main error type for matching operations.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Caller supplied a malformed input shape
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Batch run stopped through a cancel token
    #[error("Batch cancelled after {completed}/{total} queries")]
    Cancelled { completed: usize, total: usize },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MatchError {
    pub fn contract(msg: impl Into<String>) -> Self {
        MatchError::ContractViolation(msg.into())
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Serialization(err.to_string())
    }
}

/// Result type alias for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Convert matcher errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<MatchError> for pyo3::PyErr {
    fn from(err: MatchError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            MatchError::ContractViolation(msg) => PyValueError::new_err(msg),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
