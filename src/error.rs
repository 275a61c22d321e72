//! Error types for the age control core
//!
//! The mapping and offset math never fails. These errors only come from the
//! settings layer and from strict table parsing.

use thiserror::Error;

/// Main error type for the age control core
#[derive(Error, Debug)]
pub enum AgeControlError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid age scale line {line}: {content:?}")]
    InvalidBreakpoint { line: usize, content: String },

    #[error("Age scale is not monotone at breakpoint {index}")]
    NonMonotonic { index: usize },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for AgeControlError {
    fn from(err: serde_json::Error) -> Self {
        AgeControlError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<AgeControlError> for pyo3::PyErr {
    fn from(err: AgeControlError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyValueError};

        match err {
            AgeControlError::Io(e) => PyIOError::new_err(format!("Settings I/O error: {}", e)),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the age control core
pub type Result<T> = std::result::Result<T, AgeControlError>;
