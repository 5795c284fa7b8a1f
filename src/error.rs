//! Error types for the prime factor cache
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

// == Prime Error Enum ==
/// Unified error type for input validation and file persistence.
#[derive(Error, Debug)]
pub enum PrimeError {
    /// Nothing was typed at the prompt
    #[error("Input cannot be empty")]
    EmptyInput,

    /// Input is not an integer
    #[error("Invalid input: {0:?} is not a valid integer")]
    InvalidInput(String),

    /// Input is an integer but not greater than 1
    #[error("{0} is not a natural number greater than 1")]
    TooSmall(String),

    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PrimeError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the errors that send the user back to the prompt.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InvalidInput(_) | Self::TooSmall(_)
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prime factor cache.
pub type Result<T> = std::result::Result<T, PrimeError>;
