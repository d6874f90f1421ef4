//! Error types for SimpleDB
//!
//! Infrastructure errors shared across crates. Protocol-level errors
//! (syntax, unknown command, no transaction) live with the executor,
//! where they are rendered as responses rather than propagated.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for SimpleDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SimpleDB
#[derive(Debug, Error)]
pub enum Error {
    /// Input that could not be accepted
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Configuration could not be read or was malformed
    #[error("Configuration error: {reason}")]
    Config {
        /// Underlying cause
        reason: String,
    },
}

impl Error {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a `Config` error.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}
