//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! Every variant is local and non-fatal: the session keeps its current scope
//! and continues with the next command. The `Display` text of each variant is
//! the response the line protocol reports.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variant | Raised by |
/// |----------|---------|-----------|
/// | Syntax | `Syntax` | Wrong argument count for SET/UNSET/GET/NUMEQUALTO |
/// | Transaction | `NoTransaction` | ROLLBACK or COMMIT at the root |
/// | Syntax | `InvalidEncoding` | A line that is not valid UTF-8 |
/// | Dispatch | `UnknownCommand` | A keyword outside the command table |
///
/// Absent names and values are never errors: GET reports no value,
/// NUMEQUALTO reports 0 and UNSET does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Wrong number of arguments; `input` echoes the tokens as given
    #[error("Syntax error: {input}")]
    Syntax {
        /// Raw tokens of the offending line, joined by single spaces
        input: String,
    },

    /// ROLLBACK or COMMIT with no open transaction
    #[error("{}", simpledb_core::NO_TRANSACTION)]
    NoTransaction,

    /// Input line that is not valid UTF-8
    #[error("Invalid input: line is not valid UTF-8")]
    InvalidEncoding,

    /// Keyword not in the command table
    #[error("Unknown command {command}")]
    UnknownCommand {
        /// The keyword, uppercased
        command: String,
    },
}
