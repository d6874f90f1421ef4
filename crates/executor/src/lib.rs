//! # SimpleDB Executor
//!
//! The public API for SimpleDB, an in-memory key/value store with nested
//! transactions and a reverse value index.
//!
//! This is the only crate users need to import. It provides:
//! - [`Session`] - Owns the scope chain and runs commands against it
//! - [`Command`]/[`Output`] - The instruction set and its results
//! - [`Executor`] - Stateless dispatch of one command against one scope
//!
//! ## Quick Start
//!
//! ```text
//! use simpledb_executor::{Command, Output, Session};
//!
//! let mut session = Session::new();
//! session.execute(Command::Set { key: "a".into(), value: "10".into() })?;
//! session.execute(Command::Begin)?;
//! session.execute(Command::Set { key: "a".into(), value: "20".into() })?;
//! session.execute(Command::Rollback)?;
//!
//! assert_eq!(
//!     session.execute(Command::Get { key: "a".into() })?,
//!     Output::Value(Some("10".into()))
//! );
//! ```
//!
//! ## Transactions
//!
//! | Command | Effect on the chain |
//! |---------|---------------------|
//! | **BEGIN** | Opens a new innermost transaction |
//! | **ROLLBACK** | Discards the innermost transaction only |
//! | **COMMIT** | Folds every open transaction into the root |

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod output;
mod session;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{Command, Keyword};
pub use error::Error;
pub use executor::{Executor, Reply};
pub use output::Output;
pub use session::{Session, SessionMetrics};

// Re-export engine types so users don't need simpledb-engine directly
pub use simpledb_engine::{Scope, ScopeStats};

// Re-export protocol constants so front ends don't need simpledb-core directly
pub use simpledb_core::{NO_TRANSACTION, NULL_SENTINEL};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
