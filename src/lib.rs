//! SimpleDB - in-memory key/value store with nested transactions
//!
//! SimpleDB binds string names to string values, answers "how many names
//! hold this value" from a reverse index, and supports arbitrarily nested
//! transactions that can be rolled back one level at a time or committed
//! all at once.
//!
//! # Quick Start
//!
//! ```
//! use simpledb::{Command, Output, Session};
//!
//! let mut session = Session::new();
//! session.execute_line("SET a 10");
//! session.execute_line("BEGIN");
//! session.execute_line("SET a 20");
//! session.execute(Command::Rollback).unwrap();
//!
//! let got = session.execute(Command::Get { key: "a".into() }).unwrap();
//! assert_eq!(got, Output::Value(Some("10".into())));
//! ```
//!
//! # Architecture
//!
//! All commands go through the [`Executor`], which runs them against the
//! current [`Scope`] of a chain. The [`Session`] owns that chain for one
//! client. The line-protocol shell lives in the `simpledb-cli` crate.

// Re-export the public API from simpledb-executor
pub use simpledb_executor::*;
