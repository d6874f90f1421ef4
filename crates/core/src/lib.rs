//! Core types for SimpleDB
//!
//! This crate defines the vocabulary shared by every layer:
//! - Slot: what a scope records for a name (a value or the unset marker)
//! - Protocol constants: the sentinel strings the line protocol reports
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::Slot;

/// Response returned by GET when a name has no effective value.
pub const NULL_SENTINEL: &str = "NULL";

/// Response reported when ROLLBACK or COMMIT find no open transaction.
pub const NO_TRANSACTION: &str = "NO TRANSACTION";
