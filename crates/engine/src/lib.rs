//! Transactional scope engine for SimpleDB
//!
//! This crate holds the only stateful structure in the system, the scope
//! chain:
//! - Scope: one level of nesting with its local name and count tables
//! - Lookup: effective value/count resolution walking toward the root
//! - Materialization: copy-on-first-touch of ancestor entries
//! - BEGIN/ROLLBACK/COMMIT: growing, shrinking and flattening the chain
//!
//! The root scope is created once and never destroyed by ROLLBACK. Every
//! other scope exclusively owns its parent; the tip of the chain is the
//! current scope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scope;

pub use scope::{NoTransaction, Scope, ScopeStats};
