//! Stateful session for transaction support.
//!
//! The [`Session`] owns the scope chain and tracks which scope is current.
//! Every command is dispatched through the [`Executor`]; when the reply says
//! the current scope was replaced, the session installs the new one.
//!
//! # Usage
//!
//! ```ignore
//! use simpledb_executor::{Command, Session};
//!
//! let mut session = Session::new();
//!
//! // Begin a transaction
//! session.execute(Command::Begin)?;
//!
//! // Data commands run against the innermost transaction
//! session.execute(Command::Set { key: "k".into(), value: "1".into() })?;
//!
//! // Commit every open transaction
//! session.execute(Command::Commit)?;
//! ```

use simpledb_engine::{Scope, ScopeStats};
use tracing::debug;

use crate::{Command, Error, Executor, Keyword, Output, Reply, Result};

/// Counters describing what a session has done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionMetrics {
    /// Commands executed, successful or not
    pub commands: u64,
    /// Commands that returned an error
    pub errors: u64,
    /// Transactions opened by BEGIN
    pub begun: u64,
    /// Transactions discarded by ROLLBACK
    pub rolled_back: u64,
    /// Successful COMMITs (each may close several transactions)
    pub commits: u64,
}

/// A stateful session holding the current scope of one client.
///
/// The root scope is created with the session and lives as long as it does.
pub struct Session {
    // Always `Some` between commands; taken only while a command runs.
    current: Option<Box<Scope>>,
    metrics: SessionMetrics,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a new session with an empty root scope.
    pub fn new() -> Self {
        Self {
            current: Some(Scope::root()),
            metrics: SessionMetrics::default(),
        }
    }

    /// Returns whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        !self.current().is_root()
    }

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.current().depth()
    }

    /// The current scope.
    pub fn scope(&self) -> &Scope {
        self.current()
    }

    /// Totals held by the scope chain.
    pub fn stats(&self) -> ScopeStats {
        self.current().stats()
    }

    /// Counters for this session.
    pub fn metrics(&self) -> SessionMetrics {
        self.metrics
    }

    /// Execute a command, installing a new current scope when it asks for one.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let keyword = cmd.keyword();
        let current = self
            .current
            .take()
            .expect("current scope installed between commands");

        let result = match Executor::dispatch(current, cmd) {
            Reply::Stay { scope, result } => {
                self.current = Some(scope);
                result
            }
            Reply::Switch { scope, output } => {
                debug!(
                    target: "simpledb::session",
                    command = keyword.as_str(),
                    depth = scope.depth(),
                    "Current scope replaced"
                );
                self.current = Some(scope);
                self.record_transition(keyword);
                Ok(output)
            }
        };

        self.metrics.commands += 1;
        if let Err(e) = &result {
            self.metrics.errors += 1;
            debug!(target: "simpledb::session", error = %e, "Command failed");
        }
        result
    }

    /// Parse and execute one line of input.
    ///
    /// Returns `None` for a line with no tokens. Parse errors count toward
    /// the session's metrics like any other failed command.
    pub fn execute_line(&mut self, line: &str) -> Option<Result<Output>> {
        match Command::parse(line) {
            Ok(Some(cmd)) => Some(self.execute(cmd)),
            Ok(None) => None,
            Err(e) => Some(Err(self.reject(e))),
        }
    }

    /// Execute one line of raw input.
    ///
    /// Values are stored exactly as given, so a line that is not valid
    /// UTF-8 is rejected with `Error::InvalidEncoding` instead of being
    /// rewritten.
    pub fn execute_bytes(&mut self, line: &[u8]) -> Option<Result<Output>> {
        match std::str::from_utf8(line) {
            Ok(line) => self.execute_line(line),
            Err(_) => Some(Err(self.reject(Error::InvalidEncoding))),
        }
    }

    fn current(&self) -> &Scope {
        self.current
            .as_deref()
            .expect("current scope installed between commands")
    }

    fn reject(&mut self, e: Error) -> Error {
        self.metrics.commands += 1;
        self.metrics.errors += 1;
        debug!(target: "simpledb::session", error = %e, "Rejected input");
        e
    }

    fn record_transition(&mut self, keyword: Keyword) {
        match keyword {
            Keyword::Begin => self.metrics.begun += 1,
            Keyword::Rollback => self.metrics.rolled_back += 1,
            Keyword::Commit => self.metrics.commits += 1,
            _ => {}
        }
    }
}
