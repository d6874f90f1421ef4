//! Session wrapper for the shell.
//!
//! Holds the `Session` and knows how to describe it in a prompt.

use simpledb_executor::{Output, Result, Session};

/// Wraps the session and tracks what the shell needs around it.
pub struct SessionState {
    session: Session,
}

impl SessionState {
    /// Create a new SessionState with an empty store.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Execute one line of raw input. `None` for a blank line.
    pub fn execute_bytes(&mut self, line: &[u8]) -> Option<Result<Output>> {
        self.session.execute_bytes(line)
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        match self.session.depth() {
            0 => "simpledb> ".to_string(),
            depth => format!("simpledb(txn:{})> ", depth),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
