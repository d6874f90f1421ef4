//! Command enum defining all SimpleDB operations.
//!
//! Commands are the "instruction set" of SimpleDB. Every operation a client
//! can request on one line of input is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Closed**: Keywords map to variants through a fixed table, never by name lookup

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Commands | Effect on the current scope |
/// |----------|----------|-----------------------------|
/// | Data | SET, UNSET, GET, NUMEQUALTO | Mutated or read in place |
/// | Transaction | BEGIN, ROLLBACK, COMMIT | Replaced by a new current scope |
/// | Session | END | None; terminates the session |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Data (4) ====================
    /// Bind a name to a value.
    /// Returns: `Output::Unit`
    Set {
        /// Name to bind
        key: String,
        /// Value to bind it to
        value: String,
    },

    /// Remove a name's value. Unknown names are a no-op.
    /// Returns: `Output::Unit`
    Unset {
        /// Name to unset
        key: String,
    },

    /// Read a name's effective value.
    /// Returns: `Output::Value`
    Get {
        /// Name to read
        key: String,
    },

    /// Count the names whose effective value equals `value`.
    /// Returns: `Output::Count`
    NumEqualTo {
        /// Value to count
        value: String,
    },

    // ==================== Transaction (3) ====================
    /// Open a nested transaction.
    /// Returns: `Output::Unit`
    Begin,

    /// Discard the innermost transaction.
    /// Returns: `Output::Unit`, or `Error::NoTransaction` at the root
    Rollback,

    /// Fold every open transaction into the root.
    /// Returns: `Output::Unit`, or `Error::NoTransaction` at the root
    Commit,

    // ==================== Session (1) ====================
    /// End the session.
    /// Returns: `Output::End`
    End,
}

/// Command keywords, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `SET key value`
    Set,
    /// `UNSET key`
    Unset,
    /// `GET key`
    Get,
    /// `NUMEQUALTO value`
    NumEqualTo,
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `END`
    End,
}

impl Keyword {
    /// Every keyword, in protocol order.
    pub const ALL: [Keyword; 8] = [
        Keyword::Set,
        Keyword::Unset,
        Keyword::Get,
        Keyword::NumEqualTo,
        Keyword::Begin,
        Keyword::Rollback,
        Keyword::Commit,
        Keyword::End,
    ];

    /// Canonical (uppercase) spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Set => "SET",
            Keyword::Unset => "UNSET",
            Keyword::Get => "GET",
            Keyword::NumEqualTo => "NUMEQUALTO",
            Keyword::Begin => "BEGIN",
            Keyword::Rollback => "ROLLBACK",
            Keyword::Commit => "COMMIT",
            Keyword::End => "END",
        }
    }

    /// Look up a keyword, ignoring case.
    pub fn lookup(token: &str) -> Option<Keyword> {
        Keyword::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(token))
    }

    /// Number of arguments the keyword requires.
    ///
    /// `None` means trailing arguments are accepted and ignored.
    pub fn arity(self) -> Option<usize> {
        match self {
            Keyword::Set => Some(2),
            Keyword::Unset | Keyword::Get | Keyword::NumEqualTo => Some(1),
            Keyword::Begin | Keyword::Rollback | Keyword::Commit | Keyword::End => None,
        }
    }
}

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for a line with no tokens. Tokens are separated by
    /// any run of whitespace; the keyword is matched case-insensitively and
    /// arguments are taken verbatim.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownCommand` with the uppercased keyword if it is not in the table
    /// - `Error::Syntax` echoing the raw tokens if the argument count is wrong
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        let Some((&first, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let keyword = Keyword::lookup(first).ok_or_else(|| Error::UnknownCommand {
            command: first.to_uppercase(),
        })?;

        if keyword.arity().is_some_and(|n| n != args.len()) {
            return Err(Error::Syntax {
                input: tokens.join(" "),
            });
        }

        let command = match keyword {
            Keyword::Set => Command::Set {
                key: args[0].to_string(),
                value: args[1].to_string(),
            },
            Keyword::Unset => Command::Unset {
                key: args[0].to_string(),
            },
            Keyword::Get => Command::Get {
                key: args[0].to_string(),
            },
            Keyword::NumEqualTo => Command::NumEqualTo {
                value: args[0].to_string(),
            },
            Keyword::Begin => Command::Begin,
            Keyword::Rollback => Command::Rollback,
            Keyword::Commit => Command::Commit,
            Keyword::End => Command::End,
        };
        Ok(Some(command))
    }

    /// The keyword this command was spelled with.
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Set { .. } => Keyword::Set,
            Command::Unset { .. } => Keyword::Unset,
            Command::Get { .. } => Keyword::Get,
            Command::NumEqualTo { .. } => Keyword::NumEqualTo,
            Command::Begin => Keyword::Begin,
            Command::Rollback => Keyword::Rollback,
            Command::Commit => Keyword::Commit,
            Command::End => Keyword::End,
        }
    }

    /// Whether this command replaces the current scope.
    pub fn is_transition(&self) -> bool {
        matches!(self, Command::Begin | Command::Rollback | Command::Commit)
    }
}
