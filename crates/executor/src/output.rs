//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on database state).

use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use simpledb_executor::{Command, Output, Session};
///
/// match session.execute(Command::Get { key: "a".into() })? {
///     Output::Value(Some(v)) => println!("Found: {}", v),
///     Output::Value(None) => println!("Not found"),
///     _ => unreachable!("Get always returns Value"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (SET, UNSET, BEGIN, ROLLBACK, COMMIT)
    Unit,

    /// Effective value of a name, `None` if absent or unset (GET)
    Value(Option<String>),

    /// Number of names holding a value (NUMEQUALTO)
    Count(u64),

    /// The session was asked to end (END)
    End,
}
