//! The Executor - single dispatch point into the scope engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate scope operations and converts results to outputs.

use simpledb_engine::{NoTransaction, Scope};
use tracing::trace;

use crate::{Command, Error, Output, Result};

/// Result of dispatching one command against the current scope.
///
/// Commands that replace the current scope say so in the type: the caller
/// installs the scope carried by `Switch`. Every other command hands the
/// current scope back unchanged in `Stay`, including failed transitions.
#[derive(Debug)]
pub enum Reply {
    /// The current scope stays current.
    Stay {
        /// The scope the command ran against
        scope: Box<Scope>,
        /// Outcome of the command
        result: Result<Output>,
    },
    /// The command produced a new current scope.
    Switch {
        /// The new current scope
        scope: Box<Scope>,
        /// Outcome of the command
        output: Output,
    },
}

impl Reply {
    /// Split into the scope to install and the command's outcome.
    pub fn into_parts(self) -> (Box<Scope>, Result<Output>) {
        match self {
            Reply::Stay { scope, result } => (scope, result),
            Reply::Switch { scope, output } => (scope, Ok(output)),
        }
    }

    /// Whether the current scope was replaced.
    pub fn is_switch(&self) -> bool {
        matches!(self, Reply::Switch { .. })
    }
}

/// The command executor.
///
/// The Executor is **stateless**: the scope chain is passed in by the caller
/// and handed back in the [`Reply`]. All state lives in the scopes.
///
/// # Example
///
/// ```ignore
/// use simpledb_executor::{Command, Executor, Reply, Scope};
///
/// let root = Scope::root();
/// let scope = match Executor::dispatch(root, Command::Begin) {
///     Reply::Switch { scope, .. } => scope,
///     Reply::Stay { .. } => unreachable!("BEGIN always switches"),
/// };
/// assert_eq!(scope.depth(), 1);
/// ```
pub struct Executor;

impl Executor {
    /// Execute a single command against `scope`.
    pub fn dispatch(mut scope: Box<Scope>, cmd: Command) -> Reply {
        trace!(target: "simpledb::executor", keyword = cmd.keyword().as_str(), "dispatch");

        let output = match cmd {
            // Transaction commands replace the current scope
            Command::Begin => {
                return Reply::Switch {
                    scope: scope.begin(),
                    output: Output::Unit,
                }
            }
            Command::Rollback => return Self::transition(scope.rollback()),
            Command::Commit => return Self::transition(scope.commit()),

            // Data commands run in place
            Command::Set { key, value } => {
                scope.set(&key, &value);
                Output::Unit
            }
            Command::Unset { key } => {
                scope.unset(&key);
                Output::Unit
            }
            Command::Get { key } => Output::Value(scope.get(&key).map(str::to_string)),
            Command::NumEqualTo { value } => Output::Count(scope.num_equal_to(&value)),
            Command::End => Output::End,
        };

        Reply::Stay {
            scope,
            result: Ok(output),
        }
    }

    fn transition(result: std::result::Result<Box<Scope>, NoTransaction>) -> Reply {
        match result {
            Ok(scope) => Reply::Switch {
                scope,
                output: Output::Unit,
            },
            Err(refused) => Reply::Stay {
                scope: refused.into_scope(),
                result: Err(Error::NoTransaction),
            },
        }
    }
}
