//! Stored slot type
//!
//! Values in SimpleDB are opaque strings. A scope records, per name, either
//! a value or an explicit unset marker. The marker is distinct from the name
//! being absent: it shadows whatever an enclosing scope holds for the name.

/// What a scope records locally for a name.
///
/// ## Absent vs Unset
///
/// - A name with no entry in a scope falls through to the enclosing scope.
/// - A name recorded as `Slot::Unset` stops the lookup: the effective value
///   is "nothing", regardless of what enclosing scopes hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The name holds this value
    Value(String),
    /// The name was explicitly unset in this scope
    Unset,
}

impl Slot {
    /// The held value, or `None` for the unset marker.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Slot::Value(v) => Some(v),
            Slot::Unset => None,
        }
    }

    /// Check if this is the unset marker.
    pub fn is_unset(&self) -> bool {
        matches!(self, Slot::Unset)
    }
}
