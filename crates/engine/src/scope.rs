//! Scope chain with forward and reverse indexes
//!
//! Each scope keeps two tables:
//! - `names`: name -> [`Slot`] (a value, or the unset marker shadowing ancestors)
//! - `counts`: value -> number of names whose effective value it is
//!
//! A reader resolves a name (or value) by walking from the current scope toward
//! the root and taking the first scope that holds an entry. Nothing is copied
//! when a transaction begins. A scope pulls an ancestor's entry into its own
//! tables the first time it is about to mutate it, so a transaction's memory is
//! linear in the names and values it touches.
//!
//! ## Absolute counts
//!
//! Once a scope holds a count for a value, that count is absolute for the view
//! the scope represents, never a delta against its parent. COMMIT relies on
//! this: folding a child into its parent is a plain overwrite.
//!
//! ## Complexity
//!
//! Lookups cost O(depth) on first touch inside a nested transaction and O(1)
//! afterwards. The chain is never rescanned as a whole.

use rustc_hash::FxHashMap;
use simpledb_core::Slot;
use std::iter;
use tracing::{debug, trace};

/// One level of the transaction chain.
///
/// The root scope has no parent. A transaction scope owns its parent, so the
/// current scope owns the whole chain down to the root.
#[derive(Debug, Default)]
pub struct Scope {
    names: FxHashMap<String, Slot>,
    counts: FxHashMap<String, u64>,
    parent: Option<Box<Scope>>,
}

/// ROLLBACK or COMMIT issued while the root scope is current.
///
/// Carries the unchanged scope back to the caller so the chain is never lost.
#[derive(Debug, thiserror::Error)]
#[error("{}", simpledb_core::NO_TRANSACTION)]
pub struct NoTransaction {
    scope: Box<Scope>,
}

impl NoTransaction {
    /// Recover the scope the operation was attempted on.
    pub fn into_scope(self) -> Box<Scope> {
        self.scope
    }
}

/// Snapshot of how much state the chain holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeStats {
    /// Number of open transactions (0 at the root)
    pub depth: usize,
    /// Name entries held across every scope of the chain
    pub names: usize,
    /// Count entries held across every scope of the chain
    pub counts: usize,
}

impl Scope {
    /// Create the root scope.
    pub fn root() -> Box<Scope> {
        Box::default()
    }

    /// Check if this is the root scope.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of open transactions between this scope and the root.
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Whether this scope holds its own entry for `key`.
    pub fn holds_name(&self, key: &str) -> bool {
        self.names.contains_key(key)
    }

    /// Whether this scope holds its own count for `value`.
    pub fn holds_count(&self, value: &str) -> bool {
        self.counts.contains_key(value)
    }

    /// Totals across the chain.
    pub fn stats(&self) -> ScopeStats {
        self.chain().fold(
            ScopeStats {
                depth: self.depth(),
                ..ScopeStats::default()
            },
            |mut stats, scope| {
                stats.names += scope.names.len();
                stats.counts += scope.counts.len();
                stats
            },
        )
    }

    /// This scope followed by each ancestor up to the root.
    fn chain(&self) -> impl Iterator<Item = &Scope> {
        iter::successors(Some(self), |scope| scope.parent.as_deref())
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Entry recorded for `key` by the nearest scope that has one.
    ///
    /// `None` means no scope in the chain ever recorded the name.
    pub fn resolve_value(&self, key: &str) -> Option<&Slot> {
        self.chain().find_map(|scope| scope.names.get(key))
    }

    /// Count recorded for `value` by the nearest scope that has one, else 0.
    pub fn resolve_count(&self, value: &str) -> u64 {
        self.chain()
            .find_map(|scope| scope.counts.get(value))
            .copied()
            .unwrap_or(0)
    }

    // =========================================================================
    // Materialization
    // =========================================================================

    /// Pull the effective entry for `key` into this scope.
    ///
    /// Only a real value is copied, together with its count. An absent or
    /// unset name already resolves correctly by falling through, so no
    /// tombstone is written for it.
    fn materialize_name(&mut self, key: &str) {
        if self.names.contains_key(key) {
            return;
        }
        let Some(parent) = self.parent.as_deref() else {
            return;
        };
        let Some(value) = parent.resolve_value(key).and_then(Slot::as_value) else {
            return;
        };

        if !self.counts.contains_key(value) {
            let count = parent.resolve_count(value);
            self.counts.insert(value.to_string(), count);
        }
        trace!(target: "simpledb::scope", key, value, "materialized name");
        self.names.insert(key.to_string(), Slot::Value(value.to_string()));
    }

    /// Seed this scope's count for `value` from the parent chain.
    fn materialize_count(&mut self, value: &str) {
        if self.counts.contains_key(value) {
            return;
        }
        let Some(parent) = self.parent.as_deref() else {
            return;
        };
        let count = parent.resolve_count(value);
        trace!(target: "simpledb::scope", value, count, "materialized count");
        self.counts.insert(value.to_string(), count);
    }

    /// Drop one reference to `value`. A held value always has a local count.
    fn decrement(&mut self, value: &str) {
        let count = self.counts.get_mut(value);
        debug_assert!(
            count.as_deref().is_some_and(|c| *c > 0),
            "count for {value:?} would underflow"
        );
        if let Some(count) = count {
            *count = count.saturating_sub(1);
        }
    }

    // =========================================================================
    // Data operations
    // =========================================================================

    /// SET: bind `key` to `value` in this scope.
    ///
    /// Ancestors are untouched until COMMIT.
    pub fn set(&mut self, key: &str, value: &str) {
        self.materialize_name(key);
        self.materialize_count(value);

        if let Some(Slot::Value(prior)) = self.names.get(key) {
            let prior = prior.clone();
            self.decrement(&prior);
        }

        self.names
            .insert(key.to_string(), Slot::Value(value.to_string()));
        *self.counts.entry(value.to_string()).or_insert(0) += 1;
    }

    /// UNSET: shadow `key` with the unset marker in this scope.
    ///
    /// Returns whether a value was removed. Unsetting a name that has no
    /// effective value is a no-op.
    pub fn unset(&mut self, key: &str) -> bool {
        self.materialize_name(key);

        let prior = match self.names.get_mut(key) {
            Some(slot) if !slot.is_unset() => std::mem::replace(slot, Slot::Unset),
            _ => return false,
        };
        if let Slot::Value(prior) = prior {
            self.decrement(&prior);
        }
        true
    }

    /// GET: the effective value of `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.resolve_value(key).and_then(Slot::as_value)
    }

    /// NUMEQUALTO: how many names currently hold `value`.
    pub fn num_equal_to(&self, value: &str) -> u64 {
        self.resolve_count(value)
    }

    // =========================================================================
    // Chain operations
    // =========================================================================

    /// BEGIN: open a transaction on top of this scope.
    ///
    /// Returns the new current scope.
    pub fn begin(self: Box<Self>) -> Box<Scope> {
        let scope = Box::new(Scope {
            names: FxHashMap::default(),
            counts: FxHashMap::default(),
            parent: Some(self),
        });
        debug!(target: "simpledb::txn", depth = scope.depth(), "Transaction started");
        scope
    }

    /// ROLLBACK: discard this scope and return its parent.
    ///
    /// Closes only the innermost transaction.
    pub fn rollback(mut self: Box<Self>) -> Result<Box<Scope>, NoTransaction> {
        match self.parent.take() {
            Some(parent) => {
                debug!(
                    target: "simpledb::txn",
                    depth = parent.depth(),
                    discarded_names = self.names.len(),
                    "Transaction rolled back"
                );
                Ok(parent)
            }
            None => Err(NoTransaction { scope: self }),
        }
    }

    /// COMMIT: flatten every open transaction into the root.
    ///
    /// Each scope is folded into its parent by overwrite, innermost first.
    /// After a fold the parent's effective view equals the child's, so the root
    /// ends up with exactly the state visible from this scope. Returns the root.
    ///
    /// This departs on purpose from applying only this scope's own entries to
    /// each ancestor: writes made in intermediate scopes are kept, and counts
    /// stay consistent with the values they describe.
    pub fn commit(self: Box<Self>) -> Result<Box<Scope>, NoTransaction> {
        if self.is_root() {
            return Err(NoTransaction { scope: self });
        }

        let mut current = self;
        let mut closed = 0usize;
        while let Some(mut parent) = current.parent.take() {
            parent.absorb(current);
            current = parent;
            closed += 1;
        }

        debug!(
            target: "simpledb::txn",
            closed,
            names = current.names.len(),
            "Transactions committed"
        );
        Ok(current)
    }

    /// Overwrite this scope's entries with everything `child` holds.
    fn absorb(&mut self, mut child: Box<Scope>) {
        self.names.extend(std::mem::take(&mut child.names));
        self.counts.extend(std::mem::take(&mut child.counts));
    }
}

impl Drop for Scope {
    // Unlink iteratively so dropping a deep chain does not recurse.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(mut scope) = next {
            next = scope.parent.take();
        }
    }
}
