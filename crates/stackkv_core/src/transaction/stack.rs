//! Snapshot stack.

use crate::store::Mapping;

/// Ordered snapshots of the live mapping, one per open transaction.
///
/// Level 0 is the outermost transaction; the last entry is the innermost.
/// Snapshots are owned copies, so later writes to the live mapping never
/// reach them.
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    snapshots: Vec<Mapping>,
}

impl TransactionStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a transaction whose rollback point is `snapshot`.
    pub fn push(&mut self, snapshot: Mapping) {
        self.snapshots.push(snapshot);
    }

    /// Closes the innermost transaction, returning its rollback point.
    pub fn pop(&mut self) -> Option<Mapping> {
        self.snapshots.pop()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no transaction is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot taken when transaction `level` began.
    #[must_use]
    pub fn snapshot(&self, level: usize) -> Option<&Mapping> {
        self.snapshots.get(level)
    }
}
