//! Nested transaction support.
//!
//! Transactions are a stack of checkpoints. Each open transaction owns a
//! full copy of the mapping as it stood when the transaction began:
//! - **Rollback** restores the innermost copy
//! - **Commit** drops the innermost copy, keeping the live state
//!
//! There is no branching; only the innermost transaction can be closed.

mod stack;

pub use stack::TransactionStack;
