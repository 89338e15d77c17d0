//! The transactional key/value store.

use crate::command::{Command, CommandKind};
use crate::error::{CoreError, CoreResult};
use crate::response::Response;
use crate::transaction::TransactionStack;
use std::collections::BTreeMap;
use tracing::debug;

/// A key to value mapping.
///
/// Iteration follows key order, so FIND output is reproducible.
pub type Mapping = BTreeMap<String, String>;

/// In-memory key/value store with nested transactions.
///
/// The store holds the live mapping plus one snapshot per open
/// transaction. Writes always go to the live mapping; a snapshot is only
/// the point a rollback returns to.
///
/// # Example
///
/// ```rust
/// use stackkv_core::Store;
///
/// let mut store = Store::new();
/// store.set("A", "1");
/// store.begin_transaction();
/// store.set("B", "2");
/// store.commit_transaction().unwrap();
/// assert_eq!(store.len(), 2);
/// assert!(store.rollback_transaction().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    live: Mapping,
    transactions: TransactionStack,
}

impl Store {
    /// Creates an empty store with no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        entries.into_iter().collect()
    }

    // === Point operations ===

    /// Returns the value bound to `key`.
    pub fn get(&self, key: &str) -> CoreResult<&str> {
        self.live
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CoreError::key_not_found(CommandKind::Get, key))
    }

    /// Binds `value` to `key`, replacing any previous binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.live.insert(key.into(), value.into());
    }

    /// Removes the binding for `key`.
    ///
    /// Removing a key that is not bound is an error, not a no-op, so a
    /// second `unset` of the same key fails.
    pub fn unset(&mut self, key: &str) -> CoreResult<()> {
        self.live
            .remove(key)
            .map(drop)
            .ok_or_else(|| CoreError::key_not_found(CommandKind::Unset, key))
    }

    // === Aggregate queries ===

    /// Returns how many keys are bound to exactly `value`.
    #[must_use]
    pub fn counts(&self, value: &str) -> usize {
        self.live.values().filter(|v| v.as_str() == value).count()
    }

    /// Returns the keys bound to exactly `value`, in iteration order.
    #[must_use]
    pub fn find(&self, value: &str) -> Vec<&str> {
        self.live
            .iter()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    // === Transaction control ===

    /// Opens a nested transaction.
    ///
    /// The current mapping is copied onto the transaction stack as the
    /// rollback point; subsequent writes keep going to the live mapping.
    pub fn begin_transaction(&mut self) {
        self.transactions.push(self.live.clone());
        debug!(depth = self.transactions.depth(), "transaction begun");
    }

    /// Discards every change made since the innermost `begin_transaction`.
    ///
    /// Outer transactions stay open.
    pub fn rollback_transaction(&mut self) -> CoreResult<()> {
        let snapshot = self
            .transactions
            .pop()
            .ok_or_else(|| CoreError::no_open_transaction(CommandKind::Rollback))?;
        self.live = snapshot;
        debug!(depth = self.transactions.depth(), "transaction rolled back");
        Ok(())
    }

    /// Closes the innermost transaction, keeping its changes.
    ///
    /// The snapshot is dropped; the next outer snapshot is left untouched,
    /// so rolling back the outer transaction still discards these changes.
    pub fn commit_transaction(&mut self) -> CoreResult<()> {
        self.transactions
            .pop()
            .ok_or_else(|| CoreError::no_open_transaction(CommandKind::Commit))?;
        debug!(depth = self.transactions.depth(), "transaction committed");
        Ok(())
    }

    // === Dispatch ===

    /// Routes a command kind and its arguments to the matching operation.
    ///
    /// GET and UNSET read `key`, SET reads both, COUNTS and FIND read
    /// `value`, and transaction control reads neither. Interpreter-only
    /// kinds fail with [`CoreError::UnrecognizedCommand`].
    pub fn dispatch(
        &mut self,
        kind: CommandKind,
        key: Option<&str>,
        value: Option<&str>,
    ) -> CoreResult<Response> {
        let response = match kind {
            CommandKind::Get => {
                let key = required(kind, "key", key)?;
                Response::Value(self.get(key)?.to_string())
            }
            CommandKind::Set => {
                let key = required(kind, "key", key)?;
                let value = required(kind, "value", value)?;
                self.set(key, value);
                Response::Empty
            }
            CommandKind::Unset => {
                self.unset(required(kind, "key", key)?)?;
                Response::Empty
            }
            CommandKind::Counts => Response::Count(self.counts(required(kind, "value", value)?)),
            CommandKind::Find => Response::Keys(
                self.find(required(kind, "value", value)?)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            CommandKind::Begin => {
                self.begin_transaction();
                Response::Empty
            }
            CommandKind::Rollback => {
                self.rollback_transaction()?;
                Response::Empty
            }
            CommandKind::Commit => {
                self.commit_transaction()?;
                Response::Empty
            }
            CommandKind::Help | CommandKind::End => {
                return Err(CoreError::unrecognized_command(kind.as_str()))
            }
        };
        Ok(response)
    }

    /// Dispatches a parsed [`Command`].
    pub fn execute(&mut self, command: &Command) -> CoreResult<Response> {
        self.dispatch(
            command.kind,
            command.key.as_deref(),
            command.value.as_deref(),
        )
    }

    // === Inspection ===

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns true if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.live.contains_key(key)
    }

    /// Iterates over the live bindings in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.live.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the live mapping.
    #[must_use]
    pub fn mapping(&self) -> &Mapping {
        &self.live
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn transaction_depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Returns the rollback point of transaction `level` (0 is outermost).
    #[must_use]
    pub fn snapshot(&self, level: usize) -> Option<&Mapping> {
        self.transactions.snapshot(level)
    }
}

impl<K, V> FromIterator<(K, V)> for Store
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            live: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            transactions: TransactionStack::new(),
        }
    }
}

fn required<'a>(
    kind: CommandKind,
    argument: &'static str,
    given: Option<&'a str>,
) -> CoreResult<&'a str> {
    given.ok_or_else(|| CoreError::missing_argument(kind, argument))
}
