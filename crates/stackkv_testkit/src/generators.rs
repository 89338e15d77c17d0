//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small alphabets so that random
//! sequences hit the same keys and repeat values often.

use proptest::prelude::*;
use stackkv_core::{Command, CommandKind};

/// Strategy for generating keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-F]").expect("Invalid regex")
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-3]").expect("Invalid regex")
}

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    /// Bind a value to a key.
    Set {
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Remove a key.
    Unset {
        /// Key
        key: String,
    },
    /// Read a key.
    Get {
        /// Key
        key: String,
    },
    /// Count a value.
    Counts {
        /// Value
        value: String,
    },
    /// Find keys holding a value.
    Find {
        /// Value
        value: String,
    },
    /// Open a transaction.
    Begin,
    /// Roll back the innermost transaction.
    Rollback,
    /// Commit the innermost transaction.
    Commit,
}

impl StoreOperation {
    /// Converts to the equivalent command.
    #[must_use]
    pub fn to_command(&self) -> Command {
        match self {
            Self::Set { key, value } => Command::set(key.as_str(), value.as_str()),
            Self::Unset { key } => Command::new(CommandKind::Unset).with_key(key.as_str()),
            Self::Get { key } => Command::new(CommandKind::Get).with_key(key.as_str()),
            Self::Counts { value } => Command::new(CommandKind::Counts).with_value(value.as_str()),
            Self::Find { value } => Command::new(CommandKind::Find).with_value(value.as_str()),
            Self::Begin => Command::new(CommandKind::Begin),
            Self::Rollback => Command::new(CommandKind::Rollback),
            Self::Commit => Command::new(CommandKind::Commit),
        }
    }

    /// Returns true for operations that may change the store.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Get { .. } | Self::Counts { .. } | Self::Find { .. })
    }
}

/// Strategy for generating store operations.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| StoreOperation::Set { key, value }),
        2 => key_strategy().prop_map(|key| StoreOperation::Unset { key }),
        2 => key_strategy().prop_map(|key| StoreOperation::Get { key }),
        1 => value_strategy().prop_map(|value| StoreOperation::Counts { value }),
        1 => value_strategy().prop_map(|value| StoreOperation::Find { value }),
        2 => Just(StoreOperation::Begin),
        1 => Just(StoreOperation::Rollback),
        1 => Just(StoreOperation::Commit),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
