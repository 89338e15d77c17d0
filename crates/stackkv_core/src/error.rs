//! Error types for StackKV core.

use crate::command::CommandKind;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Sentinel text reported when GET finds no binding.
pub(crate) const NULL_SENTINEL: &str = "NULL";

/// Errors that can occur in StackKV core operations.
///
/// A failing operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// GET or UNSET referenced a key absent from the live mapping.
    #[error("{}", not_found_message(.command, .key))]
    KeyNotFound {
        /// The command that looked the key up.
        command: CommandKind,
        /// The missing key.
        key: String,
    },

    /// ROLLBACK or COMMIT with no open transaction.
    #[error("error: no open transaction to {}", closing_verb(.command))]
    NoOpenTransaction {
        /// The command that tried to close a transaction.
        command: CommandKind,
    },

    /// Dispatch received a command it does not implement.
    #[error("error: unrecognized command {name}")]
    UnrecognizedCommand {
        /// Name of the command.
        name: String,
    },

    /// Dispatch received a known command without a required argument.
    #[error("error: {command} requires a {argument}")]
    MissingArgument {
        /// The command missing an argument.
        command: CommandKind,
        /// Which argument is missing ("key" or "value").
        argument: &'static str,
    },
}

fn not_found_message(command: &CommandKind, key: &str) -> String {
    match command {
        CommandKind::Get => NULL_SENTINEL.to_string(),
        _ => format!("error: key {key} is not set"),
    }
}

fn closing_verb(command: &CommandKind) -> &'static str {
    match command {
        CommandKind::Rollback => "roll back",
        _ => "commit",
    }
}

impl CoreError {
    /// Creates a key not found error.
    pub fn key_not_found(command: CommandKind, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            command,
            key: key.into(),
        }
    }

    /// Creates a no open transaction error.
    pub fn no_open_transaction(command: CommandKind) -> Self {
        Self::NoOpenTransaction { command }
    }

    /// Creates an unrecognized command error.
    pub fn unrecognized_command(name: impl Into<String>) -> Self {
        Self::UnrecognizedCommand { name: name.into() }
    }

    /// Creates a missing argument error.
    pub fn missing_argument(command: CommandKind, argument: &'static str) -> Self {
        Self::MissingArgument { command, argument }
    }

    /// Returns the command that produced this failure, if known.
    #[must_use]
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            Self::KeyNotFound { command, .. }
            | Self::NoOpenTransaction { command }
            | Self::MissingArgument { command, .. } => Some(*command),
            Self::UnrecognizedCommand { .. } => None,
        }
    }

    /// Returns the offending key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyNotFound { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }
}
