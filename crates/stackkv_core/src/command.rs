//! Command model shared by the store and the interpreter.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Kind of a command.
///
/// `Help` and `End` are handled by the interpreter and never reach the
/// store; dispatching them fails with [`CoreError::UnrecognizedCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Read the value bound to a key.
    Get,
    /// Bind a value to a key.
    Set,
    /// Remove the binding of a key.
    Unset,
    /// Count keys bound to a value.
    Counts,
    /// List keys bound to a value.
    Find,
    /// Open a nested transaction.
    Begin,
    /// Discard the innermost transaction.
    Rollback,
    /// Keep the innermost transaction's changes.
    Commit,
    /// Print the help text.
    Help,
    /// End the session.
    End,
}

/// Arguments a command kind takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No arguments.
    None,
    /// A single key.
    Key,
    /// A single value.
    Value,
    /// A key followed by a value.
    KeyValue,
}

impl CommandKind {
    /// Every command kind, in help-text order.
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Get,
        CommandKind::Set,
        CommandKind::Unset,
        CommandKind::Counts,
        CommandKind::Find,
        CommandKind::End,
        CommandKind::Begin,
        CommandKind::Rollback,
        CommandKind::Commit,
        CommandKind::Help,
    ];

    /// Returns the canonical upper-case command name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Set => "SET",
            Self::Unset => "UNSET",
            Self::Counts => "COUNTS",
            Self::Find => "FIND",
            Self::Begin => "BEGIN",
            Self::Rollback => "ROLLBACK",
            Self::Commit => "COMMIT",
            Self::Help => "HELP",
            Self::End => "END",
        }
    }

    /// Returns the arguments this kind takes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Get | Self::Unset => Arity::Key,
            Self::Counts | Self::Find => Arity::Value,
            Self::Set => Arity::KeyValue,
            Self::Begin | Self::Rollback | Self::Commit | Self::Help | Self::End => Arity::None,
        }
    }

    /// Returns true for kinds the interpreter handles itself.
    #[must_use]
    pub const fn is_interpreter_only(self) -> bool {
        matches!(self, Self::Help | Self::End)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = CoreError;

    /// Parses a command name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::unrecognized_command(name))
    }
}

/// A parsed command: a kind plus up to two arguments.
///
/// Produced once per input line and consumed by [`Store::execute`](crate::Store::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// What to do.
    pub kind: CommandKind,
    /// Key argument (GET, SET, UNSET).
    pub key: Option<String>,
    /// Value argument (SET, COUNTS, FIND).
    pub value: Option<String>,
}

impl Command {
    /// Creates a command with no arguments.
    #[must_use]
    pub const fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            key: None,
            value: None,
        }
    }

    /// Sets the key argument.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the value argument.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Shorthand for `SET key value`.
    #[must_use]
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(CommandKind::Set).with_key(key).with_value(value)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(key) = &self.key {
            write!(f, " {key}")?;
        }
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("get".parse::<CommandKind>().unwrap(), CommandKind::Get);
        assert_eq!("Rollback".parse::<CommandKind>().unwrap(), CommandKind::Rollback);
        assert_eq!("COUNTS".parse::<CommandKind>().unwrap(), CommandKind::Counts);
    }

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.as_str().parse::<CommandKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_unrecognized() {
        let err = "DELETE".parse::<CommandKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedCommand { ref name } if name == "DELETE"));
    }

    #[test]
    fn only_help_and_end_are_interpreter_only() {
        let only: Vec<_> = CommandKind::ALL
            .into_iter()
            .filter(|kind| kind.is_interpreter_only())
            .collect();
        assert_eq!(only, vec![CommandKind::End, CommandKind::Help]);
    }

    #[test]
    fn arity_per_kind() {
        assert_eq!(CommandKind::Get.arity(), Arity::Key);
        assert_eq!(CommandKind::Set.arity(), Arity::KeyValue);
        assert_eq!(CommandKind::Find.arity(), Arity::Value);
        assert_eq!(CommandKind::Commit.arity(), Arity::None);
    }

    #[test]
    fn command_display() {
        assert_eq!(Command::set("A", "5").to_string(), "SET A 5");
        assert_eq!(Command::new(CommandKind::Begin).to_string(), "BEGIN");
        assert_eq!(
            Command::new(CommandKind::Find).with_value("4").to_string(),
            "FIND 4"
        );
    }
}
