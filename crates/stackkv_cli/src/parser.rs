//! Input line parsing.
//!
//! A line is split on whitespace into a command name and up to two
//! arguments. Quoting is not supported, so a value containing spaces is
//! always a format error.

use stackkv_core::{Arity, Command, CommandKind};
use thiserror::Error;

/// Result type for line parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A command that takes arguments was given none.
    #[error("error: missing argument name and value")]
    MissingArgumentName {
        /// The command that was given.
        command: CommandKind,
    },

    /// SET was given a key but no value.
    #[error("error: missing argument value")]
    MissingArgumentValue {
        /// The command that was given.
        command: CommandKind,
    },

    /// The first token names no known command.
    #[error("error: unknown command. Type HELP for usage")]
    UnknownCommand,

    /// Wrong number of tokens for the command, or a blank line.
    #[error("error: wrong input format. Type HELP for usage")]
    WrongFormat,
}

/// Parses one input line into a command.
pub fn parse_line(line: &str) -> ParseResult<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 3 {
        return Err(ParseError::WrongFormat);
    }

    let kind: CommandKind = tokens[0]
        .parse()
        .map_err(|_| ParseError::UnknownCommand)?;
    let command = Command::new(kind);

    match (kind.arity(), &tokens[1..]) {
        (Arity::None, []) => Ok(command),
        (Arity::Key | Arity::Value | Arity::KeyValue, []) => {
            Err(ParseError::MissingArgumentName { command: kind })
        }
        (Arity::Key, [key]) => Ok(command.with_key(*key)),
        (Arity::Value, [value]) => Ok(command.with_value(*value)),
        (Arity::KeyValue, [_]) => Err(ParseError::MissingArgumentValue { command: kind }),
        (Arity::KeyValue, [key, value]) => Ok(command.with_key(*key).with_value(*value)),
        _ => Err(ParseError::WrongFormat),
    }
}
