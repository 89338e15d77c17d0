//! Successful results of store operations.

use std::fmt;

/// What a store operation returns on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to report (SET, UNSET, BEGIN, ROLLBACK, COMMIT).
    Empty,
    /// The value bound to a key (GET).
    Value(String),
    /// Number of keys bound to a value (COUNTS).
    Count(usize),
    /// Keys bound to a value, in store iteration order (FIND).
    Keys(Vec<String>),
}

impl Response {
    /// Returns the text to print, or `None` when there is nothing to print.
    ///
    /// An empty FIND renders as an empty line, not as nothing.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Value(value) => f.write_str(value),
            Self::Count(count) => write!(f, "{count}"),
            Self::Keys(keys) => f.write_str(&keys.join(" ")),
        }
    }
}
