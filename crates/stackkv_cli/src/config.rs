//! Interpreter configuration.

use std::path::PathBuf;

/// Default prompt printed before each input line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Line printed when the session ends with END.
pub const FAREWELL: &str = "Shutting down.";

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each line (empty for none).
    pub prompt: String,

    /// Whether to print the farewell line on END.
    pub farewell: bool,

    /// Where diagnostic logs go, if anywhere.
    pub log_file: Option<PathBuf>,

    /// Whether to log at debug level.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: true,
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets whether to print the farewell line.
    #[must_use]
    pub const fn farewell(mut self, value: bool) -> Self {
        self.farewell = value;
        self
    }

    /// Sets the log destination.
    #[must_use]
    pub fn log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Sets debug-level logging.
    #[must_use]
    pub const fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Drops the prompt and farewell, for piped input.
    #[must_use]
    pub fn quiet(self) -> Self {
        self.prompt("").farewell(false)
    }
}
