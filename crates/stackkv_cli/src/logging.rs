//! Diagnostic logging setup.
//!
//! The subscriber is returned as a [`Dispatch`] handle for the session to
//! scope its work under; nothing is installed process-wide.

use crate::config::Config;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Builds the log dispatcher described by `config`.
///
/// - With a log file: events are appended to it without ANSI colors.
/// - Without one: events go to stderr when verbose, otherwise nowhere.
pub fn dispatch(config: &Config) -> io::Result<Dispatch> {
    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let dispatch = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            Dispatch::new(subscriber)
        }
        None if config.verbose => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .finish();
            Dispatch::new(subscriber)
        }
        None => Dispatch::none(),
    };

    Ok(dispatch)
}
