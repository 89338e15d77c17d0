//! Read-eval-print loop.

use crate::config::{Config, FAREWELL};
use crate::help::HELP_TEXT;
use crate::parser::{parse_line, ParseError};
use stackkv_core::{CommandKind, Store};
use std::io::{self, BufRead, Write};
use tracing::{debug, dispatcher, info, warn, Dispatch};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// END was entered.
    Exit,
}

/// An interactive session over one store.
///
/// Every line is parsed, executed and answered on `output`. Failures are
/// printed and logged; none of them end the session.
pub struct Session<R, W> {
    store: Store,
    config: Config,
    log: Dispatch,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty store.
    pub fn new(config: Config, log: Dispatch, input: R, output: W) -> Self {
        Self {
            store: Store::new(),
            config,
            log,
            input,
            output,
        }
    }

    /// Runs until END or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let log = self.log.clone();
        dispatcher::with_default(&log, || {
            info!("session started");
            let mut buf = Vec::new();
            loop {
                self.print_prompt()?;
                buf.clear();
                if self.input.read_until(b'\n', &mut buf)? == 0 {
                    info!("end of input");
                    return Ok(());
                }
                let Ok(line) = std::str::from_utf8(&buf) else {
                    let err = ParseError::WrongFormat;
                    warn!(%err, "input is not valid UTF-8");
                    writeln!(self.output, "{err}")?;
                    continue;
                };
                if self.handle_line(line)? == Flow::Exit {
                    info!("session ended");
                    return Ok(());
                }
            }
        })
    }

    /// Parses and executes a single line.
    #[cfg(test)]
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let log = self.log.clone();
        dispatcher::with_default(&log, || self.handle_line(line))
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        debug!(line = line.trim_end(), "validating input");
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected input");
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match command.kind {
            CommandKind::End => {
                if self.config.farewell {
                    writeln!(self.output, "{FAREWELL}")?;
                }
                return Ok(Flow::Exit);
            }
            CommandKind::Help => {
                writeln!(self.output, "{HELP_TEXT}")?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        match self.store.execute(&command) {
            Ok(response) => {
                if let Some(text) = response.render() {
                    writeln!(self.output, "{text}")?;
                }
            }
            Err(err) => {
                warn!(%command, %err, "command failed");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        if !self.config.prompt.is_empty() {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Returns the session's store.
    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the session, returning its output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
