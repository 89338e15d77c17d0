//! StackKV CLI
//!
//! Interactive interpreter for the StackKV in-memory database.
//!
//! Reads one command per line from stdin and prints results to stdout.
//! Type `HELP` in a session for the command list.

mod config;
mod help;
mod logging;
mod parser;
mod session;

use clap::Parser;
use config::{Config, DEFAULT_PROMPT};
use session::Session;
use std::io;
use std::path::PathBuf;

/// StackKV interactive key/value shell.
#[derive(Parser)]
#[command(name = "stackkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Append diagnostic logs to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Prompt printed before each line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Print no prompt and no farewell, for piped input
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let config = Config::new()
            .prompt(self.prompt)
            .log_file(self.log_file)
            .verbose(self.verbose);
        if self.quiet {
            config.quiet()
        } else {
            config
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();
    let log = logging::dispatch(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, log, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
