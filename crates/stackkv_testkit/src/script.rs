//! Scripted command runs.
//!
//! Feeds commands to a store and records each outcome the way the
//! interpreter reports it: the rendered result, or the failure message.

use stackkv_core::{Command, CoreResult, Response, Store};

/// A store plus the transcript of every command run against it.
#[derive(Debug, Default)]
pub struct Script {
    store: Store,
    transcript: Vec<(Command, CoreResult<Response>)>,
}

impl Script {
    /// Creates a script over `store`.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            transcript: Vec::new(),
        }
    }

    /// Runs one command and records its outcome.
    pub fn run(&mut self, command: &Command) -> &CoreResult<Response> {
        let outcome = self.store.execute(command);
        let index = self.transcript.len();
        self.transcript.push((command.clone(), outcome));
        &self.transcript[index].1
    }

    /// Runs every command in order.
    pub fn run_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a Command>) -> &mut Self {
        for command in commands {
            self.run(command);
        }
        self
    }

    /// Returns the lines an interpreter would have printed so far.
    #[must_use]
    pub fn printed(&self) -> Vec<String> {
        self.transcript
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                Ok(response) => response.render(),
                Err(err) => Some(err.to_string()),
            })
            .collect()
    }

    /// Returns every recorded command with its outcome.
    #[must_use]
    pub fn transcript(&self) -> &[(Command, CoreResult<Response>)] {
        &self.transcript
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackkv_core::CommandKind;

    #[test]
    fn records_results_and_failures() {
        let mut script = Script::new(Store::new());
        script.run_all(&[
            Command::set("A", "5"),
            Command::new(CommandKind::Get).with_key("A"),
            Command::new(CommandKind::Get).with_key("B"),
            Command::new(CommandKind::Commit),
        ]);

        assert_eq!(script.transcript().len(), 4);
        assert_eq!(
            script.printed(),
            vec![
                "5".to_string(),
                "NULL".to_string(),
                "error: no open transaction to commit".to_string(),
            ]
        );
    }

    #[test]
    fn run_returns_the_outcome() {
        let mut script = Script::new(Store::new());
        let outcome = script.run(&Command::new(CommandKind::Counts).with_value("1"));
        assert_eq!(outcome, &Ok(Response::Count(0)));
    }

    #[test]
    fn run_returns_the_latest_outcome() {
        let mut script = Script::new(Store::new());
        script.run(&Command::set("A", "1"));
        script.run(&Command::set("B", "1"));
        let outcome = script.run(&Command::new(CommandKind::Counts).with_value("1"));
        assert_eq!(outcome, &Ok(Response::Count(2)));
        assert_eq!(script.transcript().len(), 3);
    }
}
