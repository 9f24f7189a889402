//! Command interpretation
//!
//! Turns one raw input line into transcript lines plus an [`Effect`] the
//! owning terminal has to carry out. The interpreter itself keeps no state
//! between calls.

use super::commands::{not_found_message, CommandTable, CLEAR, EXIT, RESET_NOTICE};
use super::transcript::Transcript;

/// Prefix of the echoed input line
pub const PROMPT: &str = "$ ";

/// Follow-up action requested by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the transcript lines
    None,
    /// The transcript was reset
    Cleared,
    /// Close the view after the configured delay
    CloseView,
}

/// Result of interpreting one input line
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Trimmed, lowercased command
    pub command: String,
    /// Whether the command was found in the table
    pub recognized: bool,
    pub effect: Effect,
}

/// Trim and lowercase raw input
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Stateless command interpreter over a [`CommandTable`]
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    table: CommandTable,
}

impl Interpreter {
    pub fn new(table: CommandTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Interpret `raw`, appending its lines to `transcript`
    pub fn interpret(&self, raw: &str, transcript: &mut Transcript) -> Outcome {
        let command = normalize(raw);
        transcript.push(format!("{}{}", PROMPT, command));

        let (recognized, effect) = match (command.as_str(), self.table.get(&command)) {
            (CLEAR, Some(_)) => {
                transcript.reset_to(RESET_NOTICE);
                (true, Effect::Cleared)
            }
            (EXIT, Some(farewell)) => {
                transcript.push(farewell);
                (true, Effect::CloseView)
            }
            (_, Some(response)) => {
                transcript.push(response);
                (true, Effect::None)
            }
            (_, None) => {
                transcript.push(not_found_message(&command));
                (false, Effect::None)
            }
        };

        trace!("Interpreted {:?} -> {:?}", command, effect);

        Outcome {
            command,
            recognized,
            effect,
        }
    }
}
