//! The command table
//!
//! A fixed mapping from lowercase command name to canned response text.
//! The table is immutable once built; lookups never fail, callers fall back
//! to [`not_found_message`] for unknown names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Command that wipes the transcript
pub const CLEAR: &str = "clear";

/// Command that closes the terminal view after a delay
pub const EXIT: &str = "exit";

/// Single line left in the transcript after `clear`
pub const RESET_NOTICE: &str = "Terminal cleared! Type 'help' for available commands.";

const BUILTIN_COMMANDS: [(&str, &str); 7] = [
    (
        "help",
        "Available commands: help, about, skills, meme, quote, clear, exit",
    ),
    (
        "about",
        "I'm Nayan, a CS student who builds satellites and trains neural nets!",
    ),
    (
        "skills",
        "Python, AI/ML, Computer Vision, Satellite Development, and caffeinated debugging.",
    ),
    (
        "meme",
        "404: Social life not found. But my GitHub commits are through the roof!",
    ),
    (
        "quote",
        "\"Sometimes I train neural nets. Sometimes I train shoulders. Either way, I'm building.\" - Nayan",
    ),
    (CLEAR, ""),
    (EXIT, "Thanks for visiting! Keep coding and stay awesome!"),
];

static BUILTIN: Lazy<CommandTable> = Lazy::new(|| CommandTable::from_entries(BUILTIN_COMMANDS));

/// Fallback response for a command missing from the table
pub fn not_found_message(command: &str) -> String {
    format!(
        "Command not found: {}. Type 'help' for available commands.",
        command
    )
}

/// Immutable command name to response mapping
#[derive(Debug, Clone, PartialEq)]
pub struct CommandTable {
    responses: HashMap<String, String>,
    /// Names in definition order
    order: Vec<String>,
}

impl CommandTable {
    /// The portfolio's built-in commands
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a table from `(name, response)` pairs
    ///
    /// Names are trimmed and lowercased; a repeated name keeps its first
    /// position and its last response.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut responses = HashMap::new();
        let mut order = Vec::new();

        for (name, response) in entries {
            let name = name.as_ref().trim().to_lowercase();
            if responses.insert(name.clone(), response.into()).is_none() {
                order.push(name);
            }
        }

        Self { responses, order }
    }

    /// Response for an already-normalized command name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.responses.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.responses.contains_key(name)
    }

    /// Command names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}
