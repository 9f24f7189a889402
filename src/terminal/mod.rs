//! Terminal easter egg
//!
//! A tiny REPL that maps typed commands to canned responses. [`Terminal`]
//! owns everything a single terminal instance needs:
//!
//! - the open/closed [`TerminalView`] state machine,
//! - the [`Transcript`] of displayed lines,
//! - an [`Interpreter`] over the [`CommandTable`],
//! - the [`KeySequence`] matcher that unlocks it,
//! - a [`Scheduler`] for the deferred close after `exit`.
//!
//! Time is passed in explicitly, which keeps the whole machine testable
//! without a clock or a rendering surface.

pub mod commands;
pub mod input;
pub mod interpreter;
pub mod state;
pub mod transcript;

pub use commands::CommandTable;
pub use input::{ClickBurst, KeySequence};
pub use interpreter::{Effect, Interpreter, Outcome};
pub use state::{TerminalView, Trigger, ViewState};
pub use transcript::Transcript;

use crate::config::TerminalConfig;
use crate::scheduler::{Scheduler, TimerToken};
use std::time::{Duration, Instant};

/// Lines appended when the key sequence unlocks the terminal
pub const UNLOCK_BANNER: [&str; 2] = [
    "Konami Code activated! You've unlocked the secret terminal!",
    "You're clearly a person of culture. Respect!",
];

/// Deferred work owned by a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    AutoClose,
}

/// Action carried out when a deferred entry fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    Close,
}

/// A single terminal instance
#[derive(Debug)]
pub struct Terminal {
    view: TerminalView,
    transcript: Transcript,
    interpreter: Interpreter,
    unlock: KeySequence,
    timers: Scheduler<TimerSlot, DeferredAction>,
    close_delay: Duration,
}

impl Terminal {
    /// Terminal with the built-in command table
    pub fn new(config: &TerminalConfig) -> Self {
        Self::with_table(CommandTable::builtin(), config.exit_close_delay())
    }

    /// Terminal over a custom command table
    pub fn with_table(table: CommandTable, close_delay: Duration) -> Self {
        Self {
            view: TerminalView::new(),
            transcript: Transcript::new(),
            interpreter: Interpreter::new(table),
            unlock: KeySequence::konami(),
            timers: Scheduler::new(),
            close_delay,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Explicit open action
    pub fn open(&mut self) -> bool {
        self.view.open(Trigger::User)
    }

    /// Explicit close action; also drops a pending auto-close
    pub fn close(&mut self) -> bool {
        self.timers.cancel_slot(TimerSlot::AutoClose);
        self.view.close(Trigger::User)
    }

    /// Interpret one input line submitted at `now`
    ///
    /// `exit` schedules the view to close `close_delay` after `now`; a
    /// second `exit` before that replaces the pending close rather than
    /// adding another.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Outcome {
        let outcome = self.interpreter.interpret(raw, &mut self.transcript);

        if outcome.effect == Effect::CloseView {
            self.schedule_close(now);
        }

        outcome
    }

    /// Schedule the deferred close
    pub fn schedule_close(&mut self, now: Instant) -> TimerToken<TimerSlot> {
        debug!("Terminal closes in {:?}", self.close_delay);
        self.timers
            .schedule_after(TimerSlot::AutoClose, now, self.close_delay, DeferredAction::Close)
    }

    /// Cancel a pending close obtained from [`Terminal::schedule_close`]
    pub fn cancel_close(&mut self, token: TimerToken<TimerSlot>) -> bool {
        self.timers.cancel(token)
    }

    /// Feed a key press; opens the terminal when the secret sequence completes
    ///
    /// Returns `true` when this key completed the sequence.
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.unlock.push(key) {
            return false;
        }

        info!("Secret key sequence entered, opening terminal");
        self.view.open(Trigger::KeySequence);
        for line in UNLOCK_BANNER {
            self.transcript.push(line);
        }
        true
    }

    /// Run every deferred action due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<DeferredAction> {
        let fired = self.timers.poll(now);
        for action in &fired {
            match action {
                DeferredAction::Close => {
                    self.view.close(Trigger::ExitTimer);
                }
            }
        }
        fired
    }

    /// When the next deferred action is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    pub fn has_pending_close(&self) -> bool {
        !self.timers.is_empty()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}
