//! Terminal view state
//!
//! Two states, closed and open. Transitions report whether anything
//! changed so callers can skip redundant work.

use chrono::{DateTime, Utc};

/// Visibility of the terminal view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Open,
}

/// What caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Explicit open or close action
    User,
    /// The secret key sequence was completed
    KeySequence,
    /// The deferred close scheduled by `exit`
    ExitTimer,
}

/// Open/closed state machine for the terminal view
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    state: ViewState,
    last_transition: Option<(Trigger, DateTime<Utc>)>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ViewState::Open
    }

    /// Open the view; `false` if it was already open
    pub fn open(&mut self, trigger: Trigger) -> bool {
        self.transition(ViewState::Open, trigger)
    }

    /// Close the view; `false` if it was already closed
    pub fn close(&mut self, trigger: Trigger) -> bool {
        self.transition(ViewState::Closed, trigger)
    }

    /// Most recent effective transition
    pub fn last_transition(&self) -> Option<(Trigger, DateTime<Utc>)> {
        self.last_transition
    }

    fn transition(&mut self, to: ViewState, trigger: Trigger) -> bool {
        if self.state == to {
            return false;
        }
        debug!("Terminal view {:?} -> {:?} ({:?})", self.state, to, trigger);
        self.state = to;
        self.last_transition = Some((trigger, Utc::now()));
        true
    }
}
