//! Input pattern detection
//!
//! Key-sequence matching for the secret terminal unlock and the avatar
//! click-burst counter. Both are plain values fed by the caller; neither
//! installs listeners or timers of its own.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Key codes that unlock the terminal, in order
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Sliding-window matcher for a fixed key sequence
///
/// Only key presses are fed in. The window never holds more keys than the
/// target sequence.
#[derive(Debug, Clone)]
pub struct KeySequence {
    target: Vec<String>,
    window: VecDeque<String>,
}

impl KeySequence {
    /// Matcher for `target`
    pub fn new<I, K>(target: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let target: Vec<String> = target.into_iter().map(Into::into).collect();
        let window = VecDeque::with_capacity(target.len());
        Self { target, window }
    }

    /// Matcher for the Konami code
    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }

    /// Feed one key press; `true` when it completes the sequence
    ///
    /// A completed match clears the window.
    pub fn push(&mut self, key: &str) -> bool {
        if self.target.is_empty() {
            return false;
        }

        self.window.push_back(key.to_string());
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }

        if self.window.iter().eq(self.target.iter()) {
            self.window.clear();
            return true;
        }
        false
    }

    /// Forget every key seen so far
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Keys currently held in the window
    pub fn buffered(&self) -> usize {
        self.window.len()
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::konami()
    }
}

/// Counts rapid clicks; fires when `threshold` land inside the window
///
/// Each click restarts the window, so a slow trickle of clicks never
/// accumulates.
#[derive(Debug, Clone)]
pub struct ClickBurst {
    threshold: u32,
    window: Duration,
    count: u32,
    expires_at: Option<Instant>,
}

impl ClickBurst {
    pub fn new(threshold: u32, window: Duration) -> Self {
        Self {
            threshold: threshold.max(1),
            window,
            count: 0,
            expires_at: None,
        }
    }

    /// Record a click at `now`; `true` when it completes a burst
    pub fn click(&mut self, now: Instant) -> bool {
        if self.expires_at.is_some_and(|at| now >= at) {
            self.count = 0;
        }

        self.count += 1;
        self.expires_at = Some(now + self.window);

        if self.count >= self.threshold {
            self.count = 0;
            self.expires_at = None;
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for ClickBurst {
    /// Five clicks within two seconds of each other
    fn default() -> Self {
        Self::new(5, Duration::from_secs(2))
    }
}
