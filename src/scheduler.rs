//! Deferred action scheduling
//!
//! Timed UI actions (closing the terminal after `exit`, for instance) are
//! modeled as entries in a [`Scheduler`] rather than free-running timers.
//! Every entry lives in a *slot*; scheduling into an occupied slot replaces
//! the previous entry, so repeated triggers never stack. Each call to
//! [`Scheduler::schedule`] returns a [`TimerToken`] that can cancel exactly
//! that entry and nothing scheduled after it.
//!
//! The caller supplies the clock. Nothing fires until [`Scheduler::poll`] is
//! called with a time at or past the entry's deadline.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Handle for one scheduled entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken<S> {
    slot: S,
    generation: u64,
}

impl<S: Copy> TimerToken<S> {
    /// Slot the entry was scheduled into
    pub fn slot(&self) -> S {
        self.slot
    }
}

#[derive(Debug)]
struct Entry<A> {
    due: Instant,
    generation: u64,
    action: A,
}

/// Slot-keyed deferred actions with cancellation
#[derive(Debug)]
pub struct Scheduler<S, A> {
    entries: HashMap<S, Entry<A>>,
    next_generation: u64,
}

impl<S, A> Scheduler<S, A>
where
    S: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Schedule `action` to fire at `due`, replacing anything pending in `slot`
    pub fn schedule(&mut self, slot: S, due: Instant, action: A) -> TimerToken<S> {
        self.next_generation += 1;
        let generation = self.next_generation;

        let previous = self.entries.insert(
            slot,
            Entry {
                due,
                generation,
                action,
            },
        );
        if previous.is_some() {
            debug!("Superseded pending action in slot {:?}", slot);
        }

        TimerToken { slot, generation }
    }

    /// Schedule `action` to fire `delay` after `now`
    pub fn schedule_after(
        &mut self,
        slot: S,
        now: Instant,
        delay: Duration,
        action: A,
    ) -> TimerToken<S> {
        self.schedule(slot, now + delay, action)
    }

    /// Cancel the entry behind `token`
    ///
    /// Returns `false` if it already fired or was superseded.
    pub fn cancel(&mut self, token: TimerToken<S>) -> bool {
        if self.is_pending(token) {
            self.entries.remove(&token.slot);
            true
        } else {
            false
        }
    }

    /// Cancel whatever is pending in `slot`
    pub fn cancel_slot(&mut self, slot: S) -> bool {
        self.entries.remove(&slot).is_some()
    }

    /// Whether the entry behind `token` is still waiting to fire
    pub fn is_pending(&self, token: TimerToken<S>) -> bool {
        self.entries
            .get(&token.slot)
            .is_some_and(|entry| entry.generation == token.generation)
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn poll(&mut self, now: Instant) -> Vec<A> {
        let mut due_slots: Vec<(Instant, u64, S)> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= now)
            .map(|(slot, entry)| (entry.due, entry.generation, *slot))
            .collect();
        due_slots.sort_by_key(|(due, generation, _)| (*due, *generation));

        due_slots
            .into_iter()
            .filter_map(|(_, _, slot)| self.entries.remove(&slot))
            .map(|entry| entry.action)
            .collect()
    }

    /// Earliest pending deadline
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.values().map(|entry| entry.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, A> Default for Scheduler<S, A>
where
    S: Copy + Eq + Hash + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
