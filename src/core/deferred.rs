//! Core domain: delayed actions owned by a single entity.

use bevy::prelude::*;
use std::time::Duration;

/// Cooperative scheduler for actions that must run after a delay.
///
/// Deadlines are absolute points on the virtual clock (`Time<Virtual>::elapsed`),
/// so an action scheduled during a frame never counts time from before that
/// frame, whichever order the scheduling and draining systems run in.
///
/// The scheduler is a component on the entity that owns the actions, so it is
/// dropped together with that entity. Each entry carries the epoch it was
/// scheduled in; [`DelayScheduler::cancel_all`] bumps the epoch and every
/// older entry is discarded instead of fired.
#[derive(Component, Debug)]
pub struct DelayScheduler<A: Send + Sync + 'static> {
    epoch: u32,
    entries: Vec<ScheduledAction<A>>,
}

#[derive(Debug)]
struct ScheduledAction<A> {
    due_at: Duration,
    epoch: u32,
    action: A,
}

impl<A: Send + Sync + 'static> Default for DelayScheduler<A> {
    fn default() -> Self {
        Self {
            epoch: 0,
            entries: Vec::new(),
        }
    }
}

impl<A: Send + Sync + 'static> DelayScheduler<A> {
    /// Queue `action` to fire once the clock reaches `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, action: A) {
        self.entries.push(ScheduledAction {
            due_at: now + delay,
            epoch: self.epoch,
            action,
        });
    }

    /// Drain every action whose deadline is at or before `now`.
    /// Due actions come back ordered by deadline; ties keep scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<A> {
        let epoch = self.epoch;
        self.entries.retain(|entry| entry.epoch == epoch);

        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due_at <= now);
        self.entries = waiting;

        // Stable sort keeps scheduling order between equal deadlines
        due.sort_by_key(|entry| entry.due_at);
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Invalidate everything scheduled so far. Returns how many actions were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending();
        self.epoch = self.epoch.wrapping_add(1);
        dropped
    }

    /// Number of actions still waiting to fire.
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.epoch == self.epoch)
            .count()
    }
}
