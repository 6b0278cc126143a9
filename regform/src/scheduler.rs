//! Cancelable delayed tasks.
//!
//! Each task is keyed; scheduling a key that is already pending replaces the
//! old deadline, so a newer interaction always supersedes an older one. Time is
//! supplied by the caller, which keeps the session deterministic.

use std::time::Instant;

use log::trace;

use crate::presentation::EffectKey;

/// Identity of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Remove a one-shot effect from its target.
    ClearEffect(EffectKey),
    /// Reset the form after an accepted submission.
    SuccessReset,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    key: TaskKey,
    due: Instant,
}

/// Pending tasks, at most one per key.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` at `due`, replacing any pending task with the same key.
    pub fn schedule(&mut self, key: TaskKey, due: Instant) {
        self.tasks.retain(|t| t.key != key);
        trace!("Scheduled {:?}", key);
        self.tasks.push(ScheduledTask { key, due });
    }

    /// Cancel `key`. Returns true if it was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.key != key);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            trace!("Cancelled {:?}", key);
        }
        cancelled
    }

    /// Cancel every pending task matching `pred`, returning their keys.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&TaskKey) -> bool) -> Vec<TaskKey> {
        let mut cancelled = Vec::new();
        self.tasks.retain(|t| {
            if pred(&t.key) {
                cancelled.push(t.key);
                false
            } else {
                true
            }
        });
        cancelled
    }

    /// Check if `key` is pending.
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.tasks.iter().any(|t| t.key == key)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    ///
    /// Tasks with equal deadlines keep their scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKey> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|t| {
            if t.due <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| t.due);
        due.into_iter().map(|t| t.key).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
