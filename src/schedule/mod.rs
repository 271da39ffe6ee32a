//! Fire-and-forget timers
//!
//! One-shot delayed actions pumped by the engine, in the spirit of a page's
//! `setTimeout`. Actions are plain data so running them can mutate the
//! document directly. Nothing here is awaited or retried.

use crate::page::{Document, ElementId};
use std::time::{Duration, Instant};

/// Identifier for a scheduled timer
pub type TimerId = u32;

/// What a timer does when it fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove a class from an element (e.g., the shake reset)
    RemoveClass { target: ElementId, class: String },
}

/// One pending timer: (id, action, delay, armed_at)
#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    action: TimerAction,
    delay_ms: u64,
    armed_at: Instant,
}

impl Timer {
    fn due_at(&self) -> Instant {
        self.armed_at + Duration::from_millis(self.delay_ms)
    }
}

/// Queue of pending one-shot timers
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: TimerId,
}

impl TimerQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action to run `delay_ms` after `now`
    pub fn schedule(&mut self, action: TimerAction, delay_ms: u64, now: Instant) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            action,
            delay_ms,
            armed_at: now,
        });
        log::debug!("timer {} armed for {}ms", id, delay_ms);
        id
    }

    /// Cancel a pending timer; unknown ids are ignored
    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Check if no timers are pending
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Run and remove every timer due at `now`; returns how many fired
    pub fn run_due(&mut self, now: Instant, document: &mut Document) -> usize {
        let mut fired = 0;
        let mut remaining = Vec::with_capacity(self.timers.len());
        for timer in self.timers.drain(..) {
            if timer.due_at() <= now {
                match timer.action {
                    TimerAction::RemoveClass { target, ref class } => {
                        document.remove_class(target, class);
                    }
                }
                fired += 1;
            } else {
                remaining.push(timer);
            }
        }
        self.timers = remaining;
        fired
    }
}
