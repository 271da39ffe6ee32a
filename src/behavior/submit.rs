//! Form-submit guard
//!
//! Rejects whitespace-only queries with a transient shake, lets everything
//! else through with a loading marker on the submit button. The loading
//! marker is never removed here; the navigation that follows discards it.

use crate::config::Markers;
use crate::events::Event;
use crate::page::{Document, ElementId};
use crate::schedule::{TimerAction, TimerQueue};
use std::time::Instant;

/// The form elements a guard operates on, resolved at attach time
#[derive(Debug, Clone, Copy)]
pub struct FormBinding {
    pub form: ElementId,
    pub input: ElementId,
    pub button: ElementId,
}

/// What the guard decided for one submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Empty query: submission canceled, shake applied
    Rejected,
    /// Real query: submission proceeds with this trimmed-nothing raw value
    Submitted(String),
}

/// Guard for the search form's submit event
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    shake_reset_ms: u64,
    shake_marker: String,
    loading_marker: String,
}

impl SubmitGuard {
    /// Create a guard with a reset delay and the markers it applies
    pub fn new(shake_reset_ms: u64, markers: &Markers) -> Self {
        Self {
            shake_reset_ms,
            shake_marker: markers.shake.clone(),
            loading_marker: markers.loading.clone(),
        }
    }

    /// Handle a submit event on the bound form
    pub fn on_submit(
        &self,
        document: &mut Document,
        binding: FormBinding,
        event: &mut Event,
        timers: &mut TimerQueue,
        now: Instant,
    ) -> SubmitDecision {
        let query = document.value(binding.input).to_string();

        if query.trim().is_empty() {
            event.prevent_default();
            document.add_class(binding.input, &self.shake_marker);
            timers.schedule(
                TimerAction::RemoveClass {
                    target: binding.input,
                    class: self.shake_marker.clone(),
                },
                self.shake_reset_ms,
                now,
            );
            log::debug!("empty query rejected; shake reset in {}ms", self.shake_reset_ms);
            return SubmitDecision::Rejected;
        }

        document.add_class(binding.button, &self.loading_marker);
        SubmitDecision::Submitted(query)
    }
}
