//! Page events
//!
//! Trimmed-down event model for the interactions the engine routes: form
//! submission, clicks, and the DOM-ready lifecycle event. Carries the
//! `prevent_default` semantics a submit guard needs.

use crate::page::ElementId;

/// Event types the engine routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Mouse click on an element
    Click,
    /// Form submission
    Submit,
    /// DOM-ready lifecycle event
    DomContentLoaded,
}

/// A page event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    /// Target element (none for lifecycle events)
    pub target: Option<ElementId>,
    pub cancelable: bool,
    pub default_prevented: bool,
    pub timestamp: u64,
}

impl Event {
    /// Create a new event
    pub fn new(event_type: EventType, target: Option<ElementId>) -> Self {
        Self {
            event_type,
            target,
            cancelable: true,
            default_prevented: false,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        }
    }

    /// Create a click event on an element
    pub fn click(target: ElementId) -> Self {
        Self::new(EventType::Click, Some(target))
    }

    /// Create a submit event on a form
    pub fn submit(target: ElementId) -> Self {
        Self::new(EventType::Submit, Some(target))
    }

    /// Create the DOM-ready lifecycle event
    pub fn dom_content_loaded() -> Self {
        let mut event = Self::new(EventType::DomContentLoaded, None);
        event.cancelable = false;
        event
    }

    /// Prevent the default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }
}
