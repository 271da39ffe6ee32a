//! Viewport-intersection capability
//!
//! Mirrors the IntersectionObserver contract: targets are registered once,
//! the observer reports threshold crossings as entry batches, and only
//! observed targets ever produce entries. The engine drains batches on pump.

use crate::page::ElementId;
use std::cell::RefCell;
use std::rc::Rc;

/// One intersection report for an observed target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    /// Fraction of the target's area inside the viewport
    pub ratio: f32,
    /// True when the ratio is at or above the observer's threshold
    pub is_intersecting: bool,
}

/// Viewport-intersection observation capability
pub trait ViewportIntersection {
    /// Set the visibility threshold for intersection reports
    fn set_threshold(&mut self, threshold: f32);

    /// Register a target; unobserved targets never produce entries
    fn observe(&mut self, target: ElementId);

    /// Drain the pending entry batch
    fn take_entries(&mut self) -> Vec<IntersectionEntry>;
}

/// Observer fed by explicit scroll positions, for demos and tests
#[derive(Debug, Default)]
pub struct SimulatedViewport {
    threshold: f32,
    observed: Vec<ElementId>,
    pending: Vec<IntersectionEntry>,
}

impl SimulatedViewport {
    /// Create an observer with no targets and a zero threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a target's visible fraction, queuing an entry if it is observed
    pub fn scroll_to(&mut self, target: ElementId, ratio: f32) {
        if !self.observed.contains(&target) {
            return;
        }
        self.pending.push(IntersectionEntry {
            target,
            ratio,
            is_intersecting: ratio >= self.threshold,
        });
    }

    /// Number of observed targets
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

impl ViewportIntersection for SimulatedViewport {
    fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    fn observe(&mut self, target: ElementId) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        std::mem::take(&mut self.pending)
    }
}

/// Cloneable handle to a [`SimulatedViewport`]
///
/// An engine takes the observer as a boxed trait object; the handle lets the
/// caller keep feeding scroll positions afterwards.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport {
    inner: Rc<RefCell<SimulatedViewport>>,
}

impl SharedViewport {
    /// Create a handle to a fresh simulated viewport
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a target's visible fraction, see [`SimulatedViewport::scroll_to`]
    pub fn scroll_to(&self, target: ElementId, ratio: f32) {
        self.inner.borrow_mut().scroll_to(target, ratio);
    }

    /// Number of observed targets
    pub fn observed_count(&self) -> usize {
        self.inner.borrow().observed_count()
    }
}

impl ViewportIntersection for SharedViewport {
    fn set_threshold(&mut self, threshold: f32) {
        self.inner.borrow_mut().set_threshold(threshold);
    }

    fn observe(&mut self, target: ElementId) {
        self.inner.borrow_mut().observe(target);
    }

    fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        self.inner.borrow_mut().take_entries()
    }
}
