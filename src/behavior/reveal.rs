//! Scroll-reveal animator
//!
//! Marks result items visible the first time they intersect the viewport past
//! the observer's threshold. The marker is never removed and reapplication
//! has no further effect.

use crate::capability::{IntersectionEntry, ViewportIntersection};
use crate::page::Document;

/// Applies the persistent visible marker to intersecting result items
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    item_selector: String,
    visible_marker: String,
}

impl RevealAnimator {
    /// Create an animator for a result-item class and its visible marker
    pub fn new(item_selector: impl Into<String>, visible_marker: impl Into<String>) -> Self {
        Self {
            item_selector: item_selector.into(),
            visible_marker: visible_marker.into(),
        }
    }

    /// Arm the observer over every result item currently on the page
    ///
    /// Items added to the page afterwards are not observed; there is no
    /// mutation observation.
    pub fn arm(
        &self,
        document: &Document,
        viewport: &mut dyn ViewportIntersection,
        threshold: f32,
    ) -> usize {
        viewport.set_threshold(threshold);
        let items = document.all_by_class(&self.item_selector);
        for item in &items {
            viewport.observe(*item);
        }
        log::debug!("reveal armed over {} result items", items.len());
        items.len()
    }

    /// Apply the visible marker for every intersecting entry in a batch
    pub fn apply(&self, document: &mut Document, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.is_intersecting {
                document.add_class(entry.target, &self.visible_marker);
            }
        }
    }
}
