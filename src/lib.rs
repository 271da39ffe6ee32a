//! # Glint - Search-Page Interaction Engine
//!
//! Models the client-side behaviors of a search page as independently
//! testable units: a form-submit guard, a voice-driven query trigger, and a
//! scroll-reveal animator, sequenced through the page lifecycle.
//!
//! ## Architecture
//!
//! The engine is organized into the following modules:
//!
//! - **page**: element-level page model, HTML parsing, location
//! - **events**: submit/click/DOM-ready events with prevent-default semantics
//! - **schedule**: fire-and-forget one-shot timers
//! - **capability**: injectable speech and viewport-intersection abstractions
//! - **behavior**: the three page behaviors
//! - **engine**: the PageEngine wiring it all together
//! - **config**: selectors, markers, and tuning constants
//! - **utils**: shared error types

pub mod behavior;
pub mod capability;
pub mod config;
pub mod engine;
pub mod events;
pub mod page;
pub mod schedule;
pub mod utils;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::PageEngine;
pub use events::{Event, EventType};
pub use page::{Document, ElementId, Page};
pub use utils::error::{GlintError, Result};

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Glint";

/// Behavior constants carried over from the original page script
pub mod defaults {
    /// Delay before the invalid-submit shake marker is removed
    pub const SHAKE_RESET_MS: u64 = 820;
    /// Fraction of a result item that must be visible before it is revealed
    pub const REVEAL_THRESHOLD: f32 = 0.1;
}
