//! The page behaviors
//!
//! Three independent units, each taking explicit element references and
//! capability handles instead of querying ambient page state:
//!
//! - **submit**: guards the search form against empty queries
//! - **voice**: turns a click into a speech capture and a programmatic submit
//! - **reveal**: marks result items visible as they scroll into view

pub mod reveal;
pub mod submit;
pub mod voice;

pub use reveal::RevealAnimator;
pub use submit::{FormBinding, SubmitDecision, SubmitGuard};
pub use voice::{VoiceBinding, VoiceOutcome, VoiceSearch};
