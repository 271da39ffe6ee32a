//! Injectable environment capabilities
//!
//! The browser-provided globals the original page script feature-detects are
//! modeled as traits the engine receives at construction. An absent capability
//! is simply not injected; the corresponding behavior degrades to a no-op.

pub mod speech;
pub mod viewport;

pub use speech::{
    Alternative, CaptureConfig, RecognitionResult, ScriptedRecognizer, SpeechRecognition,
    TranscriptCallback, TranscriptEvent,
};
pub use viewport::{IntersectionEntry, SharedViewport, SimulatedViewport, ViewportIntersection};
