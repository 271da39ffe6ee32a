//! Speech-recognition capability
//!
//! A capture session is single-shot: on `start` the implementation delivers at
//! most one `TranscriptEvent` through the callback, then the session ends.
//! There is no stop or cancel path. Availability is modeled by injection: an
//! engine holding no recognizer treats the capability as absent.

use crate::utils::Result;

/// Capture session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Keep capturing after the first result
    pub continuous: bool,
    /// Deliver interim (non-final) results
    pub interim_results: bool,
}

impl Default for CaptureConfig {
    /// Single-shot, final results only
    fn default() -> Self {
        Self {
            continuous: false,
            interim_results: false,
        }
    }
}

/// One ranked transcript candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
}

/// One result set: alternatives ranked best-first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
}

/// Everything one capture session produced
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranscriptEvent {
    pub results: Vec<RecognitionResult>,
}

impl TranscriptEvent {
    /// Build an event holding a single top candidate
    pub fn single(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            results: vec![RecognitionResult {
                alternatives: vec![Alternative {
                    transcript: transcript.into(),
                    confidence,
                }],
            }],
        }
    }

    /// Top candidate of the first result set
    pub fn top_transcript(&self) -> Option<&str> {
        self.results
            .first()?
            .alternatives
            .first()
            .map(|a| a.transcript.as_str())
    }
}

/// Callback receiving the session's one result
pub type TranscriptCallback = Box<dyn FnOnce(TranscriptEvent) + Send>;

/// Speech-to-text capture capability
pub trait SpeechRecognition {
    /// Start a capture session; `on_result` is invoked at most once
    fn start(&mut self, config: CaptureConfig, on_result: TranscriptCallback) -> Result<()>;
}

/// Recognizer that replays a canned transcript, for demos and tests
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    transcript: Option<String>,
    /// Configuration of the last started session
    last_config: Option<CaptureConfig>,
}

impl ScriptedRecognizer {
    /// Create a recognizer that will deliver `transcript` on start
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            last_config: None,
        }
    }

    /// Create a recognizer whose session ends without a result
    pub fn silent() -> Self {
        Self::default()
    }

    /// Configuration of the last started session, if any
    pub fn last_config(&self) -> Option<CaptureConfig> {
        self.last_config
    }
}

impl SpeechRecognition for ScriptedRecognizer {
    fn start(&mut self, config: CaptureConfig, on_result: TranscriptCallback) -> Result<()> {
        self.last_config = Some(config);
        // One-shot: the transcript is consumed by the first session
        if let Some(transcript) = self.transcript.take() {
            on_result(TranscriptEvent::single(transcript, 1.0));
        }
        Ok(())
    }
}
