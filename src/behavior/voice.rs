//! Voice-input trigger
//!
//! A click on the voice control starts a single-shot capture session when the
//! speech capability is present. The transcript lands back at the engine
//! through a channel; applying it writes the search input and submits its
//! enclosing form programmatically, which bypasses the submit guard the same
//! way `form.submit()` skips submit handlers.

use crate::capability::{CaptureConfig, SpeechRecognition, TranscriptEvent};
use crate::page::{Document, ElementId};
use crate::utils::Result;
use std::sync::mpsc::Sender;

/// The voice control a trigger is attached to
#[derive(Debug, Clone, Copy)]
pub struct VoiceBinding {
    pub control: ElementId,
}

/// Outcome of applying one transcript event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// Transcript written and the enclosing form should navigate
    Submit { form: ElementId, query: String },
    /// Nothing usable in the event, or no input/form to deliver it to
    Dropped,
}

/// Click-to-capture trigger for voice queries
#[derive(Debug, Clone)]
pub struct VoiceSearch {
    input_selector: String,
}

impl VoiceSearch {
    /// Create a trigger that delivers transcripts into the given input class
    pub fn new(input_selector: impl Into<String>) -> Self {
        Self {
            input_selector: input_selector.into(),
        }
    }

    /// Handle a click on the voice control: start a capture session
    ///
    /// The capability is injected as an `Option`; `None` means the browser
    /// never exposed it and the click is a silent no-op.
    pub fn on_click(
        &self,
        speech: Option<&mut (dyn SpeechRecognition + '_)>,
        results: Sender<TranscriptEvent>,
    ) -> Result<()> {
        let Some(speech) = speech else {
            log::debug!("speech recognition unavailable; voice click ignored");
            return Ok(());
        };

        let config = CaptureConfig {
            continuous: false,
            interim_results: false,
        };
        speech.start(
            config,
            Box::new(move |event| {
                // The session may already have outlived the page; a dead
                // receiver just drops the transcript
                let _ = results.send(event);
            }),
        )
    }

    /// Apply a delivered transcript: write the input, name the form to submit
    pub fn apply_transcript(
        &self,
        document: &mut Document,
        event: &TranscriptEvent,
    ) -> VoiceOutcome {
        let Some(transcript) = event.top_transcript() else {
            log::warn!("transcript event carried no candidates; dropped");
            return VoiceOutcome::Dropped;
        };
        let Some(input) = document.first_by_class(&self.input_selector) else {
            log::debug!("no search input on page; transcript dropped");
            return VoiceOutcome::Dropped;
        };
        document.set_value(input, transcript);
        match document.enclosing_form(input) {
            Some(form) => VoiceOutcome::Submit {
                form,
                query: transcript.to_string(),
            },
            None => {
                log::debug!("search input has no enclosing form; transcript kept, no submit");
                VoiceOutcome::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ScriptedRecognizer;
    use std::sync::mpsc;

    fn page_with_form() -> (Document, ElementId) {
        let mut doc = Document::new();
        let form = doc.create_element("form");
        doc.append_root(form);
        let input = doc.create_element("input");
        doc.set_attribute(input, "class", "search-input");
        doc.append_child(form, input);
        (doc, input)
    }

    #[test]
    fn test_click_without_capability_is_noop() {
        let (tx, rx) = mpsc::channel();
        let trigger = VoiceSearch::new("search-input");
        trigger.on_click(None, tx).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_click_starts_single_shot_session() {
        let (tx, rx) = mpsc::channel();
        let mut recognizer = ScriptedRecognizer::new("pizza near me");
        let trigger = VoiceSearch::new("search-input");
        trigger.on_click(Some(&mut recognizer), tx).unwrap();

        let event = rx.try_recv().unwrap();
        assert_eq!(event.top_transcript(), Some("pizza near me"));

        let config = recognizer.last_config().unwrap();
        assert!(!config.continuous);
        assert!(!config.interim_results);
    }

    #[test]
    fn test_apply_transcript_writes_input_and_names_form() {
        let (mut doc, input) = page_with_form();
        let trigger = VoiceSearch::new("search-input");

        let outcome =
            trigger.apply_transcript(&mut doc, &TranscriptEvent::single("pizza near me", 0.9));

        let form = doc.enclosing_form(input).unwrap();
        assert_eq!(
            outcome,
            VoiceOutcome::Submit {
                form,
                query: "pizza near me".into()
            }
        );
        assert_eq!(doc.value(input), "pizza near me");
    }

    #[test]
    fn test_empty_transcript_event_dropped() {
        let (mut doc, input) = page_with_form();
        let trigger = VoiceSearch::new("search-input");

        let outcome = trigger.apply_transcript(&mut doc, &TranscriptEvent::default());

        assert_eq!(outcome, VoiceOutcome::Dropped);
        assert_eq!(doc.value(input), "");
    }

    #[test]
    fn test_orphan_input_does_not_submit() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "class", "search-input");
        doc.append_root(input);
        let trigger = VoiceSearch::new("search-input");

        let outcome = trigger.apply_transcript(&mut doc, &TranscriptEvent::single("tea", 0.8));

        assert_eq!(outcome, VoiceOutcome::Dropped);
        assert_eq!(doc.value(input), "tea");
    }
}
