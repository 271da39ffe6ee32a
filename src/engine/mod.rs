//! Page engine coordinating the behaviors
//!
//! The PageEngine owns the page, the timer queue, the injected capabilities,
//! and the behavior bindings, and drives them through the page lifecycle:
//!
//! 1. `init` - script evaluation: root-path focus, behavior attachment
//! 2. `dom_content_loaded` - arm the scroll-reveal observer
//! 3. `dispatch` - route submit/click events to their bound behaviors
//! 4. `pump` - drain transcripts and intersection entries, run due timers

use crate::behavior::{
    FormBinding, RevealAnimator, SubmitDecision, SubmitGuard, VoiceBinding, VoiceOutcome,
    VoiceSearch,
};
use crate::capability::{SpeechRecognition, TranscriptEvent, ViewportIntersection};
use crate::config::EngineConfig;
use crate::events::{Event, EventType};
use crate::page::{ElementId, Page};
use crate::schedule::TimerQueue;
use crate::utils::Result;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use url::Url;

/// Form action used when the markup declares none
const DEFAULT_FORM_ACTION: &str = "/search";

/// The engine behind a single page's interaction behaviors
pub struct PageEngine {
    page: Page,
    config: EngineConfig,
    timers: TimerQueue,

    /// Speech capability; `None` means the environment never exposed one
    speech: Option<Box<dyn SpeechRecognition>>,
    /// Viewport-intersection capability, same deal
    viewport: Option<Box<dyn ViewportIntersection>>,

    guard: SubmitGuard,
    guard_binding: Option<FormBinding>,
    voice: VoiceSearch,
    voice_binding: Option<VoiceBinding>,
    reveal: RevealAnimator,

    transcript_tx: Sender<TranscriptEvent>,
    transcript_rx: Receiver<TranscriptEvent>,

    pending_navigation: Option<Url>,
    navigation_count: usize,
}

impl PageEngine {
    /// Create an engine with the default configuration
    pub fn new(page: Page) -> Self {
        Self::with_config(page, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(page: Page, config: EngineConfig) -> Self {
        let (transcript_tx, transcript_rx) = mpsc::channel();
        let guard = SubmitGuard::new(config.shake_reset_ms, &config.markers);
        let voice = VoiceSearch::new(config.selectors.search_input.clone());
        let reveal = RevealAnimator::new(
            config.selectors.result_item.clone(),
            config.markers.visible.clone(),
        );
        Self {
            page,
            config,
            timers: TimerQueue::new(),
            speech: None,
            viewport: None,
            guard,
            guard_binding: None,
            voice,
            voice_binding: None,
            reveal,
            transcript_tx,
            transcript_rx,
            pending_navigation: None,
            navigation_count: 0,
        }
    }

    /// Inject the speech-recognition capability
    pub fn set_speech(&mut self, speech: Box<dyn SpeechRecognition>) {
        self.speech = Some(speech);
    }

    /// Inject the viewport-intersection capability
    pub fn set_viewport(&mut self, viewport: Box<dyn ViewportIntersection>) {
        self.viewport = Some(viewport);
    }

    /// Get the page
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Get the page mutably
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Script-evaluation init: root-path focus and behavior attachment
    ///
    /// Every selector miss is a silent skip; the corresponding behavior is
    /// simply never attached.
    pub fn init(&mut self) {
        let selectors = self.config.selectors.clone();
        let document = self.page.document();

        if let Some(form) = document.first_by_class(&selectors.search_form) {
            let input = document.descendant_input_named(form, "q");
            let button = document.descendant_by_class(form, &selectors.search_button);
            match (input, button) {
                (Some(input), Some(button)) => {
                    self.guard_binding = Some(FormBinding {
                        form,
                        input,
                        button,
                    });
                }
                _ => log::debug!("search form lacks input/button; submit guard not attached"),
            }
        } else {
            log::debug!("no search form on page; submit guard not attached");
        }

        match self.page.document().first_by_class(&selectors.voice_search) {
            Some(control) => self.voice_binding = Some(VoiceBinding { control }),
            None => log::debug!("no voice control on page; voice trigger not attached"),
        }

        // Home page only: focus the search box right away
        if self.page.path() == "/" {
            if let Some(input) = self
                .page
                .document()
                .first_by_class(&selectors.search_input)
            {
                self.page.document_mut().focus(input);
            }
        }

        log::info!(
            "page init: guard={}, voice={}, path={}",
            self.guard_binding.is_some(),
            self.voice_binding.is_some(),
            self.page.path()
        );
    }

    /// DOM-ready: arm the reveal animator over current result items
    pub fn dom_content_loaded(&mut self) {
        let Some(viewport) = self.viewport.as_deref_mut() else {
            log::debug!("viewport observation unavailable; reveal not armed");
            return;
        };
        self.reveal.arm(
            self.page.document(),
            viewport,
            self.config.reveal_threshold,
        );
    }

    /// Route one event to its bound behavior; unbound targets are ignored
    pub fn dispatch(&mut self, event: &mut Event) -> Result<()> {
        match event.event_type {
            EventType::Submit => self.dispatch_submit(event),
            EventType::Click => self.dispatch_click(event),
            EventType::DomContentLoaded => {
                self.dom_content_loaded();
                Ok(())
            }
        }
    }

    fn dispatch_submit(&mut self, event: &mut Event) -> Result<()> {
        let Some(binding) = self.guard_binding else {
            return Ok(());
        };
        if event.target != Some(binding.form) {
            return Ok(());
        }
        let decision = self.guard.on_submit(
            self.page.document_mut(),
            binding,
            event,
            &mut self.timers,
            Instant::now(),
        );
        if let SubmitDecision::Submitted(query) = decision {
            self.navigate(binding.form, &query)?;
        }
        Ok(())
    }

    fn dispatch_click(&mut self, event: &mut Event) -> Result<()> {
        let Some(binding) = self.voice_binding else {
            return Ok(());
        };
        if event.target != Some(binding.control) {
            return Ok(());
        }
        self.voice
            .on_click(self.speech.as_deref_mut(), self.transcript_tx.clone())
    }

    /// Drain deferred work as of now
    pub fn pump(&mut self) -> Result<()> {
        self.pump_at(Instant::now())
    }

    /// Drain deferred work as of a given instant (timers compare against it)
    pub fn pump_at(&mut self, now: Instant) -> Result<()> {
        // Voice transcripts: write the input and submit its form
        while let Ok(transcript) = self.transcript_rx.try_recv() {
            let outcome = self
                .voice
                .apply_transcript(self.page.document_mut(), &transcript);
            if let VoiceOutcome::Submit { form, query } = outcome {
                self.navigate(form, &query)?;
            }
        }

        // Intersection batches: reveal result items
        if let Some(viewport) = self.viewport.as_deref_mut() {
            let entries = viewport.take_entries();
            if !entries.is_empty() {
                self.reveal.apply(self.page.document_mut(), &entries);
            }
        }

        let fired = self.timers.run_due(now, self.page.document_mut());
        if fired > 0 {
            log::debug!("{} timer(s) fired", fired);
        }
        Ok(())
    }

    /// Record the navigation a form submission produces
    fn navigate(&mut self, form: ElementId, query: &str) -> Result<()> {
        let action = self
            .page
            .document()
            .attribute(form, "action")
            .unwrap_or(DEFAULT_FORM_ACTION)
            .to_string();
        let mut target = self.page.location().join(&action)?;
        target.query_pairs_mut().clear().append_pair("q", query);
        log::info!("navigating to {}", target);
        self.pending_navigation = Some(target);
        self.navigation_count += 1;
        Ok(())
    }

    /// The navigation recorded by the last submission, if any
    pub fn pending_navigation(&self) -> Option<&Url> {
        self.pending_navigation.as_ref()
    }

    /// Take the pending navigation, leaving none
    pub fn take_navigation(&mut self) -> Option<Url> {
        self.pending_navigation.take()
    }

    /// How many navigations this page recorded
    pub fn navigation_count(&self) -> usize {
        self.navigation_count
    }
}
