//! Integration tests for the Glint page engine
//!
//! These walk the three behaviors through the engine end-to-end, the way the
//! surrounding page would: init, DOM-ready, events, pump.

use glint::capability::{
    CaptureConfig, ScriptedRecognizer, SharedViewport, SpeechRecognition, TranscriptCallback,
    TranscriptEvent,
};
use glint::{Event, Page, PageEngine};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::time::{Duration, Instant};
use url::Url;

const SEARCH_PAGE: &str = r#"<html><body>
    <form class="search-form" action="/search">
        <input class="search-input" type="text" name="q">
        <button class="search-button" type="submit">Search</button>
        <span class="voice-search">mic</span>
    </form>
    <div class="result-item">First</div>
    <div class="result-item">Second</div>
    <div class="result-item">Third</div>
</body></html>"#;

fn engine_at(path: &str) -> PageEngine {
    let url = Url::parse(&format!("http://localhost:8080{}", path)).unwrap();
    let page = Page::from_html(SEARCH_PAGE, url).unwrap();
    let mut engine = PageEngine::new(page);
    engine.init();
    engine
}

mockall::mock! {
    Recognizer {}

    impl SpeechRecognition for Recognizer {
        fn start(&mut self, config: CaptureConfig, on_result: TranscriptCallback) -> glint::Result<()>;
    }
}

/// Whitespace-only submits shake instead of navigating
#[test]
fn whitespace_submit_shakes_and_resets_after_820ms() {
    let mut engine = engine_at("/");
    let doc = engine.page_mut().document_mut();
    let input = doc.first_by_class("search-input").unwrap();
    doc.set_value(input, "   \t ");
    let form = doc.first_by_class("search-form").unwrap();

    let t0 = Instant::now();
    let mut submit = Event::submit(form);
    engine.dispatch(&mut submit).unwrap();

    assert!(submit.default_prevented, "empty submit must not navigate");
    assert_eq!(engine.navigation_count(), 0);
    assert!(engine.page().document().has_class(input, "shake"));

    // Marker still present just before the reset deadline
    engine.pump_at(t0 + Duration::from_millis(819)).unwrap();
    assert!(engine.page().document().has_class(input, "shake"));

    // Gone afterwards, and it stays gone
    engine
        .pump_at(Instant::now() + Duration::from_millis(825))
        .unwrap();
    assert!(!engine.page().document().has_class(input, "shake"));
    engine
        .pump_at(Instant::now() + Duration::from_millis(2000))
        .unwrap();
    assert!(!engine.page().document().has_class(input, "shake"));
}

/// A real query navigates and marks the button loading
#[test]
fn nonempty_submit_navigates_with_loading_marker() {
    let mut engine = engine_at("/");
    let doc = engine.page_mut().document_mut();
    let input = doc.first_by_class("search-input").unwrap();
    doc.set_value(input, "coffee roasters");
    let form = doc.first_by_class("search-form").unwrap();

    let mut submit = Event::submit(form);
    engine.dispatch(&mut submit).unwrap();

    assert!(!submit.default_prevented);
    let nav = engine.take_navigation().expect("submission navigates");
    assert_eq!(nav.path(), "/search");
    assert_eq!(nav.query(), Some("q=coffee+roasters"));

    let button = engine
        .page()
        .document()
        .first_by_class("search-button")
        .unwrap();
    assert!(engine.page().document().has_class(button, "loading"));
}

/// A recognized transcript fills the input and submits once
#[test]
fn voice_transcript_fills_input_and_submits_exactly_once() {
    let mut mock = MockRecognizer::new();
    mock.expect_start()
        .times(1)
        .withf(|config, _| !config.continuous && !config.interim_results)
        .returning(|_, on_result| {
            on_result(TranscriptEvent::single("pizza near me", 0.95));
            Ok(())
        });

    let url = Url::parse("http://localhost:8080/").unwrap();
    let page = Page::from_html(SEARCH_PAGE, url).unwrap();
    let mut engine = PageEngine::new(page);
    engine.set_speech(Box::new(mock));
    engine.init();

    let control = engine
        .page()
        .document()
        .first_by_class("voice-search")
        .unwrap();
    let mut click = Event::click(control);
    engine.dispatch(&mut click).unwrap();
    engine.pump().unwrap();

    let input = engine
        .page()
        .document()
        .first_by_class("search-input")
        .unwrap();
    assert_eq!(engine.page().document().value(input), "pizza near me");
    assert_eq!(engine.navigation_count(), 1);
    assert_eq!(
        engine.take_navigation().unwrap().query(),
        Some("q=pizza+near+me")
    );

    // Nothing left pending, and no further submission shows up
    engine.pump().unwrap();
    assert_eq!(engine.navigation_count(), 1);
    assert!(engine.take_navigation().is_none());
}

/// Without the speech capability the click changes nothing
#[test]
fn voice_click_without_capability_changes_nothing() {
    let mut engine = engine_at("/");
    let control = engine
        .page()
        .document()
        .first_by_class("voice-search")
        .unwrap();

    let mut click = Event::click(control);
    engine.dispatch(&mut click).unwrap();
    engine.pump().unwrap();

    let input = engine
        .page()
        .document()
        .first_by_class("search-input")
        .unwrap();
    assert_eq!(engine.page().document().value(input), "");
    assert_eq!(engine.navigation_count(), 0);
}

/// Only items scrolled past 10% visibility are revealed
#[test]
fn reveal_marks_only_items_past_threshold() {
    let mut engine = engine_at("/");
    let viewport = SharedViewport::new();
    engine.set_viewport(Box::new(viewport.clone()));

    let mut ready = Event::dom_content_loaded();
    engine.dispatch(&mut ready).unwrap();
    assert_eq!(viewport.observed_count(), 3);

    let items = engine.page().document().all_by_class("result-item");
    viewport.scroll_to(items[0], 0.4);
    viewport.scroll_to(items[1], 0.05);
    engine.pump().unwrap();

    let doc = engine.page().document();
    assert!(doc.has_class(items[0], "visible"));
    assert!(!doc.has_class(items[1], "visible"));
    assert!(!doc.has_class(items[2], "visible"));

    // The stragglers get their marker once they cross the threshold too
    viewport.scroll_to(items[1], 0.1);
    viewport.scroll_to(items[2], 1.0);
    engine.pump().unwrap();
    let doc = engine.page().document();
    assert!(doc.has_class(items[1], "visible"));
    assert!(doc.has_class(items[2], "visible"));
}

/// The root path focuses the search input at init
#[test]
fn root_path_focuses_search_input() {
    let engine = engine_at("/");
    let input = engine.page().document().first_by_class("search-input");
    assert_eq!(engine.page().document().focused(), input);

    let engine = engine_at("/search");
    assert_eq!(engine.page().document().focused(), None);
}

/// Voice flow stacked on top of the guard: the programmatic submission
/// bypasses it, so no loading marker appears
#[test]
fn voice_submission_bypasses_submit_guard() {
    let url = Url::parse("http://localhost:8080/").unwrap();
    let page = Page::from_html(SEARCH_PAGE, url).unwrap();
    let mut engine = PageEngine::new(page);
    engine.set_speech(Box::new(ScriptedRecognizer::new("sushi")));
    engine.init();

    let control = engine
        .page()
        .document()
        .first_by_class("voice-search")
        .unwrap();
    engine.dispatch(&mut Event::click(control)).unwrap();
    engine.pump().unwrap();

    assert_eq!(engine.navigation_count(), 1);
    let button = engine
        .page()
        .document()
        .first_by_class("search-button")
        .unwrap();
    assert!(!engine.page().document().has_class(button, "loading"));
}

proptest! {
    /// No whitespace-only query ever navigates
    #[test]
    fn whitespace_queries_never_navigate(query in "[ \\t\\n\\r]{0,12}") {
        let mut engine = engine_at("/");
        let doc = engine.page_mut().document_mut();
        let input = doc.first_by_class("search-input").unwrap();
        doc.set_value(input, query);
        let form = doc.first_by_class("search-form").unwrap();

        let mut submit = Event::submit(form);
        engine.dispatch(&mut submit).unwrap();

        prop_assert!(submit.default_prevented);
        prop_assert_eq!(engine.navigation_count(), 0);
        prop_assert!(engine.page().document().has_class(input, "shake"));
    }

    /// Any query with substance navigates, carrying the raw value in `q`
    #[test]
    fn substantive_queries_navigate_with_query_pair(
        query in "[a-zA-Z0-9 ]{1,24}"
    ) {
        prop_assume!(!query.trim().is_empty());

        let mut engine = engine_at("/");
        let doc = engine.page_mut().document_mut();
        let input = doc.first_by_class("search-input").unwrap();
        doc.set_value(input, query.clone());
        let form = doc.first_by_class("search-form").unwrap();

        let mut submit = Event::submit(form);
        engine.dispatch(&mut submit).unwrap();

        prop_assert!(!submit.default_prevented);
        let nav = engine.take_navigation().expect("navigation recorded");
        let q = nav
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        prop_assert_eq!(q, Some(query));
    }
}
