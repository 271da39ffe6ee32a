//! Glint - Search-Page Interaction Engine
//!
//! Demo binary: loads a built-in search page and walks the three behaviors
//! through a scripted session.

use glint::capability::{ScriptedRecognizer, SharedViewport};
use glint::{Event, Page, PageEngine, NAME, VERSION};
use url::Url;

const DEMO_PAGE: &str = r#"<html><body>
    <form class="search-form" action="/search">
        <input class="search-input" type="text" name="q" placeholder="Search...">
        <button class="search-button" type="submit">Search</button>
    </form>
    <span class="voice-search">mic</span>
    <div class="result-item">Result one</div>
    <div class="result-item">Result two</div>
    <div class="result-item">Result three</div>
</body></html>"#;

fn main() {
    env_logger::init();

    println!("🔍 {} v{} - Search-Page Interaction Engine", NAME, VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if let Err(e) = run_demo() {
        eprintln!("❌ Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run_demo() -> glint::Result<()> {
    let location = Url::parse("http://localhost:8080/").expect("demo URL is valid");
    let page = Page::from_html(DEMO_PAGE, location)?;

    let mut engine = PageEngine::new(page);
    engine.set_speech(Box::new(ScriptedRecognizer::new("pizza near me")));

    let viewport = SharedViewport::new();
    engine.set_viewport(Box::new(viewport.clone()));
    let items = engine.page().document().all_by_class("result-item");

    engine.init();
    println!(
        "✅ Page initialized, search input focused: {}",
        engine.page().document().focused().is_some()
    );

    // DOM-ready arms the reveal animator; then scroll the first item in
    let mut ready = Event::dom_content_loaded();
    engine.dispatch(&mut ready)?;
    viewport.scroll_to(items[0], 0.5);
    engine.pump()?;
    let doc = engine.page().document();
    println!(
        "👁  Revealed items: {}/{}",
        items.iter().filter(|i| doc.has_class(**i, "visible")).count(),
        items.len()
    );

    // An empty submit shakes instead of navigating
    let form = doc.first_by_class("search-form").expect("demo page has a form");
    let input = doc.first_by_class("search-input").expect("demo page has an input");
    let mut submit = Event::submit(form);
    engine.dispatch(&mut submit)?;
    println!(
        "🚫 Empty submit prevented: {}, shaking: {}",
        submit.default_prevented,
        engine.page().document().has_class(input, "shake")
    );

    // A voice query fills the input and navigates
    let control = engine
        .page()
        .document()
        .first_by_class("voice-search")
        .expect("demo page has a voice control");
    let mut click = Event::click(control);
    engine.dispatch(&mut click)?;
    engine.pump()?;
    println!(
        "🎤 Voice query: {:?}",
        engine.page().document().value(input)
    );
    match engine.take_navigation() {
        Some(url) => println!("➡  Navigating to {}", url),
        None => println!("➡  No navigation recorded"),
    }

    Ok(())
}
