//! Engine configuration
//!
//! Defaults carry the page-markup contract (marker class names) and the two
//! tuning constants the original page shipped with: the 820 ms shake reset
//! and the 10% reveal threshold. JSON overrides are partial; unknown keys are
//! ignored.

use crate::defaults;
use crate::utils::{GlintError, Result};
use serde_json::Value;

/// Class names the engine queries the page for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub search_form: String,
    pub search_input: String,
    pub search_button: String,
    pub voice_search: String,
    pub result_item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_form: "search-form".into(),
            search_input: "search-input".into(),
            search_button: "search-button".into(),
            voice_search: "voice-search".into(),
            result_item: "result-item".into(),
        }
    }
}

/// Class names the behaviors apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Transient invalid-submit signal
    pub shake: String,
    /// Applied to the submit button on a real submission
    pub loading: String,
    /// Persistent scroll-reveal state
    pub visible: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            shake: "shake".into(),
            loading: "loading".into(),
            visible: "visible".into(),
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Delay before the shake marker is removed, in milliseconds
    pub shake_reset_ms: u64,
    /// Visibility fraction at which a result item is revealed
    pub reveal_threshold: f32,
    pub selectors: Selectors,
    pub markers: Markers,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shake_reset_ms: defaults::SHAKE_RESET_MS,
            reveal_threshold: defaults::REVEAL_THRESHOLD,
            selectors: Selectors::default(),
            markers: Markers::default(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON, falling back to defaults per key
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let mut config = Self::default();

        if let Some(ms) = value.get("shake_reset_ms") {
            config.shake_reset_ms = ms
                .as_u64()
                .ok_or_else(|| GlintError::Config("shake_reset_ms must be an integer".into()))?;
        }
        if let Some(threshold) = value.get("reveal_threshold") {
            let threshold = threshold
                .as_f64()
                .ok_or_else(|| GlintError::Config("reveal_threshold must be a number".into()))?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(GlintError::Config(format!(
                    "reveal_threshold must be within 0..=1, got {}",
                    threshold
                )));
            }
            config.reveal_threshold = threshold as f32;
        }
        if let Some(selectors) = value.get("selectors") {
            read_str(selectors, "search_form", &mut config.selectors.search_form)?;
            read_str(selectors, "search_input", &mut config.selectors.search_input)?;
            read_str(selectors, "search_button", &mut config.selectors.search_button)?;
            read_str(selectors, "voice_search", &mut config.selectors.voice_search)?;
            read_str(selectors, "result_item", &mut config.selectors.result_item)?;
        }
        if let Some(markers) = value.get("markers") {
            read_str(markers, "shake", &mut config.markers.shake)?;
            read_str(markers, "loading", &mut config.markers.loading)?;
            read_str(markers, "visible", &mut config.markers.visible)?;
        }

        Ok(config)
    }
}

fn read_str(value: &Value, key: &str, slot: &mut String) -> Result<()> {
    if let Some(v) = value.get(key) {
        *slot = v
            .as_str()
            .ok_or_else(|| GlintError::Config(format!("{} must be a string", key)))?
            .to_string();
    }
    Ok(())
}
