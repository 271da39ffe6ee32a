//! Error types for the Glint engine

use thiserror::Error;

/// Main error type for Glint operations
#[derive(Debug, Error)]
pub enum GlintError {
    /// HTML parsing error
    #[error("parse error: {0}")]
    Parse(String),

    /// A capability failed while starting a capture session
    #[error("capability error: {0}")]
    Capability(String),

    /// Building the navigation target failed
    #[error("navigation error: {0}")]
    Navigation(#[from] url::ParseError),

    /// Invalid configuration value
    #[error("config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for Glint operations
pub type Result<T> = std::result::Result<T, GlintError>;
