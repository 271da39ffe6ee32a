//! Page model: element arena, HTML parsing, location
//!
//! The behaviors never see a global document; they operate on a `Page` built
//! from markup plus explicit element references resolved against it.

mod dom;
pub mod html;

pub use dom::{Document, ElementId};

use crate::utils::Result;
use url::Url;

/// A loaded page: the parsed document plus its location
#[derive(Debug, Clone)]
pub struct Page {
    /// The element-level document
    document: Document,
    /// The page URL
    location: Url,
}

impl Page {
    /// Create a page from an already-built document
    pub fn new(document: Document, location: Url) -> Self {
        Self { document, location }
    }

    /// Parse markup into a page at a location
    pub fn from_html(content: &str, location: Url) -> Result<Self> {
        Ok(Self::new(html::parse(content)?, location))
    }

    /// Get the document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the document mutably
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Get the page location
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Path component of the location ("/" on the home page)
    pub fn path(&self) -> &str {
        self.location.path()
    }
}
