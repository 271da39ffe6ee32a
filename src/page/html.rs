//! HTML parsing into the page model, using html5ever
//!
//! Parses markup into an `RcDom` and walks it into the element arena.
//! html5ever recovers from malformed markup, so anything a browser would
//! render produces a usable document.

use super::dom::{Document, ElementId};
use crate::utils::{GlintError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML string into a page `Document`
pub fn parse(content: &str) -> Result<Document> {
    let mut document = Document::new();
    if content.trim().is_empty() {
        return Ok(document);
    }

    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut content.as_bytes())
        .map_err(|e| GlintError::Parse(e.to_string()))?;

    for child in dom.document.children.borrow().iter() {
        convert(child, None, &mut document);
    }

    Ok(document)
}

/// Walk one rcdom node into the arena, recursing through children
fn convert(handle: &Handle, parent: Option<ElementId>, document: &mut Document) {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let id = document.create_element(name.local.to_string());
            for attr in attrs.borrow().iter() {
                document.set_attribute(id, attr.name.local.to_string(), attr.value.to_string());
            }
            match parent {
                Some(p) => document.append_child(p, id),
                None => document.append_root(id),
            }
            for child in handle.children.borrow().iter() {
                convert(child, Some(id), document);
            }
        }
        // Text, comments, and doctypes carry nothing the behaviors read
        _ => {
            for child in handle.children.borrow().iter() {
                convert(child, parent, document);
            }
        }
    }
}
