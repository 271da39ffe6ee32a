//! Element-level page model
//!
//! An arena of elements with stable ids. Text and comment nodes are not
//! retained: the interaction behaviors only touch element attributes, class
//! membership, input values, and focus, so an attribute-level view of the
//! markup is sufficient.

use std::collections::HashMap;

/// Handle for an element in the document arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// A single element: tag name, attributes, tree links
#[derive(Debug, Clone)]
struct Element {
    /// Tag name (e.g., "form", "input")
    tag_name: String,
    /// Element attributes
    attributes: HashMap<String, String>,
    /// Parent element, if any
    parent: Option<ElementId>,
    /// Child elements in document order
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The page document: an element arena plus focus state
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    /// Root elements (usually just <html>)
    roots: Vec<ElementId>,
    /// At most one element holds focus
    focused: Option<ElementId>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag_name));
        id
    }

    /// Append a detached element as the last child of a parent
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    /// Append a detached element as a document root
    pub fn append_root(&mut self, child: ElementId) {
        self.roots.push(child);
    }

    /// Get an element's tag name
    pub fn tag_name(&self, id: ElementId) -> &str {
        &self.elements[id.0].tag_name
    }

    /// Get an element's parent
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    /// Get an element's children in document order
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.0].children
    }

    /// Get an attribute value
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attributes.get(name).map(String::as_str)
    }

    /// Set an attribute value
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.elements[id.0]
            .attributes
            .insert(name.into(), value.into());
    }

    /// Get an input's current value (empty string when unset)
    pub fn value(&self, id: ElementId) -> &str {
        self.attribute(id, "value").unwrap_or("")
    }

    /// Set an input's value
    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.set_attribute(id, "value", value);
    }

    /// Class names of an element
    pub fn classes(&self, id: ElementId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Check class membership
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.classes(id).contains(&class)
    }

    /// Add a class to an element (no duplicates)
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let joined = match self.attribute(id, "class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", joined);
    }

    /// Remove a class from an element
    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        let remaining: Vec<&str> = self
            .classes(id)
            .into_iter()
            .filter(|c| *c != class)
            .collect();
        let joined = remaining.join(" ");
        self.set_attribute(id, "class", joined);
    }

    /// Move focus to an element
    pub fn focus(&mut self, id: ElementId) {
        self.focused = Some(id);
    }

    /// Clear focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The currently focused element, if any
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// All element ids in document order (depth-first)
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            for child in self.children(id).iter().rev() {
                stack.push(*child);
            }
        }
        order.into_iter()
    }

    /// First element in document order carrying a class
    pub fn first_by_class(&self, class: &str) -> Option<ElementId> {
        self.iter().find(|id| self.has_class(*id, class))
    }

    /// All elements in document order carrying a class
    pub fn all_by_class(&self, class: &str) -> Vec<ElementId> {
        self.iter().filter(|id| self.has_class(*id, class)).collect()
    }

    /// First descendant of a subtree carrying a class (the root itself excluded)
    pub fn descendant_by_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.descendants(root).find(|id| self.has_class(*id, class))
    }

    /// First descendant `input` with a given `name` attribute
    pub fn descendant_input_named(&self, root: ElementId, name: &str) -> Option<ElementId> {
        self.descendants(root)
            .find(|id| self.tag_name(*id) == "input" && self.attribute(*id, "name") == Some(name))
    }

    /// Nearest enclosing `form` ancestor of an element
    pub fn enclosing_form(&self, id: ElementId) -> Option<ElementId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.tag_name(ancestor) == "form" {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    fn descendants(&self, root: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let mut order = Vec::new();
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            for child in self.children(id).iter().rev() {
                stack.push(*child);
            }
        }
        order.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let html = doc.create_element("html");
        doc.append_root(html);
        let form = doc.create_element("form");
        doc.set_attribute(form, "class", "search-form");
        doc.append_child(html, form);
        let input = doc.create_element("input");
        doc.set_attribute(input, "name", "q");
        doc.set_attribute(input, "class", "search-input");
        doc.append_child(form, input);
        let button = doc.create_element("button");
        doc.set_attribute(button, "class", "search-button");
        doc.append_child(form, button);
        (doc, form, input, button)
    }

    #[test]
    fn test_class_membership() {
        let (mut doc, _, input, _) = sample();
        assert!(doc.has_class(input, "search-input"));
        assert!(!doc.has_class(input, "shake"));

        doc.add_class(input, "shake");
        assert!(doc.has_class(input, "shake"));
        assert!(doc.has_class(input, "search-input"));

        // Adding again is a no-op
        doc.add_class(input, "shake");
        assert_eq!(doc.classes(input), vec!["search-input", "shake"]);

        doc.remove_class(input, "shake");
        assert!(!doc.has_class(input, "shake"));
        assert!(doc.has_class(input, "search-input"));
    }

    #[test]
    fn test_document_order_queries() {
        let (doc, form, input, button) = sample();
        assert_eq!(doc.first_by_class("search-form"), Some(form));
        assert_eq!(doc.first_by_class("search-input"), Some(input));
        assert_eq!(doc.first_by_class("missing"), None);
        assert_eq!(doc.descendant_by_class(form, "search-button"), Some(button));
        assert_eq!(doc.descendant_input_named(form, "q"), Some(input));
        assert_eq!(doc.descendant_input_named(form, "page"), None);
    }

    #[test]
    fn test_enclosing_form() {
        let (doc, form, input, _) = sample();
        assert_eq!(doc.enclosing_form(input), Some(form));
        assert_eq!(doc.enclosing_form(form), None);
    }

    #[test]
    fn test_value_and_focus() {
        let (mut doc, _, input, _) = sample();
        assert_eq!(doc.value(input), "");
        doc.set_value(input, "rust arena allocator");
        assert_eq!(doc.value(input), "rust arena allocator");

        assert_eq!(doc.focused(), None);
        doc.focus(input);
        assert_eq!(doc.focused(), Some(input));
        doc.blur();
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn test_all_by_class_in_order() {
        let mut doc = Document::new();
        let body = doc.create_element("body");
        doc.append_root(body);
        let mut items = Vec::new();
        for _ in 0..3 {
            let item = doc.create_element("div");
            doc.set_attribute(item, "class", "result-item");
            doc.append_child(body, item);
            items.push(item);
        }
        assert_eq!(doc.all_by_class("result-item"), items);
    }
}
