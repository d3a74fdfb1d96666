//! Element tree
//!
//! This module defines the read-only tree the serializer walks. Any HTML parser
//! can build it; `html2hiccup` builds it from scraper.

use indexmap::IndexMap;

/// Ordered attribute mapping. Keys are unique and keep insertion order.
pub type Attributes = IndexMap<String, String>;

/// A child of an element: either raw text or a nested element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text fragment
    Text(String),

    /// Nested element
    Element(Element),
}

/// An element with a tag, ordered attributes and ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, in the case the parser supplied it
    pub tag: String,

    /// Attributes in document order
    pub attributes: Attributes,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element without attributes or children
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element with attributes
    pub fn with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        let attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            tag: tag.to_string(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Element::add_child`]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(element, out),
        }
    }
}

impl Node {
    /// Create a text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create an element node without attributes or children
    pub fn element(tag: &str) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Text that is empty or only HTML whitespace. Elements are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Text(text) => is_blank_text(text),
            Node::Element(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// Empty or only HTML whitespace (space, tab, LF, FF, CR).
/// U+00A0 and other Unicode spaces are content.
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_whitespace())
}

/// Split a class attribute into its tokens on HTML whitespace
pub fn class_segments(class: &str) -> impl Iterator<Item = &str> {
    class
        .split(|c: char| c.is_ascii_whitespace())
        .filter(|segment| !segment.is_empty())
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}
