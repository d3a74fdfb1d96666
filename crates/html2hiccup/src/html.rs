//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts the result to the
//! element tree used by hiccup-core. Comments, doctypes and processing
//! instructions are dropped; only elements and text survive.

use hiccup_core::{Element, Node};
use scraper::{ElementRef, Html, Node as ScraperNode};

/// Parse an HTML fragment into an element tree.
///
/// The parser wraps the fragment in an implicit `html` element, which is what
/// this returns. Its element children are the top-level elements of the input.
///
/// # Example
///
/// ```rust
/// use html2hiccup::parse_html;
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(root.tag, "html");
/// assert_eq!(root.element_children().next().unwrap().tag, "h1");
/// ```
pub fn parse_html(html: &str) -> Element {
    let fragment = Html::parse_fragment(html);
    scraper_to_element(fragment.root_element())
}

/// Parse a complete HTML document into an element tree rooted at `html`.
///
/// Missing `head` and `body` elements are inserted by the parser.
pub fn parse_document(html: &str) -> Element {
    let document = Html::parse_document(html);
    scraper_to_element(document.root_element())
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef) -> Element {
    let mut node = Element::with_attrs(element.value().name(), element.value().attrs().collect());

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
