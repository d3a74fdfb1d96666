//! hiccup-core - Element tree and Hiccup serialization
//!
//! This crate provides the element tree and the serializer that writes it as
//! Hiccup notation, the nested-vector markup used by Clojure libraries such as
//! hiccup and reagent. It is used by `html2hiccup`, which builds the tree from
//! HTML.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──scraper──▶ ┌──────────────┐
//!                          │              │
//!                          │ Element tree │ ──▶ Hiccup String
//! Hand-built tree ────────▶│              │
//!                          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use hiccup_core::{to_hiccup, Element, Options};
//!
//! let list = Element::with_attrs("ul", vec![("class", "menu")])
//!     .child(Element::new("li").child("a"))
//!     .child(Element::new("li").child("b"));
//!
//! let hiccup = to_hiccup(&list, &Options::default()).unwrap();
//! assert_eq!(hiccup, r#"[ul.menu [li "a"] [li "b"]]"#);
//! ```

mod ast;
mod escape;
mod options;
mod serialize;

pub use ast::{class_segments, is_blank_text, Attributes, Element, Node};
pub use escape::{escape_string, push_quoted, unescape_string};
pub use options::Options;
pub use serialize::{
    format_attributes, format_children, format_tag_header, to_hiccup, uses_class_shorthand,
};

/// Error type for Hiccup serialization
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Element has an empty tag name")]
    EmptyTag,

    #[error("Element nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Invalid escape sequence {sequence:?} at byte {offset}")]
    InvalidEscape { offset: usize, sequence: String },
}

pub type Result<T> = std::result::Result<T, Error>;
