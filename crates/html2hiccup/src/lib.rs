//! # html2hiccup
//!
//! Convert HTML to Hiccup notation.
//!
//! Hiccup represents an element as a vector: the tag (with `#id` and `.class`
//! shorthand folded in), an optional attribute map, then the children.
//! `<div id="main" class="a b"><p>Hi</p></div>` becomes
//! `[div#main.a.b [p "Hi"]]`.
//!
//! ## Design
//!
//! The serializer in `hiccup-core` works on a plain element tree, so:
//!
//! - **Parser agnostic**: Any HTML parser can build the tree
//! - **Zero parsing overhead**: Trees built in code skip parsing entirely
//! - **Optional parser**: scraper is only pulled in by the `html` feature
//!
//! ## Example (Element-based)
//!
//! ```rust
//! use html2hiccup::{Element, HiccupService};
//!
//! let service = HiccupService::new();
//!
//! let h1 = Element::with_attrs("h1", vec![("id", "title")]).child("Hello World");
//!
//! let hiccup = service.convert(&h1).unwrap();
//! assert_eq!(hiccup, r#"[h1#title "Hello World"]"#);
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use html2hiccup::HiccupService;
//!
//! let service = HiccupService::new();
//! let hiccup = service.convert_html("<h1>Hello World</h1>").unwrap();
//! assert_eq!(hiccup, r#"[h1 "Hello World"]"#);
//! ```

#[cfg(feature = "html")]
pub mod html;
mod service;

pub use hiccup_core::{
    class_segments, escape_string, unescape_string, Attributes, Element, Node,
};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_html};
pub use service::{HiccupOptions, HiccupService, Scope};

/// Error type for html2hiccup operations
#[derive(Debug, thiserror::Error)]
pub enum HiccupError {
    #[error("Conversion error: {0}")]
    Notation(#[from] hiccup_core::Error),

    #[error("Input contains no element to convert")]
    NoElement,
}

pub type Result<T> = std::result::Result<T, HiccupError>;
