//! HiccupService - the main entry point for HTML to Hiccup conversion.

use std::fmt;

use hiccup_core::{to_hiccup, Element};

#[cfg(feature = "html")]
use crate::html::{parse_document, parse_html};
use crate::{HiccupError, Result};

// Re-export options from core
pub use hiccup_core::Options as HiccupOptions;

/// Which part of the parsed input gets converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The first top-level element of the fragment
    #[default]
    FirstElement,
    /// Every top-level element of the fragment, one per line
    AllElements,
    /// The whole document, starting at `html`
    Document,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::FirstElement => "first",
            Scope::AllElements => "all",
            Scope::Document => "document",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main service for converting HTML to Hiccup
#[derive(Debug, Clone, Default)]
pub struct HiccupService {
    options: HiccupOptions,
    scope: Scope,
}

impl HiccupService {
    /// Create a new HiccupService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a HiccupService with custom options
    pub fn with_options(options: HiccupOptions) -> Self {
        Self {
            options,
            scope: Scope::default(),
        }
    }

    /// Set which part of parsed HTML gets converted
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Convert an element tree to Hiccup
    pub fn convert(&self, element: &Element) -> Result<String> {
        Ok(to_hiccup(element, &self.options)?)
    }

    /// Parse HTML and convert the part selected by the scope to Hiccup
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let _span = tracing::debug_span!("convert_html", scope = %self.scope).entered();
        tracing::debug!(bytes = html.len(), "parsing HTML");

        let output = match self.scope {
            Scope::FirstElement => {
                let root = parse_html(html);
                let Some(first) = root.element_children().next() else {
                    tracing::warn!("input contains no element");
                    return Err(HiccupError::NoElement);
                };
                self.convert(first)?
            }
            Scope::AllElements => {
                let root = parse_html(html);
                let converted = root
                    .element_children()
                    .map(|element| self.convert(element))
                    .collect::<Result<Vec<_>>>()?;
                if converted.is_empty() {
                    tracing::warn!("input contains no element");
                }
                converted.join("\n")
            }
            Scope::Document => self.convert(&parse_document(html))?,
        };

        tracing::debug!(bytes = output.len(), "HTML converted to hiccup");
        Ok(output)
    }

    /// Get the current options
    pub fn options(&self) -> &HiccupOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut HiccupOptions {
        &mut self.options
    }

    /// Get the current scope
    pub fn scope(&self) -> Scope {
        self.scope
    }
}
