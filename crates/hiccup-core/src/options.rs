//! Configuration options for Hiccup serialization

/// Options for Hiccup serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Fold the `class` attribute into the tag (`div.a.b`) when possible.
    /// Classes containing `/` always stay in the attribute map.
    pub class_shorthand: bool,

    /// Maximum element nesting depth. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            class_shorthand: true,
            max_depth: None,
        }
    }
}

impl Options {
    /// Default options with the class shorthand switched on or off
    pub fn with_class_shorthand(class_shorthand: bool) -> Self {
        Self {
            class_shorthand,
            ..Self::default()
        }
    }
}
