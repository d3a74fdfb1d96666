//! Configuration file support for the html2hiccup CLI
//!
//! Loads settings from a `.html2hiccup.toml` configuration file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use html2hiccup::Scope;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".html2hiccup.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Conversion settings
    pub convert: ConvertConfig,
}

/// Conversion settings
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Fold `class` into the tag when possible (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_shorthand: Option<bool>,
    /// Which part of the input to convert (default: "first")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeArg>,
    /// Maximum element nesting depth (default: unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Scope as written on the command line and in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeArg {
    /// First top-level element
    First,
    /// Every top-level element, one per line
    All,
    /// Whole document, starting at `html`
    Document,
}

impl From<ScopeArg> for Scope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::First => Scope::FirstElement,
            ScopeArg::All => Scope::AllElements,
            ScopeArg::Document => Scope::Document,
        }
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `.html2hiccup.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }
}
