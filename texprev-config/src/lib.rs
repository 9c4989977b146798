//! Shared configuration loader for the texprev toolchain.
//!
//! `defaults/texprev.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TexprevConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use texprev_babel::pipeline::{ClosingTagPolicy, TranslateOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/texprev.default.toml");

/// Name of the project-level configuration file picked up from the working directory.
pub const PROJECT_CONFIG_FILE: &str = "texprev.toml";

/// Top-level configuration consumed by texprev applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TexprevConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub escape: bool,
    pub closing_tags: ClosingTags,
    pub standalone: bool,
    pub title: String,
    /// Path to a stylesheet; empty means none.
    pub custom_css: String,
}

impl HtmlConfig {
    pub fn custom_css_path(&self) -> Option<&str> {
        let path = self.custom_css.trim();
        (!path.is_empty()).then_some(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingTags {
    Block,
    Any,
}

impl From<ClosingTags> for ClosingTagPolicy {
    fn from(value: ClosingTags) -> Self {
        match value {
            ClosingTags::Block => ClosingTagPolicy::BlockOnly,
            ClosingTags::Any => ClosingTagPolicy::Any,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub changed_only: bool,
}

impl TexprevConfig {
    /// Translator options described by `[convert.html]`.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions::default()
            .with_escape_html(self.convert.html.escape)
            .with_closing_tags(self.convert.html.closing_tags.into())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TexprevConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TexprevConfig, ConfigError> {
    Loader::new().build()
}
