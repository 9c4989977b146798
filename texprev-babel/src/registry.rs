//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available output formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::{Format, FormatOptions};
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.render(r"\section*{Skills}", "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect the output format from a filename's extension.
    ///
    /// When several formats share an extension the alphabetically first wins, so `.html`
    /// resolves to `html` rather than `html-page`.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.list_formats().into_iter().find(|name| {
            self.formats
                .get(name)
                .is_some_and(|f| f.file_extensions().contains(&extension))
        })
    }

    /// Render markup using the specified format
    pub fn render(&self, source: &str, format: &str) -> Result<String, FormatError> {
        self.get(format)?.render(source)
    }

    /// Render markup using the specified format and options
    pub fn render_with_options(
        &self,
        source: &str,
        format: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        self.get(format)?.render_with_options(source, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat::fragment());
        registry.register(crate::formats::html::HtmlFormat::page());
        registry.register(crate::formats::trace::TraceFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
