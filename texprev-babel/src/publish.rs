//! Document publishing pipeline.
//!
//! One call that picks a format from the registry, renders the markup and, when an output
//! path is given, writes the result to disk. The CLI's `convert` command goes through
//! [`publish_with_registry`].
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::format::FormatOptions;
use crate::registry::FormatRegistry;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&source, "html-page")
///     .with_output_path("resume.html")
///     .with_option("title", "Jane Doe");
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The markup to convert.
    pub source: &'a str,
    /// Target format name (e.g., "html", "html-page").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options.
    pub options: FormatOptions,
}

impl<'a> PublishSpec<'a> {
    /// Creates a new publish request for the given markup and format.
    pub fn new(source: &'a str, format: &'a str) -> Self {
        Self {
            source,
            format,
            output: None,
            options: FormatOptions::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds several format-specific options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes markup as described by `spec`, using the default registry.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown, an option is rejected, or the
/// output file cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with_registry(&FormatRegistry::with_defaults(), spec)
}

/// Like [`publish`], with a caller-provided registry.
pub fn publish_with_registry(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let rendered = registry.render_with_options(spec.source, spec.format, &spec.options)?;
    let artifact = match spec.output {
        Some(path) => {
            fs::write(&path, rendered.as_bytes())?;
            info!("wrote {} bytes of {} to {}", rendered.len(), spec.format, path.display());
            PublishArtifact::File(path)
        }
        None => PublishArtifact::InMemory(rendered),
    };
    Ok(PublishResult { artifact })
}
