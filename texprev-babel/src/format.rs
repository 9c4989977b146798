//! Format trait definition
//!
//! A format turns resume markup into one output representation. All formats share the
//! translator pipeline; they differ in what they do with its result (emit the fragment,
//! wrap it into a page, list the intermediate stages).

use crate::error::FormatError;
use std::collections::HashMap;

/// Options passed to [`Format::render_with_options`], keyed by option name.
pub type FormatOptions = HashMap<String, String>;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, source: &str) -> Result<String, FormatError> {
///         Ok(texprev_babel::translate(source).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "trace")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Option keys accepted by [`Format::render_with_options`].
    fn option_keys(&self) -> &[&str] {
        &[]
    }

    /// Render markup with the format's defaults.
    fn render(&self, source: &str) -> Result<String, FormatError>;

    /// Render markup, optionally using extra parameters.
    ///
    /// The default implementation only accepts an empty option map.
    fn render_with_options(
        &self,
        source: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reject option keys a format does not know.
pub fn check_option_keys(format: &dyn Format, options: &FormatOptions) -> Result<(), FormatError> {
    let allowed = format.option_keys();
    let mut unknown: Vec<_> = options
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(FormatError::NotSupported(format!(
        "Format '{}' does not accept option(s): {}",
        format.name(),
        unknown.join(", ")
    )))
}

/// Interpret a boolean option value.
pub fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
