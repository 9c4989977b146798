//! HTML format implementation
//!
//! Converts resume markup to HTML through the translator pipeline.
//!
//! # Outputs
//!
//! - `html`: the bare fragment, meant to be injected into an existing page (the live
//!   preview pane). This is exactly [`crate::translate_with_options`].
//! - `html-page`: a self-contained HTML5 document with the preview stylesheet embedded,
//!   suitable for opening in a browser or printing.
//!
//! # Element Mapping
//!
//! | Markup                       | HTML                                               |
//! |------------------------------|----------------------------------------------------|
//! | `\begin{center}..\end{center}` | `<div class="text-center mb-6">`                 |
//! | `{\LARGE \textbf{..}}`       | `<h1 class="text-3xl font-bold">`                  |
//! | `{\large ..}`                | `<h2 class="text-xl mt-2">`                        |
//! | `\section*{..}`              | `<h3 class="... border-b-2 border-gray-300 pb-1">` |
//! | `\textbf{..}` / `\textit{..}`| `<strong>` / `<em>`                                |
//! | `itemize` / `\item`          | `<ul class="list-disc mb-3">` / `<li class="ml-6 mb-1">` |
//! | `\hfill`                     | `<span class="float-right"></span>`                |
//! | `\\`, `\\[len]`              | `<br>`                                             |
//! | loose text line              | `<p class="mb-2">`                                 |
//!
//! The class names are utility classes; `css/preview.css` defines each of them so a page
//! renders without any external framework.
//!
//! # Options
//!
//! - `escape`: escape `&`, `<`, `>` in the source (default `true`)
//! - `closing-tags`: `block` (default) or `any`, see [`ClosingTagPolicy`]
//! - `standalone`: wrap the fragment into a full page
//! - `title`: page title for standalone output
//! - `css`: extra stylesheet text appended after the preview stylesheet

mod document;

pub use document::{get_default_css, wrap_in_document};

use crate::error::FormatError;
use crate::format::{check_option_keys, parse_bool_option, Format, FormatOptions};
use crate::pipeline::{translate_with_options, ClosingTagPolicy, TranslateOptions};

pub const DEFAULT_TITLE: &str = "Resume Preview";

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    pub translate: TranslateOptions,
    /// Emit a complete document instead of a fragment
    pub standalone: bool,
    pub title: String,
    /// Optional CSS appended after the preview stylesheet
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            translate: TranslateOptions::default(),
            standalone: false,
            title: DEFAULT_TITLE.to_string(),
            custom_css: None,
        }
    }
}

impl HtmlOptions {
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    /// Layer string options (as passed on the command line) over these options.
    pub fn merged(&self, options: &FormatOptions) -> Result<Self, FormatError> {
        let mut merged = self.clone();
        if let Some(raw) = options.get("escape") {
            merged.translate.escape_html = parse_bool_option("escape", raw)?;
        }
        if let Some(raw) = options.get("closing-tags") {
            merged.translate.closing_tags = parse_closing_tags(raw)?;
        }
        if let Some(raw) = options.get("standalone") {
            merged.standalone = parse_bool_option("standalone", raw)?;
        }
        if let Some(title) = options.get("title") {
            merged.title = title.clone();
        }
        if let Some(css) = options.get("css") {
            merged.custom_css = (!css.is_empty()).then(|| css.clone());
        }
        Ok(merged)
    }
}

/// Parse a `closing-tags` option value.
pub fn parse_closing_tags(raw: &str) -> Result<ClosingTagPolicy, FormatError> {
    match raw {
        "block" => Ok(ClosingTagPolicy::BlockOnly),
        "any" => Ok(ClosingTagPolicy::Any),
        other => Err(FormatError::InvalidOption {
            key: "closing-tags".to_string(),
            value: other.to_string(),
        }),
    }
}

/// Render markup to HTML with the given options.
pub fn render_html(source: &str, options: &HtmlOptions) -> String {
    let fragment = translate_with_options(source, &options.translate);
    if options.standalone {
        wrap_in_document(&fragment, &options.title, options.custom_css.as_deref())
    } else {
        fragment
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// The bare fragment format (`html`)
    pub fn fragment() -> Self {
        Self::default()
    }

    /// The standalone page format (`html-page`)
    pub fn page() -> Self {
        Self::new(HtmlOptions::standalone())
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        if self.options.standalone {
            "html-page"
        } else {
            "html"
        }
    }

    fn description(&self) -> &str {
        if self.options.standalone {
            "Standalone HTML5 page with embedded preview CSS"
        } else {
            "HTML fragment for a live preview pane"
        }
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn option_keys(&self) -> &[&str] {
        &["escape", "closing-tags", "standalone", "title", "css"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(render_html(source, &self.options))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        check_option_keys(self, options)?;
        let merged = self.options.merged(options)?;
        Ok(render_html(source, &merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> FormatOptions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fragment_and_page_names() {
        assert_eq!(HtmlFormat::fragment().name(), "html");
        assert_eq!(HtmlFormat::page().name(), "html-page");
    }

    #[test]
    fn fragment_is_the_translation() {
        let html = HtmlFormat::fragment().render(r"\section*{Skills}").unwrap();
        assert!(html.starts_with("<h3 "));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn standalone_option_wraps_page() {
        let html = HtmlFormat::fragment()
            .render_with_options("Hello", &opts(&[("standalone", "true"), ("title", "CV")]))
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>CV</title>"));
        assert!(html.contains("<p class=\"mb-2\">Hello</p>"));
    }

    #[test]
    fn escape_option() {
        let html = HtmlFormat::fragment()
            .render_with_options("a<b", &opts(&[("escape", "false")]))
            .unwrap();
        assert_eq!(html, "<p class=\"mb-2\">a<b</p>");
    }

    #[test]
    fn closing_tags_option() {
        let html = HtmlFormat::fragment()
            .render_with_options(r"\textbf{A}", &opts(&[("closing-tags", "any")]))
            .unwrap();
        assert_eq!(html, "<strong>A</strong>");
        assert!(matches!(
            HtmlFormat::fragment().render_with_options("x", &opts(&[("closing-tags", "some")])),
            Err(FormatError::InvalidOption { .. })
        ));
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(matches!(
            HtmlFormat::fragment().render_with_options("x", &opts(&[("theme", "dark")])),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn empty_css_clears_custom_css() {
        let base = HtmlOptions::standalone().with_custom_css("p { color: red; }");
        let merged = base.merged(&opts(&[("css", "")])).unwrap();
        assert_eq!(merged.custom_css, None);
    }
}
