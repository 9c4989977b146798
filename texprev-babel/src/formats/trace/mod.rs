//! Pipeline trace format
//!
//! Lists the text after every step of the translator, one section per step:
//!
//! ```text
//! == [03] page-style (changed)
//! <text after the rule>
//! ```
//!
//! Used by `texprev inspect` to debug why a construct did or did not convert.

use crate::error::FormatError;
use crate::format::{check_option_keys, parse_bool_option, Format, FormatOptions};
use crate::formats::html::parse_closing_tags;
use crate::pipeline::{trace, Stage, TranslateOptions};

/// Options for trace rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceOptions {
    pub translate: TranslateOptions,
    /// Skip steps that left the text unchanged
    pub changed_only: bool,
}

/// Format implementation for pipeline traces
#[derive(Debug, Clone, Default)]
pub struct TraceFormat {
    options: TraceOptions,
}

impl TraceFormat {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }
}

/// Render stages as plain text.
pub fn render_stages(stages: &[Stage], changed_only: bool) -> String {
    let mut out = String::new();
    for (index, stage) in stages.iter().enumerate() {
        // the input is always shown so the listing has a starting point
        if changed_only && index > 0 && !stage.changed {
            continue;
        }
        let marker = if stage.changed { " (changed)" } else { "" };
        out.push_str(&format!("== [{index:02}] {}{marker}\n", stage.name));
        out.push_str(&stage.output);
        if !stage.output.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

impl Format for TraceFormat {
    fn name(&self) -> &str {
        "trace"
    }

    fn description(&self) -> &str {
        "Text after every translator step"
    }

    fn file_extensions(&self) -> &[&str] {
        &["trace"]
    }

    fn option_keys(&self) -> &[&str] {
        &["escape", "closing-tags", "changed-only"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        let stages = trace(source, &self.options.translate);
        Ok(render_stages(&stages, self.options.changed_only))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        check_option_keys(self, options)?;
        let mut merged = self.options;
        if let Some(raw) = options.get("escape") {
            merged.translate.escape_html = parse_bool_option("escape", raw)?;
        }
        if let Some(raw) = options.get("closing-tags") {
            merged.translate.closing_tags = parse_closing_tags(raw)?;
        }
        if let Some(raw) = options.get("changed-only") {
            merged.changed_only = parse_bool_option("changed-only", raw)?;
        }
        TraceFormat::new(merged).render(source)
    }
}
