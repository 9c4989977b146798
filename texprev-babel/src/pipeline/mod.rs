//! The translator: LaTeX resume markup → HTML fragment
//!
//!     The translator is a pure function over strings. No document tree is built; the
//!     source goes through an ordered chain of regex substitutions ([`rules::RULES`]) and
//!     a final line-oriented paragraph pass ([`paragraphs::wrap_paragraphs`]).
//!
//!     The translator is total: every input produces output. Constructs outside the fixed
//!     vocabulary ([`construct::Construct`]) are not rejected, they fall through to the
//!     paragraph pass as plain text, stray command tokens included.
//!
//!     With [`TranslateOptions::escape_html`] on (the default), `&`, `<` and `>` in the
//!     source are turned into entities before any rule runs, so the output can only contain
//!     the tags the rules generate.
//!
//!     [`trace`] runs the same chain but records the string after every step, which is
//!     what `texprev inspect` prints.

pub mod construct;
pub mod escape;
pub mod paragraphs;
pub mod rules;

pub use construct::Construct;
pub use escape::escape_html;
pub use paragraphs::{is_block_line, wrap_paragraphs, ClosingTagPolicy};
pub use rules::{Rule, RULES};

use log::{debug, trace as log_trace};
use serde::Serialize;

/// Knobs for a single translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Escape `&`, `<`, `>` in the source before the rule chain runs.
    pub escape_html: bool,
    /// Which closing tags keep a line out of a paragraph.
    pub closing_tags: ClosingTagPolicy,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            closing_tags: ClosingTagPolicy::BlockOnly,
        }
    }
}

impl TranslateOptions {
    /// Legacy previewer behavior: no escaping, and any closing
    /// tag marks a line as structured.
    pub fn compatible() -> Self {
        Self {
            escape_html: false,
            closing_tags: ClosingTagPolicy::Any,
        }
    }

    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    pub fn with_closing_tags(mut self, policy: ClosingTagPolicy) -> Self {
        self.closing_tags = policy;
        self
    }
}

/// Snapshot of the text after one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Step name: `input`, `escape-html`, a rule name, or `paragraphs`.
    pub name: String,
    /// Whether this step changed the text.
    pub changed: bool,
    pub output: String,
}

/// Translate markup to an HTML fragment with default options.
pub fn translate(markup: &str) -> String {
    translate_with_options(markup, &TranslateOptions::default())
}

/// Translate markup to an HTML fragment.
pub fn translate_with_options(markup: &str, options: &TranslateOptions) -> String {
    let mut text = if options.escape_html {
        escape_html(markup).into_owned()
    } else {
        markup.to_string()
    };

    for rule in RULES.iter() {
        if let std::borrow::Cow::Owned(rewritten) = rule.apply(&text) {
            log_trace!("rule '{}' rewrote the text", rule.name);
            text = rewritten;
        }
    }

    let html = wrap_paragraphs(&text, options.closing_tags);
    debug!(
        "translated {} bytes of markup into {} bytes of html",
        markup.len(),
        html.len()
    );
    html
}

/// Run the pipeline, recording the text after every step.
///
/// The last stage's output is exactly what [`translate_with_options`] returns.
pub fn trace(markup: &str, options: &TranslateOptions) -> Vec<Stage> {
    let mut stages = vec![Stage {
        name: "input".to_string(),
        changed: false,
        output: markup.to_string(),
    }];
    let mut text = markup.to_string();

    if options.escape_html {
        let escaped = escape_html(&text).into_owned();
        stages.push(stage("escape-html", &text, &escaped));
        text = escaped;
    }

    for rule in RULES.iter() {
        let rewritten = rule.apply(&text).into_owned();
        stages.push(stage(rule.name, &text, &rewritten));
        text = rewritten;
    }

    let html = wrap_paragraphs(&text, options.closing_tags);
    stages.push(stage("paragraphs", &text, &html));
    stages
}

fn stage(name: &str, before: &str, after: &str) -> Stage {
    Stage {
        name: name.to_string(),
        changed: before != after,
        output: after.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(translate(""), "");
    }

    #[test]
    fn whitespace_only_input() {
        assert_eq!(translate("   \n\t\n  "), "");
    }

    #[test]
    fn bold_and_italic_share_one_paragraph() {
        assert_eq!(
            translate(r"\textbf{Hi} \textit{there}"),
            "<p class=\"mb-2\"><strong>Hi</strong> <em>there</em></p>"
        );
    }

    #[test]
    fn bold_and_italic_in_compatible_mode() {
        assert_eq!(
            translate_with_options(r"\textbf{Hi} \textit{there}", &TranslateOptions::compatible()),
            "<strong>Hi</strong> <em>there</em>"
        );
    }

    #[test]
    fn escaped_percent() {
        assert_eq!(translate(r"50\%"), "<p class=\"mb-2\">50%</p>");
    }

    #[test]
    fn escape_toggle() {
        let src = "R&D <b>";
        assert_eq!(translate(src), "<p class=\"mb-2\">R&amp;D &lt;b&gt;</p>");
        assert_eq!(
            translate_with_options(src, &TranslateOptions::default().with_escape_html(false)),
            "<p class=\"mb-2\">R&D <b></p>"
        );
    }

    #[test]
    fn trace_ends_with_translation() {
        let src = "\\section*{Skills}\n\\textbf{Rust}\\\\";
        let options = TranslateOptions::default();
        let stages = trace(src, &options);
        assert_eq!(stages.first().map(|s| s.name.as_str()), Some("input"));
        assert_eq!(stages[1].name, "escape-html");
        let last = stages.last().unwrap();
        assert_eq!(last.name, "paragraphs");
        assert_eq!(last.output, translate_with_options(src, &options));
        assert_eq!(stages.len(), RULES.len() + 3);
    }

    #[test]
    fn trace_marks_changed_stages() {
        let stages = trace(r"\section*{Skills}", &TranslateOptions::compatible());
        let changed: Vec<_> = stages
            .iter()
            .filter(|s| s.changed)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(changed, vec!["section"]);
    }
}
