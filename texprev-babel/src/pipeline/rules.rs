//! The ordered rule chain
//!
//!     Each rule is a whole-string regex substitution. The chain runs top to bottom, each
//!     rule consuming the previous rule's output. Order is load-bearing:
//!
//!     - Preamble and document-boundary removal runs first so deleted text can never feed
//!       a later pattern.
//!     - The heading rules run before the generic bold rule, as `{\LARGE \textbf{..}}`
//!       would otherwise lose its outer group to `\textbf`.
//!     - The spaced line break (`\\[len]`) runs before the plain one, otherwise the bracket
//!       argument would leak into the output.
//!     - Everything here runs before the paragraph pass (see [`super::paragraphs`]), which
//!       relies on the block tags these rules emit.
//!
//!     Single-line patterns match lazily over `[^\n\r\x{2028}\x{2029}]`, so they never
//!     cross a line terminator of any kind. The two environment rules (center, itemize)
//!     capture their body with `(?s:.*?)` so that a body may span lines while still
//!     closing at the nearest end marker.

use super::construct::Construct;
use super::paragraphs::trim_blank;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// How a rule rewrites a match.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Delete the match.
    Remove,
    /// Expand a `regex` replacement template (`${1}` refers to the first group).
    Template(&'static str),
    /// Build the replacement from the captures.
    Builder(fn(&Captures) -> String),
}

/// One step of the chain.
pub struct Rule {
    pub name: &'static str,
    pub construct: Construct,
    pub pattern: Regex,
    pub replacement: Replacement,
}

impl Rule {
    fn new(
        name: &'static str,
        construct: Construct,
        pattern: &str,
        replacement: Replacement,
    ) -> Self {
        Rule {
            name,
            construct,
            pattern: Regex::new(pattern).expect("rule patterns are static and valid"),
            replacement,
        }
    }

    /// Apply this rule to every non-overlapping match in `text`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Remove => self.pattern.replace_all(text, ""),
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Builder(build) => {
                self.pattern.replace_all(text, |caps: &Captures| build(caps))
            }
        }
    }
}

pub const CENTER_OPEN: &str = r#"<div class="text-center mb-6">"#;
pub const H1_OPEN: &str = r#"<h1 class="text-3xl font-bold">"#;
pub const H2_OPEN: &str = r#"<h2 class="text-xl mt-2">"#;
pub const SECTION_OPEN: &str =
    r#"<h3 class="text-xl font-bold mt-6 mb-3 border-b-2 border-gray-300 pb-1">"#;
pub const LIST_OPEN: &str = r#"<ul class="list-disc mb-3">"#;
pub const LIST_ITEM_OPEN: &str = r#"<li class="ml-6 mb-1">"#;
pub const RIGHT_FILL: &str = r#"<span class="float-right"></span>"#;
pub const LINE_BREAK: &str = "<br>";

const ITEM_MARKER: &str = r"\item";

/// The process-wide rule chain, compiled on first use.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(build_rules);

fn build_rules() -> Vec<Rule> {
    use Replacement::*;

    vec![
        Rule::new(
            "document-class",
            Construct::Preamble,
            r"\\documentclass(\[[^\n\r\x{2028}\x{2029}]*?\])?\{[^\n\r\x{2028}\x{2029}]*?\}",
            Remove,
        ),
        Rule::new(
            "use-package",
            Construct::Preamble,
            r"\\usepackage(\[[^\n\r\x{2028}\x{2029}]*?\])?\{[^\n\r\x{2028}\x{2029}]*?\}",
            Remove,
        ),
        Rule::new(
            "page-style",
            Construct::Preamble,
            r"\\pagestyle\{[^\n\r\x{2028}\x{2029}]*?\}",
            Remove,
        ),
        Rule::new(
            "begin-document",
            Construct::DocumentBoundary,
            r"\\begin\{document\}",
            Remove,
        ),
        Rule::new(
            "end-document",
            Construct::DocumentBoundary,
            r"\\end\{document\}",
            Remove,
        ),
        Rule::new(
            "center",
            Construct::CenteredBlock,
            r"\\begin\{center\}((?s:.*?))\\end\{center\}",
            Template(r#"<div class="text-center mb-6">${1}</div>"#),
        ),
        Rule::new(
            "large-bold-title",
            Construct::LargeBoldTitle,
            r"\{\\LARGE[\s\x{FEFF}]+\\textbf\{([^\n\r\x{2028}\x{2029}]*?)\}\}",
            Template(r#"<h1 class="text-3xl font-bold">${1}</h1>"#),
        ),
        Rule::new(
            "large-text",
            Construct::LargeText,
            r"\{\\large[\s\x{FEFF}]+([^\n\r\x{2028}\x{2029}]*?)\}",
            Template(r#"<h2 class="text-xl mt-2">${1}</h2>"#),
        ),
        Rule::new(
            "bold",
            Construct::Bold,
            r"\\textbf\{([^\n\r\x{2028}\x{2029}]*?)\}",
            Template("<strong>${1}</strong>"),
        ),
        Rule::new(
            "italic",
            Construct::Italic,
            r"\\textit\{([^\n\r\x{2028}\x{2029}]*?)\}",
            Template("<em>${1}</em>"),
        ),
        Rule::new(
            "section",
            Construct::SectionHeading,
            r"\\section\*\{([^\n\r\x{2028}\x{2029}]*?)\}",
            Template(
                r#"<h3 class="text-xl font-bold mt-6 mb-3 border-b-2 border-gray-300 pb-1">${1}</h3>"#,
            ),
        ),
        Rule::new(
            "itemize",
            Construct::ItemizedList,
            r"\\begin\{itemize\}(\[[^\n\r\x{2028}\x{2029}]*?\])?((?s:.*?))\\end\{itemize\}",
            Builder(build_itemize),
        ),
        Rule::new("hfill", Construct::RightFill, r"\\hfill", Template(RIGHT_FILL)),
        Rule::new(
            "spaced-line-break",
            Construct::SpacedLineBreak,
            r"\\\\\[[^\n\r\x{2028}\x{2029}]*?\]",
            Template(LINE_BREAK),
        ),
        Rule::new(
            "line-break",
            Construct::LineBreak,
            r"\\\\",
            Template(LINE_BREAK),
        ),
        Rule::new(
            "math-pipe-open",
            Construct::MathPipe,
            r"\$\|",
            Template("|"),
        ),
        Rule::new(
            "math-pipe-close",
            Construct::MathPipe,
            r"\|\$",
            Template("|"),
        ),
        Rule::new(
            "escaped-percent",
            Construct::EscapedPercent,
            r"\\%",
            Template("%"),
        ),
    ]
}

/// Turn an itemize body into a `<ul>`.
///
/// Group 1 holds the layout options (discarded), group 2 the body. Text before the first
/// `\item` is dropped; each following segment is trimmed and becomes one `<li>`.
fn build_itemize(caps: &Captures) -> String {
    let body = caps.get(2).map_or("", |m| m.as_str());
    let items: String = body
        .split(ITEM_MARKER)
        .skip(1)
        .map(|item| format!("{LIST_ITEM_OPEN}{}</li>", trim_blank(item)))
        .collect();
    format!("{LIST_OPEN}{items}</ul>")
}

/// Look up a rule by name.
pub fn find_rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}
