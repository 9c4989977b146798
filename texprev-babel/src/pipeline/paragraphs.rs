//! Final pass: drop blank lines and wrap loose text in paragraphs

pub const PARAGRAPH_OPEN: &str = r#"<p class="mb-2">"#;

/// Tags that mark a line as already structured.
const BLOCK_OPENERS: &[&str] = &["<h", "<div", "<ul"];

/// Closing tags of the block elements the rule chain emits.
const BLOCK_CLOSERS: &[&str] = &["</h", "</div", "</ul", "</li", "</p"];

/// Trim whitespace and byte order marks (U+FEFF). NEL (U+0085) is kept.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Which closing tags keep a line out of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosingTagPolicy {
    /// Only closers of block elements count, so a line of inline markup such as
    /// `<strong>Hi</strong>` is still wrapped.
    #[default]
    BlockOnly,
    /// Any `</` counts; inline-only lines pass through unwrapped.
    Any,
}

/// Whether `line` already carries block structure.
pub fn is_block_line(line: &str, policy: ClosingTagPolicy) -> bool {
    if BLOCK_OPENERS.iter().any(|tag| line.contains(tag)) {
        return true;
    }
    match policy {
        ClosingTagPolicy::Any => line.contains("</"),
        ClosingTagPolicy::BlockOnly => BLOCK_CLOSERS.iter().any(|tag| line.contains(tag)),
    }
}

/// Split on `\n`, drop whitespace-only lines, wrap the rest unless they are block lines.
///
/// Surviving lines are kept untrimmed and rejoined with `\n`.
pub fn wrap_paragraphs(text: &str, policy: ClosingTagPolicy) -> String {
    text.split('\n')
        .filter(|line| !trim_blank(line).is_empty())
        .map(|line| {
            if is_block_line(line, policy) {
                line.to_string()
            } else {
                format!("{PARAGRAPH_OPEN}{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
