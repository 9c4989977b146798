//! HTML escaping for source text
//!
//! Runs before the rule chain. None of the rules match `&`, `<` or `>`, so escaping first
//! leaves every construct intact while guaranteeing that the only tags in the output are
//! the ones the rules generate.

use std::borrow::Cow;

/// Replace `&`, `<` and `>` with their entities.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text destined for an attribute value or `<title>`.
pub(crate) fn escape_attribute(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
