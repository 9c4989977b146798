//! Format implementations
//!
//! Every format runs the translator pipeline; see [`crate::pipeline`].

pub mod html;
pub mod trace;

pub use html::{get_default_css, HtmlFormat, HtmlOptions};
pub use trace::{TraceFormat, TraceOptions};

/// Extensions recognized as resume markup input.
pub const MARKUP_EXTENSIONS: &[&str] = &["tex", "latex"];

/// Whether `filename` looks like a markup source file.
pub fn is_markup_file(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}
