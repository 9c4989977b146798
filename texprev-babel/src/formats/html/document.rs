//! Standalone page wrapper

use crate::pipeline::escape::escape_attribute;

const PREVIEW_CSS: &str = include_str!("../../../css/preview.css");

/// The stylesheet embedded into standalone pages.
pub fn get_default_css() -> &'static str {
    PREVIEW_CSS
}

/// Wrap an HTML fragment into a complete HTML5 document.
pub fn wrap_in_document(body_html: &str, title: &str, custom_css: Option<&str>) -> String {
    let custom_css = custom_css.unwrap_or("");
    let escaped_title = escape_attribute(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="texprev">
  <title>{escaped_title}</title>
  <style>
{PREVIEW_CSS}
{custom_css}
  </style>
</head>
<body>
<div class="texprev-document">
{body_html}
</div>
</body>
</html>
"#
    )
}
