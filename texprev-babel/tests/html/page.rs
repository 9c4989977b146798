//! Standalone page export

use insta::assert_snapshot;
use texprev_babel::format::Format;
use texprev_babel::formats::html::{get_default_css, HtmlFormat, HtmlOptions};
use texprev_babel::FormatRegistry;

#[test]
fn page_embeds_stylesheet_and_fragment() {
    let page = HtmlFormat::page().render(r"\section*{Skills}").unwrap();

    assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(page.contains("<meta name=\"generator\" content=\"texprev\">"));
    assert!(page.contains("<title>Resume Preview</title>"));
    assert!(page.contains(get_default_css()));
    assert!(page.contains(
        "<div class=\"texprev-document\">\n<h3 class=\"text-xl font-bold mt-6 mb-3 border-b-2 border-gray-300 pb-1\">Skills</h3>\n</div>"
    ));
}

#[test]
fn stylesheet_defines_every_generated_class() {
    let css = get_default_css();
    for class in [
        "text-center",
        "mb-6",
        "text-3xl",
        "font-bold",
        "text-xl",
        "mt-2",
        "mt-6",
        "mb-3",
        "border-b-2",
        "border-gray-300",
        "pb-1",
        "list-disc",
        "ml-6",
        "mb-1",
        "float-right",
        "mb-2",
    ] {
        assert!(css.contains(&format!(".{class} ")), "missing .{class}");
    }
}

#[test]
fn page_body_for_small_document() {
    let format = HtmlFormat::new(HtmlOptions::standalone().with_title("Jane"));
    let page = format
        .render("{\\LARGE \\textbf{Jane Roe}}\\\\\nrust & go")
        .unwrap();
    let start = page.find("<body>").unwrap();
    assert_snapshot!(&page[start..], @r###"
<body>
<div class="texprev-document">
<h1 class="text-3xl font-bold">Jane Roe</h1><br>
<p class="mb-2">rust &amp; go</p>
</div>
</body>
</html>
"###);
}

#[test]
fn registry_renders_page_by_name() {
    let registry = FormatRegistry::default();
    let page = registry.render("Hello", "html-page").unwrap();
    assert!(page.contains("<p class=\"mb-2\">Hello</p>"));
}
