//! One test per recognized construct, run through the whole pipeline

use texprev_babel::pipeline::{Construct, RULES};
use texprev_babel::{translate, translate_with_options, TranslateOptions};

const H3: &str = r#"<h3 class="text-xl font-bold mt-6 mb-3 border-b-2 border-gray-300 pb-1">"#;

#[test]
fn preamble_is_removed() {
    let src = "\\documentclass[11pt,a4paper]{article}\n\\usepackage[margin=1in]{geometry}\n\\usepackage{enumitem}\n\\pagestyle{empty}\n";
    assert_eq!(translate(src), "");
}

#[test]
fn document_boundary_is_removed() {
    assert_eq!(
        translate("\\begin{document}\nHello\n\\end{document}"),
        "<p class=\"mb-2\">Hello</p>"
    );
}

#[test]
fn section_heading_text_and_border() {
    let html = translate(r"\section*{Skills}");
    assert_eq!(html, format!("{H3}Skills</h3>"));
    assert!(html.contains("border-b-2"));
}

#[test]
fn itemize_with_three_items() {
    let src = "\\begin{itemize}\n  \\item First one\n  \\item Second\n\n  \\item Third \n\\end{itemize}";
    let html = translate(src);
    assert_eq!(html.matches("<li ").count(), 3);
    assert_eq!(
        html,
        "<ul class=\"list-disc mb-3\"><li class=\"ml-6 mb-1\">First one</li><li class=\"ml-6 mb-1\">Second</li><li class=\"ml-6 mb-1\">Third</li></ul>"
    );
}

#[test]
fn itemize_options_are_discarded() {
    let html = translate("\\begin{itemize}[leftmargin=*]\n\\item A\n\\end{itemize}");
    assert!(!html.contains("leftmargin"));
    assert!(html.contains("<li class=\"ml-6 mb-1\">A</li>"));
}

#[test]
fn consecutive_center_blocks_close_at_nearest_end() {
    let src = "\\begin{center}\nA\n\\end{center}\n\\begin{center}\nB\n\\end{center}";
    assert_eq!(
        translate(src),
        "<div class=\"text-center mb-6\">\n<p class=\"mb-2\">A</p>\n</div>\n<div class=\"text-center mb-6\">\n<p class=\"mb-2\">B</p>\n</div>"
    );
}

#[test]
fn title_block() {
    let src = "{\\LARGE \\textbf{John Doe}}\\\\[0.5em]\n{\\large Software Engineer}\\\\[0.5em]";
    assert_eq!(
        translate(src),
        "<h1 class=\"text-3xl font-bold\">John Doe</h1><br>\n<h2 class=\"text-xl mt-2\">Software Engineer</h2><br>"
    );
}

#[test]
fn bold_and_italic_in_one_paragraph() {
    assert_eq!(
        translate(r"\textbf{Hi} \textit{there}"),
        "<p class=\"mb-2\"><strong>Hi</strong> <em>there</em></p>"
    );
}

#[test]
fn hfill_becomes_float_marker() {
    assert_eq!(
        translate(r"\textbf{Engineer} \hfill \textit{2020}"),
        "<p class=\"mb-2\"><strong>Engineer</strong> <span class=\"float-right\"></span> <em>2020</em></p>"
    );
}

#[test]
fn line_breaks() {
    assert_eq!(translate(r"a\\[2pt]b\\c"), "<p class=\"mb-2\">a<br>b<br>c</p>");
}

#[test]
fn math_pipes_are_normalized() {
    assert_eq!(translate("a $|$ b"), "<p class=\"mb-2\">a | b</p>");
}

#[test]
fn escaped_percent() {
    let html = translate(r"50\%");
    assert_eq!(html, "<p class=\"mb-2\">50%</p>");
    assert!(!html.contains('\\'));
}

#[test]
fn unknown_commands_fall_through_as_text() {
    assert_eq!(
        translate(r"\vspace{1em} \emph{x}"),
        "<p class=\"mb-2\">\\vspace{1em} \\emph{x}</p>"
    );
}

#[test]
fn unbalanced_environment_is_left_alone() {
    assert_eq!(
        translate("\\begin{itemize}\n\\item dangling"),
        "<p class=\"mb-2\">\\begin{itemize}</p>\n<p class=\"mb-2\">\\item dangling</p>"
    );
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(translate(""), "");
    assert_eq!(translate("   "), "");
    assert_eq!(translate("\n \n\t\n"), "");
}

#[test]
fn raw_html_is_escaped_by_default() {
    let src = "<script>alert(1)</script>";
    assert_eq!(
        translate(src),
        "<p class=\"mb-2\">&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
    let unescaped = translate_with_options(src, &TranslateOptions::compatible());
    assert_eq!(unescaped, src);
}

#[test]
fn catalog_follows_rule_chain_order() {
    let mut handled: Vec<Construct> = Vec::new();
    for rule in RULES.iter() {
        if handled.last() != Some(&rule.construct) {
            handled.push(rule.construct);
        }
    }
    let expected: Vec<Construct> = Construct::ALL
        .iter()
        .copied()
        .filter(|c| *c != Construct::PlainTextLine)
        .collect();
    assert_eq!(handled, expected);
    assert_eq!(Construct::ALL.last(), Some(&Construct::PlainTextLine));
}

#[test]
fn carriage_return_breaks_an_inline_command() {
    assert_eq!(
        translate_with_options("\\textbf{a\rb}", &TranslateOptions::compatible()),
        "<p class=\"mb-2\">\\textbf{a\rb}</p>"
    );
}
