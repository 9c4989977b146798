//! Property tests for the translator

use proptest::prelude::*;
use texprev_babel::{trace, translate, translate_with_options, TranslateOptions};

fn markup_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(r"\documentclass[11pt]{article}".to_string()),
        Just(r"\documentclass{article}".to_string()),
        Just(r"\usepackage[margin=1in]{geometry}".to_string()),
        Just(r"\usepackage{enumitem}".to_string()),
        Just(r"\pagestyle{empty}".to_string()),
        Just(r"\begin{document}".to_string()),
        Just(r"\end{document}".to_string()),
        Just(r"\begin{center}".to_string()),
        Just(r"\end{center}".to_string()),
        Just(r"\begin{itemize}".to_string()),
        Just(r"\end{itemize}".to_string()),
        Just(r"\item".to_string()),
        Just(r"\section*{".to_string()),
        Just(r"\textbf{".to_string()),
        Just(r"\textit{".to_string()),
        Just(r"\hfill".to_string()),
        Just(r"\\".to_string()),
        Just(r"\%".to_string()),
        Just("}".to_string()),
        Just("\n".to_string()),
        "[a-zA-Z0-9 <>&|$%{}\\[\\]\\\\]{0,12}",
    ]
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(markup_fragment(), 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn translation_is_deterministic(src in markup()) {
        prop_assert_eq!(translate(&src), translate(&src));
    }

    #[test]
    fn preamble_never_survives(src in markup()) {
        let html = translate(&src);
        prop_assert!(!html.contains(r"\documentclass"));
        prop_assert!(!html.contains(r"\usepackage"));
        prop_assert!(!html.contains(r"\pagestyle"));
        prop_assert!(!html.contains(r"\begin{document}"), "html contains \\begin{{document}}");
        prop_assert!(!html.contains(r"\end{document}"), "html contains \\end{{document}}");
    }

    #[test]
    fn output_has_no_blank_lines(src in markup()) {
        let html = translate(&src);
        prop_assert!(html.split('\n').all(|line| html.is_empty() || !line.trim().is_empty()));
    }

    #[test]
    fn escaped_output_has_no_source_tags(text in "[a-z <>/&]{0,40}") {
        let html = translate(&text);
        prop_assert!(!html.contains("<script"));
        for tag in html.match_indices('<') {
            let rest = &html[tag.0..];
            prop_assert!(rest.starts_with("<p class=\"mb-2\">") || rest.starts_with("</p>"));
        }
    }

    #[test]
    fn trace_agrees_with_translate(src in markup(), escape in any::<bool>()) {
        let options = TranslateOptions::default().with_escape_html(escape);
        let stages = trace(&src, &options);
        prop_assert_eq!(
            &stages.last().unwrap().output,
            &translate_with_options(&src, &options)
        );
    }
}
