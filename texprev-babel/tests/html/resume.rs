//! Whole-document conversion of the sample resume
//!
//! The fixtures hold the expected fragment for both paragraph policies.

use texprev_babel::samples::SAMPLE_RESUME;
use texprev_babel::{translate, translate_with_options, TranslateOptions};

const EXPECTED: &str = include_str!("fixtures/resume.html");
const EXPECTED_COMPATIBLE: &str = include_str!("fixtures/resume.compatible.html");

#[test]
fn sample_resume_matches_fixture() {
    assert_eq!(translate(SAMPLE_RESUME), EXPECTED.trim_end());
}

#[test]
fn sample_resume_compatible_mode_matches_fixture() {
    let html = translate_with_options(SAMPLE_RESUME, &TranslateOptions::compatible());
    assert_eq!(html, EXPECTED_COMPATIBLE.trim_end());
}

#[test]
fn sample_resume_structure() {
    let html = translate(SAMPLE_RESUME);

    assert_eq!(html.matches("<h1 ").count(), 1);
    assert_eq!(html.matches("<h2 ").count(), 1);
    assert_eq!(html.matches("<h3 ").count(), 4);
    assert_eq!(html.matches("<ul ").count(), 2);
    assert_eq!(html.matches("<li ").count(), 6);
    assert_eq!(html.matches("<span class=\"float-right\"></span>").count(), 3);
    assert!(!html.contains('\\'));
    assert!(!html.contains("documentclass"));
    assert!(!html.contains("usepackage"));
}

#[test]
fn sample_resume_has_no_blank_lines() {
    let html = translate(SAMPLE_RESUME);
    assert!(html.lines().all(|line| !line.trim().is_empty()));
}
