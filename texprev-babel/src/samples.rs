//! Built-in sample documents

/// A one-page resume exercising every construct the translator knows.
pub const SAMPLE_RESUME: &str = include_str!("../samples/resume.tex");
