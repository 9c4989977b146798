//! Catalog of the markup constructs the translator recognizes
//!
//! Every rule in the chain is tagged with the construct it converts. The catalog is what
//! `texprev rules` prints, and it doubles as documentation of the fixed vocabulary: anything
//! not listed here falls through to the paragraph pass as plain prose.

use std::fmt;

/// A LaTeX construct with a dedicated conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `\documentclass`, `\usepackage`, `\pagestyle`
    Preamble,
    /// `\begin{document}` / `\end{document}`
    DocumentBoundary,
    /// `\begin{center}` ... `\end{center}`
    CenteredBlock,
    /// `{\LARGE \textbf{...}}`
    LargeBoldTitle,
    /// `{\large ...}`
    LargeText,
    /// `\textbf{...}`
    Bold,
    /// `\textit{...}`
    Italic,
    /// `\section*{...}`
    SectionHeading,
    /// `\begin{itemize}` with `\item` markers
    ItemizedList,
    /// `\hfill`
    RightFill,
    /// `\\[0.5em]`
    SpacedLineBreak,
    /// `\\`
    LineBreak,
    /// `$|` and `|$`
    MathPipe,
    /// `\%`
    EscapedPercent,
    /// Any line no other rule turned into a block
    PlainTextLine,
}

impl Construct {
    /// Every construct, in pipeline order.
    pub const ALL: [Construct; 15] = [
        Construct::Preamble,
        Construct::DocumentBoundary,
        Construct::CenteredBlock,
        Construct::LargeBoldTitle,
        Construct::LargeText,
        Construct::Bold,
        Construct::Italic,
        Construct::SectionHeading,
        Construct::ItemizedList,
        Construct::RightFill,
        Construct::SpacedLineBreak,
        Construct::LineBreak,
        Construct::MathPipe,
        Construct::EscapedPercent,
        Construct::PlainTextLine,
    ];

    /// Short human label
    pub fn label(&self) -> &'static str {
        match self {
            Construct::Preamble => "preamble directive",
            Construct::DocumentBoundary => "document boundary",
            Construct::CenteredBlock => "centered block",
            Construct::LargeBoldTitle => "large bold title",
            Construct::LargeText => "large text",
            Construct::Bold => "bold inline",
            Construct::Italic => "italic inline",
            Construct::SectionHeading => "section heading",
            Construct::ItemizedList => "itemized list",
            Construct::RightFill => "right-aligned fill",
            Construct::SpacedLineBreak => "line break (with spacing)",
            Construct::LineBreak => "line break",
            Construct::MathPipe => "math delimiter next to pipe",
            Construct::EscapedPercent => "escaped percent",
            Construct::PlainTextLine => "plain text line",
        }
    }

    /// Example markup for this construct.
    pub fn example(&self) -> &'static str {
        match self {
            Construct::Preamble => r"\usepackage[margin=1in]{geometry}",
            Construct::DocumentBoundary => r"\begin{document}",
            Construct::CenteredBlock => r"\begin{center} ... \end{center}",
            Construct::LargeBoldTitle => r"{\LARGE \textbf{John Doe}}",
            Construct::LargeText => r"{\large Software Engineer}",
            Construct::Bold => r"\textbf{Languages:}",
            Construct::Italic => r"\textit{Jan 2021 -- Present}",
            Construct::SectionHeading => r"\section*{Experience}",
            Construct::ItemizedList => r"\begin{itemize} \item ... \end{itemize}",
            Construct::RightFill => r"\hfill",
            Construct::SpacedLineBreak => r"\\[0.5em]",
            Construct::LineBreak => r"\\",
            Construct::MathPipe => r"$|$",
            Construct::EscapedPercent => r"40\%",
            Construct::PlainTextLine => "Tech Company Inc., San Francisco, CA",
        }
    }

    /// Shape of the generated output.
    pub fn output_shape(&self) -> &'static str {
        match self {
            Construct::Preamble | Construct::DocumentBoundary => "removed",
            Construct::CenteredBlock => "<div class=\"text-center\">",
            Construct::LargeBoldTitle => "<h1>",
            Construct::LargeText => "<h2>",
            Construct::Bold => "<strong>",
            Construct::Italic => "<em>",
            Construct::SectionHeading => "<h3> with bottom border",
            Construct::ItemizedList => "<ul> of <li>",
            Construct::RightFill => "<span class=\"float-right\">",
            Construct::SpacedLineBreak | Construct::LineBreak => "<br>",
            Construct::MathPipe => "|",
            Construct::EscapedPercent => "%",
            Construct::PlainTextLine => "<p>",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
