//! Text listing of the rule chain for `texprev rules`

use texprev_babel::pipeline::{Construct, RULES};

/// One line per pipeline step, in execution order.
pub fn render_rule_listing() -> String {
    let name_width = RULES
        .iter()
        .map(|rule| rule.name.len())
        .chain(std::iter::once("paragraphs".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::from("Rule chain (applied in order):\n\n");
    for (index, rule) in RULES.iter().enumerate() {
        out.push_str(&step_line(index + 1, rule.name, rule.construct, name_width));
    }
    out.push_str(&step_line(
        RULES.len() + 1,
        "paragraphs",
        Construct::PlainTextLine,
        name_width,
    ));
    out
}

fn step_line(number: usize, name: &str, construct: Construct, width: usize) -> String {
    format!(
        "  {number:>2}. {name:<width$}  {:<28} {} -> {}\n",
        construct.label(),
        construct.example(),
        construct.output_shape()
    )
}
