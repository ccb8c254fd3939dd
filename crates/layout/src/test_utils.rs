use crate::{Command, LayoutConfig, LayoutResult};
use trellis_types::TextRun;

/// Shorthand for a text element whose width is given explicitly.
pub fn word(content: &str, width: f32) -> Command<TextRun> {
    Command::element(TextRun::new(content, width))
}

/// Shorthand for a text element one unit wide per character.
pub fn mono(content: &str) -> Command<TextRun> {
    Command::element(TextRun::monospace(content, 1.0))
}

pub fn config(max_width: f32, space_width: f32, indent_width: f32) -> LayoutConfig {
    LayoutConfig::new(max_width, space_width, indent_width).unwrap()
}

/// Flattens a result into `(content, x)` pairs per row for compact assertions.
pub fn row_contents(result: &LayoutResult<TextRun>) -> Vec<Vec<(String, f32)>> {
    result
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|p| (p.element.content.clone(), p.x))
                .collect()
        })
        .collect()
}

pub fn expected(rows: &[&[(&str, f32)]]) -> Vec<Vec<(String, f32)>> {
    rows.iter()
        .map(|row| row.iter().map(|(c, x)| (c.to_string(), *x)).collect())
        .collect()
}
