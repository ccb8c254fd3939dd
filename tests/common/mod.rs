pub mod fixtures;

use trellis::{LayoutResult, TextRun};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Flattens a result into `(content, x)` pairs per row.
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
