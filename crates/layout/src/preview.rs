//! Plain-text rendering of a layout, one text line per row.
//!
//! Offsets are converted to character columns by dividing by `cell_width`.
//! Used for debugging and by the command-line tool.

use crate::{LayoutError, LayoutResult};
use std::fmt::{Display, Write};

/// Widest column the preview will pad to.
pub const MAX_PREVIEW_COLUMN: usize = 1 << 16;

pub fn render_plain<E: Display>(
    result: &LayoutResult<E>,
    cell_width: f32,
) -> Result<String, LayoutError> {
    if !(cell_width.is_finite() && cell_width > 0.0) {
        return Err(LayoutError::InvalidConfig(format!(
            "cell width must be a finite number greater than zero, got {cell_width}"
        )));
    }

    let mut out = String::new();
    let mut text = String::new();
    for (index, row) in result.rows().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut column = 0usize;
        for positioned in row {
            let target = (positioned.x / cell_width).round();
            if !(target <= MAX_PREVIEW_COLUMN as f32) {
                return Err(LayoutError::InvalidConfig(format!(
                    "offset {} maps past column {} at cell width {}",
                    positioned.x, MAX_PREVIEW_COLUMN, cell_width
                )));
            }
            let target = target as usize;
            // Never overwrite what is already on the line.
            if target > column {
                out.extend(std::iter::repeat_n(' ', target - column));
                column = target;
            }
            text.clear();
            // Writing into a String cannot fail.
            let _ = write!(text, "{}", positioned.element);
            column += text.chars().count();
            out.push_str(&text);
        }
    }
    Ok(out)
}
