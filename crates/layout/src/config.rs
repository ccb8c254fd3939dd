use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Width constraints for a single layout pass.
///
/// All three fields are required; there is deliberately no `Default`. Every
/// value shares the unit returned by [`Measurable::width`](crate::Measurable::width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutConfig {
    /// Row width; placing a unit that would reach or pass it opens a new row first.
    pub max_width: f32,
    /// Advance consumed by a soft break that does not wrap.
    pub space_width: f32,
    /// Extra offset per indent level at the start of each new row.
    pub indent_width: f32,
}

impl LayoutConfig {
    pub fn new(max_width: f32, space_width: f32, indent_width: f32) -> Result<Self, LayoutError> {
        let config = Self {
            max_width,
            space_width,
            indent_width,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot honor.
    ///
    /// `max_width` must be finite and positive, the other two finite and
    /// non-negative. Nothing is clamped.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.max_width.is_finite() && self.max_width > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "maxWidth must be a finite number greater than zero, got {}",
                self.max_width
            )));
        }
        check_non_negative("spaceWidth", self.space_width)?;
        check_non_negative("indentWidth", self.indent_width)
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig(format!(
            "{name} must be a finite, non-negative number, got {value}"
        )))
    }
}
