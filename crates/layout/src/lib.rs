use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Element #{index} has width {width} but widths must be finite and non-negative.")]
    InvalidElementWidth { index: usize, width: f32 },
}

pub mod command;
pub mod config;
pub mod engine;
pub mod output;
pub mod preview;

pub use self::command::Command;
pub use self::config::LayoutConfig;
pub use self::engine::{LayoutEngine, layout};
pub use self::output::{LayoutResult, Placement, PositionedElement, Row};
pub use self::preview::{MAX_PREVIEW_COLUMN, render_plain};

// Re-export the measurement capability so callers only need this crate.
pub use trellis_types::{Measurable, TextRun};

#[cfg(test)]
mod test_utils;
