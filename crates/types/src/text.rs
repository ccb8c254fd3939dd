use crate::Measurable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured run of text, typically one highlighted token of source code.
///
/// The width is supplied by whoever produced the run (a shaper, a font
/// metrics table, or a fixed cell advance for monospace output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: String,
    pub width: f32,
    /// Optional style class the renderer maps to colors or fonts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl TextRun {
    pub fn new(content: impl Into<String>, width: f32) -> Self {
        Self {
            content: content.into(),
            width,
            style: None,
        }
    }

    /// Creates a run whose width is its character count times a fixed advance.
    pub fn monospace(content: impl Into<String>, advance: f32) -> Self {
        let content = content.into();
        let width = content.chars().count() as f32 * advance;
        Self {
            content,
            width,
            style: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Measurable for TextRun {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }
}

impl fmt::Display for TextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
