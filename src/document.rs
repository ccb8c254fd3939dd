//! JSON documents pairing a layout configuration with a command tree.
//!
//! ```json
//! {
//!   "config": { "maxWidth": 20, "spaceWidth": 1, "indentWidth": 4 },
//!   "tree": { "concat": [ { "element": { "content": "Hello", "width": 5 } }, "hardLine" ] }
//! }
//! ```

use crate::TrellisError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trellis_layout::{Command, LayoutConfig, LayoutResult, layout};
use trellis_types::TextRun;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    pub config: LayoutConfig,
    pub tree: Command<TextRun>,
}

/// Per-field replacements for a document's config, applied before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub max_width: Option<f32>,
    pub space_width: Option<f32>,
    pub indent_width: Option<f32>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut LayoutConfig) {
        if let Some(max_width) = self.max_width {
            config.max_width = max_width;
        }
        if let Some(space_width) = self.space_width {
            config.space_width = space_width;
        }
        if let Some(indent_width) = self.indent_width {
            config.indent_width = indent_width;
        }
    }
}

impl LayoutDocument {
    pub fn from_json(json: &str) -> Result<Self, TrellisError> {
        Self::from_json_with_overrides(json, &ConfigOverrides::default())
    }

    /// Parses `json`, replaces the overridden config fields, then validates.
    pub fn from_json_with_overrides(
        json: &str,
        overrides: &ConfigOverrides,
    ) -> Result<Self, TrellisError> {
        let mut document: Self = serde_json::from_str(json)?;
        overrides.apply(&mut document.config);
        document.config.validate()?;
        Ok(document)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrellisError> {
        Self::from_file_with_overrides(path, &ConfigOverrides::default())
    }

    pub fn from_file_with_overrides(
        path: impl AsRef<Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, TrellisError> {
        let path = path.as_ref();
        log::info!("Loading layout document from {}", path.display());
        Self::from_json_with_overrides(&fs::read_to_string(path)?, overrides)
    }

    pub fn layout(&self) -> Result<LayoutResult<TextRun>, TrellisError> {
        Ok(layout(&self.tree, &self.config)?)
    }
}
