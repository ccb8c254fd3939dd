//! Trellis arranges trees of measured content into rows of a fixed width.
//!
//! Build a [`Command`] tree from measurable units (anything implementing
//! [`Measurable`]), soft breaks, hard breaks and indent scopes, then hand it
//! to [`layout`] together with a [`LayoutConfig`]:
//!
//! ```
//! use trellis::{Command, LayoutConfig, TextRun, layout};
//!
//! let tree = Command::concat([
//!     Command::element(TextRun::new("Hello", 5.0)),
//!     Command::line(),
//!     Command::element(TextRun::new("world", 5.0)),
//! ]);
//! let config = LayoutConfig::new(20.0, 1.0, 4.0)?;
//! let result = layout(&tree, &config)?;
//! assert_eq!(result.row_count(), 1);
//! assert_eq!(result.rows()[0].elements()[1].x, 6.0);
//! # Ok::<(), trellis::TrellisError>(())
//! ```

pub mod batch;
pub mod document;
pub mod error;

pub use batch::layout_batch;
pub use document::{ConfigOverrides, LayoutDocument};
pub use error::TrellisError;

pub use trellis_layout::{
    Command, LayoutConfig, LayoutEngine, LayoutError, LayoutResult, Placement, PositionedElement,
    MAX_PREVIEW_COLUMN, Row, layout, render_plain,
};
pub use trellis_types::{Measurable, TextRun};
