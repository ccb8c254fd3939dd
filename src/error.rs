use thiserror::Error;
use trellis_layout::LayoutError;

/// Errors from loading a document through to producing output.
#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
