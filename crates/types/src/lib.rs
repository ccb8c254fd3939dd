pub mod measure;
pub mod text;

pub use measure::Measurable;
pub use text::TextRun;
