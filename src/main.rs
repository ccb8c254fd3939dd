use clap::{Parser, ValueEnum};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use trellis::{ConfigOverrides, LayoutDocument, TrellisError, render_plain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Monospace preview, one line per row
    Text,
    /// Rows of `{element, x}` objects
    Json,
}

/// Lays out a JSON command tree and prints the resulting rows.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a document with `config` and `tree` fields
    document: PathBuf,

    /// Override the document's maximum row width
    #[arg(long)]
    max_width: Option<f32>,

    /// Override the document's soft-break space width
    #[arg(long)]
    space_width: Option<f32>,

    /// Override the document's width per indent level
    #[arg(long)]
    indent_width: Option<f32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Layout units per character column in text output
    #[arg(long, default_value_t = 1.0)]
    cell_width: f32,
}

fn main() -> Result<(), TrellisError> {
    if env::var("RUST_LOG").is_err() {
        // SAFETY: called before any other thread is spawned.
        unsafe {
            env::set_var("RUST_LOG", "trellis=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let overrides = ConfigOverrides {
        max_width: args.max_width,
        space_width: args.space_width,
        indent_width: args.indent_width,
    };
    let document = LayoutDocument::from_file_with_overrides(&args.document, &overrides)?;

    let result = document.layout()?;
    log::info!(
        "{} elements in {} rows",
        result.elements().count(),
        result.row_count()
    );

    let rendered = match args.format {
        OutputFormat::Text => render_plain(&result, args.cell_width)?,
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
