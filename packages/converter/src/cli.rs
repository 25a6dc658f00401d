//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::{style, Term};

use crate::config::{validate_output_path, DEFAULT_INPUT_PATH};
use crate::error::Result;
use crate::extractor::convert_file;
use crate::json::write_json;
use crate::types::InputFormat;

/// Convert statute XML into a JSON array of {title, caption, text} articles.
#[derive(Parser)]
#[command(name = "keiho-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file path
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output JSON file path (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input document format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Xml)]
    pub format: InputFormat,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_command(&cli.input, cli.output.as_deref(), cli.format)
}

/// Execute the conversion.
fn convert_command(input: &Path, output: Option<&Path>, format: InputFormat) -> Result<()> {
    // Validate output location before doing any work
    if let Some(path) = output {
        validate_output_path(path)?;
    }

    let records = convert_file(input, format)?;
    write_json(&records, output)?;

    // Standard output carries the JSON, so only report when writing a file
    if let Some(path) = output {
        let term = Term::stderr();
        term.write_line(&format!(
            "{} {} articles to {}",
            style("Saved").green().bold(),
            style(records.len()).cyan(),
            path.display()
        ))?;
    }

    Ok(())
}
