//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    #[default]
    Csv,
    /// JSON with export metadata
    Json,
}

/// Arguments of the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let count = write_export(storage, BufWriter::new(file), &args)?;
            println!("Exported {} expenses to: {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            write_export(storage, stdout.lock(), &args)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, mut writer: W, args: &ExportArgs) -> ExpenseResult<usize> {
    let count = match args.format {
        ExportFormat::Csv => csv::export_expenses_csv(storage, &mut writer)?,
        ExportFormat::Json => {
            let count = json::export_full_json(storage, &mut writer, args.pretty)?;
            writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
            count
        }
    };

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(count)
}
