//! CLI command for data export
//!
//! Writes the snapshot with its computed totals as JSON or YAML, or the
//! transactions as CSV. Without `--output` the export goes to stdout.

use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use super::create_output;
use crate::error::LedgerResult;
use crate::export::{export_summary_json, export_summary_yaml, export_transactions_csv};
use crate::snapshot::Snapshot;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (snapshot and totals)
    Json,
    /// YAML (snapshot and totals, human-readable)
    Yaml,
    /// CSV (transactions only)
    Csv,
}

/// Arguments of `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn write_export<W: Write>(snapshot: &Snapshot, format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => export_summary_json(snapshot, writer)?,
        ExportFormat::Yaml => export_summary_yaml(snapshot, writer)?,
        ExportFormat::Csv => export_transactions_csv(&snapshot.transactions, &mut *writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Handle the export command
pub fn handle_export_command(snapshot: &Snapshot, args: ExportArgs) -> LedgerResult<()> {
    match args.output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            write_export(snapshot, args.format, &mut writer)?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(snapshot, args.format, &mut handle)?;
        }
    }

    Ok(())
}
