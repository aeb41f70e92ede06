//! YAML Export functionality
//!
//! Same content as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::SummaryExport;
use crate::snapshot::Snapshot;

/// Export the snapshot and its totals as YAML
pub fn export_summary_yaml<W: Write>(snapshot: &Snapshot, writer: &mut W) -> LedgerResult<()> {
    let export = SummaryExport::from_snapshot(snapshot);

    let header = format!(
        "# pocket-ledger summary export\n# Generated: {}\n# App Version: {}\n# Amounts are in currency units.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
