//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and service layers.

pub mod budget;
pub mod export;
pub mod income;
pub mod report;
pub mod transaction;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

pub use budget::{handle_budget_command, BudgetArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use income::{handle_income_command, IncomeArgs};
pub use report::{handle_dashboard_command, handle_reports_command, DashboardArgs, ReportsArgs};
pub use transaction::{handle_transaction_command, TransactionArgs};

/// Open `path` for a report or export file
pub(crate) fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
