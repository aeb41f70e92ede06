//! Export module for pocket-ledger
//!
//! - CSV: transactions (spreadsheet-compatible)
//! - JSON: snapshot plus computed totals, machine-readable
//! - YAML: the same summary in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_summary_json, ExportTotals, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
