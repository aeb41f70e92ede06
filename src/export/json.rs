//! JSON Export functionality
//!
//! Writes the snapshot together with the figures computed from it, so a
//! consumer does not have to reimplement the rollups.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::budget::{fixed_total, grand_total, variable_total};
use crate::services::income::{total_monthly_income, total_yearly_income};
use crate::services::report::{goal_projection, period_averages, GoalProjection, PeriodAverages};
use crate::snapshot::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot plus computed totals
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub snapshot: Snapshot,

    pub totals: ExportTotals,
}

/// Figures derived from the snapshot at export time (amounts in currency units)
#[derive(Debug, Clone, Serialize)]
pub struct ExportTotals {
    pub monthly_income: Money,
    pub yearly_income: Money,
    pub budget_total: Money,
    pub fixed_total: Money,
    pub variable_total: Money,
    /// Monthly income left after the budget
    pub buffer: Money,
    pub averages: PeriodAverages,
    /// Absent when there is no goal or its target is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<GoalProjection>,
    pub transaction_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl ExportTotals {
    /// Compute all totals for a snapshot
    pub fn compute(snapshot: &Snapshot) -> Self {
        let monthly_income = total_monthly_income(&snapshot.income_sources);
        let budget_total = grand_total(&snapshot.categories);

        Self {
            monthly_income,
            yearly_income: total_yearly_income(&snapshot.income_sources),
            budget_total,
            fixed_total: fixed_total(&snapshot.categories),
            variable_total: variable_total(&snapshot.categories),
            buffer: monthly_income - budget_total,
            averages: period_averages(&snapshot.monthly_data),
            savings_goal: snapshot
                .savings_goal
                .as_ref()
                .and_then(|goal| goal_projection(goal).ok()),
            transaction_count: snapshot.transactions.len(),
            earliest_transaction: snapshot
                .transactions
                .iter()
                .map(|t| t.date)
                .min()
                .map(|d| d.to_string()),
            latest_transaction: snapshot
                .transactions
                .iter()
                .map(|t| t.date)
                .max()
                .map(|d| d.to_string()),
        }
    }
}

impl SummaryExport {
    /// Build an export of `snapshot` stamped with the current time
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            snapshot: snapshot.clone(),
            totals: ExportTotals::compute(snapshot),
        }
    }
}

/// Export the snapshot and its totals as pretty-printed JSON
pub fn export_summary_json<W: Write>(snapshot: &Snapshot, writer: &mut W) -> LedgerResult<()> {
    let export = SummaryExport::from_snapshot(snapshot);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_summary_json(&Snapshot::sample(), &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["totals"]["monthly_income"].as_f64(), Some(1039.0));
        assert_eq!(value["totals"]["budget_total"].as_f64(), Some(966.0));
        assert_eq!(value["totals"]["buffer"].as_f64(), Some(73.0));
        assert_eq!(value["totals"]["earliest_transaction"], "2026-01-25");
        assert_eq!(value["snapshot"]["categories"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_totals_of_empty_snapshot() {
        let totals = ExportTotals::compute(&Snapshot::default());
        assert_eq!(totals.budget_total, Money::zero());
        assert_eq!(totals.buffer, Money::zero());
        assert!(totals.savings_goal.is_none());
        assert!(totals.latest_transaction.is_none());
    }
}
