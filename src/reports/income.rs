//! Income Report
//!
//! Lists income sources with their monthly equivalents and totals.

use serde::Serialize;
use std::io::Write;

use crate::display::{double_separator, separator};
use crate::error::LedgerResult;
use crate::models::{Frequency, IncomeId, IncomeSource, Money, MoneyFormat};
use crate::services::income::{
    active_count, monthly_equivalent, total_monthly_income, total_yearly_income,
};

/// One income source with its monthly equivalent
#[derive(Debug, Clone, Serialize)]
pub struct IncomeRow {
    pub id: IncomeId,
    pub name: String,
    pub icon: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub monthly: Money,
    pub is_active: bool,
}

/// Income Report
#[derive(Debug, Clone, Serialize)]
pub struct IncomeReport {
    pub sources: Vec<IncomeRow>,
    pub monthly_total: Money,
    pub yearly_total: Money,
    pub active_count: usize,
    pub inactive_count: usize,
}

impl IncomeReport {
    /// Generate the report for a list of sources
    pub fn generate(sources: &[IncomeSource]) -> Self {
        let rows = sources
            .iter()
            .map(|s| IncomeRow {
                id: s.id,
                name: s.name.clone(),
                icon: s.icon.clone(),
                amount: s.amount,
                frequency: s.frequency,
                monthly: monthly_equivalent(s.amount, s.frequency),
                is_active: s.is_active,
            })
            .collect();

        let active = active_count(sources);
        Self {
            sources: rows,
            monthly_total: total_monthly_income(sources),
            yearly_total: total_yearly_income(sources),
            active_count: active,
            inactive_count: sources.len() - active,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &MoneyFormat) -> String {
        let mut output = String::new();

        output.push_str("Income\n");
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<7} {:<24} {:>14} {:<12} {:>14}\n",
            "ID", "Source", "Amount", "Frequency", "Monthly"
        ));
        output.push_str(&separator(78));
        output.push('\n');

        for row in &self.sources {
            let label = if row.icon.is_empty() {
                row.name.clone()
            } else {
                format!("{} {}", row.icon, row.name)
            };
            output.push_str(&format!(
                "{:<7} {:<24} {:>14} {:<12} {:>14}{}\n",
                row.id.to_string(),
                label,
                row.amount.format(fmt),
                row.frequency.label(),
                row.monthly.format(fmt),
                if row.is_active { "" } else { "  (inactive)" }
            ));
        }

        output.push_str(&separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<46} {:>31}\n",
            "Monthly income",
            self.monthly_total.format(fmt)
        ));
        output.push_str(&format!(
            "{:<46} {:>31}\n",
            "Yearly income",
            self.yearly_total.format(fmt)
        ));
        output.push_str(&format!(
            "{} active, {} inactive\n",
            self.active_count, self.inactive_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(["ID", "Name", "Amount", "Frequency", "Monthly", "Active"])?;

        for row in &self.sources {
            csv.write_record([
                row.id.to_string(),
                row.name.clone(),
                row.amount.to_decimal_string(),
                row.frequency.to_string(),
                row.monthly.to_decimal_string(),
                row.is_active.to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}
