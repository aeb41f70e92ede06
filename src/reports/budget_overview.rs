//! Budget Overview Report
//!
//! Every category with its active total, the fixed/variable split and the
//! share of monthly income it takes, followed by budget-wide totals.

use serde::Serialize;
use std::io::Write;

use crate::display::{double_separator, format_share, risk_marker, separator};
use crate::error::LedgerResult;
use crate::models::{BudgetCategory, BudgetItem, CategoryId, IncomeSource, Money, MoneyFormat};
use crate::services::budget::{
    category_fixed_total, category_total, category_variable_total, fixed_total, grand_total,
    risk_level, utilization, variable_total, RiskLevel, RiskThresholds,
};
use crate::services::income::total_monthly_income;

/// A row in the budget report for a single category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReportRow {
    pub category_id: CategoryId,
    pub name: String,
    pub icon: String,
    pub total: Money,
    pub fixed: Money,
    pub variable: Money,
    pub active_count: usize,
    /// Every item, active or not, in budget order
    pub items: Vec<BudgetItem>,
    /// Share of monthly income; `None` without income
    pub utilization: Option<f64>,
    pub risk: Option<RiskLevel>,
}

impl CategoryReportRow {
    /// Whether the category is above the warn threshold
    pub fn is_at_risk(&self) -> bool {
        matches!(self.risk, Some(RiskLevel::Warn) | Some(RiskLevel::Danger))
    }
}

/// Budget Overview Report
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverviewReport {
    pub total_income: Money,
    pub categories: Vec<CategoryReportRow>,
    pub grand_total: Money,
    pub fixed_total: Money,
    pub variable_total: Money,
    pub utilization: Option<f64>,
    pub risk: Option<RiskLevel>,
}

impl BudgetOverviewReport {
    /// Generate the overview for a budget against the given income
    pub fn generate(
        categories: &[BudgetCategory],
        income_sources: &[IncomeSource],
        thresholds: &RiskThresholds,
    ) -> Self {
        let total_income = total_monthly_income(income_sources);
        let classify = |spent: Money| {
            let util = utilization(spent, total_income).ok();
            (util, util.map(|u| risk_level(u, thresholds)))
        };

        let rows = categories
            .iter()
            .map(|category| {
                let total = category_total(category);
                let (utilization, risk) = classify(total);
                CategoryReportRow {
                    category_id: category.id,
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                    total,
                    fixed: category_fixed_total(category),
                    variable: category_variable_total(category),
                    active_count: category.active_count(),
                    items: category.items.clone(),
                    utilization,
                    risk,
                }
            })
            .collect();

        let grand = grand_total(categories);
        let (utilization, risk) = classify(grand);

        Self {
            total_income,
            categories: rows,
            grand_total: grand,
            fixed_total: fixed_total(categories),
            variable_total: variable_total(categories),
            utilization,
            risk,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &MoneyFormat) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&double_separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14} {:>14} {:>14} {:>7}\n",
            "Category", "Total", "Fixed", "Variable", "Income"
        ));
        output.push_str(&separator(80));
        output.push('\n');

        for row in &self.categories {
            let label = if row.icon.is_empty() {
                row.name.clone()
            } else {
                format!("{} {}", row.icon, row.name)
            };
            let share = match (row.utilization, row.risk) {
                (Some(util), Some(risk)) => format!("{}{}", format_share(util), risk_marker(risk)),
                _ => "n/a".to_string(),
            };
            output.push_str(&format!(
                "{:<28} {:>14} {:>14} {:>14} {:>7}\n",
                label,
                row.total.format(fmt),
                row.fixed.format(fmt),
                row.variable.format(fmt),
                share
            ));

            for item in &row.items {
                let kind = if item.is_fixed { "fixed" } else { "variable" };
                let state = if item.is_active { "" } else { " (inactive)" };
                output.push_str(&format!(
                    "    {:<8} {:<22} {:>14}  {}{}\n",
                    item.id.to_string(),
                    item.name,
                    item.amount.format(fmt),
                    kind,
                    state
                ));
            }
        }

        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14} {:>14} {:>14}\n",
            "GRAND TOTAL",
            self.grand_total.format(fmt),
            self.fixed_total.format(fmt),
            self.variable_total.format(fmt)
        ));
        output.push_str(&format!(
            "Monthly income: {}",
            self.total_income.format(fmt)
        ));
        match (self.utilization, self.risk) {
            (Some(util), Some(risk)) => output.push_str(&format!(
                "   Utilization: {}{}\n",
                format_share(util),
                risk_marker(risk)
            )),
            _ => output.push_str("   Utilization: n/a\n"),
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record([
            "Category",
            "Total",
            "Fixed",
            "Variable",
            "Active Items",
            "Utilization",
            "Risk",
        ])?;

        let percent = |value: Option<f64>| value.map(|v| format!("{:.1}", v)).unwrap_or_default();
        let risk = |value: Option<RiskLevel>| value.map(|r| r.to_string()).unwrap_or_default();

        for row in &self.categories {
            csv.write_record([
                row.name.clone(),
                row.total.to_decimal_string(),
                row.fixed.to_decimal_string(),
                row.variable.to_decimal_string(),
                row.active_count.to_string(),
                percent(row.utilization),
                risk(row.risk),
            ])?;
        }

        csv.write_record([
            "GRAND TOTAL".to_string(),
            self.grand_total.to_decimal_string(),
            self.fixed_total.to_decimal_string(),
            self.variable_total.to_decimal_string(),
            self.categories
                .iter()
                .map(|row| row.active_count)
                .sum::<usize>()
                .to_string(),
            percent(self.utilization),
            risk(self.risk),
        ])?;

        csv.flush()?;
        Ok(())
    }

    /// Categories above the warn threshold
    pub fn at_risk_categories(&self) -> Vec<&CategoryReportRow> {
        self.categories.iter().filter(|row| row.is_at_risk()).collect()
    }
}
