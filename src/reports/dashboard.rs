//! Dashboard Report
//!
//! Income against planned spending for the month: the remaining buffer,
//! budget utilization with its risk level, the fixed/variable split and each
//! category's share of the budget.

use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::display::{
    double_separator, format_bar, format_change, format_share, risk_marker, separator,
};
use crate::error::LedgerResult;
use crate::models::{Money, MoneyFormat};
use crate::services::budget::{
    fixed_total, grand_total, risk_level, utilization, variable_total, RiskLevel,
};
use crate::services::income::total_monthly_income;
use crate::services::report::{expense_breakdown, money_change, ExpenseShare};
use crate::snapshot::Snapshot;

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Monthly income from active sources
    pub total_income: Money,
    /// Planned monthly spending (budget grand total)
    pub total_expenses: Money,
    pub fixed_expenses: Money,
    pub variable_expenses: Money,
    /// Income left after planned spending
    pub buffer: Money,
    /// Buffer as a share of income; `None` without income
    pub buffer_share: Option<f64>,
    /// Whether the buffer exceeds the configured comfort threshold
    pub buffer_comfortable: bool,
    /// Share of income taken by the budget, capped at 100; `None` without income
    pub utilization: Option<f64>,
    pub risk: Option<RiskLevel>,
    /// Change of income versus the previous month of the series
    pub income_trend: Option<f64>,
    /// Change of expenses versus the previous month of the series
    pub expense_trend: Option<f64>,
    pub breakdown: Vec<ExpenseShare>,
}

impl DashboardReport {
    /// Generate the dashboard for a snapshot
    pub fn generate(snapshot: &Snapshot, settings: &Settings) -> Self {
        let total_income = total_monthly_income(&snapshot.income_sources);
        let total_expenses = grand_total(&snapshot.categories);
        let buffer = total_income - total_expenses;

        let utilization_pct = utilization(total_expenses, total_income).ok();
        let risk = utilization_pct.map(|u| risk_level(u, &settings.risk_thresholds));

        let buffer_share = if total_income.is_zero() {
            None
        } else {
            Some(buffer.cents() as f64 / total_income.cents() as f64 * 100.0)
        };

        let (income_trend, expense_trend) = match snapshot.monthly_data.as_slice() {
            [.., previous, latest] => (
                money_change(latest.income, previous.income).ok(),
                money_change(latest.expenses, previous.expenses).ok(),
            ),
            _ => (None, None),
        };

        Self {
            total_income,
            total_expenses,
            fixed_expenses: fixed_total(&snapshot.categories),
            variable_expenses: variable_total(&snapshot.categories),
            buffer,
            buffer_share,
            buffer_comfortable: buffer > settings.dashboard_buffer_threshold,
            utilization: utilization_pct,
            risk,
            income_trend,
            expense_trend,
            breakdown: expense_breakdown(&snapshot.categories),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &MoneyFormat) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&double_separator(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<22} {:>16}   {} vs. last month\n",
            "Income",
            self.total_income.format(fmt),
            format_change(self.income_trend)
        ));
        output.push_str(&format!(
            "{:<22} {:>16}   {} vs. last month\n",
            "Planned expenses",
            self.total_expenses.format(fmt),
            format_change(self.expense_trend)
        ));
        output.push_str(&format!(
            "  {:<20} {:>16}\n",
            "Fixed",
            self.fixed_expenses.format(fmt)
        ));
        output.push_str(&format!(
            "  {:<20} {:>16}\n",
            "Variable",
            self.variable_expenses.format(fmt)
        ));
        output.push_str(&separator(60));
        output.push('\n');

        let buffer_note = match self.buffer_share {
            Some(share) => format!("{} of income", format_share(share)),
            None => "no income".to_string(),
        };
        output.push_str(&format!(
            "{:<22} {:>16}   {}{}\n",
            "Available buffer",
            self.buffer.format(fmt),
            buffer_note,
            if self.buffer_comfortable { "" } else { " (low)" }
        ));

        match (self.utilization, self.risk) {
            (Some(util), Some(risk)) => output.push_str(&format!(
                "{:<22} {:>16}   {}\n",
                "Budget utilization",
                format!("{}{}", format_share(util), risk_marker(risk)),
                format_bar(util, 100.0, 20)
            )),
            _ => output.push_str(&format!("{:<22} {:>16}\n", "Budget utilization", "n/a")),
        }

        if !self.breakdown.is_empty() {
            output.push_str("\nExpense breakdown\n");
            output.push_str(&separator(60));
            output.push('\n');
            for share in &self.breakdown {
                output.push_str(&format!(
                    "{:<22} {:>16} {:>7}  {}\n",
                    share.category,
                    share.amount.format(fmt),
                    format_share(share.percentage),
                    format_bar(share.percentage, 100.0, 10)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(["Metric", "Amount", "Percentage"])?;

        let percent = |value: Option<f64>| value.map(|v| format!("{:.1}", v)).unwrap_or_default();
        let rows = [
            ("Income".to_string(), self.total_income.to_decimal_string(), String::new()),
            ("Expenses".to_string(), self.total_expenses.to_decimal_string(), String::new()),
            ("Fixed".to_string(), self.fixed_expenses.to_decimal_string(), String::new()),
            ("Variable".to_string(), self.variable_expenses.to_decimal_string(), String::new()),
            ("Buffer".to_string(), self.buffer.to_decimal_string(), percent(self.buffer_share)),
            ("Utilization".to_string(), String::new(), percent(self.utilization)),
        ];
        let categories = self.breakdown.iter().map(|share| {
            (
                format!("Category: {}", share.category),
                share.amount.to_decimal_string(),
                format!("{:.1}", share.percentage),
            )
        });

        for (metric, amount, pct) in rows.into_iter().chain(categories) {
            csv.write_record([metric, amount, pct])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, BudgetItem, CategoryId, ItemId};

    #[test]
    fn test_generate_from_sample() {
        let report = DashboardReport::generate(&Snapshot::sample(), &Settings::default());

        assert_eq!(report.total_income, Money::from_major(1039));
        assert_eq!(report.total_expenses, Money::from_major(966));
        assert_eq!(report.fixed_expenses + report.variable_expenses, report.total_expenses);
        assert_eq!(report.buffer, Money::from_major(73));
        assert!(!report.buffer_comfortable);
        // 966 / 1039 = 92.97 %
        assert!((report.utilization.unwrap() - 92.974).abs() < 0.01);
        assert_eq!(report.risk, Some(RiskLevel::Danger));
        assert_eq!(report.breakdown[0].category, "Wohnen");
        assert_eq!(report.income_trend, Some(0.0));
    }

    #[test]
    fn test_without_income() {
        let snapshot = Snapshot::default().with_categories(vec![BudgetCategory::new(
            CategoryId::new(1),
            "Wohnen",
            "",
            "",
        )
        .with_item(BudgetItem::new(ItemId::new(1), "Miete", Money::from_major(500), true))]);

        let report = DashboardReport::generate(&snapshot, &Settings::default());
        assert_eq!(report.utilization, None);
        assert_eq!(report.risk, None);
        assert_eq!(report.buffer, Money::from_major(-500));
        assert!(report.format_terminal(&MoneyFormat::default()).contains("n/a"));
    }

    #[test]
    fn test_terminal_format() {
        let report = DashboardReport::generate(&Snapshot::sample(), &Settings::default());
        let output = report.format_terminal(&MoneyFormat::default());

        assert!(output.contains("Dashboard"));
        assert!(output.contains("1.039,00 €"));
        assert!(output.contains("73,00 €"));
        assert!(output.contains("(low)"));
        assert!(output.contains("93.0% !!"));
    }

    #[test]
    fn test_csv_export() {
        let report = DashboardReport::generate(&Snapshot::sample(), &Settings::default());
        let mut output = Vec::new();
        report.export_csv(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().next(), Some("Metric,Amount,Percentage"));
        assert!(text.contains("Income,1039.00,"));
        assert!(text.contains("Category: Wohnen,500.00,51.8"));
    }
}
