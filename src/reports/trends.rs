//! Trends Report
//!
//! Monthly income, expenses and savings with their averages, progress toward
//! the savings goal and per-category spending trends.

use serde::Serialize;
use std::io::Write;
use tracing::warn;

use crate::display::{double_separator, format_bar, format_change, format_percent, format_share, separator};
use crate::error::LedgerResult;
use crate::models::{MonthlyDataPoint, Money, MoneyFormat, SavingsGoal};
use crate::services::report::{
    category_trends, change_from_average, goal_projection, monthly_series, period_averages,
    trailing_window, GoalProjection, LatestVsAverage, MonthsRemaining, PeriodAverages, TrendRow,
};
use crate::snapshot::Snapshot;

/// One month of the series with its derived figures
#[derive(Debug, Clone, Serialize)]
pub struct MonthRow {
    pub month: String,
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
    /// `None` when the month had no income
    pub savings_rate: Option<f64>,
}

impl From<&MonthlyDataPoint> for MonthRow {
    fn from(point: &MonthlyDataPoint) -> Self {
        Self {
            month: point.month.clone(),
            income: point.income,
            expenses: point.expenses,
            savings: point.savings(),
            savings_rate: point.savings_rate(),
        }
    }
}

/// The savings goal and, when its target is usable, its projection
#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary {
    pub goal: SavingsGoal,
    pub projection: Option<GoalProjection>,
}

/// Trends Report
#[derive(Debug, Clone, Serialize)]
pub struct TrendsReport {
    pub months: Vec<MonthRow>,
    pub averages: PeriodAverages,
    pub latest: Option<LatestVsAverage>,
    pub goal: Option<GoalSummary>,
    pub trends: Vec<TrendRow>,
}

impl TrendsReport {
    /// Generate the report, optionally limited to the last `months` months
    ///
    /// Without a recorded monthly series the months are derived from the
    /// snapshot's transactions.
    pub fn generate(snapshot: &Snapshot, months: Option<usize>) -> Self {
        let derived;
        let series: &[MonthlyDataPoint] = if snapshot.monthly_data.is_empty() {
            derived = monthly_series(&snapshot.transactions);
            &derived
        } else {
            &snapshot.monthly_data
        };
        let series = match months {
            Some(n) => trailing_window(series, n),
            None => series,
        };

        let goal = snapshot.savings_goal.map(|goal| {
            let projection = match goal_projection(&goal) {
                Ok(projection) => Some(projection),
                Err(e) => {
                    warn!(error = %e, "savings goal cannot be projected");
                    None
                }
            };
            GoalSummary { goal, projection }
        });

        Self {
            months: series.iter().map(MonthRow::from).collect(),
            averages: period_averages(series),
            latest: change_from_average(series),
            goal,
            trends: category_trends(&snapshot.category_trends),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &MoneyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("Reports ({} months)\n", self.months.len()));
        output.push_str(&double_separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14} {:>10}\n",
            "Month", "Income", "Expenses", "Savings", "Rate"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for row in &self.months {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14} {:>10}\n",
                row.month,
                row.income.format(fmt),
                row.expenses.format(fmt),
                row.savings.format(fmt),
                format_change(row.savings_rate)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14} {:>10}\n",
            "Average",
            self.averages.avg_income.format(fmt),
            self.averages.avg_expenses.format(fmt),
            self.averages.avg_savings.format(fmt),
            format_percent(self.averages.avg_savings_rate)
        ));

        if let Some(latest) = &self.latest {
            output.push_str(&format!(
                "{} vs. average: income {}, expenses {}, savings {}\n",
                latest.month,
                format_change(latest.income),
                format_change(latest.expenses),
                format_change(latest.savings)
            ));
        }

        if let Some(summary) = &self.goal {
            output.push_str("\nSavings goal\n");
            output.push_str(&separator(72));
            output.push('\n');
            let goal = &summary.goal;
            match &summary.projection {
                Some(projection) => {
                    output.push_str(&format!(
                        "{} of {} ({})  {}\n",
                        goal.current.format(fmt),
                        goal.target.format(fmt),
                        format_share(projection.raw_progress_percent),
                        format_bar(projection.progress_percent, 100.0, 20)
                    ));
                    output.push_str(&format!(
                        "Monthly target {}, monthly average {}\n",
                        goal.monthly_target.format(fmt),
                        goal.monthly_average.format(fmt)
                    ));
                    let eta = match projection.months_remaining {
                        MonthsRemaining::Reached => "goal reached".to_string(),
                        MonthsRemaining::Months(1) => "about 1 month to go".to_string(),
                        MonthsRemaining::Months(n) => format!("about {} months to go", n),
                        MonthsRemaining::Unreachable => {
                            "not reachable at the current pace".to_string()
                        }
                    };
                    output.push_str(&format!(
                        "Remaining {}, {}\n",
                        projection.remaining.format(fmt),
                        eta
                    ));
                }
                None => output.push_str("Savings goal has no target.\n"),
            }
        }

        if !self.trends.is_empty() {
            output.push_str("\nCategory trends\n");
            output.push_str(&separator(72));
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>14} {:>14} {:>10}\n",
                "Category", "Current", "Previous", "Change"
            ));
            for trend in &self.trends {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>14} {:>10}\n",
                    trend.category,
                    trend.current.format(fmt),
                    trend.previous.format(fmt),
                    format_change(trend.change)
                ));
            }
        }

        output
    }

    /// Export the monthly series and its averages to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Income", "Expenses", "Savings", "Savings Rate"])?;

        for row in &self.months {
            csv.write_record([
                row.month.clone(),
                row.income.to_decimal_string(),
                row.expenses.to_decimal_string(),
                row.savings.to_decimal_string(),
                row.savings_rate
                    .map(|r| format!("{:.1}", r))
                    .unwrap_or_default(),
            ])?;
        }

        csv.write_record([
            "Average".to_string(),
            self.averages.avg_income.to_decimal_string(),
            self.averages.avg_expenses.to_decimal_string(),
            self.averages.avg_savings.to_decimal_string(),
            format!("{:.1}", self.averages.avg_savings_rate),
        ])?;

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_sample() {
        let report = TrendsReport::generate(&Snapshot::sample(), None);

        assert_eq!(report.months.len(), 6);
        assert_eq!(report.months[1].savings, Money::from_major(-26));
        assert_eq!(report.averages.avg_income, Money::from_major(1116));
        assert_eq!(report.trends.len(), 6);

        let goal = report.goal.unwrap();
        let projection = goal.projection.unwrap();
        assert_eq!(projection.progress_percent, 64.4);
        assert_eq!(projection.months_remaining, MonthsRemaining::Months(7));
    }

    #[test]
    fn test_window_limits_series() {
        let report = TrendsReport::generate(&Snapshot::sample(), Some(3));
        assert_eq!(report.months.len(), 3);
        assert_eq!(report.months[0].month, "Dez 2025");
        assert_eq!(report.latest.unwrap().month, "Feb 2026");
    }

    #[test]
    fn test_series_derived_from_transactions() {
        let mut snapshot = Snapshot::sample();
        snapshot.monthly_data.clear();

        let report = TrendsReport::generate(&snapshot, None);
        assert_eq!(report.months.len(), 2);
        assert_eq!(report.months[0].month, "Jan 2026");
        assert_eq!(report.months[0].savings_rate, None);
        assert_eq!(report.months[1].income, Money::from_major(1024));
    }

    #[test]
    fn test_zero_target_goal_is_kept_without_projection() {
        let mut snapshot = Snapshot::sample();
        if let Some(goal) = snapshot.savings_goal.as_mut() {
            goal.target = Money::zero();
        }

        let report = TrendsReport::generate(&snapshot, None);
        assert!(report.goal.as_ref().unwrap().projection.is_none());
        assert!(report
            .format_terminal(&MoneyFormat::default())
            .contains("Savings goal has no target."));
    }

    #[test]
    fn test_empty_snapshot() {
        let report = TrendsReport::generate(&Snapshot::default(), None);
        assert!(report.months.is_empty());
        assert_eq!(report.averages, PeriodAverages::default());
        assert!(report.latest.is_none());
        assert!(report.goal.is_none());
    }

    #[test]
    fn test_terminal_format() {
        let output = TrendsReport::generate(&Snapshot::sample(), None)
            .format_terminal(&MoneyFormat::default());

        assert!(output.contains("Reports (6 months)"));
        assert!(output.contains("Okt 2025"));
        assert!(output.contains("-26,00 €"));
        assert!(output.contains("644,00 € of 1.000,00 € (64.4%)"));
        assert!(output.contains("about 7 months to go"));
        assert!(output.contains("+26.7%"));
    }

    #[test]
    fn test_csv_export() {
        let mut output = Vec::new();
        TrendsReport::generate(&Snapshot::sample(), None)
            .export_csv(&mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.lines().next(),
            Some("Month,Income,Expenses,Savings,Savings Rate")
        );
        assert!(text.contains("Okt 2025,1024.00,1050.00,-26.00,-2.5"));
        assert!(text.contains("Average,1116.00,1005.17,110.83,9.3"));
    }
}
