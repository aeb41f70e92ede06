//! Report summaries
//!
//! Averages over a monthly series, period-over-period change, savings goal
//! projection and the derived rows behind the trend and dashboard reports.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    BudgetCategory, CategoryTrend, MonthlyDataPoint, Money, SavingsGoal, Transaction,
    TransactionType, YearMonth,
};
use crate::services::budget::{category_total, grand_total};

/// Mean values of a monthly series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PeriodAverages {
    pub avg_income: Money,
    pub avg_expenses: Money,
    pub avg_savings: Money,
    pub avg_savings_rate: f64,
}

/// Arithmetic means over `series`
///
/// An empty series yields all zeros. Months without income have no savings
/// rate and count as 0 % in the rate average.
pub fn period_averages(series: &[MonthlyDataPoint]) -> PeriodAverages {
    if series.is_empty() {
        return PeriodAverages::default();
    }
    let n = series.len() as i64;

    let income: Money = series.iter().map(|p| p.income).sum();
    let expenses: Money = series.iter().map(|p| p.expenses).sum();
    let savings: Money = series.iter().map(MonthlyDataPoint::savings).sum();
    let rate_sum: f64 = series.iter().map(|p| p.savings_rate().unwrap_or(0.0)).sum();

    PeriodAverages {
        avg_income: income.div_round(n),
        avg_expenses: expenses.div_round(n),
        avg_savings: savings.div_round(n),
        avg_savings_rate: rate_sum / n as f64,
    }
}

/// The last `months` points of a series (all of it when shorter)
pub fn trailing_window(series: &[MonthlyDataPoint], months: usize) -> &[MonthlyDataPoint] {
    &series[series.len().saturating_sub(months)..]
}

/// (current − baseline) / baseline × 100
///
/// A zero baseline has no defined change and yields
/// [`LedgerError::DivisionByZero`] rather than an infinity.
pub fn percent_change(current: f64, baseline: f64) -> LedgerResult<f64> {
    if baseline == 0.0 {
        return Err(LedgerError::DivisionByZero("baseline"));
    }
    Ok((current - baseline) / baseline * 100.0)
}

/// [`percent_change`] for money amounts
pub fn money_change(current: Money, baseline: Money) -> LedgerResult<f64> {
    percent_change(current.cents() as f64, baseline.cents() as f64)
}

/// Latest month of a series compared against the series average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestVsAverage {
    pub month: String,
    pub income: Option<f64>,
    pub expenses: Option<f64>,
    pub savings: Option<f64>,
    pub savings_rate: Option<f64>,
}

/// Percent change of the last data point against the period averages
///
/// Returns `None` for an empty series. Each change is `None` when its average
/// is zero.
pub fn change_from_average(series: &[MonthlyDataPoint]) -> Option<LatestVsAverage> {
    let latest = series.last()?;
    let avg = period_averages(series);

    Some(LatestVsAverage {
        month: latest.month.clone(),
        income: money_change(latest.income, avg.avg_income).ok(),
        expenses: money_change(latest.expenses, avg.avg_expenses).ok(),
        savings: money_change(latest.savings(), avg.avg_savings).ok(),
        savings_rate: percent_change(latest.savings_rate().unwrap_or(0.0), avg.avg_savings_rate)
            .ok(),
    })
}

/// Months still needed to reach a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthsRemaining {
    /// Current savings already meet the target
    Reached,
    Months(u32),
    /// Nothing is being saved, so the goal is never reached
    Unreachable,
}

/// Progress toward a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProjection {
    /// Progress clamped to 0-100 for display
    pub progress_percent: f64,
    /// Unclamped progress
    pub raw_progress_percent: f64,
    pub overachieved: bool,
    /// Amount still missing (zero once reached)
    pub remaining: Money,
    pub months_remaining: MonthsRemaining,
}

/// Project a savings goal forward at its observed monthly average
pub fn goal_projection(goal: &SavingsGoal) -> LedgerResult<GoalProjection> {
    if goal.target.is_zero() {
        return Err(LedgerError::DivisionByZero("savings goal target"));
    }
    if goal.target.is_negative() {
        return Err(LedgerError::validation("target", "savings goal target must be positive"));
    }

    let raw = goal.current.cents() as f64 * 100.0 / goal.target.cents() as f64;
    let missing = goal.target - goal.current;

    let months_remaining = if !missing.is_positive() {
        MonthsRemaining::Reached
    } else if !goal.monthly_average.is_positive() {
        MonthsRemaining::Unreachable
    } else {
        let avg = i128::from(goal.monthly_average.cents());
        let months = (i128::from(missing.cents()) + avg - 1) / avg;
        MonthsRemaining::Months(u32::try_from(months).unwrap_or(u32::MAX))
    };

    Ok(GoalProjection {
        progress_percent: raw.clamp(0.0, 100.0),
        raw_progress_percent: raw,
        overachieved: raw > 100.0,
        remaining: if missing.is_positive() { missing } else { Money::zero() },
        months_remaining,
    })
}

/// A category trend with its computed change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub category: String,
    pub color: String,
    pub current: Money,
    pub previous: Money,
    /// Percent change versus previous; `None` when there was no previous spending
    pub change: Option<f64>,
}

/// Attach period-over-period change to each trend
pub fn category_trends(trends: &[CategoryTrend]) -> Vec<TrendRow> {
    trends
        .iter()
        .map(|t| TrendRow {
            category: t.category.clone(),
            color: t.color.clone(),
            current: t.current,
            previous: t.previous,
            change: money_change(t.current, t.previous).ok(),
        })
        .collect()
}

/// Build one data point per calendar month from booked transactions
///
/// Amounts are taken by magnitude and assigned by type, so a sign slip in
/// the data does not turn an expense into income.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyDataPoint> {
    let mut months: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();
    for txn in transactions {
        let entry = months
            .entry(YearMonth::from_date(txn.date))
            .or_insert((Money::zero(), Money::zero()));
        match txn.kind {
            TransactionType::Income => entry.0 += txn.amount.abs(),
            TransactionType::Expense => entry.1 += txn.amount.abs(),
        }
    }

    months
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyDataPoint::new(month.label(), income, expenses))
        .collect()
}

/// Share of the planned budget taken by one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub category: String,
    pub color: String,
    pub amount: Money,
    pub percentage: f64,
}

/// Per-category share of the budget grand total, largest first
///
/// Categories without active items are left out.
pub fn expense_breakdown(categories: &[BudgetCategory]) -> Vec<ExpenseShare> {
    let total = grand_total(categories);
    let mut shares: Vec<ExpenseShare> = categories
        .iter()
        .map(|c| (c, category_total(c)))
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(c, amount)| ExpenseShare {
            category: c.name.clone(),
            color: c.color.clone(),
            amount,
            // total is non-zero whenever any category is
            percentage: amount.cents() as f64 / total.cents() as f64 * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, CategoryId, ItemId, TransactionId};
    use chrono::NaiveDate;

    fn sample_series() -> Vec<MonthlyDataPoint> {
        [
            ("Sep 2025", 1024, 980),
            ("Okt 2025", 1024, 1050),
            ("Nov 2025", 1200, 945),
            ("Dez 2025", 1400, 1200),
            ("Jan 2026", 1024, 890),
            ("Feb 2026", 1024, 966),
        ]
        .into_iter()
        .map(|(m, i, e)| MonthlyDataPoint::new(m, Money::from_major(i), Money::from_major(e)))
        .collect()
    }

    #[test]
    fn test_period_averages() {
        let avg = period_averages(&sample_series());
        // 6696 / 6 = 1116
        assert_eq!(avg.avg_income, Money::from_major(1116));
        // 6031 / 6 = 1005.1666 -> 1005.17
        assert_eq!(avg.avg_expenses, Money::from_cents(100517));
        // 665 / 6 = 110.8333 -> 110.83
        assert_eq!(avg.avg_savings, Money::from_cents(11083));
        assert!((avg.avg_savings_rate - 9.3406).abs() < 0.001);
    }

    #[test]
    fn test_period_averages_empty_is_zero() {
        let avg = period_averages(&[]);
        assert_eq!(avg, PeriodAverages::default());
        assert_eq!(avg.avg_savings_rate, 0.0);
    }

    #[test]
    fn test_trailing_window() {
        let series = sample_series();
        let last3 = trailing_window(&series, 3);
        assert_eq!(last3.len(), 3);
        assert_eq!(last3[0].month, "Dez 2025");
        assert_eq!(trailing_window(&series, 12).len(), 6);
        assert!(trailing_window(&series, 0).is_empty());

        // 1400 + 1024 + 1024 = 3448 / 3 = 1149.33
        assert_eq!(period_averages(last3).avg_income, Money::from_cents(114933));
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0).unwrap(), 50.0);
        assert_eq!(percent_change(50.0, 100.0).unwrap(), -50.0);
        assert_eq!(percent_change(0.0, 100.0).unwrap(), -100.0);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        let err = percent_change(150.0, 0.0).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_change_from_average() {
        let latest = change_from_average(&sample_series()).unwrap();
        assert_eq!(latest.month, "Feb 2026");
        // (1024 - 1116) / 1116
        assert!((latest.income.unwrap() + 8.2437).abs() < 0.001);
        assert!(latest.expenses.unwrap() < 0.0);
        assert!(change_from_average(&[]).is_none());

        let flat = vec![MonthlyDataPoint::new("Jan 2026", Money::zero(), Money::zero())];
        assert_eq!(change_from_average(&flat).unwrap().income, None);
    }

    #[test]
    fn test_goal_projection() {
        let goal = SavingsGoal {
            target: Money::from_major(1000),
            current: Money::from_major(644),
            monthly_target: Money::from_major(84),
            monthly_average: Money::from_major(58),
        };
        let projection = goal_projection(&goal).unwrap();
        assert_eq!(projection.progress_percent, 64.4);
        assert_eq!(projection.months_remaining, MonthsRemaining::Months(7));
        assert_eq!(projection.remaining, Money::from_major(356));
        assert!(!projection.overachieved);
    }

    #[test]
    fn test_goal_projection_overachieved() {
        let goal = SavingsGoal {
            target: Money::from_major(1000),
            current: Money::from_major(1250),
            monthly_target: Money::from_major(84),
            monthly_average: Money::from_major(58),
        };
        let projection = goal_projection(&goal).unwrap();
        assert_eq!(projection.progress_percent, 100.0);
        assert_eq!(projection.raw_progress_percent, 125.0);
        assert!(projection.overachieved);
        assert_eq!(projection.months_remaining, MonthsRemaining::Reached);
        assert_eq!(projection.remaining, Money::zero());
    }

    #[test]
    fn test_goal_projection_unreachable() {
        let mut goal = SavingsGoal {
            target: Money::from_major(1000),
            current: Money::from_major(100),
            monthly_target: Money::from_major(84),
            monthly_average: Money::zero(),
        };
        assert_eq!(
            goal_projection(&goal).unwrap().months_remaining,
            MonthsRemaining::Unreachable
        );

        goal.monthly_average = Money::from_major(-10);
        assert_eq!(
            goal_projection(&goal).unwrap().months_remaining,
            MonthsRemaining::Unreachable
        );
    }

    #[test]
    fn test_goal_projection_extreme_amounts() {
        let mut goal = SavingsGoal {
            target: Money::from_cents(i64::MAX),
            current: Money::zero(),
            monthly_target: Money::zero(),
            monthly_average: Money::from_cents(i64::MAX),
        };
        assert_eq!(goal_projection(&goal).unwrap().months_remaining, MonthsRemaining::Months(1));

        goal.monthly_average = Money::from_cents(1);
        assert_eq!(
            goal_projection(&goal).unwrap().months_remaining,
            MonthsRemaining::Months(u32::MAX)
        );
    }

    #[test]
    fn test_goal_projection_zero_target() {
        let goal = SavingsGoal {
            target: Money::zero(),
            current: Money::zero(),
            monthly_target: Money::zero(),
            monthly_average: Money::zero(),
        };
        assert!(goal_projection(&goal).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_category_trends() {
        let trends = vec![
            CategoryTrend::new("Wohnen", Money::from_major(500), Money::from_major(500)),
            CategoryTrend::new("Auto", Money::from_major(57), Money::from_major(45)),
            CategoryTrend::new("Neu", Money::from_major(20), Money::zero()),
        ];
        let rows = category_trends(&trends);
        assert_eq!(rows[0].change, Some(0.0));
        assert!((rows[1].change.unwrap() - 26.666).abs() < 0.01);
        assert_eq!(rows[2].change, None);
    }

    #[test]
    fn test_monthly_series_from_transactions() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let txns = vec![
            Transaction::new(TransactionId::new(1), d(2026, 2, 15), Money::from_major(1024), "Gehalt", "Einkommen", TransactionType::Income),
            Transaction::new(TransactionId::new(2), d(2026, 2, 1), Money::from_major(-500), "Miete", "Wohnen", TransactionType::Expense),
            Transaction::new(TransactionId::new(3), d(2026, 1, 25), Money::from_cents(-8999), "Tankstelle", "Auto", TransactionType::Expense),
        ];
        let series = monthly_series(&txns);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "Jan 2026");
        assert_eq!(series[0].income, Money::zero());
        assert_eq!(series[0].expenses, Money::from_cents(8999));
        assert_eq!(series[1].month, "Feb 2026");
        assert_eq!(series[1].savings(), Money::from_major(524));
    }

    #[test]
    fn test_expense_breakdown() {
        let budget = vec![
            BudgetCategory::new(CategoryId::new(1), "Wohnen", "#ef4444", "")
                .with_item(BudgetItem::new(ItemId::new(1), "Miete", Money::from_major(300), true)),
            BudgetCategory::new(CategoryId::new(2), "Leer", "", ""),
            BudgetCategory::new(CategoryId::new(3), "Ernährung", "#06b6d4", "")
                .with_item(BudgetItem::new(ItemId::new(2), "Essen", Money::from_major(100), false)),
        ];
        let shares = expense_breakdown(&budget);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Wohnen");
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
        assert!(expense_breakdown(&[]).is_empty());
    }
}
