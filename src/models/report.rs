//! Report inputs: monthly trend points, savings goal and category trends

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Income and expenses of one month
///
/// Savings and savings rate are always derived, so they cannot drift from
/// the amounts they summarise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDataPoint {
    /// Display label, e.g. "Okt 2025"
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyDataPoint {
    pub fn new(month: impl Into<String>, income: Money, expenses: Money) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
        }
    }

    /// income − expenses
    pub fn savings(&self) -> Money {
        self.income - self.expenses
    }

    /// savings / income × 100, `None` when the month had no income
    pub fn savings_rate(&self) -> Option<f64> {
        if self.income.is_zero() {
            None
        } else {
            Some(self.savings().cents() as f64 / self.income.cents() as f64 * 100.0)
        }
    }
}

/// A savings target and the pace at which it is being approached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub target: Money,
    pub current: Money,
    /// Planned monthly contribution
    pub monthly_target: Money,
    /// Observed monthly contribution
    pub monthly_average: Money,
}

/// Spending of one category this period versus last period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrend {
    pub category: String,
    #[serde(default)]
    pub color: String,
    pub current: Money,
    pub previous: Money,
}

impl CategoryTrend {
    pub fn new(category: impl Into<String>, current: Money, previous: Money) -> Self {
        Self {
            category: category.into(),
            color: String::new(),
            current,
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_derived() {
        let point = MonthlyDataPoint::new("Sep 2025", Money::from_major(1024), Money::from_major(980));
        assert_eq!(point.savings(), Money::from_major(44));
        let rate = point.savings_rate().unwrap();
        assert!((rate - 4.296875).abs() < 1e-9);
    }

    #[test]
    fn test_negative_savings() {
        let point = MonthlyDataPoint::new("Okt 2025", Money::from_major(1024), Money::from_major(1050));
        assert_eq!(point.savings(), Money::from_major(-26));
        assert!(point.savings_rate().unwrap() < 0.0);
    }

    #[test]
    fn test_savings_rate_without_income() {
        let point = MonthlyDataPoint::new("Jan 2026", Money::zero(), Money::from_major(10));
        assert_eq!(point.savings_rate(), None);
    }
}
