//! Computation layer for pocket-ledger
//!
//! Pure functions over immutable snapshots: budget rollups, income
//! normalisation, transaction queries and report summaries. Nothing here
//! performs I/O or mutates its arguments.

pub mod budget;
pub mod income;
pub mod report;
pub mod transaction;

pub use budget::{
    category_total, fixed_total, grand_total, risk_level, utilization, variable_total, RiskLevel,
    RiskThresholds,
};
pub use income::{monthly_equivalent, total_monthly_income, total_yearly_income, WEEKS_PER_MONTH};
pub use report::{
    change_from_average, goal_projection, percent_change, period_averages, GoalProjection,
    MonthsRemaining, PeriodAverages,
};
pub use transaction::{monthly_total, query, SortKey, SortOrder, TransactionFilter};
