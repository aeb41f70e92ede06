//! Reports module for pocket-ledger
//!
//! Each report is generated from snapshot data, renders itself for the
//! terminal and exports to CSV.

pub mod budget_overview;
pub mod dashboard;
pub mod income;
pub mod transactions;
pub mod trends;

pub use budget_overview::{BudgetOverviewReport, CategoryReportRow};
pub use dashboard::DashboardReport;
pub use income::{IncomeReport, IncomeRow};
pub use transactions::TransactionRegisterReport;
pub use trends::{GoalSummary, MonthRow, TrendsReport};
