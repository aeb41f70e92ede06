//! Core data models for pocket-ledger
//!
//! Plain records describing the finance domain: budget categories and items,
//! income sources, transactions and the inputs of the trend reports.

pub mod budget;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod report;
pub mod transaction;

pub use budget::{validate_budget, BudgetCategory, BudgetItem, BudgetValidationError};
pub use ids::{CategoryId, IncomeId, ItemId, TransactionId};
pub use income::{Frequency, IncomeSource, IncomeValidationError, NewIncomeSource};
pub use money::{Currency, Locale, Money, MoneyFormat, MoneyParseError};
pub use period::{PeriodParseError, YearMonth};
pub use report::{CategoryTrend, MonthlyDataPoint, SavingsGoal};
pub use transaction::{NewTransaction, Transaction, TransactionType, TransactionValidationError};
