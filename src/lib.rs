//! pocket-ledger - personal finance figures from the command line
//!
//! This library computes the numbers behind a monthly household budget:
//! budget totals and utilization, normalised income, transaction queries and
//! period summaries such as averages, trends and savings goal progress.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, budget items, income, transactions)
//! - `services`: Pure aggregation functions over the models
//! - `snapshot`: Loading and validating a snapshot of all data
//! - `reports`: Terminal and CSV reports built from a snapshot
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use pocket_ledger::services::{grand_total, total_monthly_income};
//! use pocket_ledger::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::sample();
//! let buffer = total_monthly_income(&snapshot.income_sources) - grand_total(&snapshot.categories);
//! assert_eq!(buffer.cents(), 7300);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod snapshot;
pub mod utils;

pub use error::{LedgerError, LedgerResult};
