//! Transaction CLI command
//!
//! Lists transactions with search, category filter and sorting, followed by
//! the income and expense totals of one month.

use clap::Args;
use std::path::PathBuf;

use super::create_output;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::YearMonth;
use crate::reports::TransactionRegisterReport;
use crate::services::transaction::{SortKey, SortOrder, TransactionFilter};
use crate::snapshot::Snapshot;

/// Arguments of `transactions`
#[derive(Args, Debug)]
pub struct TransactionArgs {
    /// Case-insensitive search in description and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category ("all" lists every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort by date, amount, description or category
    #[arg(long, default_value = "date")]
    pub sort: SortKey,

    /// Sort order: asc or desc
    #[arg(long, default_value = "desc")]
    pub order: SortOrder,

    /// Month for the totals (YYYY-MM); defaults to the latest transaction's month
    #[arg(short, long)]
    pub month: Option<YearMonth>,

    /// Export the listed transactions to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the transactions command
pub fn handle_transaction_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: TransactionArgs,
) -> LedgerResult<()> {
    let mut filter = TransactionFilter::new();
    if let Some(term) = args.search {
        filter = filter.search(term);
    }
    if let Some(category) = args.category {
        filter = filter.category(category);
    }

    let month = args
        .month
        .or_else(|| TransactionRegisterReport::latest_month(&snapshot.transactions))
        .unwrap_or_else(YearMonth::current);

    let report = TransactionRegisterReport::generate(
        &snapshot.transactions,
        &filter,
        args.sort,
        args.order,
        month,
    );

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!(
            "Exported {} transactions to: {}",
            report.entries.len(),
            path.display()
        );
    } else {
        println!("{}", report.format_terminal(&settings.money_format));
    }

    Ok(())
}
