//! Transaction Register Report
//!
//! The filtered and sorted transaction list, with income and expense totals
//! for one calendar month.

use serde::Serialize;
use std::io::Write;

use crate::display::{double_separator, separator};
use crate::error::LedgerResult;
use crate::export::export_transactions_csv;
use crate::models::{Money, MoneyFormat, Transaction, TransactionType, YearMonth};
use crate::services::transaction::{monthly_total, query, SortKey, SortOrder, TransactionFilter};

/// Transaction Register Report
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRegisterReport {
    /// Matching transactions in display order
    pub entries: Vec<Transaction>,
    /// Number of transactions before filtering
    pub total_count: usize,
    #[serde(serialize_with = "serialize_display")]
    pub sort_key: SortKey,
    #[serde(serialize_with = "serialize_display")]
    pub sort_order: SortOrder,
    /// Month the totals refer to
    pub month: YearMonth,
    /// Income booked in `month`, across all transactions
    pub month_income: Money,
    /// Expenses booked in `month`, across all transactions
    pub month_expenses: Money,
}

fn serialize_display<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl TransactionRegisterReport {
    /// Generate the register
    ///
    /// The month totals ignore the filter, like the summary cards above the
    /// transaction list.
    pub fn generate(
        transactions: &[Transaction],
        filter: &TransactionFilter,
        sort_key: SortKey,
        sort_order: SortOrder,
        month: YearMonth,
    ) -> Self {
        Self {
            entries: query(transactions, filter, sort_key, sort_order),
            total_count: transactions.len(),
            sort_key,
            sort_order,
            month,
            month_income: monthly_total(transactions, month, Some(TransactionType::Income)),
            month_expenses: monthly_total(transactions, month, Some(TransactionType::Expense)),
        }
    }

    /// Default month for the totals: the month of the latest transaction
    pub fn latest_month(transactions: &[Transaction]) -> Option<YearMonth> {
        transactions.iter().map(|t| t.date).max().map(YearMonth::from_date)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &MoneyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Transactions ({} of {}, by {} {})\n",
            self.entries.len(),
            self.total_count,
            self.sort_key,
            self.sort_order
        ));
        output.push_str(&double_separator(84));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:<12} {:<28} {:<16} {:>14}\n",
            "ID", "Date", "Description", "Category", "Amount"
        ));
        output.push_str(&separator(84));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No matching transactions.\n");
        }

        for txn in &self.entries {
            let amount = match txn.kind {
                TransactionType::Income => format!("+{}", txn.amount.abs().format(fmt)),
                TransactionType::Expense => format!("-{}", txn.amount.abs().format(fmt)),
            };
            output.push_str(&format!(
                "{:<10} {:<12} {:<28} {:<16} {:>14}\n",
                txn.id.to_string(),
                txn.date.format("%d.%m.%Y").to_string(),
                truncate(&txn.description, 28),
                truncate(&txn.category, 16),
                amount
            ));
        }

        output.push_str(&separator(84));
        output.push('\n');
        output.push_str(&format!(
            "{}: income {}, expenses {}, net {}\n",
            self.month.label(),
            self.month_income.format(fmt),
            self.month_expenses.format(fmt),
            (self.month_income - self.month_expenses).format(fmt)
        ));

        output
    }

    /// Export the listed transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        export_transactions_csv(&self.entries, writer)
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
