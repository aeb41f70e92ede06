//! CSV Export functionality
//!
//! Exports transactions in a spreadsheet-friendly layout. Amounts use a
//! plain `1234.50` notation regardless of the display locale.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Transaction;

/// Export transactions to CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Description", "Category", "Type", "Amount"])?;

    for txn in transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.kind.to_string(),
            txn.amount.to_decimal_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    #[test]
    fn test_transactions_csv() {
        let snapshot = Snapshot::sample();
        let mut output = Vec::new();
        export_transactions_csv(&snapshot.transactions, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Date,Description,Category,Type,Amount"));
        assert_eq!(
            lines.next(),
            Some("txn-1,2026-02-19,REWE Supermarkt,Ernährung,expense,-45.50")
        );
        assert_eq!(text.lines().count(), 7);
    }
}
