//! Read-only snapshots of the ledger
//!
//! A [`Snapshot`] bundles everything the reports read: budget categories,
//! income sources, transactions, the monthly series, the savings goal and
//! category trends. Snapshots are loaded from JSON or YAML and never written
//! back; edits produce new values in memory only.
//!
//! Amounts on the wire are decimal numbers in currency units (`45.5` or
//! `"45.50"`); see [`Money`](crate::models::Money).

mod sample;

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    validate_budget, BudgetCategory, CategoryTrend, IncomeSource, MonthlyDataPoint, SavingsGoal,
    Transaction,
};

/// On-disk encodings a snapshot can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(LedgerError::Snapshot(format!(
                "Cannot tell the format of {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Everything the reports are computed from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyDataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<SavingsGoal>,
    #[serde(default)]
    pub category_trends: Vec<CategoryTrend>,
}

impl Snapshot {
    /// The demo data set shipped with the tracker
    pub fn sample() -> Self {
        sample::sample_snapshot()
    }

    /// Read and validate a snapshot file
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let format = SnapshotFormat::from_path(path)?;

        let file = File::open(path).map_err(|e| {
            LedgerError::Snapshot(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let snapshot: Snapshot = match format {
            SnapshotFormat::Json => serde_json::from_reader(reader).map_err(|e| {
                LedgerError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            SnapshotFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
                LedgerError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
            })?,
        };

        snapshot.validate()?;
        debug!(
            path = %path.display(),
            categories = snapshot.categories.len(),
            transactions = snapshot.transactions.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse and validate a JSON snapshot
    pub fn from_json_str(contents: &str) -> LedgerResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(contents)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse and validate a YAML snapshot
    pub fn from_yaml_str(contents: &str) -> LedgerResult<Self> {
        let snapshot: Snapshot = serde_yaml::from_str(contents)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check id uniqueness and field invariants
    ///
    /// Transactions whose sign disagrees with their type are accepted and
    /// logged; every consumer compares magnitudes.
    pub fn validate(&self) -> LedgerResult<()> {
        validate_budget(&self.categories)?;

        let mut income_ids = HashSet::new();
        for source in &self.income_sources {
            source.validate()?;
            if !income_ids.insert(source.id) {
                return Err(LedgerError::duplicate("Income source", source.id));
            }
        }

        let mut transaction_ids = HashSet::new();
        for txn in &self.transactions {
            txn.validate()?;
            if !transaction_ids.insert(txn.id) {
                return Err(LedgerError::duplicate("Transaction", txn.id));
            }
            if !txn.has_consistent_sign() {
                warn!(
                    transaction_id = %txn.id,
                    kind = %txn.kind,
                    cents = txn.amount.cents(),
                    "transaction amount sign does not match its type"
                );
            }
        }

        Ok(())
    }

    /// Replace the budget, keeping everything else
    pub fn with_categories(mut self, categories: Vec<BudgetCategory>) -> Self {
        self.categories = categories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use crate::services::budget::{fixed_total, grand_total, variable_total};
    use crate::services::income::total_monthly_income;
    use tempfile::TempDir;

    #[test]
    fn test_sample_totals() {
        let snapshot = Snapshot::sample();
        assert_eq!(snapshot.categories.len(), 8);
        assert_eq!(grand_total(&snapshot.categories), Money::from_major(966));
        assert_eq!(fixed_total(&snapshot.categories), Money::from_major(631));
        assert_eq!(variable_total(&snapshot.categories), Money::from_major(335));
        assert_eq!(total_monthly_income(&snapshot.income_sources), Money::from_major(1039));
        assert_eq!(snapshot.transactions.len(), 6);
        assert_eq!(snapshot.monthly_data.len(), 6);
        assert!(snapshot.savings_goal.is_some());
        snapshot.validate().unwrap();
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("a.JSON")).unwrap(),
            SnapshotFormat::Json
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("a.yml")).unwrap(),
            SnapshotFormat::Yaml
        );
        assert!(SnapshotFormat::from_path(Path::new("a.txt")).is_err());
        assert!(SnapshotFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let sample = Snapshot::sample();
        std::fs::write(&path, serde_json::to_string_pretty(&sample).unwrap()).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.yaml");
        std::fs::write(
            &path,
            r#"
income_sources:
  - id: 1
    name: Gehalt
    amount: 2500
    frequency: monthly
transactions:
  - id: 7
    amount: -19.99
    description: Buchhandlung
    category: Lifestyle
    date: 2026-03-02
    type: expense
"#,
        )
        .unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert!(loaded.categories.is_empty());
        assert_eq!(total_monthly_income(&loaded.income_sources), Money::from_major(2500));
        assert!(loaded.income_sources[0].is_active);
        assert_eq!(loaded.transactions[0].kind, TransactionType::Expense);
        assert_eq!(loaded.transactions[0].amount, Money::from_cents(-1999));
        assert!(loaded.savings_goal.is_none());
    }

    #[test]
    fn test_duplicate_category_ids_are_rejected() {
        let json = r#"{
            "categories": [
                {"id": 1, "name": "Wohnen", "items": []},
                {"id": 1, "name": "Auto", "items": []}
            ]
        }"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Budget category already exists: cat-1");
    }

    #[test]
    fn test_duplicate_income_and_transaction_ids_are_rejected() {
        let json = r#"{
            "income_sources": [
                {"id": 1, "name": "Gehalt", "amount": 1024},
                {"id": 1, "name": "Nebenjob", "amount": 200}
            ]
        }"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert_eq!(err.to_string(), "Income source already exists: inc-1");

        let json = r#"{
            "transactions": [
                {"id": 3, "amount": -12.5, "description": "Kiosk", "category": "Lifestyle",
                 "date": "2026-02-03", "type": "expense"},
                {"id": 3, "amount": -4, "description": "Bäcker", "category": "Ernährung",
                 "date": "2026-02-04", "type": "expense"}
            ]
        }"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Transaction already exists: txn-3");
    }

    #[test]
    fn test_amounts_are_read_in_currency_units() {
        let json = r#"{
            "categories": [
                {"id": 1, "name": "Wohnen", "items": [
                    {"id": 1, "name": "Miete", "amount": 500.00, "is_fixed": true},
                    {"id": 2, "name": "Strom", "amount": "60.50"}
                ]}
            ]
        }"#;
        let snapshot = Snapshot::from_json_str(json).unwrap();
        assert_eq!(grand_total(&snapshot.categories), Money::from_cents(56050));
    }

    #[test]
    fn test_amount_beyond_limit_fails_to_load() {
        let json = r#"{
            "categories": [
                {"id": 1, "name": "Wohnen", "items": [
                    {"id": 1, "name": "Miete", "amount": 1e14}
                ]}
            ]
        }"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert!(matches!(err, LedgerError::Json(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_negative_item_amount_is_rejected() {
        let yaml = r#"
categories:
  - id: 1
    name: Wohnen
    items:
      - id: 1
        name: Miete
        amount: -100
"#;
        match Snapshot::from_yaml_str(yaml) {
            Err(LedgerError::Validation { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_inconsistent_sign_is_tolerated() {
        let json = r#"{
            "transactions": [
                {"id": 1, "amount": 45.50, "description": "REWE", "category": "Ernährung",
                 "date": "2026-02-19", "type": "expense"}
            ]
        }"#;
        let snapshot = Snapshot::from_json_str(json).unwrap();
        assert!(!snapshot.transactions[0].has_consistent_sign());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Snapshot::load(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LedgerError::Snapshot(_)));
    }
}
