//! Transaction model
//!
//! A transaction is a single booked inflow or outflow. By convention expenses
//! carry negative amounts and income positive ones, but imported data does not
//! always honour that; consumers compare magnitudes via [`Money::abs`] and can
//! check [`Transaction::has_consistent_sign`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "ausgabe" => Ok(Self::Expense),
            "income" | "einnahme" => Ok(Self::Income),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Signed amount (negative = outflow)
    pub amount: Money,
    pub description: String,
    /// Category name, matched exactly by the category filter
    pub category: String,
    #[serde(default)]
    pub category_color: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            category: category.into(),
            category_color: String::new(),
            date,
            kind,
        }
    }

    /// Set the category colour
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.category_color = color.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Whether the amount's sign agrees with the type (zero agrees with both)
    pub fn has_consistent_sign(&self) -> bool {
        match self.kind {
            TransactionType::Income => !self.amount.is_negative(),
            TransactionType::Expense => !self.amount.is_positive(),
        }
    }

    /// Amount with the sign implied by the type
    pub fn normalized_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount.abs(),
            TransactionType::Expense => -self.amount.abs(),
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.exceeds_limit() {
            return Err(TransactionValidationError::AmountTooLarge);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Input for booking a new transaction
///
/// The amount is entered as a magnitude; its sign is derived from `kind`.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub category_color: String,
    pub date: NaiveDate,
    pub kind: TransactionType,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        if self.amount.exceeds_limit() {
            return Err(TransactionValidationError::AmountTooLarge);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    ZeroAmount,
    AmountTooLarge,
    EmptyDescription,
    EmptyCategory,
}

impl TransactionValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::ZeroAmount | Self::AmountTooLarge => "amount",
            Self::EmptyDescription => "description",
            Self::EmptyCategory => "category",
        }
    }
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "amount cannot be zero"),
            Self::AmountTooLarge => write!(
                f,
                "amount exceeds the limit of {}",
                Money::MAX.to_decimal_string()
            ),
            Self::EmptyDescription => write!(f, "description cannot be empty"),
            Self::EmptyCategory => write!(f, "category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for crate::error::LedgerError {
    fn from(err: TransactionValidationError) -> Self {
        crate::error::LedgerError::validation(err.field(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sign_consistency() {
        let rewe = Transaction::new(
            TransactionId::new(1),
            date(2026, 2, 19),
            Money::from_cents(-4550),
            "REWE Supermarkt",
            "Ernährung",
            TransactionType::Expense,
        );
        assert!(rewe.has_consistent_sign());
        assert!(rewe.is_expense());

        let mut flipped = rewe.clone();
        flipped.amount = Money::from_cents(4550);
        assert!(!flipped.has_consistent_sign());
        assert_eq!(flipped.normalized_amount(), Money::from_cents(-4550));
    }

    #[test]
    fn test_validate() {
        let mut txn = Transaction::new(
            TransactionId::new(1),
            date(2026, 2, 15),
            Money::from_major(1024),
            "Gehalt",
            "Einkommen",
            TransactionType::Income,
        );
        assert!(txn.validate().is_ok());

        txn.description = " ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));

        txn.description = "Gehalt".into();
        txn.amount = Money::from_cents(i64::MIN);
        assert_eq!(txn.validate(), Err(TransactionValidationError::AmountTooLarge));
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("ausgabe".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let txn = Transaction::new(
            TransactionId::new(4),
            date(2026, 2, 1),
            Money::from_major(-500),
            "Miete Februar",
            "Wohnen",
            TransactionType::Expense,
        )
        .with_color("#ef4444");

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains(r#""type":"expense""#));
        assert!(json.contains(r#""date":"2026-02-01""#));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
