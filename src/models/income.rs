//! Income source model
//!
//! An income source is a recurring inflow (salary, freelance work, dividends)
//! paid weekly, monthly or yearly. Totals are computed on a monthly basis;
//! see `services::income` for the normalisation rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IncomeId;
use super::money::Money;

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// All frequencies in display order
    pub fn all() -> &'static [Self] {
        &[Self::Weekly, Self::Monthly, Self::Yearly]
    }

    /// German label used by the income overview
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Wöchentlich",
            Self::Monthly => "Monatlich",
            Self::Yearly => "Jährlich",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = IncomeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(IncomeValidationError::UnknownFrequency(s.to_string())),
        }
    }
}

/// A recurring income source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeId,
    pub name: String,
    /// Amount paid per `frequency` period
    pub amount: Money,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

fn default_true() -> bool {
    true
}

impl IncomeSource {
    /// Create a new active income source
    pub fn new(id: IncomeId, name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            frequency,
            is_active: true,
            icon: String::new(),
            color: String::new(),
        }
    }

    /// Attach display decoration
    pub fn with_style(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.amount.exceeds_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

/// Input for adding a new income source
///
/// Frequency arrives as free text from a form and is only accepted if it
/// names one of the known frequencies.
#[derive(Debug, Clone)]
pub struct NewIncomeSource {
    pub name: String,
    pub amount: Money,
    pub frequency: String,
}

impl NewIncomeSource {
    pub fn new(name: impl Into<String>, amount: Money, frequency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency: frequency.into(),
        }
    }

    /// Check all fields, returning the parsed frequency
    pub fn validate(&self) -> Result<Frequency, IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        if self.amount.exceeds_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        self.frequency.parse()
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NegativeAmount,
    NonPositiveAmount,
    AmountTooLarge,
    UnknownFrequency(String),
}

impl IncomeValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NegativeAmount | Self::NonPositiveAmount | Self::AmountTooLarge => "amount",
            Self::UnknownFrequency(_) => "frequency",
        }
    }
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "income name cannot be empty"),
            Self::NegativeAmount => write!(f, "income amount cannot be negative"),
            Self::NonPositiveAmount => write!(f, "income amount must be greater than zero"),
            Self::AmountTooLarge => write!(
                f,
                "income amount exceeds the limit of {}",
                Money::MAX.to_decimal_string()
            ),
            Self::UnknownFrequency(s) => write!(
                f,
                "unknown frequency '{}' (expected weekly, monthly or yearly)",
                s
            ),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

impl From<IncomeValidationError> for crate::error::LedgerError {
    fn from(err: IncomeValidationError) -> Self {
        crate::error::LedgerError::validation(err.field(), err.to_string())
    }
}
