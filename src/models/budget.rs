//! Budget categories and their line items
//!
//! A budget is an ordered list of categories ("Wohnen", "Auto", ...), each
//! holding the planned monthly items that make up its total.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::{CategoryId, ItemId};
use super::money::Money;
use crate::error::LedgerError;

/// A single planned expense inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: ItemId,
    pub name: String,
    /// Planned monthly amount, never negative
    pub amount: Money,
    /// Contractual/recurring rather than discretionary
    #[serde(default)]
    pub is_fixed: bool,
    /// Counted toward totals
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl BudgetItem {
    /// Create a new active item
    pub fn new(id: ItemId, name: impl Into<String>, amount: Money, is_fixed: bool) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            is_fixed,
            is_active: true,
        }
    }

    /// Amount this item contributes to totals
    pub fn effective_amount(&self) -> Money {
        if self.is_active {
            self.amount
        } else {
            Money::zero()
        }
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.amount));
        }

        if self.amount.exceeds_limit() {
            return Err(BudgetValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

/// A named group of budget items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: CategoryId,
    pub name: String,
    /// Display colour, e.g. `#ef4444`
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl BudgetCategory {
    /// Create a new empty category
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            items: Vec::new(),
        }
    }

    /// Builder-style item append
    pub fn with_item(mut self, item: BudgetItem) -> Self {
        self.items.push(item);
        self
    }

    /// Find an item by id
    pub fn item(&self, id: ItemId) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Active items, in order
    pub fn active_items(&self) -> impl Iterator<Item = &BudgetItem> {
        self.items.iter().filter(|item| item.is_active)
    }

    /// Number of active items
    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    /// Validate the category and its items
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(BudgetValidationError::DuplicateItemId(item.id));
            }
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

/// Validate a whole budget: every category valid, category ids unique
pub fn validate_budget(categories: &[BudgetCategory]) -> Result<(), BudgetValidationError> {
    let mut seen = HashSet::new();
    for category in categories {
        category.validate()?;
        if !seen.insert(category.id) {
            return Err(BudgetValidationError::DuplicateCategoryId(category.id));
        }
    }
    Ok(())
}

/// Validation errors for budget categories and items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    DuplicateItemId(ItemId),
    DuplicateCategoryId(CategoryId),
}

impl BudgetValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NegativeAmount(_) | Self::AmountTooLarge(_) => "amount",
            Self::DuplicateItemId(_) | Self::DuplicateCategoryId(_) => "id",
        }
    }
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "amount cannot be negative (got {})", amount.to_decimal_string())
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "amount {} exceeds the limit of {}",
                amount.to_decimal_string(),
                Money::MAX.to_decimal_string()
            ),
            Self::DuplicateItemId(id) => write!(f, "item id {} is used twice", id),
            Self::DuplicateCategoryId(id) => write!(f, "category id {} is used twice", id),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

impl From<BudgetValidationError> for LedgerError {
    fn from(err: BudgetValidationError) -> Self {
        match err {
            BudgetValidationError::DuplicateItemId(id) => LedgerError::duplicate("Budget item", id),
            BudgetValidationError::DuplicateCategoryId(id) => {
                LedgerError::duplicate("Budget category", id)
            }
            other => LedgerError::validation(other.field(), other.to_string()),
        }
    }
}
