//! Budget aggregation
//!
//! Rollups over budget categories (per category, grand, fixed and variable
//! totals), utilization against income and the pure edit operations used by
//! the budget view. Edits never touch their input: they return a new budget
//! with exactly one item replaced, or an error and no budget at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetCategory, BudgetItem, CategoryId, ItemId, Money};

/// Sum of active items in one category
pub fn category_total(category: &BudgetCategory) -> Money {
    category.items.iter().map(BudgetItem::effective_amount).sum()
}

/// Sum of active fixed items in one category
pub fn category_fixed_total(category: &BudgetCategory) -> Money {
    category
        .active_items()
        .filter(|item| item.is_fixed)
        .map(|item| item.amount)
        .sum()
}

/// Sum of active variable items in one category
pub fn category_variable_total(category: &BudgetCategory) -> Money {
    category
        .active_items()
        .filter(|item| !item.is_fixed)
        .map(|item| item.amount)
        .sum()
}

/// Sum of all category totals
pub fn grand_total(categories: &[BudgetCategory]) -> Money {
    categories.iter().map(category_total).sum()
}

/// Sum of active fixed items across the budget
pub fn fixed_total(categories: &[BudgetCategory]) -> Money {
    categories.iter().map(category_fixed_total).sum()
}

/// Sum of active variable items across the budget
pub fn variable_total(categories: &[BudgetCategory]) -> Money {
    categories.iter().map(category_variable_total).sum()
}

/// Share of income taken by `spent`, in percent, capped at 100
///
/// Zero income has no meaningful share and is reported as
/// [`LedgerError::DivisionByZero`].
pub fn utilization(spent: Money, total_income: Money) -> LedgerResult<f64> {
    if total_income.is_zero() {
        return Err(LedgerError::DivisionByZero("total income"));
    }
    let percent = spent.cents() as f64 / total_income.cents() as f64 * 100.0;
    Ok(percent.min(100.0))
}

/// How close a utilization is to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Ok,
    Warn,
    Danger,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warn => write!(f, "warn"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Utilization percentages above which a category is flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub warn: f64,
    pub danger: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warn: 60.0,
            danger: 80.0,
        }
    }
}

/// Classify a utilization percentage; both limits are exclusive
pub fn risk_level(utilization: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if utilization > thresholds.danger {
        RiskLevel::Danger
    } else if utilization > thresholds.warn {
        RiskLevel::Warn
    } else {
        RiskLevel::Ok
    }
}

/// Locate an item anywhere in the budget
pub fn find_item(categories: &[BudgetCategory], item_id: ItemId) -> Option<(CategoryId, &BudgetItem)> {
    categories
        .iter()
        .find_map(|category| category.item(item_id).map(|item| (category.id, item)))
}

fn edit_item<F>(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
    edit: F,
) -> LedgerResult<Vec<BudgetCategory>>
where
    F: FnOnce(&mut BudgetItem),
{
    let mut updated = categories.to_vec();
    let category = updated
        .iter_mut()
        .find(|c| c.id == category_id)
        .ok_or_else(|| LedgerError::category_not_found(category_id))?;
    let item = category
        .items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| LedgerError::item_not_found(item_id))?;

    edit(item);
    Ok(updated)
}

/// Mark an item active or inactive
pub fn set_active(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
    active: bool,
) -> LedgerResult<Vec<BudgetCategory>> {
    debug!(%category_id, %item_id, active, "setting budget item activity");
    edit_item(categories, category_id, item_id, |item| item.is_active = active)
}

/// Flip an item's active flag
pub fn toggle_active(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
) -> LedgerResult<Vec<BudgetCategory>> {
    debug!(%category_id, %item_id, "toggling budget item");
    edit_item(categories, category_id, item_id, |item| item.is_active = !item.is_active)
}

/// Rename an item; the name must not be blank
pub fn rename(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
    name: &str,
) -> LedgerResult<Vec<BudgetCategory>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::validation("name", "name cannot be empty"));
    }
    debug!(%category_id, %item_id, name, "renaming budget item");
    edit_item(categories, category_id, item_id, |item| item.name = name.to_string())
}

/// Change an item's amount; negative amounts are rejected
pub fn set_amount(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
    amount: Money,
) -> LedgerResult<Vec<BudgetCategory>> {
    if amount.is_negative() {
        return Err(LedgerError::validation(
            "amount",
            format!("amount cannot be negative (got {})", amount),
        ));
    }
    if amount.exceeds_limit() {
        return Err(LedgerError::validation(
            "amount",
            format!("amount exceeds the limit of {}", Money::MAX),
        ));
    }
    debug!(%category_id, %item_id, cents = amount.cents(), "setting budget item amount");
    edit_item(categories, category_id, item_id, |item| item.amount = amount)
}

/// Input for adding an item to a category
#[derive(Debug, Clone)]
pub struct NewBudgetItem {
    pub name: String,
    pub amount: Money,
    pub is_fixed: bool,
}

/// Append a new active item; its id is one past the largest id in the budget
pub fn add_item(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    input: NewBudgetItem,
) -> LedgerResult<(Vec<BudgetCategory>, ItemId)> {
    let id = ItemId::next_after(
        categories
            .iter()
            .flat_map(|c| c.items.iter().map(|item| item.id)),
    );
    let item = BudgetItem::new(id, input.name.trim(), input.amount, input.is_fixed);
    item.validate()?;

    let mut updated = categories.to_vec();
    let category = updated
        .iter_mut()
        .find(|c| c.id == category_id)
        .ok_or_else(|| LedgerError::category_not_found(category_id))?;
    category.items.push(item);

    debug!(%category_id, item_id = %id, "added budget item");
    Ok((updated, id))
}

/// Remove an item from a category
pub fn remove_item(
    categories: &[BudgetCategory],
    category_id: CategoryId,
    item_id: ItemId,
) -> LedgerResult<Vec<BudgetCategory>> {
    let mut updated = categories.to_vec();
    let category = updated
        .iter_mut()
        .find(|c| c.id == category_id)
        .ok_or_else(|| LedgerError::category_not_found(category_id))?;
    let before = category.items.len();
    category.items.retain(|item| item.id != item_id);
    if category.items.len() == before {
        return Err(LedgerError::item_not_found(item_id));
    }
    Ok(updated)
}
