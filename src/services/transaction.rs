//! Transaction queries
//!
//! Search, category filter and sort for the transaction list, plus monthly
//! totals. Every function returns a new list; the input slice is untouched.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Money, NewTransaction, Transaction, TransactionId, TransactionType, YearMonth};

/// Category values meaning "no category filter"
pub const ALL_CATEGORIES: &[&str] = &["all", "alle"];

/// Whether a category selection means "every category"
pub fn is_all_categories(category: &str) -> bool {
    let category = category.trim();
    category.is_empty()
        || ALL_CATEGORIES
            .iter()
            .any(|sentinel| category.eq_ignore_ascii_case(sentinel))
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of description or category
    pub search_term: Option<String>,
    /// Exact category name
    pub category: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !is_all_categories(c))
    }

    /// Check a single transaction against the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        let matches_search = match self.needle() {
            Some(needle) => {
                txn.description.to_lowercase().contains(&needle)
                    || txn.category.to_lowercase().contains(&needle)
            }
            None => true,
        };
        let matches_category = match self.category_name() {
            Some(category) => txn.category == category,
            None => true,
        };
        matches_search && matches_category
    }
}

/// Column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    /// By magnitude, ignoring sign
    Amount,
    Description,
    Category,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Description => write!(f, "description"),
            Self::Category => write!(f, "category"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.abs().cmp(&b.amount.abs()),
        SortKey::Description => a.description.to_lowercase().cmp(&b.description.to_lowercase()),
        SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
    }
}

/// Transactions matching `filter`, in input order
pub fn filter(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.matches(txn))
        .cloned()
        .collect()
}

/// Stable sort by `key`; equal keys keep their input order in both directions
pub fn sort(transactions: &[Transaction], key: SortKey, order: SortOrder) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| compare(a, b, key)),
        SortOrder::Desc => sorted.sort_by(|a, b| compare(b, a, key)),
    }
    sorted
}

/// Filter, then sort
pub fn query(
    transactions: &[Transaction],
    filter_by: &TransactionFilter,
    key: SortKey,
    order: SortOrder,
) -> Vec<Transaction> {
    let filtered = filter(transactions, filter_by);
    debug!(
        total = transactions.len(),
        matched = filtered.len(),
        %key,
        %order,
        "queried transactions"
    );
    sort(&filtered, key, order)
}

/// Sum of absolute amounts booked in `month`, optionally of one type only
pub fn monthly_total(
    transactions: &[Transaction],
    month: YearMonth,
    kind: Option<TransactionType>,
) -> Money {
    transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .filter(|txn| kind.map_or(true, |k| txn.kind == k))
        .map(|txn| txn.amount.abs())
        .sum()
}

/// Distinct category names in first-seen order
pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = HashSet::new();
    transactions
        .iter()
        .filter(|txn| seen.insert(txn.category.as_str()))
        .map(|txn| txn.category.clone())
        .collect()
}

/// Book a new transaction; the sign of the amount follows its type
pub fn add_transaction(
    transactions: &[Transaction],
    input: NewTransaction,
) -> LedgerResult<(Vec<Transaction>, TransactionId)> {
    input.validate()?;

    let id = TransactionId::next_after(transactions.iter().map(|t| t.id));
    let amount = match input.kind {
        TransactionType::Income => input.amount.abs(),
        TransactionType::Expense => -input.amount.abs(),
    };
    let txn = Transaction::new(
        id,
        input.date,
        amount,
        input.description.trim(),
        input.category.trim(),
        input.kind,
    )
    .with_color(input.category_color);

    let mut updated = transactions.to_vec();
    updated.push(txn);

    debug!(transaction_id = %id, kind = %input.kind, "added transaction");
    Ok((updated, id))
}
