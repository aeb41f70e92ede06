//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Aggregations never fail on empty input; errors are reserved for invalid
//! edits, unknown ids and ratios whose denominator is zero.

use thiserror::Error;

/// The main error type for pocket-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Malformed or out-of-range input, naming the offending field
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A ratio was requested with a zero denominator
    #[error("Undefined ratio: {0} is zero")]
    DivisionByZero(&'static str),

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for budget categories
    pub fn category_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Budget category",
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for budget items
    pub fn item_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Budget item",
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for income sources
    pub fn income_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Income source",
            identifier: identifier.to_string(),
        }
    }

    /// Create a "duplicate" error for an id that is already taken
    pub fn duplicate(entity_type: &'static str, identifier: impl ToString) -> Self {
        Self::Duplicate {
            entity_type,
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a duplicate id error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this error came from a guarded division
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
