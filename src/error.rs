//! Custom error types for the money tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for money tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A frequency outside the supported set
    #[error("Invalid frequency: '{0}' (expected one of daily, weekday, weekly, biweekly, monthly, quarterly, yearly)")]
    InvalidFrequency(String),

    /// A month string that is not `YYYY-MM`
    #[error("Invalid month: '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

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

    /// The entity exists but belongs to another household
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a validation error scoped to a single field
    pub fn validation(field: &str, message: impl AsRef<str>) -> Self {
        Self::Validation(format!("{}: {}", field, message.as_ref()))
    }

    /// Create a "not found" error for households
    pub fn household_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Household",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for recurring expenses
    pub fn recurring_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recurring expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for schedule overrides
    pub fn override_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Schedule override",
            identifier: identifier.into(),
        }
    }

    /// Create an ownership error for an entity of another household
    pub fn forbidden(entity_type: &str, identifier: impl std::fmt::Display) -> Self {
        Self::Forbidden(format!(
            "{} {} belongs to another household",
            entity_type, identifier
        ))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidFrequency(_) | Self::InvalidMonth(_)
        )
    }

    /// Check if this is an ownership error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for money tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
