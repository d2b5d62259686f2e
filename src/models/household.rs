//! Household model
//!
//! A household owns every category, transaction and recurring expense; all
//! amounts it records are in its single currency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::HouseholdId;
use super::validation::{validate_currency, validate_description, validate_name};
use crate::error::TrackerResult;

/// Maximum length of a household name
pub const MAX_HOUSEHOLD_NAME_LEN: usize = 100;

/// A household whose finances are tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier
    pub id: HouseholdId,

    /// Household name
    pub name: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,

    /// ISO currency code, e.g. "EUR"
    pub currency: String,

    /// When the household was created
    pub created_at: DateTime<Utc>,

    /// When the household was last modified
    pub updated_at: DateTime<Utc>,
}

impl Household {
    /// Create a new household; storage assigns the ID on insert
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: HouseholdId::UNASSIGNED,
            name: name.into(),
            description: String::new(),
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the household
    pub fn validate(&self) -> TrackerResult<()> {
        validate_name("name", &self.name, MAX_HOUSEHOLD_NAME_LEN)?;
        validate_description(&self.description)?;
        validate_currency(&self.currency)
    }
}

impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
