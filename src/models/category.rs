//! Category model
//!
//! Categories label the buckets of the monthly breakdown. Each belongs to a
//! single household and its name is unique within that household.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, HouseholdId};
use super::validation::validate_name;
use crate::error::TrackerResult;

/// Maximum length of a category name
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A spending or income category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Owning household
    pub household_id: HouseholdId,

    /// Category name
    pub name: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(household_id: HouseholdId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::UNASSIGNED,
            household_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the category
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Case-insensitive name comparison used for lookups and duplicate checks
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }

    /// Validate the category
    pub fn validate(&self) -> TrackerResult<()> {
        validate_name("name", &self.name, MAX_CATEGORY_NAME_LEN)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
