//! Recurring expense and schedule override models
//!
//! A recurring expense has a base schedule (amount + frequency) and an
//! inclusive activity window. Dated overrides replace the base schedule from
//! their effective date onward, until a later override supersedes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::Frequency;
use super::ids::{CategoryId, HouseholdId, OverrideId, RecurringExpenseId};
use super::money::Money;
use super::validation::{validate_amount, validate_date_range, validate_description, validate_name};
use crate::error::TrackerResult;

/// Maximum length of a recurring expense name
pub const MAX_RECURRING_NAME_LEN: usize = 100;

/// A subscription-like cash flow (rent, salary, streaming...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringExpense {
    /// Unique identifier
    pub id: RecurringExpenseId,

    /// Owning household
    pub household_id: HouseholdId,

    /// Category for the breakdown
    pub category_id: CategoryId,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Base amount per period (positive = income, negative = expense)
    pub amount: Money,

    /// Base frequency
    pub frequency: Frequency,

    /// Manually paused entries contribute nothing, even inside their window
    #[serde(default = "default_active")]
    pub active: bool,

    /// First day of the activity window (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the activity window (inclusive); None = open-ended
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl RecurringExpense {
    /// Create a new, active, open-ended recurring expense
    pub fn new(
        household_id: HouseholdId,
        category_id: CategoryId,
        name: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecurringExpenseId::UNASSIGNED,
            household_id,
            category_id,
            name: name.into(),
            description: String::new(),
            amount,
            frequency,
            active: true,
            start_date,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the end of the activity window
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Pause or resume the entry
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }

    /// Validate the recurring expense
    pub fn validate(&self) -> TrackerResult<()> {
        validate_name("name", &self.name, MAX_RECURRING_NAME_LEN)?;
        validate_description(&self.description)?;
        validate_amount(self.amount)?;
        validate_date_range(self.start_date, self.end_date)
    }
}

impl fmt::Display for RecurringExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.amount, self.frequency)
    }
}

/// A dated change to a recurring expense's schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringScheduleOverride {
    /// Unique identifier
    pub id: OverrideId,

    /// The recurring expense this override belongs to
    pub recurring_expense_id: RecurringExpenseId,

    /// First day the new schedule applies
    pub effective_date: NaiveDate,

    /// Replacement amount per period
    pub amount: Money,

    /// Replacement frequency
    pub frequency: Frequency,

    /// When the override was created
    pub created_at: DateTime<Utc>,

    /// When the override was last modified
    pub updated_at: DateTime<Utc>,
}

impl RecurringScheduleOverride {
    /// Create a new override
    pub fn new(
        recurring_expense_id: RecurringExpenseId,
        effective_date: NaiveDate,
        amount: Money,
        frequency: Frequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OverrideId::UNASSIGNED,
            recurring_expense_id,
            effective_date,
            amount,
            frequency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the override
    pub fn validate(&self) -> TrackerResult<()> {
        validate_amount(self.amount)
    }
}

impl fmt::Display for RecurringScheduleOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from {}: {} {}",
            self.effective_date, self.amount, self.frequency
        )
    }
}
