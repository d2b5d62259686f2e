//! Transaction model
//!
//! A one-time cash movement. It contributes only to the calendar month that
//! contains its date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, HouseholdId, TransactionId};
use super::money::Money;
use super::month::YearMonth;
use super::validation::{validate_amount, validate_description};
use crate::error::TrackerResult;

/// A one-time income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owning household
    pub household_id: HouseholdId,

    /// Category for the breakdown
    pub category_id: CategoryId,

    /// Signed amount (positive = income, negative = expense)
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Day the transaction occurred
    pub date: NaiveDate,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        household_id: HouseholdId,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::UNASSIGNED,
            household_id,
            category_id,
            amount,
            description: String::new(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this is income
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Whether this is an expense
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Whether the transaction falls in the given month
    pub fn is_in_month(&self, month: &YearMonth) -> bool {
        month.contains(self.date)
    }

    /// Validate the transaction
    pub fn validate(&self) -> TrackerResult<()> {
        validate_amount(self.amount)?;
        validate_description(&self.description)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.description)
    }
}
