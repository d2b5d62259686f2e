//! Core data models for the money tracker
//!
//! This module contains the data structures of the household finance domain:
//! households, categories, one-time transactions, recurring expenses with
//! their schedule overrides, and the monthly summary they roll up into.

pub mod category;
pub mod frequency;
pub mod household;
pub mod ids;
pub mod money;
pub mod month;
pub mod recurring;
pub mod summary;
pub mod transaction;
pub mod validation;

pub use category::Category;
pub use frequency::Frequency;
pub use household::Household;
pub use ids::{CategoryId, HouseholdId, OverrideId, RecurringExpenseId, TransactionId};
pub use money::Money;
pub use month::YearMonth;
pub use recurring::{RecurringExpense, RecurringScheduleOverride};
pub use summary::{CategorySummary, MonthlySummary, RecurringEntry, RecurringFrequencyGroup};
pub use transaction::Transaction;
