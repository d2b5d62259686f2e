//! Recurring expense repository for JSON storage
//!
//! Recurring expenses and their schedule overrides share recurring.json, so
//! an expense and its overrides are always saved together.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    CategoryId, HouseholdId, OverrideId, RecurringExpense, RecurringExpenseId,
    RecurringScheduleOverride,
};

use super::file_io::{read_json, write_json_atomic};
use super::table::Table;
use super::{read_lock, write_lock};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecurringData {
    #[serde(default)]
    next_expense_id: i64,
    #[serde(default)]
    next_override_id: i64,
    #[serde(default)]
    recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    overrides: Vec<RecurringScheduleOverride>,
}

/// Repository for recurring expenses and their overrides
pub struct RecurringRepository {
    path: PathBuf,
    expenses: RwLock<Table<RecurringExpense>>,
    overrides: RwLock<Table<RecurringScheduleOverride>>,
}

impl RecurringRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(Table::default()),
            overrides: RwLock::new(Table::default()),
        }
    }

    /// Load expenses and overrides from disk
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: RecurringData = read_json(&self.path)?;

        let mut expenses = write_lock(&self.expenses)?;
        let mut overrides = write_lock(&self.overrides)?;
        *expenses = Table::from_rows(file_data.recurring_expenses, file_data.next_expense_id);
        *overrides = Table::from_rows(file_data.overrides, file_data.next_override_id);
        Ok(())
    }

    /// Save expenses and overrides to disk
    pub fn save(&self) -> TrackerResult<()> {
        let expenses = read_lock(&self.expenses)?;
        let overrides = read_lock(&self.overrides)?;

        let file_data = RecurringData {
            next_expense_id: expenses.next_id(),
            next_override_id: overrides.next_id(),
            recurring_expenses: expenses.to_rows(),
            overrides: overrides.to_rows(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: RecurringExpenseId) -> TrackerResult<Option<RecurringExpense>> {
        Ok(read_lock(&self.expenses)?.get(id).cloned())
    }

    /// A household's recurring expenses in ID order, paused ones included
    pub fn get_by_household(
        &self,
        household_id: HouseholdId,
    ) -> TrackerResult<Vec<RecurringExpense>> {
        Ok(read_lock(&self.expenses)?
            .values()
            .filter(|r| r.household_id == household_id)
            .cloned()
            .collect())
    }

    /// Whether any recurring expense uses the category
    pub fn uses_category(&self, category_id: CategoryId) -> TrackerResult<bool> {
        Ok(read_lock(&self.expenses)?
            .values()
            .any(|r| r.category_id == category_id))
    }

    pub fn insert(&self, expense: RecurringExpense) -> TrackerResult<RecurringExpense> {
        Ok(write_lock(&self.expenses)?.insert(expense))
    }

    pub fn update(&self, expense: RecurringExpense) -> TrackerResult<()> {
        let id = expense.id;
        if write_lock(&self.expenses)?.replace(expense) {
            Ok(())
        } else {
            Err(TrackerError::recurring_not_found(id.to_string()))
        }
    }

    /// Delete a recurring expense together with its overrides
    pub fn delete(&self, id: RecurringExpenseId) -> TrackerResult<bool> {
        let mut expenses = write_lock(&self.expenses)?;
        let mut overrides = write_lock(&self.overrides)?;
        overrides.retain(|o| o.recurring_expense_id != id);
        Ok(expenses.remove(id).is_some())
    }

    /// Delete a household's recurring expenses and their overrides
    pub fn delete_by_household(&self, household_id: HouseholdId) -> TrackerResult<usize> {
        let mut expenses = write_lock(&self.expenses)?;
        let mut overrides = write_lock(&self.overrides)?;

        let doomed: Vec<RecurringExpenseId> = expenses
            .values()
            .filter(|r| r.household_id == household_id)
            .map(|r| r.id)
            .collect();
        overrides.retain(|o| !doomed.contains(&o.recurring_expense_id));
        Ok(expenses.retain(|r| r.household_id != household_id))
    }

    pub fn get_override(&self, id: OverrideId) -> TrackerResult<Option<RecurringScheduleOverride>> {
        Ok(read_lock(&self.overrides)?.get(id).cloned())
    }

    /// Overrides of one expense, ascending by effective date then ID
    pub fn get_overrides(
        &self,
        recurring_expense_id: RecurringExpenseId,
    ) -> TrackerResult<Vec<RecurringScheduleOverride>> {
        let mut list: Vec<RecurringScheduleOverride> = read_lock(&self.overrides)?
            .values()
            .filter(|o| o.recurring_expense_id == recurring_expense_id)
            .cloned()
            .collect();
        list.sort_by_key(|o| (o.effective_date, o.id));
        Ok(list)
    }

    pub fn insert_override(
        &self,
        schedule_override: RecurringScheduleOverride,
    ) -> TrackerResult<RecurringScheduleOverride> {
        Ok(write_lock(&self.overrides)?.insert(schedule_override))
    }

    pub fn update_override(&self, schedule_override: RecurringScheduleOverride) -> TrackerResult<()> {
        let id = schedule_override.id;
        if write_lock(&self.overrides)?.replace(schedule_override) {
            Ok(())
        } else {
            Err(TrackerError::override_not_found(id.to_string()))
        }
    }

    pub fn delete_override(&self, id: OverrideId) -> TrackerResult<bool> {
        Ok(write_lock(&self.overrides)?.remove(id).is_some())
    }
}
