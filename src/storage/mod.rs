//! Storage layer for the money tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage` is also the data source the monthly summary reads.

pub mod categories;
pub mod file_io;
pub mod households;
pub mod recurring;
pub mod table;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use households::HouseholdRepository;
pub use recurring::RecurringRepository;
pub use transactions::TransactionRepository;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Category, HouseholdId, RecurringExpense, RecurringExpenseId, RecurringScheduleOverride,
    Transaction, YearMonth,
};
use crate::reports::SummarySource;

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> TrackerResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> TrackerResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub households: HouseholdRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub recurring: RecurringRepository,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            households: HouseholdRepository::new(paths.households_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> TrackerResult<()> {
        self.households.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.recurring.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> TrackerResult<()> {
        self.households.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.recurring.save()?;
        Ok(())
    }

    /// Check if `init` has been run
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl SummarySource for Storage {
    fn household_exists(&self, household_id: HouseholdId) -> TrackerResult<bool> {
        Ok(self.households.get(household_id)?.is_some())
    }

    fn list_recurring_expenses(
        &self,
        household_id: HouseholdId,
    ) -> TrackerResult<Vec<RecurringExpense>> {
        self.recurring.get_by_household(household_id)
    }

    fn list_overrides(
        &self,
        recurring_expense_id: RecurringExpenseId,
    ) -> TrackerResult<Vec<RecurringScheduleOverride>> {
        self.recurring.get_overrides(recurring_expense_id)
    }

    fn list_transactions_in_month(
        &self,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<Vec<Transaction>> {
        self.transactions.get_by_month(household_id, month)
    }

    fn list_categories(&self, household_id: HouseholdId) -> TrackerResult<Vec<Category>> {
        self.categories.get_by_household(household_id)
    }
}
