//! Transaction service
//!
//! Provides business logic for one-time transactions: validation, category
//! ownership checks and month listing.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, HouseholdId, Money, Transaction, TransactionId, YearMonth};
use crate::services::{CategoryService, HouseholdService};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub household_id: HouseholdId,
    pub category_id: CategoryId,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Fields to change on an existing transaction; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub category_id: Option<CategoryId>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TrackerResult<Transaction> {
        HouseholdService::new(self.storage).get_required(input.household_id)?;
        CategoryService::new(self.storage).get(input.household_id, input.category_id)?;

        let mut txn = Transaction::new(input.household_id, input.category_id, input.amount, input.date);
        if let Some(description) = input.description {
            txn.description = description;
        }
        txn.validate()?;

        let txn = self.storage.transactions.insert(txn)?;
        self.storage.transactions.save()?;

        info!(
            household = %txn.household_id,
            transaction = %txn.id,
            amount = %txn.amount,
            date = %txn.date,
            "Created transaction"
        );
        Ok(txn)
    }

    /// Get a transaction, checking it belongs to the household
    pub fn get(&self, household_id: HouseholdId, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        if txn.household_id != household_id {
            return Err(TrackerError::forbidden("Transaction", id));
        }
        Ok(txn)
    }

    /// A household's transactions in one calendar month, oldest first
    pub fn list_by_month(
        &self,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.get_by_month(household_id, month)
    }

    /// All of a household's transactions, oldest first
    pub fn list(&self, household_id: HouseholdId) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.get_by_household(household_id)
    }

    /// Update an existing transaction
    pub fn update(
        &self,
        household_id: HouseholdId,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> TrackerResult<Transaction> {
        let mut txn = self.get(household_id, id)?;

        if let Some(category_id) = input.category_id {
            CategoryService::new(self.storage).get(household_id, category_id)?;
            txn.category_id = category_id;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = description;
        }

        txn.validate()?;
        txn.updated_at = chrono::Utc::now();

        self.storage.transactions.update(txn.clone())?;
        self.storage.transactions.save()?;

        info!(transaction = %id, "Updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, household_id: HouseholdId, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self.get(household_id, id)?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        info!(transaction = %id, "Deleted transaction");
        Ok(txn)
    }
}
