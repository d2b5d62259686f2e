//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, HouseholdId, Transaction, TransactionId, YearMonth};

use super::file_io::{read_json, write_json_atomic};
use super::table::Table;
use super::{read_lock, write_lock};

#[derive(Debug, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    next_id: i64,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    table: RwLock<Table<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(Table::default()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;
        *write_lock(&self.table)? = Table::from_rows(file_data.transactions, file_data.next_id);
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> TrackerResult<()> {
        let table = read_lock(&self.table)?;
        let file_data = TransactionData {
            next_id: table.next_id(),
            transactions: table.to_rows(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        Ok(read_lock(&self.table)?.get(id).cloned())
    }

    /// A household's transactions dated within `[first day, last day]` of the month,
    /// oldest first
    pub fn get_by_month(
        &self,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = read_lock(&self.table)?
            .values()
            .filter(|t| t.household_id == household_id && t.is_in_month(&month))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(transactions)
    }

    /// All of a household's transactions, oldest first
    pub fn get_by_household(&self, household_id: HouseholdId) -> TrackerResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = read_lock(&self.table)?
            .values()
            .filter(|t| t.household_id == household_id)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(transactions)
    }

    /// Whether any transaction uses the category
    pub fn uses_category(&self, category_id: CategoryId) -> TrackerResult<bool> {
        Ok(read_lock(&self.table)?
            .values()
            .any(|t| t.category_id == category_id))
    }

    /// Insert a new transaction and return it with its assigned ID
    pub fn insert(&self, txn: Transaction) -> TrackerResult<Transaction> {
        Ok(write_lock(&self.table)?.insert(txn))
    }

    pub fn update(&self, txn: Transaction) -> TrackerResult<()> {
        let id = txn.id;
        if write_lock(&self.table)?.replace(txn) {
            Ok(())
        } else {
            Err(TrackerError::transaction_not_found(id.to_string()))
        }
    }

    /// Delete a transaction; returns true if it existed
    pub fn delete(&self, id: TransactionId) -> TrackerResult<bool> {
        Ok(write_lock(&self.table)?.remove(id).is_some())
    }

    /// Delete every transaction of a household; returns how many were removed
    pub fn delete_by_household(&self, household_id: HouseholdId) -> TrackerResult<usize> {
        Ok(write_lock(&self.table)?.retain(|t| t.household_id != household_id))
    }
}
