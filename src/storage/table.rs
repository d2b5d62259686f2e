//! In-memory keyed table with sequential ID assignment
//!
//! Every repository keeps its rows in a `Table` behind an `RwLock`. IDs come
//! from a persisted counter, so a deleted row's ID is never handed out again.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{
    Category, CategoryId, Household, HouseholdId, OverrideId, RecurringExpense,
    RecurringExpenseId, RecurringScheduleOverride, Transaction, TransactionId,
};

/// A stored entity with a storage-assigned integer ID
pub trait Record: Clone {
    type Id: Copy + Ord + fmt::Display + From<i64> + Into<i64>;

    fn id(&self) -> Self::Id;

    fn assign_id(&mut self, id: Self::Id);
}

macro_rules! impl_record {
    ($model:ty, $id:ty) => {
        impl Record for $model {
            type Id = $id;

            fn id(&self) -> $id {
                self.id
            }

            fn assign_id(&mut self, id: $id) {
                self.id = id;
            }
        }
    };
}

impl_record!(Household, HouseholdId);
impl_record!(Category, CategoryId);
impl_record!(Transaction, TransactionId);
impl_record!(RecurringExpense, RecurringExpenseId);
impl_record!(RecurringScheduleOverride, OverrideId);

/// Rows ordered by ID plus the next ID to hand out
pub struct Table<R: Record> {
    rows: BTreeMap<R::Id, R>,
    next_id: i64,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> Table<R> {
    /// Rebuild from persisted rows; the counter never falls behind the highest ID
    pub fn from_rows(rows: Vec<R>, stored_next_id: i64) -> Self {
        let rows: BTreeMap<R::Id, R> = rows.into_iter().map(|r| (r.id(), r)).collect();
        let after_max = rows
            .keys()
            .next_back()
            .map(|id| Into::<i64>::into(*id) + 1)
            .unwrap_or(1);
        Self {
            rows,
            next_id: stored_next_id.max(after_max),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Rows in ascending ID order
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    /// Insert a new row, assigning the next ID
    pub fn insert(&mut self, mut row: R) -> R {
        let id = R::Id::from(self.next_id);
        self.next_id += 1;
        row.assign_id(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Replace an existing row; returns false if the ID is unknown
    pub fn replace(&mut self, row: R) -> bool {
        match self.rows.get_mut(&row.id()) {
            Some(existing) => {
                *existing = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        self.rows.remove(&id)
    }

    /// Drop every row not matching the predicate; returns how many were removed
    pub fn retain<F: FnMut(&R) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| keep(row));
        before - self.rows.len()
    }

    /// Rows cloned out for persistence
    pub fn to_rows(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }
}
