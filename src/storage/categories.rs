//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId, HouseholdId};

use super::file_io::{read_json, write_json_atomic};
use super::table::Table;
use super::{read_lock, write_lock};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryData {
    #[serde(default)]
    next_id: i64,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    table: RwLock<Table<Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(Table::default()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;
        *write_lock(&self.table)? = Table::from_rows(file_data.categories, file_data.next_id);
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> TrackerResult<()> {
        let table = read_lock(&self.table)?;
        let file_data = CategoryData {
            next_id: table.next_id(),
            categories: table.to_rows(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: CategoryId) -> TrackerResult<Option<Category>> {
        Ok(read_lock(&self.table)?.get(id).cloned())
    }

    /// Categories of a household, sorted by name
    pub fn get_by_household(&self, household_id: HouseholdId) -> TrackerResult<Vec<Category>> {
        let mut categories: Vec<Category> = read_lock(&self.table)?
            .values()
            .filter(|c| c.household_id == household_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(categories)
    }

    /// Find a household's category by name (case-insensitive)
    pub fn find_by_name(
        &self,
        household_id: HouseholdId,
        name: &str,
    ) -> TrackerResult<Option<Category>> {
        Ok(read_lock(&self.table)?
            .values()
            .find(|c| c.household_id == household_id && c.name_matches(name))
            .cloned())
    }

    /// Insert a new category and return it with its assigned ID
    pub fn insert(&self, category: Category) -> TrackerResult<Category> {
        Ok(write_lock(&self.table)?.insert(category))
    }

    pub fn update(&self, category: Category) -> TrackerResult<()> {
        let id = category.id;
        if write_lock(&self.table)?.replace(category) {
            Ok(())
        } else {
            Err(TrackerError::category_not_found(id.to_string()))
        }
    }

    /// Delete a category; returns true if it existed
    pub fn delete(&self, id: CategoryId) -> TrackerResult<bool> {
        Ok(write_lock(&self.table)?.remove(id).is_some())
    }

    /// Delete every category of a household; returns how many were removed
    pub fn delete_by_household(&self, household_id: HouseholdId) -> TrackerResult<usize> {
        Ok(write_lock(&self.table)?.retain(|c| c.household_id != household_id))
    }
}
