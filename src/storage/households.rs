//! Household repository for JSON storage
//!
//! Manages loading and saving households to households.json

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Household, HouseholdId};

use super::file_io::{read_json, write_json_atomic};
use super::table::Table;
use super::{read_lock, write_lock};

#[derive(Debug, Default, Serialize, Deserialize)]
struct HouseholdData {
    #[serde(default)]
    next_id: i64,
    #[serde(default)]
    households: Vec<Household>,
}

/// Repository for household persistence
pub struct HouseholdRepository {
    path: PathBuf,
    table: RwLock<Table<Household>>,
}

impl HouseholdRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(Table::default()),
        }
    }

    /// Load households from disk
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: HouseholdData = read_json(&self.path)?;
        *write_lock(&self.table)? = Table::from_rows(file_data.households, file_data.next_id);
        Ok(())
    }

    /// Save households to disk
    pub fn save(&self) -> TrackerResult<()> {
        let table = read_lock(&self.table)?;
        let file_data = HouseholdData {
            next_id: table.next_id(),
            households: table.to_rows(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: HouseholdId) -> TrackerResult<Option<Household>> {
        Ok(read_lock(&self.table)?.get(id).cloned())
    }

    /// All households in ID order
    pub fn get_all(&self) -> TrackerResult<Vec<Household>> {
        Ok(read_lock(&self.table)?.to_rows())
    }

    /// Find a household by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> TrackerResult<Option<Household>> {
        let name = name.trim();
        Ok(read_lock(&self.table)?
            .values()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert a new household and return it with its assigned ID
    pub fn insert(&self, household: Household) -> TrackerResult<Household> {
        Ok(write_lock(&self.table)?.insert(household))
    }

    pub fn update(&self, household: Household) -> TrackerResult<()> {
        let id = household.id;
        if write_lock(&self.table)?.replace(household) {
            Ok(())
        } else {
            Err(TrackerError::household_not_found(id.to_string()))
        }
    }

    /// Delete a household; returns true if it existed
    pub fn delete(&self, id: HouseholdId) -> TrackerResult<bool> {
        Ok(write_lock(&self.table)?.remove(id).is_some())
    }

    pub fn count(&self) -> TrackerResult<usize> {
        Ok(read_lock(&self.table)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, HouseholdRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = HouseholdRepository::new(temp_dir.path().join("households.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let household = repo.insert(Household::new("Home", "EUR")).unwrap();
        assert_eq!(household.id, HouseholdId::new(1));
        assert_eq!(repo.get(household.id).unwrap().unwrap().name, "Home");
        assert!(repo.find_by_name("home").unwrap().is_some());
    }

    #[test]
    fn test_save_and_reload_keeps_counter() {
        let (temp_dir, repo) = create_test_repo();
        let first = repo.insert(Household::new("A", "EUR")).unwrap();
        repo.insert(Household::new("B", "EUR")).unwrap();
        repo.delete(HouseholdId::new(2)).unwrap();
        repo.save().unwrap();

        let repo2 = HouseholdRepository::new(temp_dir.path().join("households.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap().len(), 1);
        assert_eq!(repo2.get(first.id).unwrap().unwrap().name, "A");

        let third = repo2.insert(Household::new("C", "EUR")).unwrap();
        assert_eq!(third.id, HouseholdId::new(3));
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let (_temp_dir, repo) = create_test_repo();
        let mut ghost = Household::new("Ghost", "EUR");
        ghost.id = HouseholdId::new(5);
        assert!(repo.update(ghost).unwrap_err().is_not_found());
    }
}
