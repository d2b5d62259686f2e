//! Category service
//!
//! Provides business logic for category management. Names are unique per
//! household, and a category still used by a transaction or recurring expense
//! cannot be deleted.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId, HouseholdId};
use crate::services::HouseholdService;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category in a household
    pub fn create(&self, household_id: HouseholdId, name: &str) -> TrackerResult<Category> {
        HouseholdService::new(self.storage).get_required(household_id)?;

        let name = name.trim();
        self.ensure_unique(household_id, name, None)?;

        let category = Category::new(household_id, name);
        category.validate()?;

        let category = self.storage.categories.insert(category)?;
        self.storage.categories.save()?;

        info!(household = %household_id, category = %category.id, name = %category.name, "Created category");
        Ok(category)
    }

    /// Get a category, checking it belongs to the household
    pub fn get(&self, household_id: HouseholdId, id: CategoryId) -> TrackerResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| TrackerError::category_not_found(id.to_string()))?;

        if category.household_id != household_id {
            return Err(TrackerError::forbidden("Category", id));
        }
        Ok(category)
    }

    /// Find a household's category by name or ID string
    pub fn find(&self, household_id: HouseholdId, identifier: &str) -> TrackerResult<Option<Category>> {
        if let Some(category) = self.storage.categories.find_by_name(household_id, identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = CategoryId::parse(identifier) {
            return match self.get(household_id, id) {
                Ok(category) => Ok(Some(category)),
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => Err(e),
            };
        }

        Ok(None)
    }

    /// Find a category by name or ID, failing if there is none
    pub fn resolve(&self, household_id: HouseholdId, identifier: &str) -> TrackerResult<Category> {
        self.find(household_id, identifier)?
            .ok_or_else(|| TrackerError::category_not_found(identifier))
    }

    /// List a household's categories, sorted by name
    pub fn list(&self, household_id: HouseholdId) -> TrackerResult<Vec<Category>> {
        self.storage.categories.get_by_household(household_id)
    }

    /// Rename a category
    pub fn rename(
        &self,
        household_id: HouseholdId,
        id: CategoryId,
        name: &str,
    ) -> TrackerResult<Category> {
        let mut category = self.get(household_id, id)?;

        let name = name.trim();
        self.ensure_unique(household_id, name, Some(id))?;

        category.rename(name);
        category.validate()?;

        self.storage.categories.update(category.clone())?;
        self.storage.categories.save()?;

        info!(category = %id, name = %category.name, "Renamed category");
        Ok(category)
    }

    /// Delete a category that nothing refers to
    pub fn delete(&self, household_id: HouseholdId, id: CategoryId) -> TrackerResult<Category> {
        let category = self.get(household_id, id)?;

        if self.storage.transactions.uses_category(id)? || self.storage.recurring.uses_category(id)? {
            return Err(TrackerError::Validation(format!(
                "Category '{}' is still used by transactions or recurring expenses",
                category.name
            )));
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        info!(category = %id, name = %category.name, "Deleted category");
        Ok(category)
    }

    fn ensure_unique(
        &self,
        household_id: HouseholdId,
        name: &str,
        except: Option<CategoryId>,
    ) -> TrackerResult<()> {
        match self.storage.categories.find_by_name(household_id, name)? {
            Some(existing) if Some(existing.id) != except => Err(TrackerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn household(storage: &Storage, name: &str) -> HouseholdId {
        HouseholdService::new(storage)
            .create(name, "EUR", None)
            .unwrap()
            .id
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let hh = household(&storage, "Home");
        let service = CategoryService::new(&storage);

        let category = service.create(hh, "Groceries").unwrap();
        assert_eq!(category.id, CategoryId::new(1));
        assert_eq!(service.list(hh).unwrap().len(), 1);
    }

    #[test]
    fn test_create_requires_household() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        assert!(service
            .create(HouseholdId::new(9), "Food")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_duplicate_names_per_household() {
        let (_temp_dir, storage) = create_test_storage();
        let home = household(&storage, "Home");
        let cabin = household(&storage, "Cabin");
        let service = CategoryService::new(&storage);

        service.create(home, "Food").unwrap();
        assert!(matches!(
            service.create(home, "FOOD"),
            Err(TrackerError::Duplicate { .. })
        ));
        assert!(service.create(cabin, "Food").is_ok());
    }

    #[test]
    fn test_other_household_is_forbidden() {
        let (_temp_dir, storage) = create_test_storage();
        let home = household(&storage, "Home");
        let cabin = household(&storage, "Cabin");
        let service = CategoryService::new(&storage);

        let category = service.create(home, "Food").unwrap();
        assert!(service.get(cabin, category.id).unwrap_err().is_forbidden());
        assert!(service
            .rename(cabin, category.id, "Mine")
            .unwrap_err()
            .is_forbidden());
    }

    #[test]
    fn test_find_and_rename() {
        let (_temp_dir, storage) = create_test_storage();
        let hh = household(&storage, "Home");
        let service = CategoryService::new(&storage);
        let category = service.create(hh, "Food").unwrap();

        assert_eq!(service.find(hh, "food").unwrap().unwrap().id, category.id);
        assert_eq!(service.find(hh, "cat-1").unwrap().unwrap().id, category.id);
        assert!(service.find(hh, "cat-99").unwrap().is_none());

        let renamed = service.rename(hh, category.id, "Groceries").unwrap();
        assert_eq!(renamed.name, "Groceries");
        assert!(service.rename(hh, category.id, "").unwrap_err().is_validation());
    }

    #[test]
    fn test_delete_refuses_referenced_category() {
        let (_temp_dir, storage) = create_test_storage();
        let hh = household(&storage, "Home");
        let service = CategoryService::new(&storage);
        let used = service.create(hh, "Food").unwrap();
        let unused = service.create(hh, "Travel").unwrap();

        storage
            .transactions
            .insert(Transaction::new(
                hh,
                used.id,
                Money::from_cents(-1000),
                NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            ))
            .unwrap();

        assert!(service.delete(hh, used.id).unwrap_err().is_validation());
        service.delete(hh, unused.id).unwrap();
        assert!(service.find(hh, "Travel").unwrap().is_none());
    }
}
