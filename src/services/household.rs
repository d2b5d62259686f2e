//! Household service
//!
//! Provides business logic for household management. Deleting a household
//! removes everything it owns.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Household, HouseholdId};
use crate::storage::Storage;

/// Service for household management
pub struct HouseholdService<'a> {
    storage: &'a Storage,
}

/// What a household delete removed alongside the household itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedCounts {
    pub categories: usize,
    pub transactions: usize,
    pub recurring_expenses: usize,
}

impl<'a> HouseholdService<'a> {
    /// Create a new household service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new household
    pub fn create(
        &self,
        name: &str,
        currency: &str,
        description: Option<&str>,
    ) -> TrackerResult<Household> {
        let name = name.trim();
        if self.storage.households.find_by_name(name)?.is_some() {
            return Err(TrackerError::Duplicate {
                entity_type: "Household",
                identifier: name.to_string(),
            });
        }

        let mut household = Household::new(name, currency.trim().to_uppercase());
        if let Some(description) = description {
            household.description = description.to_string();
        }
        household.validate()?;

        let household = self.storage.households.insert(household)?;
        self.storage.households.save()?;

        info!(household = %household.id, name = %household.name, "Created household");
        Ok(household)
    }

    /// Get a household by ID
    pub fn get(&self, id: HouseholdId) -> TrackerResult<Option<Household>> {
        self.storage.households.get(id)
    }

    /// Get a household by ID, failing if it does not exist
    pub fn get_required(&self, id: HouseholdId) -> TrackerResult<Household> {
        self.get(id)?
            .ok_or_else(|| TrackerError::household_not_found(id.to_string()))
    }

    /// Find a household by name or ID string
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Household>> {
        if let Some(household) = self.storage.households.find_by_name(identifier)? {
            return Ok(Some(household));
        }

        if let Ok(id) = HouseholdId::parse(identifier) {
            return self.get(id);
        }

        Ok(None)
    }

    /// List all households
    pub fn list(&self) -> TrackerResult<Vec<Household>> {
        self.storage.households.get_all()
    }

    /// Update a household's name, description or currency
    pub fn update(
        &self,
        id: HouseholdId,
        name: Option<&str>,
        description: Option<&str>,
        currency: Option<&str>,
    ) -> TrackerResult<Household> {
        let mut household = self.get_required(id)?;

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if let Some(existing) = self.storage.households.find_by_name(new_name)? {
                if existing.id != id {
                    return Err(TrackerError::Duplicate {
                        entity_type: "Household",
                        identifier: new_name.to_string(),
                    });
                }
            }
            household.name = new_name.to_string();
        }
        if let Some(description) = description {
            household.description = description.to_string();
        }
        if let Some(currency) = currency {
            household.currency = currency.trim().to_uppercase();
        }

        household.validate()?;
        household.updated_at = chrono::Utc::now();

        self.storage.households.update(household.clone())?;
        self.storage.households.save()?;

        info!(household = %household.id, "Updated household");
        Ok(household)
    }

    /// Delete a household and everything it owns
    pub fn delete(&self, id: HouseholdId) -> TrackerResult<DeletedCounts> {
        let household = self.get_required(id)?;

        let counts = DeletedCounts {
            recurring_expenses: self.storage.recurring.delete_by_household(id)?,
            transactions: self.storage.transactions.delete_by_household(id)?,
            categories: self.storage.categories.delete_by_household(id)?,
        };
        self.storage.households.delete(id)?;
        self.storage.save_all()?;

        info!(
            household = %id,
            name = %household.name,
            categories = counts.categories,
            transactions = counts.transactions,
            recurring_expenses = counts.recurring_expenses,
            "Deleted household"
        );
        Ok(counts)
    }
}
