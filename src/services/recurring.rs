//! Recurring expense service
//!
//! Provides business logic for recurring expenses and their dated schedule
//! overrides. Overrides are reached through their expense, so the expense's
//! household decides who may touch them.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    CategoryId, Frequency, HouseholdId, Money, OverrideId, RecurringExpense, RecurringExpenseId,
    RecurringScheduleOverride, YearMonth,
};
use crate::schedule::{effective_schedule, EffectiveSchedule};
use crate::services::{CategoryService, HouseholdService};
use crate::storage::Storage;

/// Service for recurring expense management
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

/// Input for creating a recurring expense
#[derive(Debug, Clone)]
pub struct CreateRecurringInput {
    pub household_id: HouseholdId,
    pub category_id: CategoryId,
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Fields to change on a recurring expense; `None` leaves a field as is
///
/// `end_date: Some(None)` makes the entry open-ended again.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecurringInput {
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
    pub active: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
}

/// Input for a schedule override
#[derive(Debug, Clone)]
pub struct CreateOverrideInput {
    pub effective_date: NaiveDate,
    pub amount: Money,
    pub frequency: Frequency,
}

/// Fields to change on an override
#[derive(Debug, Clone, Default)]
pub struct UpdateOverrideInput {
    pub effective_date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a recurring expense
    pub fn create(&self, input: CreateRecurringInput) -> TrackerResult<RecurringExpense> {
        HouseholdService::new(self.storage).get_required(input.household_id)?;
        CategoryService::new(self.storage).get(input.household_id, input.category_id)?;

        let mut expense = RecurringExpense::new(
            input.household_id,
            input.category_id,
            input.name.trim(),
            input.amount,
            input.frequency,
            input.start_date,
        );
        expense.end_date = input.end_date;
        if let Some(description) = input.description {
            expense.description = description;
        }
        expense.validate()?;

        let expense = self.storage.recurring.insert(expense)?;
        self.storage.recurring.save()?;

        info!(
            household = %expense.household_id,
            recurring_expense = %expense.id,
            name = %expense.name,
            amount = %expense.amount,
            frequency = %expense.frequency,
            "Created recurring expense"
        );
        Ok(expense)
    }

    /// Get a recurring expense, checking it belongs to the household
    pub fn get(
        &self,
        household_id: HouseholdId,
        id: RecurringExpenseId,
    ) -> TrackerResult<RecurringExpense> {
        let expense = self
            .storage
            .recurring
            .get(id)?
            .ok_or_else(|| TrackerError::recurring_not_found(id.to_string()))?;

        if expense.household_id != household_id {
            return Err(TrackerError::forbidden("Recurring expense", id));
        }
        Ok(expense)
    }

    /// List a household's recurring expenses, paused ones included
    pub fn list(&self, household_id: HouseholdId) -> TrackerResult<Vec<RecurringExpense>> {
        self.storage.recurring.get_by_household(household_id)
    }

    /// Update a recurring expense
    pub fn update(
        &self,
        household_id: HouseholdId,
        id: RecurringExpenseId,
        input: UpdateRecurringInput,
    ) -> TrackerResult<RecurringExpense> {
        let mut expense = self.get(household_id, id)?;

        if let Some(category_id) = input.category_id {
            CategoryService::new(self.storage).get(household_id, category_id)?;
            expense.category_id = category_id;
        }
        if let Some(name) = input.name {
            expense.name = name.trim().to_string();
        }
        if let Some(description) = input.description {
            expense.description = description;
        }
        if let Some(amount) = input.amount {
            expense.amount = amount;
        }
        if let Some(frequency) = input.frequency {
            expense.frequency = frequency;
        }
        if let Some(active) = input.active {
            expense.active = active;
        }
        if let Some(start_date) = input.start_date {
            expense.start_date = start_date;
        }
        if let Some(end_date) = input.end_date {
            expense.end_date = end_date;
        }

        expense.validate()?;
        expense.updated_at = chrono::Utc::now();

        self.storage.recurring.update(expense.clone())?;
        self.storage.recurring.save()?;

        info!(recurring_expense = %id, "Updated recurring expense");
        Ok(expense)
    }

    /// Delete a recurring expense and its overrides
    pub fn delete(
        &self,
        household_id: HouseholdId,
        id: RecurringExpenseId,
    ) -> TrackerResult<RecurringExpense> {
        let expense = self.get(household_id, id)?;

        self.storage.recurring.delete(id)?;
        self.storage.recurring.save()?;

        info!(recurring_expense = %id, name = %expense.name, "Deleted recurring expense");
        Ok(expense)
    }

    /// The schedule in force for a month, after overrides
    pub fn schedule_for_month(
        &self,
        household_id: HouseholdId,
        id: RecurringExpenseId,
        month: YearMonth,
    ) -> TrackerResult<EffectiveSchedule> {
        let expense = self.get(household_id, id)?;
        let overrides = self.storage.recurring.get_overrides(id)?;
        Ok(effective_schedule(
            expense.amount,
            expense.frequency,
            &overrides,
            month,
        ))
    }

    // === Schedule overrides ===

    /// Add a schedule override to a recurring expense
    pub fn create_override(
        &self,
        household_id: HouseholdId,
        recurring_expense_id: RecurringExpenseId,
        input: CreateOverrideInput,
    ) -> TrackerResult<RecurringScheduleOverride> {
        self.get(household_id, recurring_expense_id)?;

        let schedule_override = RecurringScheduleOverride::new(
            recurring_expense_id,
            input.effective_date,
            input.amount,
            input.frequency,
        );
        schedule_override.validate()?;

        let schedule_override = self.storage.recurring.insert_override(schedule_override)?;
        self.storage.recurring.save()?;

        info!(
            recurring_expense = %recurring_expense_id,
            schedule_override = %schedule_override.id,
            effective_date = %schedule_override.effective_date,
            amount = %schedule_override.amount,
            frequency = %schedule_override.frequency,
            "Created schedule override"
        );
        Ok(schedule_override)
    }

    /// Overrides of a recurring expense, ascending by effective date
    pub fn list_overrides(
        &self,
        household_id: HouseholdId,
        recurring_expense_id: RecurringExpenseId,
    ) -> TrackerResult<Vec<RecurringScheduleOverride>> {
        self.get(household_id, recurring_expense_id)?;
        self.storage.recurring.get_overrides(recurring_expense_id)
    }

    /// Get an override, checking its expense belongs to the household
    pub fn get_override(
        &self,
        household_id: HouseholdId,
        id: OverrideId,
    ) -> TrackerResult<RecurringScheduleOverride> {
        let schedule_override = self
            .storage
            .recurring
            .get_override(id)?
            .ok_or_else(|| TrackerError::override_not_found(id.to_string()))?;

        match self.get(household_id, schedule_override.recurring_expense_id) {
            Ok(_) => Ok(schedule_override),
            Err(e) if e.is_forbidden() => Err(TrackerError::forbidden("Schedule override", id)),
            Err(e) => Err(e),
        }
    }

    /// Update an override
    pub fn update_override(
        &self,
        household_id: HouseholdId,
        id: OverrideId,
        input: UpdateOverrideInput,
    ) -> TrackerResult<RecurringScheduleOverride> {
        let mut schedule_override = self.get_override(household_id, id)?;

        if let Some(effective_date) = input.effective_date {
            schedule_override.effective_date = effective_date;
        }
        if let Some(amount) = input.amount {
            schedule_override.amount = amount;
        }
        if let Some(frequency) = input.frequency {
            schedule_override.frequency = frequency;
        }

        schedule_override.validate()?;
        schedule_override.updated_at = chrono::Utc::now();

        self.storage
            .recurring
            .update_override(schedule_override.clone())?;
        self.storage.recurring.save()?;

        info!(schedule_override = %id, "Updated schedule override");
        Ok(schedule_override)
    }

    /// Delete an override
    pub fn delete_override(
        &self,
        household_id: HouseholdId,
        id: OverrideId,
    ) -> TrackerResult<RecurringScheduleOverride> {
        let schedule_override = self.get_override(household_id, id)?;

        self.storage.recurring.delete_override(id)?;
        self.storage.recurring.save()?;

        info!(schedule_override = %id, "Deleted schedule override");
        Ok(schedule_override)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        storage: Storage,
        household: HouseholdId,
        category: CategoryId,
    }

    fn setup() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path())).unwrap();
        storage.load_all().unwrap();

        let household = HouseholdService::new(&storage)
            .create("Home", "EUR", None)
            .unwrap()
            .id;
        let category = CategoryService::new(&storage)
            .create(household, "Housing")
            .unwrap()
            .id;
        Fixture {
            _temp_dir: temp_dir,
            storage,
            household,
            category,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent(fx: &Fixture) -> CreateRecurringInput {
        CreateRecurringInput {
            household_id: fx.household,
            category_id: fx.category,
            name: "Rent".into(),
            amount: Money::from_cents(-80000),
            frequency: Frequency::Monthly,
            start_date: date(2026, 1, 1),
            end_date: None,
            description: None,
        }
    }

    fn raise(cents: i64, effective: NaiveDate) -> CreateOverrideInput {
        CreateOverrideInput {
            effective_date: effective,
            amount: Money::from_cents(cents),
            frequency: Frequency::Monthly,
        }
    }

    #[test]
    fn test_create_recurring() {
        let fx = setup();
        let service = RecurringService::new(&fx.storage);

        let expense = service.create(rent(&fx)).unwrap();
        assert_eq!(expense.id, RecurringExpenseId::new(1));
        assert!(expense.active);
        assert_eq!(service.list(fx.household).unwrap().len(), 1);
    }

    #[test]
    fn test_create_validates_window_and_amount() {
        let fx = setup();
        let service = RecurringService::new(&fx.storage);

        let mut backwards = rent(&fx);
        backwards.end_date = Some(date(2025, 12, 31));
        assert!(service.create(backwards).unwrap_err().is_validation());

        let mut zero = rent(&fx);
        zero.amount = Money::zero();
        assert!(service.create(zero).unwrap_err().is_validation());
    }

    #[test]
    fn test_update_pause_and_reopen() {
        let fx = setup();
        let service = RecurringService::new(&fx.storage);
        let expense = service.create(rent(&fx)).unwrap();

        let paused = service
            .update(
                fx.household,
                expense.id,
                UpdateRecurringInput {
                    active: Some(false),
                    end_date: Some(Some(date(2026, 6, 30))),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!paused.active);
        assert_eq!(paused.end_date, Some(date(2026, 6, 30)));

        let reopened = service
            .update(
                fx.household,
                expense.id,
                UpdateRecurringInput {
                    end_date: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(reopened.end_date.is_none());
    }

    #[test]
    fn test_override_lifecycle() {
        let fx = setup();
        let service = RecurringService::new(&fx.storage);
        let expense = service.create(rent(&fx)).unwrap();

        let later = service
            .create_override(fx.household, expense.id, raise(-95000, date(2026, 9, 1)))
            .unwrap();
        let earlier = service
            .create_override(fx.household, expense.id, raise(-90000, date(2026, 4, 1)))
            .unwrap();

        let listed: Vec<OverrideId> = service
            .list_overrides(fx.household, expense.id)
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(listed, vec![earlier.id, later.id]);

        let may = YearMonth::new(2026, 5).unwrap();
        let schedule = service.schedule_for_month(fx.household, expense.id, may).unwrap();
        assert_eq!(schedule.amount, Money::from_cents(-90000));

        service
            .update_override(
                fx.household,
                earlier.id,
                UpdateOverrideInput {
                    effective_date: Some(date(2026, 6, 1)),
                    ..Default::default()
                },
            )
            .unwrap();
        let schedule = service.schedule_for_month(fx.household, expense.id, may).unwrap();
        assert_eq!(schedule.amount, Money::from_cents(-80000));

        service.delete_override(fx.household, later.id).unwrap();
        assert_eq!(service.list_overrides(fx.household, expense.id).unwrap().len(), 1);

        assert!(service
            .create_override(fx.household, expense.id, raise(0, date(2026, 7, 1)))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_other_household_is_forbidden() {
        let fx = setup();
        let other = HouseholdService::new(&fx.storage)
            .create("Cabin", "EUR", None)
            .unwrap()
            .id;
        let service = RecurringService::new(&fx.storage);
        let expense = service.create(rent(&fx)).unwrap();
        let ovr = service
            .create_override(fx.household, expense.id, raise(-90000, date(2026, 4, 1)))
            .unwrap();

        assert!(service.get(other, expense.id).unwrap_err().is_forbidden());
        assert!(service.delete(other, expense.id).unwrap_err().is_forbidden());
        assert!(service
            .list_overrides(other, expense.id)
            .unwrap_err()
            .is_forbidden());
        assert!(service
            .delete_override(other, ovr.id)
            .unwrap_err()
            .is_forbidden());
        assert!(service
            .get_override(fx.household, OverrideId::new(99))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_removes_overrides() {
        let fx = setup();
        let service = RecurringService::new(&fx.storage);
        let expense = service.create(rent(&fx)).unwrap();
        let ovr = service
            .create_override(fx.household, expense.id, raise(-90000, date(2026, 4, 1)))
            .unwrap();

        service.delete(fx.household, expense.id).unwrap();
        assert!(service
            .get_override(fx.household, ovr.id)
            .unwrap_err()
            .is_not_found());
    }
}
