//! Monthly Summary
//!
//! Rolls recurring expenses and one-time transactions up into a single
//! `MonthlySummary`. Recurring entries are filtered by their activity window,
//! resolved against their overrides and normalised to the queried month;
//! transactions count at face value.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{
    Category, CategoryId, CategorySummary, Frequency, HouseholdId, Money, MonthlySummary,
    RecurringEntry, RecurringExpense, RecurringExpenseId, RecurringFrequencyGroup,
    RecurringScheduleOverride, Transaction, YearMonth,
};
use crate::schedule::{contributes_to_month, effective_schedule, monthly_equivalent};

/// Label used when a breakdown bucket's category cannot be resolved
pub const UNKNOWN_CATEGORY: &str = "Unknown category";

/// Read access the summary needs from the persistence layer
///
/// Implementations return data already scoped to the household; the
/// aggregation itself does the activity-window and month filtering of
/// recurring entries.
pub trait SummarySource {
    /// Whether the household exists at all
    fn household_exists(&self, household_id: HouseholdId) -> TrackerResult<bool>;

    /// Recurring expenses of the household, regardless of their window
    fn list_recurring_expenses(
        &self,
        household_id: HouseholdId,
    ) -> TrackerResult<Vec<RecurringExpense>>;

    /// Overrides attached to one recurring expense, in any order
    fn list_overrides(
        &self,
        recurring_expense_id: RecurringExpenseId,
    ) -> TrackerResult<Vec<RecurringScheduleOverride>>;

    /// Transactions of the household dated within the month
    fn list_transactions_in_month(
        &self,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<Vec<Transaction>>;

    /// Categories of the household
    fn list_categories(&self, household_id: HouseholdId) -> TrackerResult<Vec<Category>>;
}

/// Snapshot of everything one aggregation reads
#[derive(Debug, Clone, Default)]
pub struct SummaryInputs {
    pub recurring: Vec<RecurringExpense>,
    pub overrides: HashMap<RecurringExpenseId, Vec<RecurringScheduleOverride>>,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
}

impl SummaryInputs {
    /// Load a snapshot for one household and month
    pub fn load<S: SummarySource + ?Sized>(
        source: &S,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<Self> {
        let recurring = source.list_recurring_expenses(household_id)?;

        let mut overrides = HashMap::new();
        for expense in &recurring {
            let list = source.list_overrides(expense.id)?;
            if !list.is_empty() {
                overrides.insert(expense.id, list);
            }
        }

        Ok(Self {
            recurring,
            overrides,
            transactions: source.list_transactions_in_month(household_id, month)?,
            categories: source.list_categories(household_id)?,
        })
    }
}

/// Load the household's data for the month and aggregate it
pub fn generate<S: SummarySource + ?Sized>(
    source: &S,
    household_id: HouseholdId,
    month: YearMonth,
) -> TrackerResult<MonthlySummary> {
    let inputs = SummaryInputs::load(source, household_id, month)?;
    Ok(aggregate(household_id, month, &inputs))
}

/// Aggregate a snapshot into the summary for `month`
///
/// Transactions are expected to be pre-filtered to the month already.
pub fn aggregate(
    household_id: HouseholdId,
    month: YearMonth,
    inputs: &SummaryInputs,
) -> MonthlySummary {
    let mut summary = MonthlySummary::empty(household_id, month);

    let mut recurring_by_category: BTreeMap<CategoryId, Money> = BTreeMap::new();
    let mut one_time_by_category: BTreeMap<CategoryId, Money> = BTreeMap::new();
    let mut groups: HashMap<Frequency, Vec<RecurringEntry>> = HashMap::new();

    for expense in &inputs.recurring {
        if !contributes_to_month(expense, month) {
            debug!(recurring_expense = %expense.id, "Skipped: outside activity window or paused");
            continue;
        }

        let overrides = inputs
            .overrides
            .get(&expense.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let schedule = effective_schedule(expense.amount, expense.frequency, overrides, month);
        let monthly = monthly_equivalent(schedule.amount, schedule.frequency, month);

        summary.recurring_total += monthly;
        if monthly.is_positive() {
            summary.recurring_income += monthly;
        } else if monthly.is_negative() {
            summary.recurring_expenses += monthly;
        }
        *recurring_by_category
            .entry(expense.category_id)
            .or_insert_with(Money::zero) += monthly;

        groups
            .entry(schedule.frequency)
            .or_default()
            .push(RecurringEntry {
                recurring_expense_id: expense.id,
                name: expense.name.clone(),
                category_id: expense.category_id,
                amount: schedule.amount,
                frequency: schedule.frequency,
                monthly_amount: monthly,
                effective_date: schedule.effective_date.unwrap_or(expense.start_date),
            });
    }

    for txn in &inputs.transactions {
        summary.one_time_total += txn.amount;
        if txn.is_income() {
            summary.one_time_income += txn.amount;
        } else if txn.is_expense() {
            summary.one_time_expenses += txn.amount;
        }
        *one_time_by_category
            .entry(txn.category_id)
            .or_insert_with(Money::zero) += txn.amount;
    }

    summary.total_income = summary.one_time_income;
    summary.total_expenses = summary.one_time_expenses;
    summary.monthly_total = summary.recurring_total + summary.one_time_total;

    summary.category_breakdown =
        build_breakdown(&recurring_by_category, &one_time_by_category, &inputs.categories);
    summary.recurring_groups = build_groups(groups);

    debug!(
        household = %household_id,
        month = %month,
        recurring_total = %summary.recurring_total,
        one_time_total = %summary.one_time_total,
        categories = summary.category_breakdown.len(),
        "Aggregated monthly summary"
    );

    summary
}

fn build_breakdown(
    recurring: &BTreeMap<CategoryId, Money>,
    one_time: &BTreeMap<CategoryId, Money>,
    categories: &[Category],
) -> Vec<CategorySummary> {
    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut ids: Vec<CategoryId> = recurring.keys().chain(one_time.keys()).copied().collect();
    ids.sort();
    ids.dedup();

    ids.into_iter()
        .map(|id| {
            let recurring = recurring.get(&id).copied().unwrap_or_default();
            let one_time = one_time.get(&id).copied().unwrap_or_default();
            let name = names.get(&id).copied().unwrap_or_else(|| {
                warn!(category = %id, "Breakdown references a category unknown to the household");
                UNKNOWN_CATEGORY
            });
            CategorySummary {
                category_id: id,
                category_name: name.to_string(),
                recurring,
                one_time,
                total: recurring + one_time,
            }
        })
        .collect()
}

fn build_groups(mut groups: HashMap<Frequency, Vec<RecurringEntry>>) -> Vec<RecurringFrequencyGroup> {
    Frequency::all()
        .into_iter()
        .filter_map(|frequency| {
            let mut entries = groups.remove(&frequency)?;
            entries.sort_by(|a, b| {
                a.name
                    .cmp(&b.name)
                    .then(a.recurring_expense_id.cmp(&b.recurring_expense_id))
            });
            Some(RecurringFrequencyGroup {
                frequency,
                total: entries.iter().map(|e| e.monthly_amount).sum(),
                entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverrideId, TransactionId};
    use chrono::NaiveDate;

    const HH: HouseholdId = HouseholdId::new(1);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn category(id: i64, name: &str) -> Category {
        let mut c = Category::new(HH, name);
        c.id = CategoryId::new(id);
        c
    }

    fn recurring(
        id: i64,
        category_id: i64,
        name: &str,
        cents: i64,
        frequency: Frequency,
        start: NaiveDate,
    ) -> RecurringExpense {
        let mut r = RecurringExpense::new(
            HH,
            CategoryId::new(category_id),
            name,
            Money::from_cents(cents),
            frequency,
            start,
        );
        r.id = RecurringExpenseId::new(id);
        r
    }

    fn transaction(id: i64, category_id: i64, cents: i64, on: NaiveDate) -> Transaction {
        let mut t = Transaction::new(HH, CategoryId::new(category_id), Money::from_cents(cents), on);
        t.id = TransactionId::new(id);
        t
    }

    fn rent_and_groceries() -> SummaryInputs {
        SummaryInputs {
            recurring: vec![recurring(1, 1, "Rent", -80000, Frequency::Monthly, date(2026, 1, 1))],
            transactions: vec![transaction(1, 1, -5000, date(2026, 1, 15))],
            categories: vec![category(1, "Housing"), category(2, "Food")],
            ..Default::default()
        }
    }

    #[test]
    fn test_recurring_and_one_time_same_category() {
        let summary = aggregate(HH, month(2026, 1), &rent_and_groceries());

        assert_eq!(summary.month, month(2026, 1));
        assert_eq!(summary.recurring_total, Money::from_cents(-80000));
        assert_eq!(summary.one_time_total, Money::from_cents(-5000));
        assert_eq!(summary.monthly_total, Money::from_cents(-85000));
        assert_eq!(summary.category_breakdown.len(), 1);

        let housing = &summary.category_breakdown[0];
        assert_eq!(housing.category_name, "Housing");
        assert_eq!(housing.recurring, Money::from_cents(-80000));
        assert_eq!(housing.one_time, Money::from_cents(-5000));
        assert_eq!(housing.total, Money::from_cents(-85000));
    }

    #[test]
    fn test_recurring_and_one_time_different_categories() {
        let mut inputs = rent_and_groceries();
        inputs.transactions[0].category_id = CategoryId::new(2);

        let summary = aggregate(HH, month(2026, 1), &inputs);
        assert_eq!(summary.category_breakdown.len(), 2);
        assert_eq!(
            summary.category(CategoryId::new(1)).unwrap().total,
            Money::from_cents(-80000)
        );
        let food = summary.category(CategoryId::new(2)).unwrap();
        assert_eq!(food.recurring, Money::zero());
        assert_eq!(food.total, Money::from_cents(-5000));
    }

    #[test]
    fn test_override_changes_later_months_only() {
        let mut inputs = rent_and_groceries();
        inputs.transactions.clear();
        let mut ovr = RecurringScheduleOverride::new(
            RecurringExpenseId::new(1),
            date(2026, 4, 1),
            Money::from_cents(-90000),
            Frequency::Monthly,
        );
        ovr.id = OverrideId::new(1);
        inputs.overrides.insert(RecurringExpenseId::new(1), vec![ovr]);

        let march = aggregate(HH, month(2026, 3), &inputs);
        assert_eq!(march.recurring_total, Money::from_cents(-80000));

        let may = aggregate(HH, month(2026, 5), &inputs);
        assert_eq!(may.recurring_total, Money::from_cents(-90000));
        let entry = &may.recurring_groups[0].entries[0];
        assert_eq!(entry.effective_date, date(2026, 4, 1));
    }

    #[test]
    fn test_excluded_outside_window() {
        let mut inputs = rent_and_groceries();
        inputs.transactions.clear();
        inputs.recurring[0].start_date = date(2026, 3, 1);
        inputs.recurring[0].end_date = Some(date(2026, 6, 30));

        for m in [month(2026, 2), month(2026, 7)] {
            let summary = aggregate(HH, m, &inputs);
            assert_eq!(summary.recurring_total, Money::zero());
            assert!(summary.category_breakdown.is_empty());
            assert!(summary.recurring_groups.is_empty());
        }

        let june = aggregate(HH, month(2026, 6), &inputs);
        assert_eq!(june.recurring_total, Money::from_cents(-80000));
    }

    #[test]
    fn test_inactive_entry_excluded() {
        let mut inputs = rent_and_groceries();
        inputs.transactions.clear();
        inputs.recurring[0].active = false;

        let summary = aggregate(HH, month(2026, 1), &inputs);
        assert!(summary.is_empty());
        assert_eq!(summary.monthly_total, Money::zero());
    }

    #[test]
    fn test_income_and_expense_splits() {
        let inputs = SummaryInputs {
            recurring: vec![
                recurring(1, 1, "Salary", 300000, Frequency::Monthly, date(2025, 1, 1)),
                recurring(2, 2, "Rent", -80000, Frequency::Monthly, date(2025, 1, 1)),
            ],
            transactions: vec![
                transaction(1, 3, 2500, date(2026, 1, 3)),
                transaction(2, 3, -4000, date(2026, 1, 20)),
            ],
            categories: vec![category(1, "Income"), category(2, "Housing"), category(3, "Misc")],
            ..Default::default()
        };

        let summary = aggregate(HH, month(2026, 1), &inputs);
        assert_eq!(summary.recurring_income, Money::from_cents(300000));
        assert_eq!(summary.recurring_expenses, Money::from_cents(-80000));
        assert_eq!(summary.recurring_total, Money::from_cents(220000));
        assert_eq!(summary.one_time_income, Money::from_cents(2500));
        assert_eq!(summary.one_time_expenses, Money::from_cents(-4000));
        assert_eq!(summary.total_income, Money::from_cents(2500));
        assert_eq!(summary.total_expenses, Money::from_cents(-4000));
        assert_eq!(summary.monthly_total, Money::from_cents(218500));
        assert_eq!(
            summary.monthly_total,
            summary.gross_income() + summary.gross_expenses()
        );
    }

    #[test]
    fn test_normalised_amounts_keep_precision() {
        let inputs = SummaryInputs {
            recurring: vec![
                recurring(1, 1, "Insurance", -10000, Frequency::Quarterly, date(2025, 1, 1)),
                recurring(2, 1, "Coffee", -350, Frequency::Weekday, date(2025, 1, 1)),
            ],
            categories: vec![category(1, "Misc")],
            ..Default::default()
        };

        let summary = aggregate(HH, month(2026, 2), &inputs);
        let expected = Money::from_cents(-10000) / 3 + Money::from_cents(-350) * 20;
        assert_eq!(summary.recurring_total, expected);
        assert_eq!(summary.recurring_total.to_string(), "-103.33");
    }

    #[test]
    fn test_breakdown_sorted_by_category_id() {
        let inputs = SummaryInputs {
            recurring: vec![recurring(1, 9, "Gym", -3000, Frequency::Monthly, date(2025, 1, 1))],
            transactions: vec![
                transaction(1, 5, -100, date(2026, 1, 2)),
                transaction(2, 2, -200, date(2026, 1, 3)),
            ],
            categories: vec![category(2, "B"), category(5, "A"), category(9, "C")],
            ..Default::default()
        };

        let summary = aggregate(HH, month(2026, 1), &inputs);
        let ids: Vec<i64> = summary
            .category_breakdown
            .iter()
            .map(|c| c.category_id.value())
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_unknown_category_label() {
        let mut inputs = rent_and_groceries();
        inputs.categories.clear();
        let summary = aggregate(HH, month(2026, 1), &inputs);
        assert_eq!(summary.category_breakdown[0].category_name, UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_recurring_groups_by_effective_frequency() {
        let inputs = SummaryInputs {
            recurring: vec![
                recurring(1, 1, "Streaming", -1299, Frequency::Monthly, date(2025, 1, 1)),
                recurring(2, 1, "Cleaner", -6000, Frequency::Biweekly, date(2025, 1, 1)),
                recurring(3, 1, "Internet", -3999, Frequency::Monthly, date(2025, 1, 1)),
            ],
            categories: vec![category(1, "Bills")],
            ..Default::default()
        };

        let summary = aggregate(HH, month(2026, 1), &inputs);
        let frequencies: Vec<Frequency> =
            summary.recurring_groups.iter().map(|g| g.frequency).collect();
        assert_eq!(frequencies, vec![Frequency::Biweekly, Frequency::Monthly]);

        let monthly = &summary.recurring_groups[1];
        let names: Vec<&str> = monthly.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Internet", "Streaming"]);
        assert_eq!(monthly.total, Money::from_cents(-5298));
        assert_eq!(monthly.entries[0].effective_date, date(2025, 1, 1));
    }

    struct FixedSource(SummaryInputs);

    impl SummarySource for FixedSource {
        fn household_exists(&self, household_id: HouseholdId) -> TrackerResult<bool> {
            Ok(household_id == HH)
        }

        fn list_recurring_expenses(&self, _: HouseholdId) -> TrackerResult<Vec<RecurringExpense>> {
            Ok(self.0.recurring.clone())
        }

        fn list_overrides(
            &self,
            id: RecurringExpenseId,
        ) -> TrackerResult<Vec<RecurringScheduleOverride>> {
            Ok(self.0.overrides.get(&id).cloned().unwrap_or_default())
        }

        fn list_transactions_in_month(
            &self,
            _: HouseholdId,
            month: YearMonth,
        ) -> TrackerResult<Vec<Transaction>> {
            Ok(self
                .0
                .transactions
                .iter()
                .filter(|t| t.is_in_month(&month))
                .cloned()
                .collect())
        }

        fn list_categories(&self, _: HouseholdId) -> TrackerResult<Vec<Category>> {
            Ok(self.0.categories.clone())
        }
    }

    #[test]
    fn test_generate_from_source() {
        let source = FixedSource(rent_and_groceries());

        let jan = generate(&source, HH, month(2026, 1)).unwrap();
        assert_eq!(jan.monthly_total, Money::from_cents(-85000));

        let feb = generate(&source, HH, month(2026, 2)).unwrap();
        assert_eq!(feb.one_time_total, Money::zero());
        assert_eq!(feb.monthly_total, Money::from_cents(-80000));
    }
}
