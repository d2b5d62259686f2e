//! Monthly summary value objects
//!
//! Built fresh by the aggregator for one household and month; never stored.
//! Money fields serialise as decimal strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::{CategoryId, HouseholdId, RecurringExpenseId};
use super::money::Money;
use super::month::YearMonth;

/// What happened financially in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub household_id: HouseholdId,

    /// One-time income
    pub total_income: Money,
    /// One-time expenses
    pub total_expenses: Money,

    /// Sum of monthly-equivalent recurring amounts
    pub recurring_total: Money,
    pub recurring_income: Money,
    pub recurring_expenses: Money,

    /// Sum of one-time transaction amounts
    pub one_time_total: Money,
    pub one_time_income: Money,
    pub one_time_expenses: Money,

    /// Net for the month: recurring_total + one_time_total
    pub monthly_total: Money,

    /// Per-category buckets, sorted by category ID
    pub category_breakdown: Vec<CategorySummary>,

    /// Contributing recurring entries grouped by effective frequency
    #[serde(default)]
    pub recurring_groups: Vec<RecurringFrequencyGroup>,
}

impl MonthlySummary {
    /// An empty summary for the given household and month
    pub fn empty(household_id: HouseholdId, month: YearMonth) -> Self {
        Self {
            month,
            household_id,
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            recurring_total: Money::zero(),
            recurring_income: Money::zero(),
            recurring_expenses: Money::zero(),
            one_time_total: Money::zero(),
            one_time_income: Money::zero(),
            one_time_expenses: Money::zero(),
            monthly_total: Money::zero(),
            category_breakdown: Vec::new(),
            recurring_groups: Vec::new(),
        }
    }

    /// Gross income from both sources
    pub fn gross_income(&self) -> Money {
        self.recurring_income + self.one_time_income
    }

    /// Gross expenses from both sources (negative)
    pub fn gross_expenses(&self) -> Money {
        self.recurring_expenses + self.one_time_expenses
    }

    /// Whether nothing contributed to this month
    pub fn is_empty(&self) -> bool {
        self.category_breakdown.is_empty()
    }

    /// Look up a category's bucket
    pub fn category(&self, category_id: CategoryId) -> Option<&CategorySummary> {
        self.category_breakdown
            .iter()
            .find(|c| c.category_id == category_id)
    }
}

/// One category's contribution to the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: CategoryId,
    pub category_name: String,
    pub recurring: Money,
    pub one_time: Money,
    pub total: Money,
}

/// Recurring entries sharing the same effective frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringFrequencyGroup {
    pub frequency: Frequency,
    /// Sum of the entries' monthly-equivalent amounts
    pub total: Money,
    pub entries: Vec<RecurringEntry>,
}

/// A recurring expense as it applies to the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringEntry {
    pub recurring_expense_id: RecurringExpenseId,
    pub name: String,
    pub category_id: CategoryId,
    /// Effective amount per period
    pub amount: Money,
    /// Effective frequency
    pub frequency: Frequency,
    pub monthly_amount: Money,
    /// Start of the schedule in effect: the override's date, or the start date
    pub effective_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let mut summary =
            MonthlySummary::empty(HouseholdId::new(4), YearMonth::new(2026, 1).unwrap());
        summary.category_breakdown.push(CategorySummary {
            category_id: CategoryId::new(2),
            category_name: "Housing".into(),
            recurring: Money::from_cents(-80000),
            one_time: Money::zero(),
            total: Money::from_cents(-80000),
        });

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["month"], "2026-01");
        assert_eq!(value["household_id"], 4);
        for field in [
            "total_income",
            "total_expenses",
            "recurring_total",
            "recurring_income",
            "recurring_expenses",
            "one_time_total",
            "one_time_income",
            "one_time_expenses",
            "monthly_total",
        ] {
            assert!(value[field].is_string(), "{field} is not a string");
        }
        let entry = &value["category_breakdown"][0];
        assert_eq!(entry["category_id"], 2);
        assert_eq!(entry["category_name"], "Housing");
        assert_eq!(entry["total"], "-800.00");
    }

    #[test]
    fn test_gross_totals() {
        let mut summary =
            MonthlySummary::empty(HouseholdId::new(1), YearMonth::new(2026, 1).unwrap());
        summary.recurring_income = Money::from_cents(300000);
        summary.one_time_income = Money::from_cents(5000);
        summary.recurring_expenses = Money::from_cents(-80000);
        summary.one_time_expenses = Money::from_cents(-5000);
        assert_eq!(summary.gross_income(), Money::from_cents(305000));
        assert_eq!(summary.gross_expenses(), Money::from_cents(-85000));
        assert!(summary.is_empty());
    }
}
