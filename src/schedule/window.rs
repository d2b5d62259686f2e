//! Activity window filtering

use chrono::NaiveDate;

use crate::models::{RecurringExpense, YearMonth};

/// Whether an inclusive `start..=end` window overlaps the month at all
///
/// Starting on the month's last day or ending on its first day both count.
pub fn is_active_in_month(start: NaiveDate, end: Option<NaiveDate>, month: YearMonth) -> bool {
    start <= month.last_day() && end.map_or(true, |end| end >= month.first_day())
}

/// Whether a recurring expense contributes to the month
///
/// The manual `active` flag is checked first; a paused entry never
/// contributes, whatever its window says.
pub fn contributes_to_month(expense: &RecurringExpense, month: YearMonth) -> bool {
    expense.active && is_active_in_month(expense.start_date, expense.end_date, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Frequency, HouseholdId, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> YearMonth {
        YearMonth::new(2026, 3).unwrap()
    }

    #[test]
    fn test_open_ended() {
        assert!(is_active_in_month(date(2026, 1, 1), None, march()));
        assert!(is_active_in_month(date(2020, 6, 15), None, march()));
        assert!(!is_active_in_month(date(2026, 4, 1), None, march()));
    }

    #[test]
    fn test_inclusive_boundaries() {
        assert!(is_active_in_month(date(2026, 3, 31), None, march()));
        assert!(is_active_in_month(date(2026, 1, 1), Some(date(2026, 3, 1)), march()));
        assert!(!is_active_in_month(date(2026, 1, 1), Some(date(2026, 2, 28)), march()));
    }

    #[test]
    fn test_window_inside_month() {
        assert!(is_active_in_month(
            date(2026, 3, 10),
            Some(date(2026, 3, 12)),
            march()
        ));
    }

    #[test]
    fn test_paused_entry_never_contributes() {
        let mut expense = RecurringExpense::new(
            HouseholdId::new(1),
            CategoryId::new(1),
            "Gym",
            Money::from_cents(-3000),
            Frequency::Monthly,
            date(2026, 1, 1),
        );
        assert!(contributes_to_month(&expense, march()));
        expense.set_active(false);
        assert!(!contributes_to_month(&expense, march()));
    }
}
