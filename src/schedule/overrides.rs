//! Schedule override resolution
//!
//! Picks the schedule in force for a reference month: the latest override
//! whose effective date is on or before the month's last day, or the base
//! schedule when none qualifies. Selection is relative to the queried month,
//! not to today, so past and future summaries are stable.

use chrono::NaiveDate;

use crate::models::{Frequency, Money, OverrideId, RecurringScheduleOverride, YearMonth};

/// The (amount, frequency) pair in force for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveSchedule {
    pub amount: Money,
    pub frequency: Frequency,
    /// The override that supplied this schedule, if any
    pub override_id: Option<OverrideId>,
    /// Effective date of that override
    pub effective_date: Option<NaiveDate>,
}

impl EffectiveSchedule {
    /// The base schedule, untouched by overrides
    pub fn base(amount: Money, frequency: Frequency) -> Self {
        Self {
            amount,
            frequency,
            override_id: None,
            effective_date: None,
        }
    }

    /// Whether an override replaced the base schedule
    pub fn is_overridden(&self) -> bool {
        self.override_id.is_some()
    }
}

/// Resolve the schedule in force for `month`
///
/// The caller's slice is left untouched. Overrides sharing an effective date
/// are ordered by ID, so the one with the higher ID wins.
pub fn effective_schedule(
    base_amount: Money,
    base_frequency: Frequency,
    overrides: &[RecurringScheduleOverride],
    month: YearMonth,
) -> EffectiveSchedule {
    let month_end = month.last_day();

    let mut sorted: Vec<&RecurringScheduleOverride> = overrides.iter().collect();
    sorted.sort_by_key(|o| (o.effective_date, o.id));

    sorted
        .into_iter()
        .take_while(|o| o.effective_date <= month_end)
        .last()
        .map(|o| EffectiveSchedule {
            amount: o.amount,
            frequency: o.frequency,
            override_id: Some(o.id),
            effective_date: Some(o.effective_date),
        })
        .unwrap_or_else(|| EffectiveSchedule::base(base_amount, base_frequency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecurringExpenseId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn ovr(id: i64, effective: NaiveDate, cents: i64, frequency: Frequency) -> RecurringScheduleOverride {
        let mut o = RecurringScheduleOverride::new(
            RecurringExpenseId::new(1),
            effective,
            Money::from_cents(cents),
            frequency,
        );
        o.id = OverrideId::new(id);
        o
    }

    fn base() -> (Money, Frequency) {
        (Money::from_cents(-80000), Frequency::Monthly)
    }

    #[test]
    fn test_no_overrides_returns_base() {
        let (amount, freq) = base();
        for m in [month(2020, 1), month(2026, 3), month(2030, 12)] {
            let schedule = effective_schedule(amount, freq, &[], m);
            assert_eq!(schedule, EffectiveSchedule::base(amount, freq));
            assert!(!schedule.is_overridden());
        }
    }

    #[test]
    fn test_future_override_does_not_apply() {
        let (amount, freq) = base();
        let overrides = [ovr(1, date(2026, 4, 1), -90000, Frequency::Monthly)];

        let march = effective_schedule(amount, freq, &overrides, month(2026, 3));
        assert_eq!(march.amount, amount);

        let april = effective_schedule(amount, freq, &overrides, month(2026, 4));
        assert_eq!(april.amount, Money::from_cents(-90000));
        assert_eq!(april.effective_date, Some(date(2026, 4, 1)));
    }

    #[test]
    fn test_override_on_last_day_applies() {
        let (amount, freq) = base();
        let overrides = [ovr(1, date(2026, 3, 31), -90000, Frequency::Quarterly)];
        let schedule = effective_schedule(amount, freq, &overrides, month(2026, 3));
        assert_eq!(schedule.amount, Money::from_cents(-90000));
        assert_eq!(schedule.frequency, Frequency::Quarterly);
    }

    #[test]
    fn test_later_override_supersedes() {
        let (amount, freq) = base();
        let overrides = [
            ovr(1, date(2026, 2, 1), -85000, Frequency::Monthly),
            ovr(2, date(2026, 6, 1), -95000, Frequency::Monthly),
        ];
        let check = |m, cents| {
            assert_eq!(
                effective_schedule(amount, freq, &overrides, m).amount,
                Money::from_cents(cents)
            )
        };
        check(month(2026, 1), -80000);
        check(month(2026, 2), -85000);
        check(month(2026, 5), -85000);
        check(month(2026, 6), -95000);
        check(month(2027, 1), -95000);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let (amount, freq) = base();
        let sorted = vec![
            ovr(1, date(2026, 1, 15), -81000, Frequency::Monthly),
            ovr(2, date(2026, 3, 1), -82000, Frequency::Weekly),
            ovr(3, date(2026, 7, 1), -83000, Frequency::Yearly),
        ];
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        shuffled.swap(0, 1);

        for m in 1..=12 {
            assert_eq!(
                effective_schedule(amount, freq, &sorted, month(2026, m)),
                effective_schedule(amount, freq, &shuffled, month(2026, m)),
            );
        }
    }

    #[test]
    fn test_same_date_tie_goes_to_higher_id() {
        let (amount, freq) = base();
        let a = ovr(7, date(2026, 4, 1), -90000, Frequency::Monthly);
        let b = ovr(3, date(2026, 4, 1), -70000, Frequency::Monthly);

        for overrides in [vec![a.clone(), b.clone()], vec![b, a]] {
            let schedule = effective_schedule(amount, freq, &overrides, month(2026, 4));
            assert_eq!(schedule.override_id, Some(OverrideId::new(7)));
            assert_eq!(schedule.amount, Money::from_cents(-90000));
        }
    }

    #[test]
    fn test_caller_slice_untouched() {
        let (amount, freq) = base();
        let overrides = vec![
            ovr(2, date(2026, 6, 1), -95000, Frequency::Monthly),
            ovr(1, date(2026, 2, 1), -85000, Frequency::Monthly),
        ];
        effective_schedule(amount, freq, &overrides, month(2026, 12));
        assert_eq!(overrides[0].id, OverrideId::new(2));
        assert_eq!(overrides[1].id, OverrideId::new(1));
    }
}
