//! Frequency normalisation
//!
//! Converts an amount paid at some frequency into its monthly equivalent for a
//! specific calendar month. Only day-based frequencies depend on the month;
//! division is exact decimal division and nothing is rounded here.

use chrono::{Datelike, Weekday};

use crate::error::TrackerResult;
use crate::models::{Frequency, Money, YearMonth};

/// Monthly-equivalent value of `amount` paid at `frequency` during `month`
pub fn monthly_equivalent(amount: Money, frequency: Frequency, month: YearMonth) -> Money {
    match frequency {
        Frequency::Monthly => amount,
        Frequency::Quarterly => amount / 3,
        Frequency::Yearly => amount / 12,
        Frequency::Weekly => amount * 52 / 12,
        Frequency::Biweekly => amount * 26 / 12,
        Frequency::Daily => amount * i64::from(month.days_in_month()),
        Frequency::Weekday => amount * i64::from(weekdays_in_month(month)),
    }
}

/// Normalise an amount whose frequency is still in its textual form
///
/// Fails with `InvalidFrequency` for anything outside the supported set.
pub fn normalize(amount: Money, frequency: &str, month: YearMonth) -> TrackerResult<Money> {
    let frequency: Frequency = frequency.parse()?;
    Ok(monthly_equivalent(amount, frequency, month))
}

/// Number of Monday-to-Friday days in the month
pub fn weekdays_in_month(month: YearMonth) -> u32 {
    month
        .first_day()
        .iter_days()
        .take_while(|day| *day <= month.last_day())
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}
