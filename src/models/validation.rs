//! Field validation shared by the models
//!
//! These checks run in the service layer before anything is persisted; the
//! summary engine assumes its inputs already passed them.

use chrono::NaiveDate;

use super::money::{Money, MAX_AMOUNT};
use crate::error::{TrackerError, TrackerResult};

/// Maximum length of free-text descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Amounts must be non-zero and within the supported range
pub fn validate_amount(amount: Money) -> TrackerResult<()> {
    if amount.is_zero() {
        return Err(TrackerError::validation("amount", "must not be zero"));
    }
    if amount.abs().value() > MAX_AMOUNT {
        return Err(TrackerError::validation(
            "amount",
            "exceeds maximum (999999999.99)",
        ));
    }
    Ok(())
}

/// Names are trimmed, non-empty, and at most `max_len` characters
pub fn validate_name(field: &str, name: &str, max_len: usize) -> TrackerResult<()> {
    let len = name.trim().chars().count();
    if len == 0 || len > max_len {
        return Err(TrackerError::validation(
            field,
            format!("must be 1-{} characters", max_len),
        ));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> TrackerResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TrackerError::validation(
            "description",
            format!("must be at most {} characters", MAX_DESCRIPTION_LEN),
        ));
    }
    Ok(())
}

/// Currency must be a 3-letter uppercase ISO code
pub fn validate_currency(currency: &str) -> TrackerResult<()> {
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(TrackerError::validation(
            "currency",
            "must be a 3-letter uppercase ISO code",
        ));
    }
    Ok(())
}

/// An end date, when present, may not precede the start date
pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> TrackerResult<()> {
    if let Some(end) = end {
        if end < start {
            return Err(TrackerError::validation(
                "end_date",
                "must not be before start_date",
            ));
        }
    }
    Ok(())
}
