//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod household;
pub mod recurring;
pub mod summary;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use household::{handle_household_command, HouseholdCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use summary::{handle_summary_command, SummaryArgs, SummaryFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::str::FromStr;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Frequency, Household, Money, YearMonth};
use crate::services::HouseholdService;
use crate::storage::Storage;

/// Pick the household a command acts on: `--household` if given, else the default
pub fn resolve_household(
    storage: &Storage,
    settings: &Settings,
    requested: Option<&str>,
) -> TrackerResult<Household> {
    let service = HouseholdService::new(storage);

    match requested {
        Some(identifier) => service
            .find(identifier)?
            .ok_or_else(|| TrackerError::household_not_found(identifier)),
        None => match settings.default_household {
            Some(id) => service.get_required(id),
            None => Err(TrackerError::Validation(
                "No household selected. Pass --household or run 'money-tracker household use <NAME>'"
                    .into(),
            )),
        },
    }
}

/// Parse a user-supplied amount such as "-50" or "1234.56"
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a date in the configured format, accepting ISO dates as well
pub(crate) fn parse_date(input: &str, settings: &Settings) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, &settings.date_format)
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .map_err(|_| {
            TrackerError::Validation(format!(
                "Invalid date '{}'. Use {} or YYYY-MM-DD",
                input, settings.date_format
            ))
        })
}

pub(crate) fn parse_optional_date(
    input: Option<&str>,
    settings: &Settings,
) -> TrackerResult<Option<NaiveDate>> {
    input.map(|s| parse_date(s, settings)).transpose()
}

pub(crate) fn parse_frequency(input: &str) -> TrackerResult<Frequency> {
    Frequency::from_str(input.trim())
}

/// Parse `--month`, defaulting to the current month
pub(crate) fn parse_month(input: Option<&str>) -> TrackerResult<YearMonth> {
    match input {
        Some(s) => YearMonth::parse(s),
        None => YearMonth::current(),
    }
}

/// Parse an entity ID given as `7` or with its display prefix (`txn-7`)
pub(crate) fn parse_id<T: FromStr>(entity_type: &str, input: &str) -> TrackerResult<T> {
    input
        .trim()
        .parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid {} ID: {}", entity_type, input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::TransactionId;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date_formats() {
        let mut settings = Settings::default();
        let expected = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(parse_date("2026-03-05", &settings).unwrap(), expected);

        settings.date_format = "%d.%m.%Y".into();
        assert_eq!(parse_date("05.03.2026", &settings).unwrap(), expected);
        assert_eq!(parse_date("2026-03-05", &settings).unwrap(), expected);
        assert!(parse_date("March 5th", &settings).unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("-50").unwrap(), Money::from_cents(-5000));
        assert!(parse_amount("fifty").is_err());
        assert_eq!(parse_frequency("weekly").unwrap(), Frequency::Weekly);
        assert!(matches!(
            parse_frequency("fortnightly").unwrap_err(),
            TrackerError::InvalidFrequency(_)
        ));
        assert_eq!(
            parse_id::<TransactionId>("transaction", "txn-7").unwrap(),
            TransactionId::new(7)
        );
        assert!(parse_id::<TransactionId>("transaction", "seven").is_err());
        assert!(matches!(
            parse_month(Some("2026-13")).unwrap_err(),
            TrackerError::InvalidMonth(_)
        ));
    }

    #[test]
    fn test_resolve_household() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path())).unwrap();
        storage.load_all().unwrap();
        let home = HouseholdService::new(&storage)
            .create("Home", "EUR", None)
            .unwrap();

        let mut settings = Settings::default();
        assert!(resolve_household(&storage, &settings, None)
            .unwrap_err()
            .is_validation());
        assert_eq!(
            resolve_household(&storage, &settings, Some("home")).unwrap().id,
            home.id
        );
        assert!(resolve_household(&storage, &settings, Some("Cabin"))
            .unwrap_err()
            .is_not_found());

        settings.default_household = Some(home.id);
        assert_eq!(resolve_household(&storage, &settings, None).unwrap().id, home.id);
    }
}
