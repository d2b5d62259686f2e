//! Recurrence frequency of a recurring expense or schedule override

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// How often a recurring amount is paid or received
///
/// The set is closed: anything else is rejected when parsed from user input or
/// stored data, so code holding a `Frequency` never has to handle an unknown one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every calendar day
    Daily,
    /// Every Monday to Friday
    Weekday,
    Weekly,
    /// Every two weeks
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// All frequencies, from shortest to longest period
    pub const fn all() -> [Frequency; 7] {
        [
            Self::Daily,
            Self::Weekday,
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Yearly,
        ]
    }

    /// The lowercase wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekday => "weekday",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Human-readable label for tables
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekday => "Weekdays",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Every 2 weeks",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Whether the monthly equivalent depends on the calendar layout of the month
    pub const fn is_day_based(&self) -> bool {
        matches!(self, Self::Daily | Self::Weekday)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|freq| freq.as_str() == normalized)
            .ok_or_else(|| TrackerError::InvalidFrequency(s.to_string()))
    }
}
