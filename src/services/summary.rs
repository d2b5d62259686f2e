//! Summary service
//!
//! Entry point for monthly summaries. Generic over the data source so the
//! aggregation can run against storage or any other snapshot provider.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{HouseholdId, MonthlySummary, YearMonth};
use crate::reports::{monthly_summary, SummarySource};

/// Service producing monthly summaries
pub struct SummaryService<'a, S: SummarySource + ?Sized> {
    source: &'a S,
}

impl<'a, S: SummarySource + ?Sized> SummaryService<'a, S> {
    /// Create a new summary service
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Summary for a household, year and 1-based month
    pub fn monthly_summary(
        &self,
        household_id: HouseholdId,
        year: i32,
        month: u32,
    ) -> TrackerResult<MonthlySummary> {
        self.summary_for(household_id, YearMonth::new(year, month)?)
    }

    /// Summary for a household and month
    pub fn summary_for(
        &self,
        household_id: HouseholdId,
        month: YearMonth,
    ) -> TrackerResult<MonthlySummary> {
        if !self.source.household_exists(household_id)? {
            return Err(TrackerError::household_not_found(household_id.to_string()));
        }

        let summary = monthly_summary::generate(self.source, household_id, month)?;
        info!(
            household = %household_id,
            month = %month,
            monthly_total = %summary.monthly_total,
            "Generated monthly summary"
        );
        Ok(summary)
    }
}
