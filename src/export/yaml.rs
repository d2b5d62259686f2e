//! YAML export of a monthly summary

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthlySummary;

/// Write the summary as YAML, preceded by a short header comment
pub fn summary_to_yaml<W: Write>(summary: &MonthlySummary, writer: &mut W) -> TrackerResult<()> {
    writeln!(
        writer,
        "# Monthly summary for household {} ({})",
        summary.household_id.value(),
        summary.month
    )
    .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are exact decimal strings.")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, summary).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
