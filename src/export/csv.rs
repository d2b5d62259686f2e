//! CSV export of a summary's category breakdown

use std::io::Write;

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthlySummary;

#[derive(Serialize)]
struct BreakdownRow<'a> {
    category_id: i64,
    category_name: &'a str,
    recurring: String,
    one_time: String,
    total: String,
}

/// Write one row per category with exact (unrounded) amounts
pub fn write_breakdown_csv<W: Write>(summary: &MonthlySummary, writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if summary.category_breakdown.is_empty() {
        csv_writer.write_record([
            "category_id",
            "category_name",
            "recurring",
            "one_time",
            "total",
        ])?;
    }

    for entry in &summary.category_breakdown {
        csv_writer.serialize(BreakdownRow {
            category_id: entry.category_id.value(),
            category_name: &entry.category_name,
            recurring: entry.recurring.to_exact_string(),
            one_time: entry.one_time.to_exact_string(),
            total: entry.total.to_exact_string(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
