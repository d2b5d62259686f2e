//! JSON export of a monthly summary

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthlySummary;

/// Write the summary as JSON
pub fn summary_to_json<W: Write>(
    summary: &MonthlySummary,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, summary)
    } else {
        serde_json::to_writer(&mut *writer, summary)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

/// Read a summary previously written by `summary_to_json`
pub fn summary_from_json(json_str: &str) -> TrackerResult<MonthlySummary> {
    Ok(serde_json::from_str(json_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, CategorySummary, HouseholdId, Money, YearMonth};

    fn sample() -> MonthlySummary {
        let mut summary =
            MonthlySummary::empty(HouseholdId::new(7), YearMonth::new(2026, 1).unwrap());
        summary.one_time_total = Money::from_cents(-5000);
        summary.total_expenses = Money::from_cents(-5000);
        summary.monthly_total = Money::from_cents(-5000);
        summary.category_breakdown.push(CategorySummary {
            category_id: CategoryId::new(3),
            category_name: "Food".into(),
            recurring: Money::zero(),
            one_time: Money::from_cents(-5000),
            total: Money::from_cents(-5000),
        });
        summary
    }

    #[test]
    fn test_wire_shape() {
        let mut buffer = Vec::new();
        summary_to_json(&sample(), &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["month"], "2026-01");
        assert_eq!(value["household_id"], 7);
        assert_eq!(value["one_time_total"], "-50.00");
        assert_eq!(value["category_breakdown"][0]["category_id"], 3);
        assert_eq!(value["category_breakdown"][0]["category_name"], "Food");
        assert!(value["total_income"].is_string());
    }

    #[test]
    fn test_read_back() {
        let mut buffer = Vec::new();
        summary_to_json(&sample(), &mut buffer, true).unwrap();

        let restored = summary_from_json(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(restored.household_id, HouseholdId::new(7));
        assert_eq!(restored.monthly_total, Money::from_cents(-5000));
        assert_eq!(restored.category_breakdown.len(), 1);
    }

    #[test]
    fn test_rejects_malformed() {
        let err = summary_from_json("{\"month\": \"2026-13\"}").unwrap_err();
        assert!(matches!(err, TrackerError::Json(_)));
    }
}
