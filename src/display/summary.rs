//! Monthly summary report formatting

use crate::models::{Money, MonthlySummary};

use super::truncate;

const WIDTH: usize = 72;

/// Format a monthly summary as a fixed-width terminal report
pub fn format_summary(summary: &MonthlySummary, household_name: &str, symbol: &str) -> String {
    let fmt = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly Summary: {} ({})\n",
        household_name, summary.month
    ));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    if summary.is_empty() {
        output.push_str("Nothing recorded for this month.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<20} {:>15} {:>15} {:>15}\n",
        "", "Income", "Expenses", "Net"
    ));
    output.push_str(&format!(
        "{:<20} {:>15} {:>15} {:>15}\n",
        "Recurring",
        fmt(summary.recurring_income),
        fmt(summary.recurring_expenses),
        fmt(summary.recurring_total)
    ));
    output.push_str(&format!(
        "{:<20} {:>15} {:>15} {:>15}\n",
        "One-time",
        fmt(summary.one_time_income),
        fmt(summary.one_time_expenses),
        fmt(summary.one_time_total)
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>15} {:>15} {:>15}\n\n",
        "Month",
        fmt(summary.gross_income()),
        fmt(summary.gross_expenses()),
        fmt(summary.monthly_total)
    ));

    output.push_str(&format!(
        "{:<24} {:>15} {:>15} {:>15}\n",
        "Category", "Recurring", "One-time", "Total"
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    for category in &summary.category_breakdown {
        output.push_str(&format!(
            "{:<24} {:>15} {:>15} {:>15}\n",
            truncate(&category.category_name, 24),
            fmt(category.recurring),
            fmt(category.one_time),
            fmt(category.total)
        ));
    }

    if !summary.recurring_groups.is_empty() {
        output.push_str("\nRecurring by frequency\n");
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        for group in &summary.recurring_groups {
            output.push_str(&format!(
                "{:<40} {:>15}\n",
                group.frequency.label().to_uppercase(),
                fmt(group.total)
            ));
            for entry in &group.entries {
                output.push_str(&format!(
                    "  {:<22} {:>15} {:>15}   since {}\n",
                    truncate(&entry.name, 22),
                    fmt(entry.amount),
                    fmt(entry.monthly_amount),
                    entry.effective_date.format("%Y-%m-%d")
                ));
            }
        }
    }

    output
}
