//! Recurring expense and schedule override display formatting

use tabled::Tabled;

use super::{category_names, render_table, truncate};
use crate::models::{Category, RecurringExpense, RecurringScheduleOverride};
use crate::schedule::EffectiveSchedule;

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "From")]
    start: String,
    #[tabled(rename = "Until")]
    end: String,
    #[tabled(rename = "Active")]
    active: String,
}

#[derive(Tabled)]
struct OverrideRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Effective")]
    effective_date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
}

/// Format recurring expenses as a table
pub fn format_recurring_list(
    expenses: &[RecurringExpense],
    categories: &[Category],
    currency_symbol: &str,
) -> String {
    if expenses.is_empty() {
        return "No recurring expenses found.\n".to_string();
    }

    let names = category_names(categories);
    let rows = expenses
        .iter()
        .map(|r| RecurringRow {
            id: r.id.value().to_string(),
            name: truncate(&r.name, 30),
            category: names
                .get(&r.category_id)
                .cloned()
                .unwrap_or_else(|| r.category_id.to_string()),
            amount: r.amount.format_with_symbol(currency_symbol),
            frequency: r.frequency.label().to_string(),
            start: r.start_date.format("%Y-%m-%d").to_string(),
            end: r
                .end_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into()),
            active: if r.active { "yes" } else { "no" }.to_string(),
        })
        .collect();

    render_table(rows)
}

/// Format a recurring expense with its overrides and, optionally, the
/// schedule that applies in a given month
pub fn format_recurring_details(
    expense: &RecurringExpense,
    category_name: Option<&str>,
    overrides: &[RecurringScheduleOverride],
    schedule: Option<(&str, &EffectiveSchedule)>,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Recurring:   {}\n", expense.name));
    output.push_str(&format!("ID:          {}\n", expense.id.value()));
    output.push_str(&format!(
        "Category:    {}\n",
        category_name.unwrap_or("(unknown)")
    ));
    output.push_str(&format!(
        "Amount:      {} {}\n",
        expense.amount.format_with_symbol(currency_symbol),
        expense.frequency.label().to_lowercase()
    ));
    output.push_str(&format!(
        "Window:      {} .. {}\n",
        expense.start_date.format("%Y-%m-%d"),
        expense
            .end_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "open".into())
    ));
    output.push_str(&format!(
        "Active:      {}\n",
        if expense.active { "yes" } else { "no" }
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    if let Some((month, effective)) = schedule {
        let source = match effective.effective_date {
            Some(date) if effective.is_overridden() => {
                format!("override from {}", date.format("%Y-%m-%d"))
            }
            _ => "base schedule".to_string(),
        };
        output.push_str(&format!(
            "In {}:  {} {} ({})\n",
            month,
            effective.amount.format_with_symbol(currency_symbol),
            effective.frequency.label().to_lowercase(),
            source
        ));
    }

    if !overrides.is_empty() {
        output.push('\n');
        output.push_str("Schedule overrides:\n");
        output.push_str(&format_override_list(overrides, currency_symbol));
    }

    output
}

/// Format schedule overrides as a table
pub fn format_override_list(
    overrides: &[RecurringScheduleOverride],
    currency_symbol: &str,
) -> String {
    if overrides.is_empty() {
        return "No schedule overrides.\n".to_string();
    }

    let rows = overrides
        .iter()
        .map(|o| OverrideRow {
            id: o.id.value().to_string(),
            effective_date: o.effective_date.format("%Y-%m-%d").to_string(),
            amount: o.amount.format_with_symbol(currency_symbol),
            frequency: o.frequency.label().to_string(),
        })
        .collect();

    render_table(rows)
}
