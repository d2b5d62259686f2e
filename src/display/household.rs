//! Household display formatting

use tabled::Tabled;

use super::render_table;
use crate::models::{Household, HouseholdId};

#[derive(Tabled)]
struct HouseholdRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Default")]
    marker: String,
}

/// Format households as a table, marking the default one
pub fn format_household_list(households: &[Household], default: Option<HouseholdId>) -> String {
    if households.is_empty() {
        return "No households found.\n\nCreate one with 'money-tracker household create <NAME>'.\n"
            .to_string();
    }

    let rows = households
        .iter()
        .map(|h| HouseholdRow {
            id: h.id.value().to_string(),
            name: h.name.clone(),
            currency: h.currency.clone(),
            marker: if Some(h.id) == default {
                "(default)".into()
            } else {
                String::new()
            },
        })
        .collect();

    render_table(rows)
}

/// Format household details
pub fn format_household_details(household: &Household) -> String {
    let mut output = String::new();
    output.push_str(&format!("Household:   {}\n", household.name));
    output.push_str(&format!("ID:          {}\n", household.id.value()));
    output.push_str(&format!("Currency:    {}\n", household.currency));
    if !household.description.is_empty() {
        output.push_str(&format!("Description: {}\n", household.description));
    }
    output.push_str(&format!(
        "Created:     {}\n",
        household.created_at.format("%Y-%m-%d %H:%M")
    ));
    output
}
