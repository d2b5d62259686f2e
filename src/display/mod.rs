//! Display formatting for terminal output
//!
//! Lists are rendered as tables; the monthly summary is a fixed-width report.

pub mod category;
pub mod household;
pub mod recurring;
pub mod summary;
pub mod transaction;

pub use category::format_category_list;
pub use household::{format_household_details, format_household_list};
pub use recurring::{format_override_list, format_recurring_details, format_recurring_list};
pub use summary::format_summary;
pub use transaction::{format_transaction_details, format_transaction_list};

use std::collections::HashMap;

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Category, CategoryId};

/// Render rows as a table in the shared style
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Category names keyed by ID, for labelling rows
pub(crate) fn category_names(categories: &[Category]) -> HashMap<CategoryId, String> {
    categories.iter().map(|c| (c.id, c.name.clone())).collect()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Crème brûlée", 8), "Crème...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
