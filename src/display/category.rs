//! Category display formatting

use tabled::Tabled;

use super::render_table;
use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format a household's categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.value().to_string(),
            name: c.name.clone(),
        })
        .collect();

    render_table(rows)
}
