//! Transaction display formatting

use tabled::Tabled;

use super::{category_names, render_table, truncate};
use crate::models::{Category, Money, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table with a closing total
pub fn format_transaction_list(
    transactions: &[Transaction],
    categories: &[Category],
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names = category_names(categories);
    let rows = transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.value().to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            category: names
                .get(&t.category_id)
                .cloned()
                .unwrap_or_else(|| t.category_id.to_string()),
            amount: t.amount.format_with_symbol(currency_symbol),
            description: truncate(&t.description, 40),
        })
        .collect();

    let total: Money = transactions.iter().map(|t| t.amount).sum();
    let mut output = render_table(rows);
    output.push_str(&format!(
        "{} transaction(s), total {}\n",
        transactions.len(),
        total.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: Option<&str>,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id.value()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        category_name.unwrap_or("(unknown)")
    ));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, HouseholdId};
    use chrono::NaiveDate;

    fn sample() -> (Transaction, Category) {
        let mut category = Category::new(HouseholdId::new(1), "Food");
        category.id = CategoryId::new(1);
        let txn = Transaction::new(
            HouseholdId::new(1),
            category.id,
            Money::from_cents(-5000),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        )
        .with_description("Supermarket");
        (txn, category)
    }

    #[test]
    fn test_list_includes_category_and_total() {
        let (txn, category) = sample();
        let output = format_transaction_list(&[txn], &[category], "€");
        assert!(output.contains("2026-01-15"));
        assert!(output.contains("Food"));
        assert!(output.contains("-€50.00"));
        assert!(output.contains("1 transaction(s), total -€50.00"));
    }

    #[test]
    fn test_details() {
        let (txn, _) = sample();
        let output = format_transaction_details(&txn, Some("Food"), "$");
        assert!(output.contains("Amount:      -$50.00"));
        assert!(output.contains("Description: Supermarket"));
    }
}
