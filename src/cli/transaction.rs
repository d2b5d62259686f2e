//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_id, parse_month, parse_optional_date};
use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::TrackerResult;
use crate::models::{Household, TransactionId};
use crate::services::{
    CategoryService, CreateTransactionInput, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a one-time transaction
    Add {
        /// Amount (negative for expenses, e.g. "-50.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// List transactions for a month
    List {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command for the given household
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    household: &Household,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let categories = CategoryService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let category = categories.resolve(household.id, &category)?;
            let date = match date {
                Some(d) => parse_date(&d, settings)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                household_id: household.id,
                category_id: category.id,
                amount: parse_amount(&amount)?,
                date,
                description,
            })?;

            println!(
                "Added transaction {}: {} in {} on {}",
                txn.id.value(),
                txn.amount.format_with_symbol(symbol),
                category.name,
                txn.date.format(&settings.date_format)
            );
        }

        TransactionCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            let transactions = service.list_by_month(household.id, month)?;
            let category_list = categories.list(household.id)?;

            println!("Transactions for {} ({})", household.name, month);
            print!(
                "{}",
                format_transaction_list(&transactions, &category_list, symbol)
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let id: TransactionId = parse_id("transaction", &id)?;

            if amount.is_none() && category.is_none() && date.is_none() && description.is_none() {
                println!("No changes specified. Use --amount, --category, --date, or --description.");
                return Ok(());
            }

            let category_id = match category {
                Some(c) => Some(categories.resolve(household.id, &c)?.id),
                None => None,
            };

            let updated = service.update(
                household.id,
                id,
                UpdateTransactionInput {
                    category_id,
                    amount: amount.as_deref().map(parse_amount).transpose()?,
                    date: parse_optional_date(date.as_deref(), settings)?,
                    description,
                },
            )?;

            println!(
                "Updated transaction {}: {} on {}",
                updated.id.value(),
                updated.amount.format_with_symbol(symbol),
                updated.date.format(&settings.date_format)
            );
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = parse_id("transaction", &id)?;
            let txn = service.delete(household.id, id)?;
            println!(
                "Deleted transaction {} ({})",
                txn.id.value(),
                txn.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
