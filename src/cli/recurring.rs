//! Recurring expense CLI commands
//!
//! Covers the recurring entries themselves and their dated schedule overrides.

use clap::Subcommand;

use super::{
    parse_amount, parse_date, parse_frequency, parse_id, parse_month, parse_optional_date,
};
use crate::config::settings::Settings;
use crate::display::{format_override_list, format_recurring_details, format_recurring_list};
use crate::error::TrackerResult;
use crate::models::{Household, OverrideId, RecurringExpenseId};
use crate::services::{
    CategoryService, CreateOverrideInput, CreateRecurringInput, RecurringService,
    UpdateOverrideInput, UpdateRecurringInput,
};
use crate::storage::Storage;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring expense or income
    Add {
        /// Name (e.g. "Rent")
        name: String,
        /// Amount per period (negative for expenses)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// daily, weekday, weekly, biweekly, monthly, quarterly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// First day the entry applies (defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// Last day the entry applies
        #[arg(long)]
        end: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// List recurring expenses
    List,

    /// Show a recurring expense and the schedule in force for a month
    Show {
        /// Recurring expense ID
        id: String,
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit a recurring expense
    Edit {
        /// Recurring expense ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long, conflicts_with = "no_end")]
        end: Option<String>,
        /// Remove the end date
        #[arg(long)]
        no_end: bool,
        #[arg(long)]
        description: Option<String>,
        /// Stop the entry from contributing to summaries
        #[arg(long, conflicts_with = "resume")]
        pause: bool,
        /// Let a paused entry contribute again
        #[arg(long)]
        resume: bool,
    },

    /// Delete a recurring expense and its overrides
    Delete {
        /// Recurring expense ID
        id: String,
    },

    /// Change the amount or frequency from a date onward
    #[command(name = "override-add")]
    OverrideAdd {
        /// Recurring expense ID
        recurring: String,
        /// New amount per period
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date the change takes effect
        #[arg(long)]
        from: String,
        /// New frequency (defaults to the current one)
        #[arg(short, long)]
        frequency: Option<String>,
    },

    /// List the overrides of a recurring expense
    #[command(name = "override-list")]
    OverrideList {
        /// Recurring expense ID
        recurring: String,
    },

    /// Edit a schedule override
    #[command(name = "override-edit")]
    OverrideEdit {
        /// Override ID
        id: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
    },

    /// Delete a schedule override
    #[command(name = "override-delete")]
    OverrideDelete {
        /// Override ID
        id: String,
    },
}

/// Handle a recurring command for the given household
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    household: &Household,
    cmd: RecurringCommands,
) -> TrackerResult<()> {
    let service = RecurringService::new(storage);
    let categories = CategoryService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        RecurringCommands::Add {
            name,
            amount,
            category,
            frequency,
            start,
            end,
            description,
        } => {
            let category = categories.resolve(household.id, &category)?;
            let start_date = match start {
                Some(s) => parse_date(&s, settings)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = service.create(CreateRecurringInput {
                household_id: household.id,
                category_id: category.id,
                name,
                amount: parse_amount(&amount)?,
                frequency: parse_frequency(&frequency)?,
                start_date,
                end_date: parse_optional_date(end.as_deref(), settings)?,
                description,
            })?;

            println!("Added recurring expense: {}", expense.name);
            println!("  ID: {}", expense.id.value());
            println!(
                "  {} {} from {}",
                expense.amount.format_with_symbol(symbol),
                expense.frequency.label().to_lowercase(),
                expense.start_date.format(&settings.date_format)
            );
        }

        RecurringCommands::List => {
            let expenses = service.list(household.id)?;
            let category_list = categories.list(household.id)?;
            print!(
                "{}",
                format_recurring_list(&expenses, &category_list, symbol)
            );
        }

        RecurringCommands::Show { id, month } => {
            let id: RecurringExpenseId = parse_id("recurring expense", &id)?;
            let month = parse_month(month.as_deref())?;

            let expense = service.get(household.id, id)?;
            let overrides = service.list_overrides(household.id, id)?;
            let schedule = service.schedule_for_month(household.id, id, month)?;
            let category_name = categories
                .get(household.id, expense.category_id)
                .ok()
                .map(|c| c.name);

            let month_label = month.to_string();
            print!(
                "{}",
                format_recurring_details(
                    &expense,
                    category_name.as_deref(),
                    &overrides,
                    Some((month_label.as_str(), &schedule)),
                    symbol,
                )
            );
        }

        RecurringCommands::Edit {
            id,
            name,
            amount,
            category,
            frequency,
            start,
            end,
            no_end,
            description,
            pause,
            resume,
        } => {
            let id: RecurringExpenseId = parse_id("recurring expense", &id)?;

            let category_id = match category {
                Some(c) => Some(categories.resolve(household.id, &c)?.id),
                None => None,
            };
            let end_date = if no_end {
                Some(None)
            } else {
                parse_optional_date(end.as_deref(), settings)?.map(Some)
            };
            let active = match (pause, resume) {
                (true, _) => Some(false),
                (_, true) => Some(true),
                _ => None,
            };

            let input = UpdateRecurringInput {
                category_id,
                name,
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                frequency: frequency.as_deref().map(parse_frequency).transpose()?,
                active,
                start_date: parse_optional_date(start.as_deref(), settings)?,
                end_date,
            };

            let updated = service.update(household.id, id, input)?;
            println!("Updated recurring expense: {}", updated);
            if !updated.active {
                println!("  (paused)");
            }
        }

        RecurringCommands::Delete { id } => {
            let id: RecurringExpenseId = parse_id("recurring expense", &id)?;
            let expense = service.delete(household.id, id)?;
            println!("Deleted recurring expense: {}", expense.name);
        }

        RecurringCommands::OverrideAdd {
            recurring,
            amount,
            from,
            frequency,
        } => {
            let recurring_id: RecurringExpenseId = parse_id("recurring expense", &recurring)?;
            let expense = service.get(household.id, recurring_id)?;
            let frequency = match frequency {
                Some(f) => parse_frequency(&f)?,
                None => expense.frequency,
            };

            let schedule_override = service.create_override(
                household.id,
                recurring_id,
                CreateOverrideInput {
                    effective_date: parse_date(&from, settings)?,
                    amount: parse_amount(&amount)?,
                    frequency,
                },
            )?;

            println!(
                "Added override {} to '{}': {} {} from {}",
                schedule_override.id.value(),
                expense.name,
                schedule_override.amount.format_with_symbol(symbol),
                schedule_override.frequency.label().to_lowercase(),
                schedule_override.effective_date.format(&settings.date_format)
            );
        }

        RecurringCommands::OverrideList { recurring } => {
            let recurring_id: RecurringExpenseId = parse_id("recurring expense", &recurring)?;
            let overrides = service.list_overrides(household.id, recurring_id)?;
            print!("{}", format_override_list(&overrides, symbol));
        }

        RecurringCommands::OverrideEdit {
            id,
            amount,
            from,
            frequency,
        } => {
            let id: OverrideId = parse_id("override", &id)?;

            if amount.is_none() && from.is_none() && frequency.is_none() {
                println!("No changes specified. Use --amount, --from, or --frequency.");
                return Ok(());
            }

            let updated = service.update_override(
                household.id,
                id,
                UpdateOverrideInput {
                    effective_date: parse_optional_date(from.as_deref(), settings)?,
                    amount: amount.as_deref().map(parse_amount).transpose()?,
                    frequency: frequency.as_deref().map(parse_frequency).transpose()?,
                },
            )?;

            println!(
                "Updated override {}: {} {} from {}",
                updated.id.value(),
                updated.amount.format_with_symbol(symbol),
                updated.frequency.label().to_lowercase(),
                updated.effective_date.format(&settings.date_format)
            );
        }

        RecurringCommands::OverrideDelete { id } => {
            let id: OverrideId = parse_id("override", &id)?;
            let removed = service.delete_override(household.id, id)?;
            println!(
                "Deleted override {} (effective {})",
                removed.id.value(),
                removed.effective_date.format(&settings.date_format)
            );
        }
    }

    Ok(())
}
