//! Household CLI commands

use clap::Subcommand;

use super::resolve_household;
use crate::config::settings::Settings;
use crate::display::{format_household_details, format_household_list};
use crate::error::TrackerResult;
use crate::services::HouseholdService;
use crate::storage::Storage;

/// Household subcommands
#[derive(Subcommand)]
pub enum HouseholdCommands {
    /// Create a new household
    Create {
        /// Household name
        name: String,
        /// ISO currency code (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all households
    List,

    /// Show household details
    Show {
        /// Household name or ID (defaults to the selected household)
        #[arg(value_name = "HOUSEHOLD")]
        target: Option<String>,
    },

    /// Edit a household
    Edit {
        /// Household name or ID
        #[arg(value_name = "HOUSEHOLD")]
        target: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New currency code
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Delete a household and all of its data
    Delete {
        /// Household name or ID
        #[arg(value_name = "HOUSEHOLD")]
        target: String,
    },

    /// Make a household the default for other commands
    Use {
        /// Household name or ID
        #[arg(value_name = "HOUSEHOLD")]
        target: String,
    },
}

/// Handle a household command
pub fn handle_household_command(
    storage: &Storage,
    settings: &mut Settings,
    selected: Option<&str>,
    cmd: HouseholdCommands,
) -> TrackerResult<()> {
    let service = HouseholdService::new(storage);

    match cmd {
        HouseholdCommands::Create {
            name,
            currency,
            description,
        } => {
            let currency = currency.unwrap_or_else(|| settings.default_currency.clone());
            let household = service.create(&name, &currency, description.as_deref())?;

            println!("Created household: {}", household.name);
            println!("  ID: {}", household.id.value());
            println!("  Currency: {}", household.currency);

            if settings.default_household.is_none() {
                settings.default_household = Some(household.id);
                settings.save(storage.paths())?;
                println!("  Selected as the default household.");
            }
        }

        HouseholdCommands::List => {
            let households = service.list()?;
            print!(
                "{}",
                format_household_list(&households, settings.default_household)
            );
        }

        HouseholdCommands::Show { target } => {
            let household = resolve_household(storage, settings, target.as_deref().or(selected))?;
            print!("{}", format_household_details(&household));
        }

        HouseholdCommands::Edit {
            target,
            name,
            description,
            currency,
        } => {
            let household = resolve_household(storage, settings, Some(&target))?;

            if name.is_none() && description.is_none() && currency.is_none() {
                println!("No changes specified. Use --name, --description, or --currency.");
                return Ok(());
            }

            let updated = service.update(
                household.id,
                name.as_deref(),
                description.as_deref(),
                currency.as_deref(),
            )?;
            println!("Updated household: {}", updated.name);
        }

        HouseholdCommands::Delete { target } => {
            let household = resolve_household(storage, settings, Some(&target))?;
            let counts = service.delete(household.id)?;

            println!("Deleted household: {}", household.name);
            println!(
                "  Removed {} categories, {} transactions, {} recurring expenses",
                counts.categories, counts.transactions, counts.recurring_expenses
            );

            if settings.default_household == Some(household.id) {
                settings.default_household = None;
                settings.save(storage.paths())?;
            }
        }

        HouseholdCommands::Use { target } => {
            let household = resolve_household(storage, settings, Some(&target))?;
            settings.default_household = Some(household.id);
            settings.save(storage.paths())?;
            println!("Now using household: {}", household.name);
        }
    }

    Ok(())
}
