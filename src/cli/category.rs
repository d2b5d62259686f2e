//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::models::Household;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Create {
        /// Category name
        name: String,
    },

    /// List the household's categories
    List,

    /// Rename a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },

    /// Delete a category that nothing refers to
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command for the given household
pub fn handle_category_command(
    storage: &Storage,
    household: &Household,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Create { name } => {
            let category = service.create(household.id, &name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id.value());
        }

        CategoryCommands::List => {
            let categories = service.list(household.id)?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Edit { category, name } => {
            let category = service.resolve(household.id, &category)?;
            let renamed = service.rename(household.id, category.id, &name)?;
            println!("Renamed category '{}' to '{}'", category.name, renamed.name);
        }

        CategoryCommands::Delete { category } => {
            let category = service.resolve(household.id, &category)?;
            service.delete(household.id, category.id)?;
            println!("Deleted category: {}", category.name);
        }
    }

    Ok(())
}
