use anyhow::Result;
use clap::{Parser, Subcommand};

use money_tracker::cli::{
    handle_category_command, handle_household_command, handle_recurring_command,
    handle_summary_command, handle_transaction_command, resolve_household, CategoryCommands,
    HouseholdCommands, RecurringCommands, SummaryArgs, TransactionCommands,
};
use money_tracker::config::{paths::TrackerPaths, settings::Settings};
use money_tracker::logging::init_logging;
use money_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "money-tracker",
    version,
    about = "Household money tracker with recurring schedules and monthly summaries",
    long_about = "money-tracker records one-time transactions and recurring expenses \
                  per household and shows what each month really costs, with \
                  recurring amounts normalised to the month and schedule changes \
                  applied from their effective date."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Household name or ID (defaults to the selected household)
    #[arg(short = 'H', long, global = true, env = "MONEY_TRACKER_HOUSEHOLD")]
    household: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Household management commands
    #[command(subcommand, alias = "hh")]
    Household(HouseholdCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// One-time transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Recurring expense and schedule override commands
    #[command(subcommand, alias = "rec")]
    Recurring(RecurringCommands),

    /// Monthly summary for a household
    Summary(SummaryArgs),
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a value in config.json
    Set {
        /// Setting name (default_currency, default_household, log_level, date_format, currency_symbol)
        key: String,
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    init_logging(cli.verbose, &settings.log_level);
    tracing::debug!(base_dir = %paths.base_dir().display(), "Resolved data directory");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let household = cli.household.as_deref();

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing money-tracker at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next: create a household with 'money-tracker household create <NAME>'.");
        }
        Some(Commands::Config { action }) => match action {
            Some(ConfigAction::Set { key, value }) => {
                settings.set(&key, &value)?;
                settings.save(&paths)?;
                println!("Set {} = {}", key, value);
            }
            None => {
                println!("money-tracker Configuration");
                println!("===========================");
                println!("Base directory: {}", paths.base_dir().display());
                println!("Data directory: {}", paths.data_dir().display());
                println!("Initialized:    {}", storage.is_initialized());
                println!();
                println!("Settings:");
                println!("  default_currency:  {}", settings.default_currency);
                println!(
                    "  default_household: {}",
                    settings
                        .default_household
                        .map(|id| id.value().to_string())
                        .unwrap_or_else(|| "(none)".into())
                );
                println!("  log_level:         {}", settings.log_level);
                println!("  date_format:       {}", settings.date_format);
                println!("  currency_symbol:   {}", settings.currency_symbol);
            }
        },
        Some(Commands::Household(cmd)) => {
            handle_household_command(&storage, &mut settings, household, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let household = resolve_household(&storage, &settings, household)?;
            handle_category_command(&storage, &household, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let household = resolve_household(&storage, &settings, household)?;
            handle_transaction_command(&storage, &settings, &household, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            let household = resolve_household(&storage, &settings, household)?;
            handle_recurring_command(&storage, &settings, &household, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            let household = resolve_household(&storage, &settings, household)?;
            handle_summary_command(&storage, &settings, &household, args)?;
        }
        None => {
            println!("money-tracker - household money tracking");
            println!();
            println!("Run 'money-tracker --help' for usage information.");
        }
    }

    Ok(())
}
