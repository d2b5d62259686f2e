//! Monthly summary CLI command

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::debug;

use super::parse_month;
use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{summary_to_json, summary_to_yaml, write_breakdown_csv};
use crate::models::{Household, MonthlySummary};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable report
    Table,
    Json,
    Yaml,
    /// Category breakdown only
    Csv,
}

/// Arguments of `summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Month as YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,

    #[arg(short, long, value_enum, default_value_t = SummaryFormat::Table)]
    pub format: SummaryFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `summary` for the given household
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    household: &Household,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let month = parse_month(args.month.as_deref())?;
    let summary = SummaryService::new(storage).summary_for(household.id, month)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_summary(&summary, household, settings, args.format, &mut file)?;
            debug!(path = %path.display(), "Wrote summary");
            println!("Summary written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_summary(&summary, household, settings, args.format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_summary<W: Write>(
    summary: &MonthlySummary,
    household: &Household,
    settings: &Settings,
    format: SummaryFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        SummaryFormat::Table => {
            let report = format_summary(summary, &household.name, &settings.currency_symbol);
            writer
                .write_all(report.as_bytes())
                .map_err(|e| TrackerError::Export(e.to_string()))
        }
        SummaryFormat::Json => summary_to_json(summary, writer, true),
        SummaryFormat::Yaml => summary_to_yaml(summary, writer),
        SummaryFormat::Csv => write_breakdown_csv(summary, writer),
    }
}
