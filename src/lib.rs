//! money-tracker - household money tracking with recurring schedules
//!
//! This library records households, their categories, one-time transactions
//! and recurring expenses (with dated schedule overrides), and rolls them up
//! into a per-month summary of what the household spends and earns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and persisted settings
//! - `error`: Custom error types
//! - `models`: Domain types (households, transactions, recurring expenses, ...)
//! - `schedule`: Frequency normalisation, activity windows, override resolution
//! - `reports`: The monthly summary aggregation
//! - `storage`: JSON file storage layer
//! - `services`: Validation, ownership checks and orchestration
//! - `display`, `export`: Terminal and machine-readable output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use money_tracker::config::TrackerPaths;
//! use money_tracker::services::SummaryService;
//! use money_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(TrackerPaths::new()?)?;
//! storage.load_all()?;
//! let summary = SummaryService::new(&storage).monthly_summary(household_id, 2026, 1)?;
//! println!("{}", summary.monthly_total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod schedule;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
