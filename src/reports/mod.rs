//! Reports module for the money tracker
//!
//! Provides the monthly summary: recurring and one-time cash flows for one
//! household and month, broken down by category.

pub mod monthly_summary;

pub use monthly_summary::{aggregate, generate, SummaryInputs, SummarySource};
