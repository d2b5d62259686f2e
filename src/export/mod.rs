//! Summary export
//!
//! Renders a `MonthlySummary` for other programs:
//! - JSON: the wire shape, money as decimal strings
//! - YAML: the same document, human-readable
//! - CSV: the category breakdown, one row per category

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::write_breakdown_csv;
pub use json::{summary_from_json, summary_to_json};
pub use yaml::summary_to_yaml;
