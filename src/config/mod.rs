//! Where the tracker keeps its files and how it is configured
//!
//! `paths` resolves the base directory (env override or platform config dir);
//! `settings` is the persisted `config.json`.

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
