//! Path management for the money tracker
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/money-tracker` or `~/.config/money-tracker`
//! 3. Windows: `%APPDATA%\money-tracker`

use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEY_TRACKER_DATA_DIR";

const APP_DIR: &str = "money-tracker";

/// Resolves every file the tracker reads or writes
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is available.
    pub fn new() -> TrackerResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the JSON data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to config.json
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn households_file(&self) -> PathBuf {
        self.data_dir().join("households.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Path to recurring.json (recurring expenses and their overrides)
    pub fn recurring_file(&self) -> PathBuf {
        self.data_dir().join("recurring.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> TrackerResult<()> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create data directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }

    /// Whether `init` has run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> TrackerResult<PathBuf> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                TrackerError::Config(format!(
                    "HOME is not set; set {} to choose a data directory",
                    DATA_DIR_ENV
                ))
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR))
}

#[cfg(windows)]
fn resolve_default_path() -> TrackerResult<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| TrackerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.recurring_file(),
            temp_dir.path().join("data").join("recurring.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let paths = TrackerPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(!paths.is_initialized());
    }
}
