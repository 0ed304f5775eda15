//! Path management for City Budgeter
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `CITY_BUDGETER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/city-budgeter` or `~/.config/city-budgeter`
//! 3. Windows: `%APPDATA%\city-budgeter`

use std::path::{Path, PathBuf};

use crate::error::BudgeterError;

/// Environment variable overriding the configuration directory
pub const DIR_ENV_VAR: &str = "CITY_BUDGETER_DIR";

/// Manages all paths used by City Budgeter
#[derive(Debug, Clone)]
pub struct BudgeterPaths {
    /// Base directory for all City Budgeter files
    base_dir: PathBuf,
}

impl BudgeterPaths {
    /// Create a new BudgeterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgeterError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgeterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/city-budgeter/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a possibly relative path against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgeterError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgeterError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("city-budgeter"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgeterError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgeterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("city-budgeter"))
}
