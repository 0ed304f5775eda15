//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod compare;
pub mod config;
pub mod reference;

use std::path::Path;

use crate::config::{BudgeterPaths, Settings};
use crate::error::BudgeterResult;
use crate::storage::CityTable;

pub use compare::{build_input, handle_compare_command, CompareArgs};
pub use config::{format_config, handle_config_command};
pub use reference::{handle_cities_command, handle_goals_command};

/// Load the city table from an explicit file, the configured file, or the built-in data
pub fn load_city_table(
    paths: &BudgeterPaths,
    settings: &Settings,
    explicit: Option<&Path>,
) -> BudgeterResult<CityTable> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => settings.resolved_cities_file(paths),
    };
    CityTable::load_or_builtin(path.as_deref())
}
