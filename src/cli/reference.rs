//! CLI commands for reference data
//!
//! Lists the city cost table and the goal presets.

use std::path::Path;

use crate::config::{BudgeterPaths, Settings};
use crate::display::{format_city_table, format_goal_presets};
use crate::error::BudgeterResult;

use super::load_city_table;

/// Handle the cities command
pub fn handle_cities_command(
    paths: &BudgeterPaths,
    settings: &Settings,
    cities_file: Option<&Path>,
) -> BudgeterResult<()> {
    let table = load_city_table(paths, settings, cities_file)?;
    println!("{}", format_city_table(&table, &settings.currency_symbol));
    Ok(())
}

/// Handle the goals command
pub fn handle_goals_command(settings: &Settings) -> BudgeterResult<()> {
    println!("{}", format_goal_presets(&settings.currency_symbol));
    Ok(())
}
