//! CLI command showing the resolved configuration

use crate::config::logging::LOG_ENV_VAR;
use crate::config::paths::DIR_ENV_VAR;
use crate::config::{BudgeterPaths, Settings};
use crate::error::BudgeterResult;

/// Handle the config command
pub fn handle_config_command(paths: &BudgeterPaths, settings: &Settings) -> BudgeterResult<()> {
    settings.validate()?;
    print!("{}", format_config(paths, settings));
    Ok(())
}

/// Format paths and effective settings
pub fn format_config(paths: &BudgeterPaths, settings: &Settings) -> String {
    let settings_file = paths.settings_file();
    let status = if settings_file.exists() {
        "found"
    } else {
        "not found, using defaults"
    };
    let cities_file = settings
        .resolved_cities_file(paths)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    let mut output = String::new();
    output.push_str("City Budgeter Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!(
        "Config directory: {}\n",
        paths.base_dir().display()
    ));
    output.push_str(&format!(
        "Settings file:    {} ({})\n",
        settings_file.display(),
        status
    ));
    output.push_str(&format!("City data:        {}\n", cities_file));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  Default income:  {}\n", settings.default_income));
    output.push_str(&format!(
        "  Extra income:    {}\n",
        settings.default_extra_income
    ));
    output.push_str(&format!("  Default goal:    {}\n", settings.goal_preset().goal()));
    output.push_str(&format!(
        "  Goal months:     {}\n",
        settings.default_goal_months
    ));
    output.push_str(&format!(
        "  Default cities:  {}\n",
        if settings.default_cities.is_empty() {
            "(none)".to_string()
        } else {
            settings.default_cities.join(", ")
        }
    ));
    output.push_str(&format!("  Chart width:     {}\n", settings.chart_width));
    output.push('\n');
    output.push_str(&format!(
        "Environment: {} overrides the config directory, {} sets the log filter.\n",
        DIR_ENV_VAR, LOG_ENV_VAR
    ));
    output
}
