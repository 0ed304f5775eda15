//! User settings for City Budgeter
//!
//! Manages the starting values of the input form, the currency symbol, and an
//! optional custom city reference file. Settings are only ever read; the
//! application never writes them back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BudgeterPaths;
use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{BudgetInput, GoalPreset, InputLimits, Money};

/// User settings for City Budgeter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in tables and advice
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Starting monthly budget, in euros
    #[serde(default = "default_income")]
    pub default_income: i64,

    /// Starting additional income, in euros
    #[serde(default)]
    pub default_extra_income: i64,

    /// Starting goal preset name
    #[serde(default = "default_goal")]
    pub default_goal: String,

    /// Starting savings horizon in months
    #[serde(default = "default_goal_months")]
    pub default_goal_months: u32,

    /// Cities selected when nothing is given explicitly
    #[serde(default = "default_cities")]
    pub default_cities: Vec<String>,

    /// Custom city reference file (JSON or YAML), relative to the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities_file: Option<PathBuf>,

    /// Width of the terminal bar chart in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_income() -> i64 {
    InputLimits::STUDENT_VISA_MONTHLY_MINIMUM
}

fn default_goal() -> String {
    GoalPreset::Bike.name().to_string()
}

fn default_goal_months() -> u32 {
    3
}

fn default_cities() -> Vec<String> {
    vec!["Berlin".to_string(), "Leipzig".to_string()]
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_income: default_income(),
            default_extra_income: 0,
            default_goal: default_goal(),
            default_goal_months: default_goal_months(),
            default_cities: default_cities(),
            cities_file: None,
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_default(paths: &BudgeterPaths) -> Result<Self, BudgeterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgeterError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgeterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "Loaded settings");
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// The configured goal preset, falling back to Bike for unknown names
    pub fn goal_preset(&self) -> GoalPreset {
        GoalPreset::parse(&self.default_goal).unwrap_or_else(|| {
            tracing::warn!(goal = %self.default_goal, "Unknown default goal, using Bike");
            GoalPreset::Bike
        })
    }

    /// Build the starting budget input from these settings
    ///
    /// Out-of-range values are clamped to the form's ranges; `validate`
    /// reports them.
    pub fn default_input(&self) -> BudgetInput {
        let months = InputLimits::GOAL_MONTHS.nudge(i64::from(self.default_goal_months), 0);
        BudgetInput::new(
            Money::from_euros(InputLimits::INCOME.nudge(self.default_income, 0)),
            Money::from_euros(InputLimits::EXTRA_INCOME.nudge(self.default_extra_income, 0)),
            self.goal_preset(),
            // GOAL_MONTHS keeps this well inside u32
            months as u32,
        )
    }

    /// Absolute path of the custom city file, if one is configured
    pub fn resolved_cities_file(&self, paths: &BudgeterPaths) -> Option<PathBuf> {
        self.cities_file.as_deref().map(|p| paths.resolve(p))
    }

    /// Check the configured defaults against the form's ranges
    pub fn validate(&self) -> BudgeterResult<()> {
        if !InputLimits::INCOME.contains(self.default_income) {
            return Err(BudgeterError::Config(format!(
                "default_income must be in {}",
                InputLimits::INCOME.describe()
            )));
        }

        if !InputLimits::EXTRA_INCOME.contains(self.default_extra_income) {
            return Err(BudgeterError::Config(format!(
                "default_extra_income must be in {}",
                InputLimits::EXTRA_INCOME.describe()
            )));
        }

        if !InputLimits::GOAL_MONTHS.contains(i64::from(self.default_goal_months)) {
            return Err(BudgeterError::Config(format!(
                "default_goal_months must be in {}",
                InputLimits::GOAL_MONTHS.describe()
            )));
        }

        Ok(())
    }
}
