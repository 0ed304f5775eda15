//! CLI command for one-shot city comparisons
//!
//! Builds a `BudgetInput` from flags and settings, evaluates the selected
//! cities, prints the table and chart, and optionally exports the results.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::{BudgeterPaths, Settings};
use crate::display::format_comparison;
use crate::error::{BudgeterError, BudgeterResult};
use crate::export::{export_report, ExportFormat};
use crate::models::{Bounds, BudgetInput, GoalPreset, InputLimits, Money, SavingsGoal};
use crate::services::{Comparison, ComparisonService, Selection};

use super::load_city_table;

/// Arguments for `compare`
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Cities to compare (up to 3; defaults to the configured cities)
    pub cities: Vec<String>,

    /// Monthly budget in euros
    #[arg(short, long, allow_negative_numbers = true)]
    pub income: Option<i64>,

    /// Additional monthly income in euros
    #[arg(short, long, allow_negative_numbers = true)]
    pub extra_income: Option<i64>,

    /// Goal preset (Bike, Smartphone, Laptop, "Trip to Spain", Car)
    #[arg(short, long, conflicts_with_all = ["custom_goal", "custom_amount"])]
    pub goal: Option<String>,

    /// Name of a custom savings goal
    #[arg(long)]
    pub custom_goal: Option<String>,

    /// Amount of the custom savings goal, e.g. 300 or 249.99
    #[arg(long, allow_negative_numbers = true)]
    pub custom_amount: Option<String>,

    /// Months to save for the goal
    #[arg(short, long, allow_negative_numbers = true)]
    pub months: Option<i64>,

    /// City reference file (JSON or YAML) replacing the built-in table
    #[arg(long)]
    pub cities_file: Option<PathBuf>,

    /// Export the results to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (csv, json, yaml); guessed from the output extension if omitted
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Handle the compare command
pub fn handle_compare_command(
    paths: &BudgeterPaths,
    settings: &Settings,
    args: CompareArgs,
) -> BudgeterResult<()> {
    let input = build_input(&args, settings)?;
    let table = load_city_table(paths, settings, args.cities_file.as_deref())?;

    let names = if args.cities.is_empty() {
        settings.default_cities.clone()
    } else {
        args.cities.clone()
    };
    let selection = Selection::new(names)?;

    let comparison = ComparisonService::new(&table).compare(&selection, &input);
    print!(
        "{}",
        format_comparison(&comparison, &settings.currency_symbol, settings.chart_width)
    );

    if let Some(path) = args.output {
        let format = resolve_format(args.format.as_deref(), &path)?;
        match &comparison {
            Comparison::Evaluated(report) => {
                let file = File::create(&path).map_err(|e| {
                    BudgeterError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                export_report(report, format, &settings.currency_symbol, &mut writer)?;
                println!("Results exported to: {}", path.display());
            }
            Comparison::NoSelection => {
                tracing::warn!(path = %path.display(), "Nothing to export");
            }
        }
    }

    Ok(())
}

/// Build the budget input from command-line flags, falling back to settings
pub fn build_input(args: &CompareArgs, settings: &Settings) -> BudgeterResult<BudgetInput> {
    let income = checked("income", args.income.unwrap_or(settings.default_income), InputLimits::INCOME)?;
    let extra = checked(
        "extra income",
        args.extra_income.unwrap_or(settings.default_extra_income),
        InputLimits::EXTRA_INCOME,
    )?;
    let months = checked(
        "months",
        args.months.unwrap_or(i64::from(settings.default_goal_months)),
        InputLimits::GOAL_MONTHS,
    )?;

    let goal = resolve_goal(args, settings)?;

    Ok(BudgetInput::new(
        Money::from_euros(income),
        Money::from_euros(extra),
        goal,
        // GOAL_MONTHS keeps this well inside u32
        months as u32,
    ))
}

fn checked(field: &str, value: i64, bounds: Bounds) -> BudgeterResult<i64> {
    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(BudgeterError::out_of_range(field, value, &bounds.describe()))
    }
}

fn resolve_goal(args: &CompareArgs, settings: &Settings) -> BudgeterResult<SavingsGoal> {
    if let Some(name) = &args.goal {
        let preset = GoalPreset::parse(name).ok_or_else(|| {
            let names: Vec<&str> = GoalPreset::ALL.iter().map(|p| p.name()).collect();
            BudgeterError::InvalidInput(format!(
                "Unknown goal '{}'. Choose one of: {}",
                name,
                names.join(", ")
            ))
        })?;
        return Ok(preset.goal());
    }

    if args.custom_goal.is_none() && args.custom_amount.is_none() {
        return Ok(settings.goal_preset().goal());
    }

    let amount = match &args.custom_amount {
        Some(text) => Money::parse(text)
            .map_err(|e| BudgeterError::InvalidInput(format!("custom amount: {}", e)))?,
        None => SavingsGoal::DEFAULT_CUSTOM_AMOUNT,
    };
    if amount.is_negative() {
        return Err(BudgeterError::out_of_range(
            "custom amount",
            amount,
            &InputLimits::CUSTOM_GOAL_AMOUNT.describe(),
        ));
    }

    Ok(SavingsGoal::custom(
        args.custom_goal.clone().unwrap_or_default(),
        amount,
    ))
}

fn resolve_format(explicit: Option<&str>, path: &std::path::Path) -> BudgeterResult<ExportFormat> {
    match explicit {
        Some(name) => ExportFormat::parse(name).ok_or_else(|| {
            BudgeterError::InvalidInput(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                name
            ))
        }),
        None => ExportFormat::from_path(path).ok_or_else(|| {
            BudgeterError::InvalidInput(format!(
                "Cannot tell the export format of {}. Pass --format",
                path.display()
            ))
        }),
    }
}
