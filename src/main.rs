use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use city_budgeter::cli::{
    handle_cities_command, handle_compare_command, handle_config_command, handle_goals_command,
    load_city_table, CompareArgs,
};
use city_budgeter::config::logging::init_logging;
use city_budgeter::config::{BudgeterPaths, Settings};

#[derive(Parser)]
#[command(
    name = "city-budgeter",
    version,
    about = "Check whether a student budget works in German cities",
    long_about = "City Budgeter compares monthly living costs in up to three German \
                  cities against your income and a savings goal, and tells you how \
                  much more you would need to earn where the goal is out of reach."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare cities against a budget and savings goal
    Compare(CompareArgs),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// City reference file (JSON or YAML) replacing the built-in table
        #[arg(long)]
        cities_file: Option<PathBuf>,
    },

    /// List the city cost table
    Cities {
        /// City reference file (JSON or YAML) replacing the built-in table
        #[arg(long)]
        cities_file: Option<PathBuf>,
    },

    /// List the savings goal presets
    Goals,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging would draw over the alternate screen
    if !matches!(cli.command, Some(Commands::Tui { .. })) {
        init_logging(cli.verbose);
    }

    let paths = BudgeterPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command {
        Some(Commands::Compare(args)) => {
            handle_compare_command(&paths, &settings, args)?;
        }
        None => {
            handle_compare_command(&paths, &settings, CompareArgs::default())?;
        }
        Some(Commands::Tui { cities_file }) => {
            settings.validate()?;
            let table = load_city_table(&paths, &settings, cities_file.as_deref())?;
            city_budgeter::tui::run_tui(&table, &settings)?;
        }
        Some(Commands::Cities { cities_file }) => {
            handle_cities_command(&paths, &settings, cities_file.as_deref())?;
        }
        Some(Commands::Goals) => {
            handle_goals_command(&settings)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}
