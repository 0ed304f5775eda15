//! City Budgeter - student budget affordability across German cities
//!
//! This library evaluates whether a monthly student budget covers living
//! costs in a city and still reaches a savings goal in time. When it does
//! not, it works out how much more needs to be earned each month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, cities, budget input, results)
//! - `storage`: The city reference table and file loading
//! - `services`: The evaluator and the multi-city comparison
//! - `display`: Terminal tables and charts
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use city_budgeter::models::{BudgetInput, GoalPreset, Money};
//! use city_budgeter::services::evaluate;
//! use city_budgeter::storage::CityTable;
//!
//! let table = CityTable::builtin();
//! let berlin = table.get("Berlin").unwrap();
//! let input = BudgetInput::new(Money::from_euros(992), Money::zero(), GoalPreset::Bike, 3);
//!
//! let result = evaluate(berlin, &input).unwrap();
//! assert_eq!(result.advice.extra_per_month(), Money::from_euros(134));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgeterError, BudgeterResult};
