//! Configuration module for City Budgeter
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Read-only user settings
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::BudgeterPaths;
pub use settings::Settings;
