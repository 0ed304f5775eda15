//! Display formatting for terminal output
//!
//! Provides utilities for formatting comparisons and reference data for
//! terminal display: tables, the expense chart and summary lines.

pub mod chart;
pub mod comparison;
pub mod reference;

pub use chart::{bar_segments, format_expense_chart, BarSegments};
pub use comparison::{
    advice_text, format_comparison, format_input_summary, format_results_table, visa_note,
};
pub use reference::{format_city_table, format_goal_presets};
