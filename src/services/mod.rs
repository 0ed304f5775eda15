//! Business logic layer for City Budgeter
//!
//! The evaluator is the pure calculation core; the comparison service runs it
//! over a selection of cities.

pub mod comparison;
pub mod evaluator;

pub use comparison::{
    Comparison, ComparisonReport, ComparisonService, Selection, SkippedCity, MAX_SELECTED_CITIES,
    SELECTION_PROMPT,
};
pub use evaluator::evaluate;
