//! Core data models for City Budgeter
//!
//! This module contains the data structures of the budgeting domain: money,
//! city cost reference data, the student's budget input, and evaluation
//! results.

pub mod city;
pub mod evaluation;
pub mod input;
pub mod money;

pub use city::{city_name_key, same_city_name, CityCost, CityValidationError};
pub use evaluation::{Advice, EvaluationResult};
pub use input::{
    Bounds, BudgetInput, GoalPreset, InputLimits, InputValidationError, SavingsGoal,
};
pub use money::Money;
