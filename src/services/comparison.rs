//! Comparison service
//!
//! Runs the evaluator over the user's city selection. A city that fails to
//! evaluate is skipped and reported; it never aborts the rest of the pass.

use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{same_city_name, BudgetInput, EvaluationResult};
use crate::storage::CityTable;

use super::evaluator::evaluate;

/// Most cities the form lets the user compare at once
pub const MAX_SELECTED_CITIES: usize = 3;

/// Shown instead of results when nothing is selected
pub const SELECTION_PROMPT: &str = "Please select at least one city to compare.";

/// An ordered list of selected city names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// Build a selection, dropping repeated names and keeping first-seen order
    pub fn new<I, S>(names: I) -> BudgeterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                continue;
            }
            if !unique.iter().any(|n| same_city_name(n, &name)) {
                unique.push(name);
            }
        }

        if unique.len() > MAX_SELECTED_CITIES {
            return Err(BudgeterError::InvalidInput(format!(
                "select at most {} cities, got {}",
                MAX_SELECTED_CITIES,
                unique.len()
            )));
        }

        Ok(Self { names: unique })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| same_city_name(n, name))
    }

    /// Add a city if there is room, or remove it if already selected
    ///
    /// Returns false when the city could not be added because the selection
    /// is full.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| same_city_name(n, name)) {
            self.names.remove(pos);
            true
        } else if self.names.len() < MAX_SELECTED_CITIES {
            self.names.push(name.to_string());
            true
        } else {
            false
        }
    }
}

/// A city that could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCity {
    pub name: String,
    pub reason: String,
}

/// Results of one comparison pass
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// The budget every city was evaluated against
    pub input: BudgetInput,
    /// One result per evaluated city, in selection order
    pub results: Vec<EvaluationResult>,
    /// Cities that failed to evaluate, in selection order
    pub skipped: Vec<SkippedCity>,
}

impl ComparisonReport {
    /// Results whose goal is reachable
    pub fn reachable(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| r.goal_reached)
    }

    /// The evaluated city with the largest monthly leftover
    pub fn best(&self) -> Option<&EvaluationResult> {
        self.results.iter().max_by_key(|r| r.leftover)
    }
}

/// Outcome of comparing a selection
#[derive(Debug, Clone)]
pub enum Comparison {
    /// Nothing selected, so nothing evaluated
    NoSelection,
    Evaluated(ComparisonReport),
}

impl Comparison {
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            Self::NoSelection => None,
            Self::Evaluated(report) => Some(report),
        }
    }
}

/// Service for comparing cities against a budget
pub struct ComparisonService<'a> {
    table: &'a CityTable,
}

impl<'a> ComparisonService<'a> {
    /// Create a new comparison service
    pub fn new(table: &'a CityTable) -> Self {
        Self { table }
    }

    /// Look up a city by name and evaluate it
    pub fn evaluate_city(&self, name: &str, input: &BudgetInput) -> BudgeterResult<EvaluationResult> {
        let city = self.table.get(name)?;
        evaluate(city, input)
    }

    /// Evaluate every selected city in order
    pub fn compare(&self, selection: &Selection, input: &BudgetInput) -> Comparison {
        if selection.is_empty() {
            tracing::debug!("Empty selection, skipping evaluation");
            return Comparison::NoSelection;
        }

        let mut results = Vec::with_capacity(selection.len());
        let mut skipped = Vec::new();

        for name in selection.names() {
            match self.evaluate_city(name, input) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::warn!(city = %name, error = %e, "Skipping city");
                    skipped.push(SkippedCity {
                        name: name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Comparison::Evaluated(ComparisonReport {
            input: input.clone(),
            results,
            skipped,
        })
    }
}
