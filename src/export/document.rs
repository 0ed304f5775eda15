//! Structured export (JSON and YAML)
//!
//! Both formats serialize the same `ComparisonDocument`. Amounts are written
//! as euro numbers rather than the internal cent counts.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::display::advice_text;
use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{EvaluationResult, Money};
use crate::services::{ComparisonReport, SkippedCity};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// The budget a comparison was run against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub base_income: f64,
    pub extra_income: f64,
    pub total_income: f64,
    pub goal_name: String,
    pub goal_amount: f64,
    pub goal_months: u32,
}

/// One evaluated city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub city: String,
    pub total_expenses: f64,
    pub leftover: f64,
    pub projected_savings: f64,
    pub goal_reached: bool,
    pub extra_per_month: f64,
    pub advice: String,
}

impl ResultRow {
    /// Build a row, writing the advice with the given currency symbol
    pub fn new(result: &EvaluationResult, symbol: &str) -> Self {
        Self {
            city: result.city.clone(),
            total_expenses: euros(result.total_expenses),
            leftover: euros(result.leftover),
            projected_savings: euros(result.projected_savings),
            goal_reached: result.goal_reached,
            extra_per_month: euros(result.advice.extra_per_month()),
            advice: advice_text(result.advice, symbol),
        }
    }
}

/// A city that was skipped during the comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub city: String,
    pub reason: String,
}

impl From<&SkippedCity> for SkippedRow {
    fn from(skipped: &SkippedCity) -> Self {
        Self {
            city: skipped.name.clone(),
            reason: skipped.reason.clone(),
        }
    }
}

/// Full export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDocument {
    pub schema_version: u32,
    pub input: InputSummary,
    pub results: Vec<ResultRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}

impl ComparisonDocument {
    pub fn from_report(report: &ComparisonReport, symbol: &str) -> Self {
        let input = &report.input;
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            input: InputSummary {
                base_income: euros(input.base_income),
                extra_income: euros(input.extra_income),
                total_income: euros(input.total_income()),
                goal_name: input.goal.name.clone(),
                goal_amount: euros(input.goal.amount),
                goal_months: input.goal_months,
            },
            results: report
                .results
                .iter()
                .map(|result| ResultRow::new(result, symbol))
                .collect(),
            skipped: report.skipped.iter().map(SkippedRow::from).collect(),
        }
    }
}

pub(crate) fn euros(amount: Money) -> f64 {
    amount.as_euros_f64()
}

/// Export a comparison as pretty-printed JSON
pub fn export_json<W: Write>(
    report: &ComparisonReport,
    symbol: &str,
    writer: &mut W,
) -> BudgeterResult<()> {
    let document = ComparisonDocument::from_report(report, symbol);
    serde_json::to_writer_pretty(&mut *writer, &document)
        .map_err(|e| BudgeterError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| BudgeterError::Export(e.to_string()))?;
    Ok(())
}

/// Export a comparison as YAML
pub fn export_yaml<W: Write>(
    report: &ComparisonReport,
    symbol: &str,
    writer: &mut W,
) -> BudgeterResult<()> {
    let document = ComparisonDocument::from_report(report, symbol);
    serde_yaml::to_writer(writer, &document)
        .map_err(|e| BudgeterError::Export(format!("Failed to write YAML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, GoalPreset};
    use crate::services::{ComparisonService, Selection};
    use crate::storage::CityTable;

    fn report() -> ComparisonReport {
        let table = CityTable::builtin();
        let selection = Selection::new(["Berlin", "Leipzig", "Atlantis"]).unwrap();
        let input = BudgetInput::new(
            Money::from_euros(992),
            Money::from_euros(500),
            GoalPreset::TripToSpain,
            3,
        );
        match ComparisonService::new(&table).compare(&selection, &input) {
            crate::services::Comparison::Evaluated(report) => report,
            crate::services::Comparison::NoSelection => unreachable!(),
        }
    }

    #[test]
    fn test_document_values() {
        let document = ComparisonDocument::from_report(&report(), "€");

        assert_eq!(document.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(document.input.total_income, 1492.0);
        assert_eq!(document.input.goal_name, "Trip to Spain");
        assert_eq!(document.results.len(), 2);
        assert_eq!(document.results[1].city, "Leipzig");
        assert_eq!(document.results[1].projected_savings, 1206.0);
        assert_eq!(document.results[0].extra_per_month, 88.0);
        assert_eq!(document.skipped[0].city, "Atlantis");
    }

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_json(&report(), "€", &mut output).unwrap();

        let parsed: ComparisonDocument = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, ComparisonDocument::from_report(&report(), "€"));
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_yaml(&report(), "€", &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("goal_name: Trip to Spain"));
        assert!(text.contains("city: Leipzig"));
        assert!(text.contains("Unknown city: Atlantis"));
    }

    #[test]
    fn test_advice_uses_configured_symbol() {
        let document = ComparisonDocument::from_report(&report(), "EUR ");

        // Berlin: 1492 - 1380 = 112 * 3 = 336, short 264 over 3 months
        assert_eq!(
            document.results[0].advice,
            "Earn at least EUR 88 more per month to reach the goal"
        );
        assert!(!document.results[0].advice.contains('€'));
    }
}
