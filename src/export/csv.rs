//! CSV Export functionality
//!
//! Exports one row per evaluated city, with the same columns as the terminal
//! table.

use std::io::Write;

use crate::error::{BudgeterError, BudgeterResult};
use crate::services::ComparisonReport;

use super::document::ResultRow;

/// Export comparison results to CSV
pub fn export_results_csv<W: Write>(
    report: &ComparisonReport,
    symbol: &str,
    writer: &mut W,
) -> BudgeterResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "City",
        "Total Expenses",
        "Leftover",
        &format!("Savings in {} Months", report.input.goal_months),
        "Can Reach Goal",
        "Extra Per Month",
        "Advice",
    ])?;

    for result in &report.results {
        let row = ResultRow::new(result, symbol);
        csv_writer.write_record([
            row.city,
            format!("{:.2}", row.total_expenses),
            format!("{:.2}", row.leftover),
            format!("{:.2}", row.projected_savings),
            result.verdict_label().to_string(),
            format!("{:.2}", row.extra_per_month),
            row.advice,
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgeterError::Export(format!("Failed to write CSV: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, GoalPreset, Money};
    use crate::services::{Comparison, ComparisonService, Selection};
    use crate::storage::CityTable;

    #[test]
    fn test_csv_export() {
        let table = CityTable::builtin();
        let selection = Selection::new(["Berlin", "Leipzig"]).unwrap();
        let input = BudgetInput::new(Money::from_euros(992), Money::zero(), GoalPreset::Bike, 3);
        let report = match ComparisonService::new(&table).compare(&selection, &input) {
            Comparison::Evaluated(report) => report,
            Comparison::NoSelection => unreachable!(),
        };

        let mut output = Vec::new();
        export_results_csv(&report, "€", &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "City,Total Expenses,Leftover,Savings in 3 Months,Can Reach Goal,Extra Per Month,Advice"
        );
        assert_eq!(
            lines[1],
            "Berlin,1380.00,-388.00,0.00,No,134.00,Earn at least €134 more per month to reach the goal"
        );
        // Leipzig: 992 - 1090 = -98
        assert!(lines[2].starts_with("Leipzig,1090.00,-98.00,0.00,No,134.00,"));
        assert_eq!(lines.len(), 3);
    }
}
