//! Comparison display formatting
//!
//! Formats a comparison pass for terminal output: the budget summary, one
//! table row per city, notes for skipped cities and the expense chart.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::{Advice, BudgetInput, InputLimits};
use crate::services::{Comparison, ComparisonReport, SELECTION_PROMPT};

use super::chart::format_expense_chart;

/// Header line reminding students of the visa funding requirement
pub fn visa_note(symbol: &str) -> String {
    format!(
        "Minimum for student visa: {} {} per year or {} {} per month",
        format_thousands(InputLimits::STUDENT_VISA_YEARLY_MINIMUM),
        symbol,
        InputLimits::STUDENT_VISA_MONTHLY_MINIMUM,
        symbol
    )
}

fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Summarize the budget being compared
pub fn format_input_summary(input: &BudgetInput, symbol: &str) -> String {
    format!(
        "Income: {} + {} extra = {} per month\nGoal: {} ({}) in {} month{}\n",
        input.base_income.format_with_symbol(symbol),
        input.extra_income.format_with_symbol(symbol),
        input.total_income().format_with_symbol(symbol),
        input.goal.name,
        input.goal.amount.format_with_symbol(symbol),
        input.goal_months,
        if input.goal_months == 1 { "" } else { "s" }
    )
}

/// Render the per-city results as a table
pub fn format_results_table(report: &ComparisonReport, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "City".to_string(),
        "Total Expenses".to_string(),
        "Leftover".to_string(),
        format!("Savings in {} Months", report.input.goal_months),
        "Can Reach Goal".to_string(),
        "Advice".to_string(),
    ]);

    for result in &report.results {
        builder.push_record([
            result.city.clone(),
            result.total_expenses.format_with_symbol(symbol),
            result.leftover.format_with_symbol(symbol),
            result.projected_savings.format_with_symbol(symbol),
            result.verdict_label().to_string(),
            advice_text(result.advice, symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..4), Alignment::right());
    table.to_string()
}

/// Advice text using the configured currency symbol
pub fn advice_text(advice: Advice, symbol: &str) -> String {
    match advice {
        Advice::GoalAchievable => advice.to_string(),
        Advice::EarnMore { extra_per_month } => format!(
            "Earn at least {} more per month to reach the goal",
            extra_per_month.format_with_symbol(symbol)
        ),
    }
}

/// Render a full comparison, or the selection prompt when nothing was selected
pub fn format_comparison(comparison: &Comparison, symbol: &str, chart_width: usize) -> String {
    let report = match comparison {
        Comparison::NoSelection => return format!("{}\n", SELECTION_PROMPT),
        Comparison::Evaluated(report) => report,
    };

    let mut output = String::new();
    output.push_str("Comparison of selected cities\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&visa_note(symbol));
    output.push('\n');
    output.push_str(&format_input_summary(&report.input, symbol));
    output.push('\n');

    if !report.results.is_empty() {
        output.push_str(&format_results_table(report, symbol));
        output.push('\n');
    }

    for skipped in &report.skipped {
        output.push_str(&format!("Skipped {}: {}\n", skipped.name, skipped.reason));
    }

    if !report.results.is_empty() {
        output.push('\n');
        output.push_str(&format_expense_chart(&report.results, symbol, chart_width));
    }

    output
}
