//! Terminal bar chart of monthly expenses and leftover
//!
//! Each city gets one stacked bar: expenses first, then whatever income is
//! left. When expenses exceed income the part of the bar past the income line
//! is drawn as a shortfall instead.

use crate::models::{EvaluationResult, Money};

const EXPENSES: char = '█';
const LEFTOVER: char = '░';
const SHORTFALL: char = '▓';

/// Segment widths of one stacked bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSegments {
    /// Expenses covered by income
    pub expenses: usize,
    /// Income left after expenses
    pub leftover: usize,
    /// Expenses not covered by income
    pub shortfall: usize,
}

impl BarSegments {
    pub fn total(&self) -> usize {
        self.expenses + self.leftover + self.shortfall
    }

    pub fn render(&self) -> String {
        let mut bar = String::with_capacity(self.total() * 3);
        bar.extend(std::iter::repeat(EXPENSES).take(self.expenses));
        bar.extend(std::iter::repeat(LEFTOVER).take(self.leftover));
        bar.extend(std::iter::repeat(SHORTFALL).take(self.shortfall));
        bar
    }
}

fn scaled(value: Money, max_value: Money, width: usize) -> usize {
    if !max_value.is_positive() || !value.is_positive() {
        return 0;
    }
    let filled = (value.as_euros_f64() / max_value.as_euros_f64() * width as f64).round() as usize;
    filled.min(width)
}

/// Full bar length in money terms: expenses plus any positive leftover
fn bar_extent(result: &EvaluationResult) -> Money {
    result.total_expenses + result.leftover.floor_zero()
}

/// Split one result's bar into segments, scaled so `max_value` fills `width`
pub fn bar_segments(result: &EvaluationResult, max_value: Money, width: usize) -> BarSegments {
    if result.leftover.is_negative() {
        let income = result.total_expenses + result.leftover;
        let covered = scaled(income, max_value, width);
        let full = scaled(result.total_expenses, max_value, width);
        BarSegments {
            expenses: covered,
            leftover: 0,
            shortfall: full.saturating_sub(covered),
        }
    } else {
        let expenses = scaled(result.total_expenses, max_value, width);
        let full = scaled(bar_extent(result), max_value, width);
        BarSegments {
            expenses,
            leftover: full.saturating_sub(expenses),
            shortfall: 0,
        }
    }
}

/// Render the stacked bar chart for a list of results
pub fn format_expense_chart(results: &[EvaluationResult], symbol: &str, width: usize) -> String {
    if results.is_empty() {
        return String::new();
    }

    let max_value = results
        .iter()
        .map(bar_extent)
        .max()
        .unwrap_or_else(Money::zero);

    let name_width = results
        .iter()
        .map(|r| r.city.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str("Monthly Expenses and Leftover Budget\n");

    for result in results {
        let segments = bar_segments(result, max_value, width);
        let padding = name_width - result.city.chars().count();
        output.push_str(&format!(
            "{}{}  {:<width$}  {} / {}\n",
            result.city,
            " ".repeat(padding),
            segments.render(),
            result.total_expenses.format_with_symbol(symbol),
            result.leftover.format_with_symbol(symbol),
            width = width,
        ));
    }

    output.push_str(&format!(
        "{} expenses  {} leftover  {} shortfall\n",
        EXPENSES, LEFTOVER, SHORTFALL
    ));

    output
}
