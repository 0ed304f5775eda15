//! Reference data display formatting
//!
//! Formats the city cost table and the goal presets for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::GoalPreset;
use crate::storage::CityTable;

#[derive(Tabled)]
struct CityRow {
    #[tabled(rename = "City")]
    name: String,
    #[tabled(rename = "Rent")]
    rent: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Transport")]
    transport: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the city reference table
pub fn format_city_table(table: &CityTable, symbol: &str) -> String {
    if table.is_empty() {
        return "No cities found.".to_string();
    }

    let rows: Vec<CityRow> = table
        .iter()
        .map(|city| CityRow {
            name: city.name.clone(),
            rent: city.rent.format_with_symbol(symbol),
            food: city.food.format_with_symbol(symbol),
            transport: city.transport.format_with_symbol(symbol),
            total: city.total_expenses().format_with_symbol(symbol),
        })
        .collect();

    let mut output = Table::new(rows);
    output
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    format!("{}\n{} cities, monthly costs", output, table.len())
}

/// Format the preset savings goals
pub fn format_goal_presets(symbol: &str) -> String {
    let rows: Vec<GoalRow> = GoalPreset::ALL
        .iter()
        .map(|preset| GoalRow {
            name: preset.name(),
            amount: preset.amount().format_with_symbol(symbol),
        })
        .collect();

    let mut output = Table::new(rows);
    output
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    format!(
        "{}\nUse --custom-goal and --custom-amount for anything else.",
        output
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityCost;

    #[test]
    fn test_city_table() {
        let output = format_city_table(&CityTable::builtin(), "€");
        assert!(output.contains("Berlin"));
        assert!(output.contains("Gießen"));
        assert!(output.contains("€1380"));
        assert!(output.contains("15 cities"));
    }

    #[test]
    fn test_custom_city_table() {
        let table = CityTable::from_cities(vec![CityCost::new("Graz", 550, 260, 30)]).unwrap();
        let output = format_city_table(&table, "EUR ");
        assert!(output.contains("EUR 840"));
        assert!(output.contains("1 cities"));
    }

    #[test]
    fn test_goal_presets() {
        let output = format_goal_presets("€");
        assert!(output.contains("Trip to Spain"));
        assert!(output.contains("€5000"));
        assert!(output.contains("--custom-goal"));
    }
}
