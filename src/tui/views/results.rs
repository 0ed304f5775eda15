//! Results views
//!
//! The per-city table and a grouped bar chart of expenses against leftover.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::display::advice_text;
use crate::services::{Comparison, SELECTION_PROMPT};
use crate::tui::app::App;

/// Render the results table, or the selection prompt
pub fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let report = match &app.comparison {
        Comparison::NoSelection => {
            let prompt = Paragraph::new(SELECTION_PROMPT)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().title(" Results ").borders(Borders::ALL));
            frame.render_widget(prompt, area);
            return;
        }
        Comparison::Evaluated(report) => report,
    };

    let rows: Vec<Row> = report
        .results
        .iter()
        .map(|result| {
            let verdict_style = if result.goal_reached {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let leftover_style = if result.leftover.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(result.city.clone()),
                Cell::from(result.total_expenses.format_with_symbol(symbol)),
                Cell::from(result.leftover.format_with_symbol(symbol)).style(leftover_style),
                Cell::from(result.projected_savings.format_with_symbol(symbol)),
                Cell::from(result.verdict_label()).style(verdict_style),
            ])
        })
        .collect();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("City").style(bold),
        Cell::from("Total Expenses").style(bold),
        Cell::from("Leftover").style(bold),
        Cell::from(format!("Savings in {} Months", report.input.goal_months)).style(bold),
        Cell::from("Can Reach Goal").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(10),
        Constraint::Length(20),
        Constraint::Length(14),
    ];

    let mut title = format!(" Results: {} ", report.input.goal);
    if !report.skipped.is_empty() {
        let names: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        title.push_str(&format!("(skipped {}) ", names.join(", ")));
    }

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Table on top, one advice line per city below it
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(report.results.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Table::new(rows, widths).header(header), chunks[0]);

    let advice: Vec<Line> = report
        .results
        .iter()
        .map(|result| {
            let color = if result.goal_reached {
                Color::Green
            } else {
                Color::Red
            };
            Line::from(vec![
                Span::styled(format!("{}: ", result.city), bold),
                Span::styled(advice_text(result.advice, symbol), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(advice).wrap(Wrap { trim: true }), chunks[1]);
}

/// Render the expense chart
pub fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let block = Block::default()
        .title(" Monthly Expenses and Leftover Budget ")
        .borders(Borders::ALL);

    let report = match app.comparison.report() {
        Some(report) if !report.results.is_empty() => report,
        _ => {
            let hint = Paragraph::new("Select cities on the left with Space.")
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(hint, area);
            return;
        }
    };

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(10)
        .bar_gap(1)
        .group_gap(4);

    for result in &report.results {
        let expenses = Bar::default()
            .value(result.total_expenses.euros().max(0) as u64)
            .text_value(result.total_expenses.format_with_symbol(symbol))
            .label(Line::from("Expenses"))
            .style(Style::default().fg(Color::Blue));

        let (label, color) = if result.leftover.is_negative() {
            ("Shortfall", Color::Red)
        } else {
            ("Leftover", Color::Green)
        };
        let leftover = Bar::default()
            .value(result.leftover.abs().euros() as u64)
            .text_value(result.leftover.format_with_symbol(symbol))
            .label(Line::from(label))
            .style(Style::default().fg(color));

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(result.city.clone()))
                .bars(&[expenses, leftover]),
        );
    }

    frame.render_widget(chart, area);
}
