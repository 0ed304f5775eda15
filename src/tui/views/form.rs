//! Budget form view
//!
//! Shows the slider-like numeric inputs and the goal selector.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Bounds, InputLimits, Money};
use crate::tui::app::{App, Field, GoalChoice};

/// Render the form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let euros = |value: i64| Money::from_euros(value).format_with_symbol(symbol);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Visa minimum: {} / month",
            euros(InputLimits::STUDENT_VISA_MONTHLY_MINIMUM)
        ),
        Style::default().fg(Color::DarkGray),
    ))];

    for field in app.visible_fields() {
        let value = match field {
            Field::Income => slider(euros(app.income), app.income, InputLimits::INCOME),
            Field::ExtraIncome => slider(
                euros(app.extra_income),
                app.extra_income,
                InputLimits::EXTRA_INCOME,
            ),
            Field::Goal => match app.goal {
                GoalChoice::Preset(preset) => {
                    format!("‹ {} ({}) ›", preset.name(), preset.amount().format_with_symbol(symbol))
                }
                GoalChoice::Custom => "‹ Custom ›".to_string(),
            },
            Field::CustomName => {
                if app.focus == Field::CustomName {
                    format!("{}_", app.custom_name)
                } else {
                    app.custom_name.clone()
                }
            }
            Field::CustomAmount => euros(app.custom_amount),
            Field::Months => slider(
                app.months.to_string(),
                i64::from(app.months),
                InputLimits::GOAL_MONTHS,
            ),
            Field::Cities => format!("{} selected", app.selection.len()),
        };
        lines.push(field_line(field, value, app.focus == field));
    }

    let input = app.input();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Total income: "),
        Span::styled(
            input.total_income().format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let block = Block::default()
        .title(" Your budget ")
        .borders(Borders::ALL)
        .border_style(border_style(app.focus != Field::Cities));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(field: Field, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::raw(format!("{:<18}", field.label())),
        Span::styled(value, value_style),
    ])
}

/// A value with a small gauge showing its position in the range
fn slider(label: String, value: i64, bounds: Bounds) -> String {
    const WIDTH: i64 = 8;
    let span = (bounds.max - bounds.min).max(1);
    let filled = ((value - bounds.min) * WIDTH / span).clamp(0, WIDTH) as usize;
    format!(
        "{:<7} {}{}",
        label,
        "━".repeat(filled),
        "─".repeat(WIDTH as usize - filled)
    )
}

pub(super) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
