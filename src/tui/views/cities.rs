//! City list view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::services::MAX_SELECTED_CITIES;
use crate::tui::app::{App, Field};

use super::form::border_style;

/// Render the selectable city list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let items: Vec<ListItem> = app
        .table
        .iter()
        .map(|city| {
            let selected = app.selection.contains(&city.name);
            let check = if selected { "[x]" } else { "[ ]" };
            let style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "{} {:<12} {:>7}",
                check,
                city.name,
                city.total_expenses().format_with_symbol(symbol)
            ))
            .style(style)
        })
        .collect();

    let focused = app.focus == Field::Cities;
    let block = Block::default()
        .title(format!(
            " Cities ({}/{}) ",
            app.selection.len(),
            MAX_SELECTED_CITIES
        ))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.city_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
