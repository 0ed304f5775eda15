//! Status bar view
//!
//! Shows the last status message, or key hints for the focused field

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Field};

/// Key hints for a field
pub fn key_hints(focus: Field) -> &'static str {
    match focus {
        Field::Cities => "↑↓ move  Space toggle  Tab next  q quit",
        Field::CustomName => "type to rename  Backspace delete  ↑↓ field  Esc quit",
        Field::Goal => "←→ change goal  ↑↓ field  q quit",
        Field::CustomAmount => "type digits  Backspace delete  ←→ adjust  ↑↓ field  q quit",
        _ => "←→ adjust  PgUp/PgDn ×10  ↑↓ field  Tab next  q quit",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints(app.focus)),
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
