//! TUI Views module
//!
//! Contains the input form, the city list, the results panel and the status
//! bar.

pub mod cities;
pub mod form;
pub mod results;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    cities::render(frame, app, layout.cities);
    results::render_table(frame, app, layout.results);
    results::render_chart(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);
}
