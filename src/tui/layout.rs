//! Layout definitions for the TUI
//!
//! Form and city list on the left, results on the right, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Budget and goal inputs
    pub form: Rect,
    /// Selectable city list
    pub cities: Rect,
    /// Results table
    pub results: Rect,
    /// Expense chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(40), // Inputs (fixed width)
                Constraint::Min(50),    // Results
            ])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(13), // Form
                Constraint::Min(5),     // City list
            ])
            .split(horizontal[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11), // Table, advice lines and borders
                Constraint::Min(8),    // Chart
            ])
            .split(horizontal[1]);

        Self {
            form: left[0],
            cities: left[1],
            results: right[0],
            chart: right[1],
            status_bar: vertical[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_fit_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.form.width, 40);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.results.x, 40);
        assert_eq!(layout.form.height + layout.cities.height, 39);
    }
}
