//! Event handler for the TUI
//!
//! Routes key presses to form edits, city selection or quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Field};
use super::event::Event;

/// Steps taken by PageUp/PageDown
const LARGE_STEP: i64 = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Esc => return app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return app.quit()
        }
        KeyCode::Tab => return app.move_focus(1),
        KeyCode::BackTab => return app.move_focus(-1),
        _ => {}
    }

    match app.focus {
        Field::CustomName => handle_name_key(app, key),
        Field::CustomAmount => handle_amount_key(app, key),
        Field::Cities => handle_city_key(app, key),
        _ => handle_form_key(app, key),
    }
}

/// Keys on numeric fields and the goal selector
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(1),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.adjust(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.adjust(1),
        KeyCode::PageDown => app.adjust(-LARGE_STEP),
        KeyCode::PageUp => app.adjust(LARGE_STEP),
        _ => {}
    }
}

/// Keys while editing the custom goal name
fn handle_name_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_focus(-1),
        KeyCode::Down | KeyCode::Enter => app.move_focus(1),
        KeyCode::Backspace => app.pop_name_char(),
        KeyCode::Char(c) => app.push_name_char(c),
        _ => {}
    }
}

/// Keys on the custom goal amount: typed digits, plus the slider keys
fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(digit) = c.to_digit(10) {
                app.push_amount_digit(digit);
            }
        }
        KeyCode::Backspace => app.pop_amount_digit(),
        KeyCode::Enter => app.move_focus(1),
        _ => handle_form_key(app, key),
    }
}

/// Keys in the city list
fn handle_city_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_city(),
        _ => {}
    }
}
