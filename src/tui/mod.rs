//! Terminal User Interface module
//!
//! An interactive form on the left and live results on the right. Every
//! input change re-evaluates the selected cities.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
