//! Rendering functions for the TUI.
//!
//! One module per view: the app view and the home menu overlay.

mod app_view;
mod helpers;
mod home_menu;

pub use app_view::render_app_view;
pub use home_menu::render_home_menu;
