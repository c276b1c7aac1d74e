//! TUI widgets for homenav-tui.
//!
//! # Utilities
//!
//! - [`icon_badge`] - Tile badge for an application
//! - [`icon_source`] - Printable icon source

mod icon;

pub use icon::{icon_badge, icon_source};
