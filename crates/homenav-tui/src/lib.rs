//! TUI library for the homenav home menu.
//!
//! Terminal helpers shared by the `homenav-tui` binary.

pub mod widgets;
