//! Test module for homenav-core
//!
//! This module contains tests for:
//! - Home menu toggling and last-application restore
//! - Search, escape, enter and printable-key handling in the home menu
//! - Keyboard routing driven end to end through the controller
//! - Search filter properties
//! - Configuration loading and session-scoped persistence

mod controller_tests;
mod keyboard_tests;
