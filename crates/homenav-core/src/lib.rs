//! Home menu toggle and search controller for the homenav shell.
//!
//! The controller switches between the current application and a
//! full-screen home menu, remembers the application that was active before
//! the menu opened, and narrows the menu with a live search query. Hosts
//! own the controller and feed it events; the application directory and
//! the last-application store are injected collaborators.

pub mod config;
pub mod directory;
pub mod keyboard;
pub mod search;
pub mod store;

mod controller;
mod error;

#[cfg(test)]
mod tests;

pub use controller::{HomeMenuController, NavEvent, Outcome};
pub use directory::{ApplicationDirectory, StaticDirectory};
pub use error::{Error, Result};
pub use keyboard::{Key, KeyInput, Modifiers, RouteContext, route};
pub use search::filter;
pub use store::{
    LAST_APP_KEY, LastApplicationStore, MemoryStore, SESSION_ENV, SessionFileStore,
    default_session_id,
};

pub use homenav_types::*;
