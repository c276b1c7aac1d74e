//! Shared types for homenav components.
//!
//! This crate provides the data model used by homenav-core and homenav-tui:
//! the applications listed by the directory, the session-scoped record of
//! the last active application, and the navigation state owned by the home
//! menu controller. Everything that crosses a persistence boundary is
//! serializable.

use serde::{Deserialize, Serialize};

/// Image reference attached to an application.
///
/// The core passes icons through untouched; only hosts interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppIcon {
    /// Base64-encoded PNG bytes
    Data(String),

    /// Image URL or path
    Url(String),
}

impl AppIcon {
    /// Source string a renderer can load directly.
    ///
    /// Binary icons become a `data:` URI, URLs are returned as-is.
    #[must_use]
    pub fn display_src(&self) -> String {
        match self {
            Self::Data(data) => format!("data:image/png;base64,{data}"),
            Self::Url(url) => url.clone(),
        }
    }
}

/// A navigable application as reported by the application directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Opaque unique identifier
    pub id: String,

    /// Display name, matched by search
    pub name: String,

    /// Opaque reference used to re-enter the application
    pub action_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<AppIcon>,
}

impl Application {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action_id: action_id.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: AppIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Snapshot of the application active right before the home menu opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastApplicationRecord {
    pub id: String,
    pub action_id: String,
}

impl From<&Application> for LastApplicationRecord {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            action_id: app.action_id.clone(),
        }
    }
}

/// Which surface the shell is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// A single active application
    #[default]
    AppView,

    /// Full-screen overlay listing every application
    HomeMenu,
}

/// Navigation state owned by the home menu controller.
///
/// Fields are private so the pairing rules hold: the query and search focus
/// only survive while the home menu is open, and `menu_open` always mirrors
/// the mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    mode: Mode,
    search_query: String,
    menu_open: bool,
    search_focused: bool,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Marker consumed by presentation layers for full-screen overlay styling.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// True while a non-empty query narrows the list.
    #[must_use]
    pub fn search_active(&self) -> bool {
        !self.search_query.is_empty()
    }

    #[must_use]
    pub fn is_home_menu(&self) -> bool {
        self.mode == Mode::HomeMenu
    }

    /// Switch to the home menu overlay.
    pub fn enter_home_menu(&mut self) {
        self.mode = Mode::HomeMenu;
        self.menu_open = true;
    }

    /// Switch back to the application view, dropping all search state.
    pub fn enter_app_view(&mut self) {
        self.mode = Mode::AppView;
        self.menu_open = false;
        self.search_query.clear();
        self.search_focused = false;
    }

    /// Replace the query. Ignored outside the home menu.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        if self.mode == Mode::HomeMenu {
            self.search_query = query.into();
        }
    }

    pub fn clear_search_query(&mut self) {
        self.search_query.clear();
    }

    /// Record search input focus. Focus cannot be held outside the home menu.
    pub fn set_search_focused(&mut self, focused: bool) {
        self.search_focused = focused && self.mode == Mode::HomeMenu;
    }
}
