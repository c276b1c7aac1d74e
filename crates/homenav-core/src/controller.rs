//! Home menu state machine.
//!
//! Owns the [`NavigationState`] and is the only writer to it. Every event is
//! handled to completion before `handle` returns, so no intermediate state is
//! ever observable. Collaborator failures (directory not ready, unreadable
//! record, stale id) are absorbed here and never reach the host.

use crate::directory::ApplicationDirectory;
use crate::search;
use crate::store::LastApplicationStore;
use homenav_types::{Application, LastApplicationRecord, Mode, NavigationState};
use tracing::{debug, trace};

const TITLE_BACK_TO_APP: &str = "Back to App";
const TITLE_HOME_MENU: &str = "Home Menu";

/// Input events understood by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Toggle button activated
    ToggleRequested,

    /// Search input text changed
    SearchChanged(String),

    EscapePressed,

    EnterPressed,

    /// An application tile was chosen
    AppSelected(Application),

    /// Printable key typed while the search input did not have focus
    PrintableKeyPressed(char),

    /// Host moved focus into or out of the search input
    SearchFocusChanged(bool),

    /// Explicit request to empty the search query
    ClearSearch,
}

/// Effect of a handled event, for hosts deciding what to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Home menu is now shown
    Opened,

    /// Back to the app view; `restored` names the application commanded by
    /// the restore path, if any
    Closed { restored: Option<String> },

    /// Application selected from the menu
    Selected(String),

    QueryChanged,

    FocusChanged,

    /// Precondition did not hold; nothing changed
    Ignored,
}

/// Controller toggling between the app view and the home menu.
///
/// Hosts construct their directory and store first and hand them over; the
/// controller never outlives or replaces them.
pub struct HomeMenuController<D, S> {
    directory: D,
    store: S,
    state: NavigationState,
}

impl<D: ApplicationDirectory, S: LastApplicationStore> HomeMenuController<D, S> {
    pub fn new(directory: D, store: S) -> Self {
        Self {
            directory,
            store,
            state: NavigationState::new(),
        }
    }

    /// Post-construction hook run by the host once its own setup is done.
    pub fn initialize(&mut self, open_on_start: bool) -> Outcome {
        if open_on_start && self.state.mode() == Mode::AppView {
            self.open();
            return Outcome::Opened;
        }
        Outcome::Ignored
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.directory, self.store)
    }

    /// Current application, read fresh from the directory.
    pub fn current_app(&self) -> Option<Application> {
        self.directory.current_application()
    }

    /// True while the menu is shown or there is no application to show.
    pub fn is_on_home_menu(&self) -> bool {
        self.state.is_home_menu() || self.current_app().is_none()
    }

    /// Tooltip for the toggle control.
    pub fn toggle_title(&self) -> &'static str {
        if self.is_on_home_menu() {
            TITLE_BACK_TO_APP
        } else {
            TITLE_HOME_MENU
        }
    }

    /// Directory list narrowed by the current query.
    pub fn filtered_apps(&self) -> Vec<Application> {
        let apps = self.directory.list_applications();
        search::filter(&apps, self.state.search_query())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: NavEvent) -> Outcome {
        let mode = self.state.mode();
        let outcome = match (mode, event) {
            (_, NavEvent::ToggleRequested) => self.toggle(),
            (Mode::HomeMenu, NavEvent::SearchChanged(text)) => {
                self.state.set_search_query(text);
                self.state.enter_home_menu();
                Outcome::QueryChanged
            }
            (Mode::HomeMenu, NavEvent::EscapePressed) => self.escape(),
            (Mode::HomeMenu, NavEvent::EnterPressed) => match self.filtered_apps().first() {
                Some(first) => self.select(first.clone()),
                None => Outcome::Ignored,
            },
            (Mode::HomeMenu, NavEvent::AppSelected(app)) => self.select(app),
            (Mode::HomeMenu, NavEvent::PrintableKeyPressed(c)) if !self.state.search_focused() => {
                self.state.set_search_focused(true);
                self.state.set_search_query(c.to_string());
                Outcome::QueryChanged
            }
            (Mode::HomeMenu, NavEvent::SearchFocusChanged(focused)) => {
                self.state.set_search_focused(focused);
                Outcome::FocusChanged
            }
            (Mode::HomeMenu, NavEvent::ClearSearch) => {
                self.state.clear_search_query();
                Outcome::QueryChanged
            }
            (mode, event) => {
                trace!("Ignoring {:?} in {:?}", event, mode);
                Outcome::Ignored
            }
        };

        debug_assert!(self.state.is_home_menu() == self.state.menu_open());
        outcome
    }

    fn toggle(&mut self) -> Outcome {
        if self.state.mode() == Mode::AppView && self.current_app().is_some() {
            self.open();
            Outcome::Opened
        } else {
            self.state.enter_app_view();
            let restored = self.restore();
            Outcome::Closed { restored }
        }
    }

    fn open(&mut self) {
        if let Some(current) = self.current_app() {
            debug!("Opening home menu from '{}'", current.id);
            self.store.save(&LastApplicationRecord::from(&current));
        } else {
            debug!("Opening home menu without a current application");
        }
        self.state.enter_home_menu();
    }

    /// Return to the last application, or the first one if it is gone.
    fn restore(&mut self) -> Option<String> {
        let apps = self.directory.list_applications();

        let last = self
            .store
            .load()
            .and_then(|record| apps.iter().find(|app| app.id == record.id));

        let target = match last {
            Some(app) => {
                debug!("Restoring last application '{}'", app.id);
                app
            }
            None => {
                let first = apps.first()?;
                debug!("No usable last application, falling back to '{}'", first.id);
                first
            }
        };

        self.directory.select_application(target);
        Some(target.id.clone())
    }

    fn escape(&mut self) -> Outcome {
        if self.state.search_active() {
            self.state.clear_search_query();
            Outcome::QueryChanged
        } else {
            debug!("Closing home menu from escape");
            self.state.enter_app_view();
            Outcome::Closed { restored: None }
        }
    }

    fn select(&mut self, app: Application) -> Outcome {
        debug!("Selecting '{}' from home menu", app.id);
        self.state.enter_app_view();
        self.directory.select_application(&app);
        Outcome::Selected(app.id)
    }
}
