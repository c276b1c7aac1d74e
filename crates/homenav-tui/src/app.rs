//! Host state and key handling for the TUI.
//!
//! The controller owns navigation state. The host only adds what a terminal
//! needs on top: a highlighted tile, grid geometry and a status line.

use crate::input::to_key_input;
use crossterm::event::{KeyCode, KeyEvent};
use homenav_core::config::HomeMenuConfig;
use homenav_core::{
    Application, HomeMenuController, NavEvent, Outcome, RouteContext, SessionFileStore,
    StaticDirectory, route,
};
use tracing::debug;

pub type Controller = HomeMenuController<StaticDirectory, SessionFileStore>;

pub struct App {
    pub controller: Controller,
    pub home_menu: HomeMenuConfig,
    /// Index into the filtered app list
    pub highlighted: usize,
    /// Tiles per row, as last laid out by the renderer
    pub grid_columns: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Controller, home_menu: HomeMenuConfig) -> Self {
        Self {
            controller,
            home_menu,
            highlighted: 0,
            grid_columns: 1,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the controller's startup hook with the configured preference.
    pub fn initialize(&mut self) {
        let outcome = self.controller.initialize(self.home_menu.open_on_start);
        self.apply(outcome);
    }

    pub fn highlighted_app(&self) -> Option<Application> {
        self.controller
            .filtered_apps()
            .into_iter()
            .nth(self.highlighted)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let input = to_key_input(&key);

        if input.modifiers.control {
            match key.code {
                KeyCode::Char('c' | 'q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('h') => {
                    self.dispatch(NavEvent::ToggleRequested);
                    return;
                }
                _ => {}
            }
        }

        let state = self.controller.state();
        let on_grid = state.is_home_menu() && !state.search_focused();

        // Enter on the grid activates the highlighted tile, like clicking it
        if on_grid
            && key.code == KeyCode::Enter
            && let Some(app) = self.highlighted_app()
        {
            self.dispatch(NavEvent::AppSelected(app));
            return;
        }

        if let Some(event) = route(&input, RouteContext::from(state)) {
            self.dispatch(event);
            return;
        }

        if !state.is_home_menu() {
            return;
        }

        if state.search_focused() {
            self.handle_search_key(key.code, input.is_chord());
        } else {
            self.handle_grid_key(key.code);
        }
    }

    fn handle_search_key(&mut self, code: KeyCode, chord: bool) {
        match code {
            KeyCode::Char(c) if !chord => {
                let mut query = self.controller.state().search_query().to_string();
                query.push(c);
                self.dispatch(NavEvent::SearchChanged(query));
            }
            KeyCode::Backspace => {
                let mut query = self.controller.state().search_query().to_string();
                if query.pop().is_some() {
                    self.dispatch(NavEvent::SearchChanged(query));
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.dispatch(NavEvent::SearchFocusChanged(false));
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.move_highlight(false, 1),
            KeyCode::Right => self.move_highlight(true, 1),
            KeyCode::Up => self.move_highlight(false, self.grid_columns),
            KeyCode::Down => self.move_highlight(true, self.grid_columns),
            KeyCode::Tab => self.dispatch(NavEvent::SearchFocusChanged(true)),
            _ => {}
        }
    }

    /// Move the highlight, staying on the first or last tile at the edges.
    pub fn move_highlight(&mut self, forward: bool, step: usize) {
        let count = self.controller.filtered_apps().len();
        if count == 0 {
            return;
        }
        let step = step.max(1);
        self.highlighted = if forward {
            self.highlighted.saturating_add(step).min(count - 1)
        } else {
            self.highlighted.saturating_sub(step)
        };
    }

    pub fn dispatch(&mut self, event: NavEvent) {
        debug!("Dispatching {:?}", event);
        let outcome = self.controller.handle(event);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        debug!("Outcome: {:?}", outcome);
        match outcome {
            Outcome::Opened | Outcome::QueryChanged => {
                self.highlighted = 0;
                self.status_message = None;
            }
            Outcome::Selected(_) | Outcome::Closed { .. } => {
                self.status_message = self
                    .controller
                    .current_app()
                    .map(|app| format!("Opened {}", app.name));
            }
            Outcome::FocusChanged | Outcome::Ignored => {}
        }
    }
}
