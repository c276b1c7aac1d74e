//! Keyboard router: raw key presses to home menu events.
//!
//! The key model is terminal-agnostic; hosts convert their native key events
//! into [`KeyInput`]. Keys the router does not claim are returned to the host
//! untouched (text editing, navigation, quitting).

use crate::controller::NavEvent;
use homenav_types::{Mode, NavigationState};

/// A key, reduced to what the router distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    /// Any key without a routing rule (arrows, tab, backspace, function keys)
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Modifier keys are independent flags
pub struct Modifiers {
    pub control: bool,
    /// Command / super / meta
    pub command: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_control(mut self) -> Self {
        self.modifiers.control = true;
        self
    }

    #[must_use]
    pub fn with_command(mut self) -> Self {
        self.modifiers.command = true;
        self
    }

    /// Control or command held; such chords are shortcuts, never text.
    #[must_use]
    pub fn is_chord(&self) -> bool {
        self.modifiers.control || self.modifiers.command
    }
}

/// The slice of navigation state routing depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContext {
    pub mode: Mode,
    pub search_focused: bool,
}

impl From<&NavigationState> for RouteContext {
    fn from(state: &NavigationState) -> Self {
        Self {
            mode: state.mode(),
            search_focused: state.search_focused(),
        }
    }
}

/// Map a key press to a controller event, or `None` to pass it through.
#[must_use]
pub fn route(input: &KeyInput, ctx: RouteContext) -> Option<NavEvent> {
    match input.key {
        Key::Escape => Some(NavEvent::EscapePressed),
        Key::Enter => Some(NavEvent::EnterPressed),
        Key::Char(c)
            if ctx.mode == Mode::HomeMenu
                && !ctx.search_focused
                && !input.is_chord()
                && !c.is_control() =>
        {
            Some(NavEvent::PrintableKeyPressed(c))
        }
        Key::Char(_) | Key::Other => None,
    }
}
