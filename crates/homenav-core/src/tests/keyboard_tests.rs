//! Tests driving the controller through the keyboard router

use super::fixtures::*;
use crate::controller::{NavEvent, Outcome};
use crate::keyboard::{Key, KeyInput, RouteContext, route};
use homenav_types::Mode;

/// Route a key through the router and, if claimed, into the controller
fn press(ctl: &mut TestController, input: KeyInput) -> Option<Outcome> {
    let event = route(&input, RouteContext::from(ctl.state()))?;
    Some(ctl.handle(event))
}

fn typed(c: char) -> KeyInput {
    KeyInput::new(Key::Char(c))
}

#[test]
fn test_printable_key_auto_focuses_search() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(press(&mut ctl, typed('r')), Some(Outcome::QueryChanged));
    assert_eq!(ctl.state().search_query(), "r");
    assert!(ctl.state().search_focused());
}

#[test]
fn test_control_chord_does_not_focus_search() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(press(&mut ctl, typed('r').with_control()), None);
    assert_eq!(press(&mut ctl, typed('r').with_command()), None);
    assert_eq!(ctl.state().search_query(), "");
    assert!(!ctl.state().search_focused());
}

#[test]
fn test_second_printable_key_goes_to_host_input() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    press(&mut ctl, typed('s'));

    // Focused search: the host input widget owns further typing
    assert_eq!(press(&mut ctl, typed('a')), None);
    ctl.handle(NavEvent::SearchChanged("sa".to_string()));
    assert_eq!(ctl.filtered_apps().len(), 2);
}

#[test]
fn test_type_then_enter_opens_first_match() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    press(&mut ctl, typed('c'));

    assert_eq!(
        press(&mut ctl, KeyInput::new(Key::Enter)),
        Some(Outcome::Selected("crm".to_string()))
    );
    assert_eq!(ctl.state().mode(), Mode::AppView);
}

#[test]
fn test_escape_twice_from_keyboard() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    press(&mut ctl, typed('y'));

    press(&mut ctl, KeyInput::new(Key::Escape));
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
    assert_eq!(ctl.state().search_query(), "");

    press(&mut ctl, KeyInput::new(Key::Escape));
    assert_eq!(ctl.state().mode(), Mode::AppView);
}

#[test]
fn test_keys_in_app_view_have_no_effect() {
    let mut ctl = make_controller(make_xy());

    assert_eq!(press(&mut ctl, typed('r')), None);
    assert_eq!(
        press(&mut ctl, KeyInput::new(Key::Enter)),
        Some(Outcome::Ignored)
    );
    assert_eq!(
        press(&mut ctl, KeyInput::new(Key::Escape)),
        Some(Outcome::Ignored)
    );
    assert_eq!(current_id(&ctl).as_deref(), Some("x"));
}

#[test]
fn test_unrouted_keys_pass_through() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(press(&mut ctl, KeyInput::new(Key::Other)), None);
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
}
