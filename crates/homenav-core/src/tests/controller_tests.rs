//! Tests for the home menu state machine: toggling, restore, search and selection

use super::fixtures::*;
use crate::controller::{HomeMenuController, NavEvent, Outcome};
use crate::directory::StaticDirectory;
use crate::store::{LastApplicationStore, MemoryStore};
use homenav_types::{LastApplicationRecord, Mode};

fn record(id: &str) -> LastApplicationRecord {
    LastApplicationRecord {
        id: id.to_string(),
        action_id: format!("action-{id}"),
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_opens_and_persists_current_app() {
    let mut ctl = make_controller(make_xy());
    navigate_to(&mut ctl, "y");

    assert_eq!(ctl.handle(NavEvent::ToggleRequested), Outcome::Opened);

    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
    assert!(ctl.state().menu_open());
    assert_eq!(ctl.store().load(), Some(record("y")));
    // The directory keeps its selection while the menu overlays it
    assert_eq!(current_id(&ctl).as_deref(), Some("y"));
}

#[test]
fn test_repeated_toggles_alternate() {
    let mut ctl = make_controller(make_xy());
    let mut modes = Vec::new();
    for _ in 0..6 {
        ctl.handle(NavEvent::ToggleRequested);
        modes.push(ctl.state().mode());
    }
    assert_eq!(
        modes,
        vec![
            Mode::HomeMenu,
            Mode::AppView,
            Mode::HomeMenu,
            Mode::AppView,
            Mode::HomeMenu,
            Mode::AppView,
        ]
    );
    assert!(!ctl.state().menu_open());
}

#[test]
fn test_round_trip_restores_current_app() {
    let mut ctl = make_controller(make_xy());
    navigate_to(&mut ctl, "y");

    ctl.handle(NavEvent::ToggleRequested);
    let outcome = ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(
        outcome,
        Outcome::Closed {
            restored: Some("y".to_string())
        }
    );
    assert_eq!(current_id(&ctl).as_deref(), Some("y"));
    assert_eq!(ctl.state().mode(), Mode::AppView);
}

#[test]
fn test_restore_after_directory_moved_while_open() {
    let mut ctl = make_controller(make_xy());
    navigate_to(&mut ctl, "y");
    ctl.handle(NavEvent::ToggleRequested);

    // Something else navigated while the overlay was up
    navigate_to(&mut ctl, "x");
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(current_id(&ctl).as_deref(), Some("y"));
}

#[test]
fn test_closing_clears_query_and_focus() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::PrintableKeyPressed('e'));
    assert!(ctl.state().search_focused());

    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(ctl.state().search_query(), "");
    assert!(!ctl.state().search_focused());
    assert!(!ctl.state().menu_open());
}

#[test]
fn test_missing_last_app_falls_back_to_first() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.store_mut().clear();
    navigate_to(&mut ctl, "y");

    let outcome = ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(
        outcome,
        Outcome::Closed {
            restored: Some("x".to_string())
        }
    );
    assert_eq!(current_id(&ctl).as_deref(), Some("x"));
}

#[test]
fn test_corrupt_last_app_falls_back_to_first() {
    let mut ctl = make_controller_with_raw_store(make_xy(), "{\"id\": ");
    ctl.directory_mut().unselect();

    // No current app: the toggle goes straight to the restore path
    let outcome = ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(
        outcome,
        Outcome::Closed {
            restored: Some("x".to_string())
        }
    );
    assert_eq!(current_id(&ctl).as_deref(), Some("x"));
    assert_eq!(ctl.state().mode(), Mode::AppView);
}

#[test]
fn test_stale_last_app_falls_back_to_first() {
    let mut ctl = make_controller(make_xy());
    navigate_to(&mut ctl, "y");
    ctl.handle(NavEvent::ToggleRequested);
    ctl.store_mut().save(&record("gone"));

    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(current_id(&ctl).as_deref(), Some("x"));
}

#[test]
fn test_toggle_with_empty_directory_is_noop() {
    let mut ctl = make_controller(Vec::new());

    let outcome = ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(outcome, Outcome::Closed { restored: None });
    assert_eq!(ctl.state().mode(), Mode::AppView);
    assert!(current_id(&ctl).is_none());
    assert!(ctl.store().load().is_none());
}

#[test]
fn test_toggle_with_pending_directory_is_noop() {
    let mut ctl = HomeMenuController::new(
        StaticDirectory::pending(),
        MemoryStore::new(),
    );
    ctl.store_mut().save(&record("x"));

    let outcome = ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(outcome, Outcome::Closed { restored: None });
    assert_eq!(ctl.state().mode(), Mode::AppView);
    assert!(ctl.filtered_apps().is_empty());
}

#[test]
fn test_record_is_overwritten_on_each_open() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    assert_eq!(ctl.store().load(), Some(record("x")));

    ctl.handle(NavEvent::AppSelected(make_app("y", "Yard")));
    ctl.handle(NavEvent::ToggleRequested);
    assert_eq!(ctl.store().load(), Some(record("y")));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn test_search_changed_filters_list() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);

    let outcome = ctl.handle(NavEvent::SearchChanged("TEAM".to_string()));

    assert_eq!(outcome, Outcome::QueryChanged);
    assert_eq!(ctl.state().search_query(), "TEAM");
    assert!(ctl.state().search_active());
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
    let names: Vec<_> = ctl.filtered_apps().into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Sales Team"]);
}

#[test]
fn test_search_changed_to_empty_shows_everything() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("crm".to_string()));
    ctl.handle(NavEvent::SearchChanged(String::new()));

    assert!(!ctl.state().search_active());
    assert_eq!(ctl.filtered_apps().len(), 3);
}

#[test]
fn test_clear_search_event() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("crm".to_string()));

    assert_eq!(ctl.handle(NavEvent::ClearSearch), Outcome::QueryChanged);
    assert_eq!(ctl.state().search_query(), "");
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
}

// ---------------------------------------------------------------------------
// Escape
// ---------------------------------------------------------------------------

#[test]
fn test_escape_clears_then_closes() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("abc".to_string()));

    assert_eq!(ctl.handle(NavEvent::EscapePressed), Outcome::QueryChanged);
    assert_eq!(ctl.state().search_query(), "");
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);

    assert_eq!(
        ctl.handle(NavEvent::EscapePressed),
        Outcome::Closed { restored: None }
    );
    assert_eq!(ctl.state().mode(), Mode::AppView);
    assert!(!ctl.state().menu_open());
}

#[test]
fn test_escape_close_skips_restore() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    // A record pointing elsewhere must not be acted on by escape
    ctl.store_mut().save(&record("y"));

    ctl.handle(NavEvent::EscapePressed);

    assert_eq!(current_id(&ctl).as_deref(), Some("x"));
}

// ---------------------------------------------------------------------------
// Enter and selection
// ---------------------------------------------------------------------------

#[test]
fn test_enter_selects_first_filtered_match() {
    let mut ctl = make_controller(make_sales_apps());
    navigate_to(&mut ctl, "crm");
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("sal".to_string()));

    let outcome = ctl.handle(NavEvent::EnterPressed);

    assert_eq!(outcome, Outcome::Selected("sales".to_string()));
    assert_eq!(current_id(&ctl).as_deref(), Some("sales"));
    assert_eq!(ctl.state().mode(), Mode::AppView);
    assert_eq!(ctl.state().search_query(), "");
}

#[test]
fn test_enter_without_query_selects_first_app() {
    let mut ctl = make_controller(make_sales_apps());
    navigate_to(&mut ctl, "crm");
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(
        ctl.handle(NavEvent::EnterPressed),
        Outcome::Selected("sales".to_string())
    );
}

#[test]
fn test_enter_with_no_match_stays_open() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("payroll".to_string()));

    assert_eq!(ctl.handle(NavEvent::EnterPressed), Outcome::Ignored);
    assert_eq!(ctl.state().mode(), Mode::HomeMenu);
    assert_eq!(ctl.state().search_query(), "payroll");
}

#[test]
fn test_app_selected_closes_and_navigates() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("ya".to_string()));

    let outcome = ctl.handle(NavEvent::AppSelected(make_app("y", "Yard")));

    assert_eq!(outcome, Outcome::Selected("y".to_string()));
    assert_eq!(current_id(&ctl).as_deref(), Some("y"));
    assert_eq!(ctl.state().search_query(), "");
    assert!(!ctl.state().menu_open());
}

#[test]
fn test_selection_does_not_persist_new_app() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::AppSelected(make_app("y", "Yard")));

    // Only the next open snapshots the new app
    assert_eq!(ctl.store().load(), Some(record("x")));
}

// ---------------------------------------------------------------------------
// Printable keys and focus
// ---------------------------------------------------------------------------

#[test]
fn test_printable_key_focuses_and_seeds_search() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchChanged("old".to_string()));
    ctl.handle(NavEvent::SearchFocusChanged(false));

    assert_eq!(
        ctl.handle(NavEvent::PrintableKeyPressed('r')),
        Outcome::QueryChanged
    );
    assert_eq!(ctl.state().search_query(), "r");
    assert!(ctl.state().search_focused());
}

#[test]
fn test_printable_key_ignored_when_focused() {
    let mut ctl = make_controller(make_sales_apps());
    ctl.handle(NavEvent::ToggleRequested);
    ctl.handle(NavEvent::SearchFocusChanged(true));
    ctl.handle(NavEvent::SearchChanged("cr".to_string()));

    assert_eq!(
        ctl.handle(NavEvent::PrintableKeyPressed('m')),
        Outcome::Ignored
    );
    assert_eq!(ctl.state().search_query(), "cr");
}

#[test]
fn test_focus_changes() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);

    assert_eq!(
        ctl.handle(NavEvent::SearchFocusChanged(true)),
        Outcome::FocusChanged
    );
    assert!(ctl.state().search_focused());

    ctl.handle(NavEvent::SearchFocusChanged(false));
    assert!(!ctl.state().search_focused());
}

#[test]
fn test_into_parts_returns_collaborators() {
    let mut ctl = make_controller(make_xy());
    ctl.handle(NavEvent::ToggleRequested);

    let (directory, store) = ctl.into_parts();
    assert_eq!(store.load(), Some(record("x")));
    assert_eq!(
        crate::directory::ApplicationDirectory::list_applications(&directory).len(),
        2
    );
}
