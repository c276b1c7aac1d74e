//! Search filter for the home menu.
//!
//! Narrows the application list with a case-insensitive substring match on
//! the display name. Matches keep directory order; nothing is ranked.

use homenav_types::Application;

/// Filter `apps` down to those whose name contains `query`, ignoring case.
///
/// An empty query returns every application. Returns references to avoid
/// cloning the directory list on every keystroke.
#[must_use]
pub fn filter<'a>(apps: &'a [Application], query: &str) -> Vec<&'a Application> {
    if query.is_empty() {
        return apps.iter().collect();
    }

    let needle = query.to_lowercase();
    apps.iter()
        .filter(|app| name_matches(&app.name, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
