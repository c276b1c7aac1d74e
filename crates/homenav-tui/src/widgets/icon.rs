//! Application icon to display string mapping.
//!
//! Terminals can't show the icon image, so tiles get a short badge and the
//! app view prints the image source.

use homenav_core::{AppIcon, Application};

/// Badge shown on a tile: the first letter of the app name, uppercased.
#[must_use]
pub fn icon_badge(app: &Application) -> String {
    app.name
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

/// Source line for the app view, shortened to `max_width` characters.
#[must_use]
pub fn icon_source(icon: Option<&AppIcon>, max_width: usize) -> String {
    let Some(icon) = icon else {
        return "none".to_string();
    };
    let src = icon.display_src();
    if src.chars().count() <= max_width {
        return src;
    }
    let keep = max_width.saturating_sub(3);
    format!("{}...", src.chars().take(keep).collect::<String>())
}
