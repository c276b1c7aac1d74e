//! Helper rendering functions shared across views.

use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Truncate text to max length (in chars) with ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// Render a one-line help bar of `(key, description)` pairs.
pub fn render_help_bar(f: &mut Frame, area: Rect, bindings: &[(&str, &str)]) {
    let spans: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled((*key).to_string(), Style::default().fg(colors::PRIMARY)),
                Span::styled(format!(": {desc}  "), Style::default().fg(colors::SUBTEXT)),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE)),
        area,
    );
}
