//! Home menu overlay rendering.

use crate::app::App;
use crate::colors;
use crate::render::helpers::{render_help_bar, truncate_text};
use crate::widgets;
use homenav_core::Application;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: usize = 24;
const LINES_PER_TILE: usize = 2;

const HELP: &[(&str, &str)] = &[
    ("type", "search"),
    ("Tab", "focus"),
    ("<>^v", "move"),
    ("Enter", "open"),
    ("Esc", "clear/back"),
    ("Ctrl+H", "back to app"),
    ("Ctrl+Q", "quit"),
];

/// Build spans for one tile (badge and name line, action line).
fn build_tile_spans(
    item: &Application,
    is_selected: bool,
    cell_width: usize,
    accent: Color,
) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
    let badge = format!("[{}] ", widgets::icon_badge(item));
    let name_width = cell_width.saturating_sub(badge.chars().count() + 1);
    let name = truncate_text(&item.name, name_width);

    let (badge_style, name_style, action_style) = if is_selected {
        (
            Style::default()
                .fg(colors::BG)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(colors::ON_SURFACE)
                .bg(colors::SURFACE_HIGH)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(colors::SUBTEXT)
                .bg(colors::SURFACE_HIGH),
        )
    } else {
        (
            Style::default().fg(accent),
            Style::default().fg(colors::ON_SURFACE),
            Style::default().fg(colors::SUBTEXT),
        )
    };

    let line1 = vec![
        Span::styled(badge, badge_style),
        Span::styled(format!("{name:name_width$} "), name_style),
    ];

    let action_width = cell_width.saturating_sub(5);
    let action = truncate_text(&item.action_id, action_width);
    let line2 = vec![
        Span::raw("    "),
        Span::styled(format!("{action:action_width$} "), action_style),
    ];

    (line1, line2)
}

// Cursor column from the query length, bounded by terminal width
#[allow(clippy::cast_possible_truncation)]
fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let focused = state.search_focused();
    let query = state.search_query();

    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Home Menu ")
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(if focused {
            colors::PRIMARY
        } else {
            colors::OUTLINE
        }));

    let input_text = if query.is_empty() {
        Span::styled(
            app.home_menu.search_placeholder.as_str(),
            Style::default().fg(colors::OUTLINE),
        )
    } else {
        Span::styled(query, Style::default().fg(colors::ON_SURFACE))
    };

    f.render_widget(Paragraph::new(input_text).block(search_block), area);

    if focused {
        f.set_cursor_position((area.x + query.chars().count() as u16 + 1, area.y + 1));
    }
}

/// Render the tile grid. Records the column count for highlight movement.
// Grid math: usize indices to u16 terminal coords
#[allow(clippy::cast_possible_truncation)]
fn render_tiles(f: &mut Frame, app: &mut App, area: Rect, fill: Color, accent: Color) {
    let apps = app.controller.filtered_apps();

    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Apps ({}) ", apps.len()))
        .style(Style::default().bg(fill))
        .border_style(Style::default().fg(colors::OUTLINE));

    let inner = grid_block.inner(area);
    f.render_widget(grid_block, area);

    if apps.is_empty() {
        let empty_msg = Paragraph::new(app.home_menu.empty_message.as_str())
            .style(Style::default().fg(colors::SUBTEXT))
            .alignment(Alignment::Center);
        f.render_widget(empty_msg, inner);
        return;
    }

    let columns = (inner.width as usize / CELL_WIDTH).max(1);
    app.grid_columns = columns;
    let cell_width = inner.width as usize / columns;
    let highlighted = app.highlighted.min(apps.len() - 1);

    let total_rows = apps.len().div_ceil(columns);
    let visible_rows = (inner.height as usize / LINES_PER_TILE).max(1);
    let selected_row = highlighted / columns;
    let scroll_offset = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    let mut y = inner.y;
    for row in scroll_offset..total_rows.min(scroll_offset + visible_rows) {
        if y >= inner.y + inner.height {
            break;
        }
        let mut line1_spans: Vec<Span> = Vec::new();
        let mut line2_spans: Vec<Span> = Vec::new();

        for col in 0..columns {
            let idx = row * columns + col;
            if let Some(item) = apps.get(idx) {
                let (cell_line1, cell_line2) =
                    build_tile_spans(item, idx == highlighted, cell_width, accent);
                line1_spans.extend(cell_line1);
                line2_spans.extend(cell_line2);
            }
        }
        f.render_widget(
            Paragraph::new(Line::from(line1_spans)),
            Rect::new(inner.x, y, inner.width, 1),
        );
        if y + 1 < inner.y + inner.height {
            f.render_widget(
                Paragraph::new(Line::from(line2_spans)),
                Rect::new(inner.x, y + 1, inner.width, 1),
            );
        }
        y += LINES_PER_TILE as u16;
    }
}

pub fn render_home_menu(f: &mut Frame, app: &mut App) {
    let (fill, accent) = colors::home_background(app.home_menu.background);
    let bg_block = Block::default().style(Style::default().bg(fill));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_search_bar(f, app, chunks[0]);
    render_tiles(f, app, chunks[1], fill, accent);
    render_help_bar(f, chunks[2], HELP);
}
