//! App view rendering: the current application under a navbar.

use crate::app::App;
use crate::colors;
use crate::render::helpers::{render_help_bar, truncate_text};
use crate::widgets;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &[(&str, &str)] = &[("Ctrl+H", "home menu"), ("Ctrl+Q", "quit")];

pub fn render_app_view(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_navbar(f, app, chunks[0]);
    render_current_app(f, app, chunks[1]);

    if let Some(msg) = &app.status_message {
        let status = Paragraph::new(Span::styled(
            msg.as_str(),
            Style::default().fg(colors::SUCCESS),
        ))
        .style(Style::default().bg(colors::SURFACE));
        f.render_widget(status, chunks[2]);
    } else {
        render_help_bar(f, chunks[2], HELP);
    }
}

fn render_navbar(f: &mut Frame, app: &App, area: Rect) {
    let navbar_block = Block::default()
        .borders(Borders::ALL)
        .title(" Homenav ")
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::OUTLINE));

    let mut spans = vec![
        Span::styled("[Ctrl+H] ", Style::default().fg(colors::PRIMARY)),
        Span::styled(
            app.controller.toggle_title(),
            Style::default().fg(colors::ON_SURFACE),
        ),
    ];
    if let Some(current) = app.controller.current_app() {
        spans.push(Span::styled("  |  ", Style::default().fg(colors::OUTLINE)));
        spans.push(Span::styled(
            current.name,
            Style::default()
                .fg(colors::ON_SURFACE)
                .add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(navbar_block), area);
}

fn render_current_app(f: &mut Frame, app: &App, area: Rect) {
    let Some(current) = app.controller.current_app() else {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No application selected",
                Style::default().fg(colors::SUBTEXT),
            )),
            Line::from(Span::styled(
                "Press Ctrl+H to pick one from the home menu",
                Style::default().fg(colors::OUTLINE),
            )),
        ])
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(colors::SURFACE));
        f.render_widget(empty, area);
        return;
    };

    let width = area.width.saturating_sub(12) as usize;
    let label = Style::default().fg(colors::SUBTEXT);
    let value = Style::default().fg(colors::ON_SURFACE);

    let lines = vec![
        Line::from(vec![
            Span::styled("Action  ", label),
            Span::styled(truncate_text(&current.action_id, width), value),
        ]),
        Line::from(vec![
            Span::styled("Icon    ", label),
            Span::styled(widgets::icon_source(current.icon.as_ref(), width), value),
        ]),
        Line::from(vec![
            Span::styled("Id      ", label),
            Span::styled(truncate_text(&current.id, width), value),
        ]),
    ];

    let body_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", current.name))
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::PRIMARY));

    f.render_widget(Paragraph::new(lines).block(body_block), area);
}
