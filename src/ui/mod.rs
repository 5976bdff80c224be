//! UI rendering for the admin console.
//!
//! - Header with the server URL and signed-in administrator
//! - Body listing users created this session
//! - Status line and key hints at the bottom
//! - The Create User dialog as a centered overlay
//!
//! Every render function receives a `LayoutContext` built from the frame size.

pub mod components;
pub mod create_user_modal;
pub mod layout;
pub mod theme;

pub use create_user_modal::{render_create_user_modal, DIALOG_TITLE};
pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Status, StatusKind};
use theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PENDING, COLOR_SUCCESS,
    COLOR_WARNING,
};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(frame, header, app);
    render_created_list(frame, body, app);
    render_footer(frame, footer, app);

    render_create_user_modal(frame, area, &ctx, &app.dialog, app.focus);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "admin-console",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.server_url), Style::default().fg(COLOR_DIM)),
    ];
    if let Some(ref name) = app.current_user_name {
        spans.push(Span::styled(
            format!("  signed in as {}", name),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_created_list(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if app.created.is_empty() {
        vec![Line::from(Span::styled(
            "No users created yet.",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        app.created
            .iter()
            .map(|name| {
                Line::from(vec![
                    Span::styled("\u{2713} ", Style::default().fg(COLOR_SUCCESS)),
                    Span::raw(name.clone()),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), area.inner(ratatui::layout::Margin::new(1, 1)));
}

fn status_color(status: &Status) -> ratatui::style::Color {
    match status.kind {
        StatusKind::Info => COLOR_DIM,
        StatusKind::Pending => COLOR_PENDING,
        StatusKind::Success => COLOR_SUCCESS,
        StatusKind::Warning => COLOR_WARNING,
        StatusKind::Error => COLOR_ERROR,
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status_line = match app.status {
        Some(ref status) => Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(status_color(status)),
        )),
        None => Line::default(),
    };

    let hints = if app.dialog.is_visible() {
        "Tab/Shift+Tab move \u{00b7} Enter create \u{00b7} Esc cancel \u{00b7} Ctrl+C quit"
    } else {
        "n new user \u{00b7} q quit"
    };

    frame.render_widget(
        Paragraph::new(vec![
            status_line,
            Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        ]),
        area,
    );
}
