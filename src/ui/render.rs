//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with the tab bar
//! - Active screen content
//! - Popups and overlays
//! - Status bar

use crate::app::{App, PopupState};
use crate::ui::style::Themed;
use crate::ui::theme::ThemeState;
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // One snapshot for the whole pass
    let themed = Themed::new(app.themes.current());
    let theme = themed.theme();

    frame.render_widget(Block::default().style(theme.text()), area);

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, theme, layout[0]);

    app.navigator.render_active(frame, layout[1], &themed);

    render_status_bar(frame, app, theme, layout[2]);

    render_popups(frame, app, theme, area);
}

/// Render header with the tab bar
fn render_header(frame: &mut Frame, app: &App, theme: &ThemeState, area: Rect) {
    let header_block = Block::default()
        .style(theme.text())
        .title(" spendtab ")
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    // Active tab gets the active tint, the rest the inactive tint
    let tab_titles: Vec<Line> = app
        .navigator
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if tab.active {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {} {}", i + 1, tab.icon, tab.label), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.navigator.active_index())
        .divider(" │ ")
        .style(theme.text())
        .highlight_style(theme.tab_active());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, theme: &ThemeState, area: Rect) {
    let screen_hints = app.navigator.active_screen().key_hints();
    let hints = if screen_hints.is_empty() {
        "[1-4] Tabs  [t] Theme  [q] Quit".to_string()
    } else {
        format!("[1-4] Tabs  {}  [t] Theme  [q] Quit", screen_hints)
    };

    widgets::render_status_bar(frame, &hints, theme.name.as_str(), theme, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, theme: &ThemeState, area: Rect) {
    match &app.popup {
        PopupState::None => {}
        PopupState::Error { title, message } => {
            widgets::render_error_popup(frame, title, message, theme, area);
        }
    }

    // Flash message (success/error feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}
