//! Screens bound to the navigator's routes
//!
//! Each screen renders its own content area from the theme and the demo
//! data it owns. Screens never draw the tab bar or the status bar.

pub mod analytics;
pub mod home;
pub mod profile;
pub mod receipts;

use crate::navigator::{MountPolicy, RouteDescriptor};
use crate::ui::style::{StyleSheet, Themed};
use crate::ui::theme::ThemeState;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, widgets::Padding, Frame};
use std::path::PathBuf;

pub use analytics::AnalyticsScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use receipts::ReceiptsScreen;

/// Parameters handed to a screen when it gains focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    /// Route that sent the user here, if any
    pub origin: Option<String>,
}

/// Requests a screen makes of the application after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Navigate { route: String, params: NavParams },
    ToggleTheme,
    Flash { message: String, is_error: bool },
}

/// A renderable unit bound to one route
pub trait Screen {
    fn render(&self, frame: &mut Frame, area: Rect, themed: &Themed);

    fn handle_key(&mut self, _key: KeyEvent) -> ScreenAction {
        ScreenAction::None
    }

    /// Keybinding hints shown in the status bar
    fn key_hints(&self) -> &'static str {
        ""
    }

    fn on_mount(&mut self) {}

    fn on_unmount(&mut self) {}

    fn on_focus(&mut self, _params: &NavParams) {}
}

/// Static facts about the running application, shown on the Profile tab
#[derive(Debug, Clone, Default)]
pub struct AppInfo {
    pub version: &'static str,
    pub config_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub initial_route: String,
    pub policy: MountPolicy,
}

/// The application's tabs, in display order
pub fn default_routes(info: AppInfo) -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("Home", "Home", "⌂", HomeScreen::new()),
        RouteDescriptor::new("Receipts", "Receipts", "▤", ReceiptsScreen::new()),
        RouteDescriptor::new("Analytics", "Analytics", "◔", AnalyticsScreen::new()),
        RouteDescriptor::new("Profile", "Profile", "☺", ProfileScreen::new(info)),
    ]
}

// Styles shared by every screen

pub(crate) fn screen_container(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new()
        .fg(theme.colors.text)
        .bg(theme.colors.background)
        .padding(Padding::horizontal(theme.spacing.sm))
}

pub(crate) fn card(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new()
        .fg(theme.colors.text)
        .bg(theme.colors.background)
        .border_fg(theme.colors.border)
        .padding(Padding::horizontal(theme.spacing.xs))
        .margin_bottom(theme.spacing.xxs)
}

pub(crate) fn heading(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new()
        .fg(theme.colors.text)
        .modifier(theme.typography.heading)
}

pub(crate) fn card_heading(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new()
        .fg(theme.colors.text)
        .modifier(theme.typography.bold)
}

pub(crate) fn text_dim(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new().fg(theme.colors.text_dim)
}

pub(crate) fn separator(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new().fg(theme.colors.separator)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Screen;
    use crate::config::ThemeName;
    use crate::ui::style::Themed;
    use crate::ui::theme::ThemeStore;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render a screen into a test terminal and return its text, one line per row
    pub fn render_screen(screen: &dyn Screen, theme: ThemeName, width: u16, height: u16) -> String {
        let store = ThemeStore::new(theme);
        let themed = Themed::new(store.current());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                screen.render(frame, area, &themed)
            })
            .unwrap();
        buffer_text(terminal.backend())
    }

    pub fn buffer_text(backend: &TestBackend) -> String {
        let buffer = backend.buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
