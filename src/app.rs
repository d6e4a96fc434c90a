//! Application state and event handling
//!
//! This is the core of spendtab, managing:
//! - The tab navigator and the active screen
//! - The current theme snapshot and theme switching
//! - Keyboard handling, popups and flash messages
//! - Deciding when the next frame has to be drawn

use crate::config::Config;
use crate::navigator::{MountPolicy, TabNavigator};
use crate::screens::{self, AppInfo, ScreenAction};
use crate::ui::theme::ThemeStore;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long a flash message stays visible
const FLASH_TIMEOUT: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub navigator: TabNavigator,
    pub themes: ThemeStore,
    pub config: Config,

    /// Where theme changes are persisted; `None` keeps them in memory
    pub config_path: Option<PathBuf>,

    pub popup: PopupState,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    needs_redraw: bool,
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Error { title: String, message: String },
}

impl App {
    /// Create a new App instance
    ///
    /// Fails when the configured initial route does not exist.
    pub fn new(config: Config, config_path: Option<PathBuf>, log_path: Option<PathBuf>) -> Result<Self> {
        let policy = if config.keep_inactive_mounted {
            MountPolicy::KeepWarm
        } else {
            MountPolicy::UnmountInactive
        };

        let info = AppInfo {
            version: env!("CARGO_PKG_VERSION"),
            config_path: config_path.clone(),
            log_path,
            initial_route: config.initial_route.clone(),
            policy,
        };

        let navigator = TabNavigator::new(
            screens::default_routes(info),
            Some(config.initial_route.as_str()),
            policy,
        )
        .context("Invalid navigation configuration")?;

        Ok(Self {
            should_quit: false,
            navigator,
            themes: ThemeStore::new(config.theme),
            config,
            config_path,
            popup: PopupState::None,
            flash_message: None,
            needs_redraw: true,
        })
    }

    /// Whether the next loop iteration has to draw a frame
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.navigator.needs_render()
    }

    /// Force a redraw, e.g. after a terminal resize
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Draw a frame if anything changed since the last one
    ///
    /// Returns whether a frame was drawn.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<bool> {
        if !self.needs_redraw() {
            return Ok(false);
        }
        terminal
            .draw(|frame| crate::ui::render(frame, self))
            .context("Failed to draw frame")?;
        self.needs_redraw = false;
        Ok(true)
    }

    /// Drop the flash message once it has been shown long enough
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed() >= FLASH_TIMEOUT {
                self.flash_message = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.needs_redraw = true;

        match self.popup {
            PopupState::Error { .. } => {
                // Any key dismisses the error
                self.popup = PopupState::None;
                Ok(())
            }
            PopupState::None => self.handle_normal_key(key),
        }
    }

    /// Handle key in normal state
    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(name) = self.navigator.name_at(idx) {
                    self.press(name);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.navigator.select_next(),
            KeyCode::BackTab | KeyCode::Left => self.navigator.select_prev(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {
                let action = self.navigator.active_screen_mut().handle_key(key);
                self.apply_action(action)?;
            }
        }
        Ok(())
    }

    /// Press a tab by route name
    ///
    /// An unknown route is a configuration fault: it is logged and shown
    /// to the user, and the active tab stays as it was.
    pub fn press(&mut self, route: &str) {
        if let Err(e) = self.navigator.press(route) {
            self.report_fault(e);
        }
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate { route, params } => {
                if let Err(e) = self.navigator.navigate(&route, params) {
                    self.report_fault(e);
                }
            }
            ScreenAction::ToggleTheme => self.toggle_theme(),
            ScreenAction::Flash { message, is_error } => self.show_flash(&message, is_error),
        }
        Ok(())
    }

    /// Keep config changes in memory for this session only
    ///
    /// The Profile tab still shows the file the config came from.
    pub fn session_only(mut self) -> Self {
        self.config_path = None;
        self
    }

    /// Switch to the next theme and persist the choice
    ///
    /// A failed save keeps the new theme for this session and reports the
    /// error in a popup.
    pub fn toggle_theme(&mut self) {
        let name = self.themes.toggle();
        log::info!("theme switched to {}", name.as_str());

        self.config.theme = name;
        self.navigator.request_render();

        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        };
        if let Err(e) = saved {
            log::error!("failed to save config: {:#}", e);
            self.show_error("Save Failed", &format!("{:#}", e));
        } else {
            self.show_flash(&format!("Theme: {}", name.as_str()), false);
        }
    }

    fn report_fault(&mut self, error: crate::error::NavError) {
        log::error!("navigation fault: {}", error);
        self.show_error("Configuration Error", &error.to_string());
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.popup = PopupState::Error {
            title: title.into(),
            message: message.into(),
        };
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;
    use crate::navigator::Lifecycle;
    use crate::screens::test_support::buffer_text;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default(), None, None).unwrap()
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 40)).unwrap()
    }

    #[test]
    fn test_starts_on_configured_route() {
        let config = Config {
            initial_route: "Analytics".into(),
            ..Config::default()
        };
        let app = App::new(config, None, None).unwrap();
        assert_eq!(app.navigator.active_route(), "Analytics");
    }

    #[test]
    fn test_unknown_initial_route_fails_fast() {
        let config = Config {
            initial_route: "Settings".into(),
            ..Config::default()
        };
        assert!(App::new(config, None, None).is_err());
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        for (c, name) in [('1', "Home"), ('2', "Receipts"), ('3', "Analytics"), ('4', "Profile")] {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
            assert_eq!(app.navigator.active_route(), name);
        }

        // No fifth tab
        app.handle_key(key(KeyCode::Char('5'))).unwrap();
        assert_eq!(app.navigator.active_route(), "Profile");
        assert_eq!(app.popup, PopupState::None);
    }

    #[test]
    fn test_arrow_keys_cycle_tabs() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.navigator.active_route(), "Profile");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.navigator.active_route(), "Home");
    }

    #[test]
    fn test_unknown_route_press_signals_fault() {
        let mut app = app();
        app.press("Analytics");
        assert_eq!(app.navigator.active_route(), "Analytics");

        app.press("Unknown");
        assert_eq!(app.navigator.active_route(), "Analytics");
        assert!(matches!(app.popup, PopupState::Error { .. }));

        // Any key dismisses the popup without acting on the key
        app.handle_key(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.popup, PopupState::None);
        assert_eq!(app.navigator.active_route(), "Analytics");
    }

    #[test]
    fn test_theme_toggle_keeps_routes_and_active_tab() {
        let mut app = app();
        app.press("Receipts");
        let routes = app.navigator.route_names();

        app.handle_key(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.themes.name(), ThemeName::Dark);
        assert_eq!(app.config.theme, ThemeName::Dark);
        assert_eq!(app.navigator.route_names(), routes);
        assert_eq!(app.navigator.active_route(), "Receipts");
    }

    #[test]
    fn test_theme_toggle_persists_when_path_known() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(Config::default(), Some(path.clone()), None).unwrap();

        app.toggle_theme();
        assert_eq!(Config::load_from(&path).unwrap().theme, ThemeName::Dark);
    }

    #[test]
    fn test_theme_save_failure_keeps_session_running() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");
        let mut app = App::new(Config::default(), Some(path), None).unwrap();

        assert!(app.handle_key(key(KeyCode::Char('t'))).is_ok());
        assert!(!app.should_quit);
        assert_eq!(app.themes.name(), ThemeName::Dark);
        match &app.popup {
            PopupState::Error { title, .. } => assert_eq!(title, "Save Failed"),
            other => panic!("expected error popup, got {:?}", other),
        }

        // The popup is dismissed like any other error
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.popup, PopupState::None);
    }

    #[test]
    fn test_session_only_shows_config_path_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(Config::default(), Some(path.clone()), None)
            .unwrap()
            .session_only();

        app.toggle_theme();
        assert!(!path.exists());

        app.press("Profile");
        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(buffer_text(terminal.backend()).contains(&path.display().to_string()));
    }

    #[test]
    fn test_profile_enter_toggles_theme() {
        let mut app = app();
        app.press("Profile");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.themes.name(), ThemeName::Dark);
    }

    #[test]
    fn test_see_all_opens_receipts_from_home() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.navigator.active_route(), "Receipts");
        assert_eq!(app.navigator.lifecycle("Home"), Some(Lifecycle::Unmounted));

        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();
        assert!(buffer_text(terminal.backend()).contains("from Home"));
    }

    #[test]
    fn test_scan_shows_flash() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s'))).unwrap();
        let (message, is_error, _) = app.flash_message.clone().unwrap();
        assert!(message.contains("camera"));
        assert!(is_error);
    }

    #[test]
    fn test_draw_only_when_needed() {
        let mut app = app();
        let mut terminal = terminal();

        assert!(app.draw(&mut terminal).unwrap());
        assert!(!app.draw(&mut terminal).unwrap());

        app.handle_key(key(KeyCode::Char('3'))).unwrap();
        assert!(app.draw(&mut terminal).unwrap());
        assert!(!app.draw(&mut terminal).unwrap());
    }

    #[test]
    fn test_home_frame_shows_expenses() {
        let mut app = app();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("-$13.00"));
        assert!(text.contains("-$12.00"));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }
}
