//! Profile tab: appearance settings and application details

use super::{card, card_heading, heading, screen_container, text_dim};
use super::{AppInfo, Screen, ScreenAction};
use crate::ui::style::{StyleInput, Themed};
use crate::ui::widgets;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

pub struct ProfileScreen {
    info: AppInfo,
}

impl ProfileScreen {
    pub fn new(info: AppInfo) -> Self {
        Self { info }
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        themed: &Themed,
        title: &str,
        rows: Vec<(&str, String)>,
    ) {
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block().title(Span::styled(
            format!(" {} ", title),
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", label), dim),
                    Span::styled(value, themed.theme().text()),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Screen for ProfileScreen {
    fn render(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let container = themed.resolve(&StyleInput::Computed(screen_container));
        let block = container.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = widgets::vertical_layout(
            inner,
            vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(0),
            ],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Profile",
                themed.resolve(&StyleInput::Computed(heading)).style(),
            )),
            rows[0],
        );

        // Appearance card gets the toggle hint in the tint color
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let appearance = sheet.block().title(Span::styled(
            " Appearance ",
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let appearance_inner = appearance.inner(rows[2]);
        frame.render_widget(appearance, rows[2]);
        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<14}", "Theme"), dim),
                    Span::styled(theme.name.as_str(), theme.text()),
                ]),
                Line::from(vec![
                    Span::styled("[Enter] ", Style::default().fg(theme.colors.tint)),
                    Span::styled("switch theme", dim),
                ]),
            ]),
            appearance_inner,
        );

        self.render_card(
            frame,
            rows[3],
            themed,
            "About",
            vec![
                ("Version", self.info.version.to_string()),
                ("Config file", display_path(self.info.config_path.as_deref())),
                ("Log file", display_path(self.info.log_path.as_deref())),
            ],
        );

        self.render_card(
            frame,
            rows[4],
            themed,
            "Navigation",
            vec![
                ("Initial tab", self.info.initial_route.clone()),
                ("Hidden tabs", self.info.policy.as_str().to_string()),
            ],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => ScreenAction::ToggleTheme,
            _ => ScreenAction::None,
        }
    }

    fn key_hints(&self) -> &'static str {
        "[Enter] Switch Theme"
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;
    use crate::navigator::MountPolicy;
    use crate::screens::test_support::render_screen;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn info() -> AppInfo {
        AppInfo {
            version: "1.2.3",
            config_path: Some(PathBuf::from("/tmp/spendtab/config.toml")),
            log_path: None,
            initial_route: "Home".into(),
            policy: MountPolicy::KeepWarm,
        }
    }

    #[test]
    fn test_enter_requests_theme_toggle() {
        let mut screen = ProfileScreen::new(info());
        let action = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(action, ScreenAction::ToggleTheme);
    }

    #[test]
    fn test_renders_current_theme_and_info() {
        let screen = ProfileScreen::new(info());

        let dark = render_screen(&screen, ThemeName::Dark, 70, 20);
        assert!(dark.contains("Dark"));
        assert!(dark.contains("1.2.3"));
        assert!(dark.contains("/tmp/spendtab/config.toml"));
        assert!(dark.contains("Kept warm"));

        let light = render_screen(&screen, ThemeName::Light, 70, 20);
        assert!(light.contains("Light"));
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(None), "-");
        assert_eq!(display_path(Some(Path::new("/a/b"))), "/a/b");
    }
}
