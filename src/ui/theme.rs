//! Theme definitions for spendtab
//!
//! Provides three built-in themes: Light, Dark, and Terminal.
//! A theme is an immutable snapshot of design tokens (colors, spacing,
//! typography). Switching themes replaces the snapshot as a whole.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};
use std::rc::Rc;

/// Tint of the focused tab, shared by every theme
const TAB_ACTIVE: Color = Color::Rgb(144, 200, 83); // #90c853

/// Chart and highlight accent, shared by every theme
const ACCENT_ORANGE: Color = Color::Rgb(232, 152, 30); // #e8981e

/// Complete set of design tokens
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub name: ThemeName,
    pub colors: Colors,
    pub spacing: Spacing,
    pub typography: Typography,
}

/// Semantic color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    // Base
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,

    // Tints
    pub tint: Color,
    pub tint_inactive: Color,
    pub tab_active: Color,

    // UI elements
    pub border: Color,
    pub separator: Color,
    pub selection_bg: Color,

    // Status
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

/// Spacing scale, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xxs: u16,
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xxs: 0,
            xs: 1,
            sm: 1,
            md: 2,
            lg: 3,
            xl: 4,
        }
    }
}

/// Font weights a terminal can express
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Medium,
    Bold,
}

/// Mapping from font weights and presets to terminal modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub medium: Modifier,
    pub bold: Modifier,
    pub heading: Modifier,
}

impl Typography {
    pub fn weight(&self, weight: FontWeight) -> Modifier {
        match weight {
            FontWeight::Medium => self.medium,
            FontWeight::Bold => self.bold,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            medium: Modifier::empty(),
            bold: Modifier::BOLD,
            heading: Modifier::BOLD,
        }
    }
}

impl ThemeState {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
            ThemeName::Terminal => Self::terminal(),
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            colors: Colors {
                background: Color::Rgb(255, 255, 255),    // #ffffff
                text: Color::Rgb(25, 16, 21),             // #191015
                text_dim: Color::Rgb(86, 78, 74),         // #564e4a
                tint: Color::Rgb(199, 101, 66),           // #c76542
                tint_inactive: Color::Rgb(151, 143, 138), // #978f8a
                tab_active: TAB_ACTIVE,
                border: Color::Rgb(215, 206, 201),        // #d7cec9
                separator: Color::Rgb(230, 228, 224),     // #e6e4e0
                selection_bg: Color::Rgb(241, 239, 237),  // #f1efed
                accent: ACCENT_ORANGE,
                success: Color::Rgb(144, 200, 83),
                error: Color::Rgb(192, 52, 3),            // #c03403
            },
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            colors: Colors {
                background: Color::Rgb(25, 16, 21),       // #191015
                text: Color::Rgb(244, 242, 241),          // #f4f2f1
                text_dim: Color::Rgb(215, 206, 201),      // #d7cec9
                tint: Color::Rgb(199, 101, 66),           // #c76542
                tint_inactive: Color::Rgb(86, 78, 74),    // #564e4a
                tab_active: TAB_ACTIVE,
                border: Color::Rgb(60, 56, 54),           // #3c3836
                separator: Color::Rgb(51, 44, 48),        // #332c30
                selection_bg: Color::Rgb(60, 56, 54),     // #3c3836
                accent: ACCENT_ORANGE,
                success: Color::Rgb(144, 200, 83),
                error: Color::Rgb(222, 96, 71),           // #de6047
            },
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// Terminal theme (uses terminal colors)
    pub fn terminal() -> Self {
        Self {
            name: ThemeName::Terminal,
            colors: Colors {
                background: Color::Reset,
                text: Color::Reset,
                text_dim: Color::DarkGray,
                tint: Color::Cyan,
                tint_inactive: Color::DarkGray,
                tab_active: Color::Green,
                border: Color::DarkGray,
                separator: Color::DarkGray,
                selection_bg: Color::DarkGray,
                accent: Color::Yellow,
                success: Color::Green,
                error: Color::Red,
            },
            spacing: Spacing::default(),
            typography: Typography {
                heading: Modifier::BOLD | Modifier::UNDERLINED,
                ..Typography::default()
            },
        }
    }

    // Style helpers for the application shell

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.colors.text).bg(self.colors.background)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.colors.text_dim).bg(self.colors.background)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .bg(self.colors.background)
            .add_modifier(self.typography.heading)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.colors.border).bg(self.colors.background)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default()
            .fg(self.colors.tint_inactive)
            .bg(self.colors.background)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.colors.tab_active)
            .bg(self.colors.background)
            .add_modifier(self.typography.bold)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.colors.success).bg(self.colors.background)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.colors.error).bg(self.colors.background)
    }
}

/// Owner of the current theme snapshot
///
/// Readers get an `Rc` to the snapshot that was current when they asked;
/// a switch swaps in a new snapshot without touching the old one.
#[derive(Debug)]
pub struct ThemeStore {
    current: Rc<ThemeState>,
}

impl ThemeStore {
    pub fn new(name: ThemeName) -> Self {
        Self {
            current: Rc::new(ThemeState::from_name(name)),
        }
    }

    pub fn current(&self) -> Rc<ThemeState> {
        Rc::clone(&self.current)
    }

    pub fn name(&self) -> ThemeName {
        self.current.name
    }

    /// Replace the snapshot with the named theme
    pub fn switch(&mut self, name: ThemeName) {
        self.current = Rc::new(ThemeState::from_name(name));
    }

    /// Switch to the next built-in theme and return its name
    pub fn toggle(&mut self) -> ThemeName {
        let next = self.name().next();
        self.switch(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let light = ThemeState::from_name(ThemeName::Light);
        assert_eq!(light.colors.background, Color::Rgb(255, 255, 255));

        let dark = ThemeState::from_name(ThemeName::Dark);
        assert_eq!(dark.colors.background, Color::Rgb(25, 16, 21));

        let terminal = ThemeState::from_name(ThemeName::Terminal);
        assert_eq!(terminal.colors.background, Color::Reset);
    }

    #[test]
    fn test_tab_tint_shared_across_palettes() {
        assert_eq!(ThemeState::light().colors.tab_active, TAB_ACTIVE);
        assert_eq!(ThemeState::dark().colors.tab_active, TAB_ACTIVE);
    }

    #[test]
    fn test_typography_weights() {
        let typography = Typography::default();
        assert_eq!(typography.weight(FontWeight::Bold), Modifier::BOLD);
        assert_eq!(typography.weight(FontWeight::Medium), Modifier::empty());
    }

    #[test]
    fn test_switch_replaces_snapshot() {
        let mut store = ThemeStore::new(ThemeName::Light);
        let before = store.current();

        assert_eq!(store.toggle(), ThemeName::Dark);

        // Snapshot taken before the switch is untouched
        assert_eq!(before.name, ThemeName::Light);
        assert_eq!(store.current().name, ThemeName::Dark);
        assert!(!Rc::ptr_eq(&before, &store.current()));
    }
}
