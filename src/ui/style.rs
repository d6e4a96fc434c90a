//! Theme-dependent style resolution
//!
//! Screens describe their styles as `StyleInput`s: either a fixed
//! `StyleSheet` or a function of the current theme. `resolve` turns an
//! input into a concrete sheet, `resolve_all` merges several inputs with
//! later keys overriding earlier ones.

use crate::ui::theme::ThemeState;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding},
};
use std::rc::Rc;

/// A shallow set of optional style keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub border_fg: Option<Color>,
    pub modifier: Option<Modifier>,
    pub padding: Option<Padding>,
    pub margin_bottom: Option<u16>,
    pub alignment: Option<Alignment>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn border_fg(mut self, color: Color) -> Self {
        self.border_fg = Some(color);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn margin_bottom(mut self, cells: u16) -> Self {
        self.margin_bottom = Some(cells);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Key-wise merge: every key set in `other` replaces the one in `self`
    pub fn merge(self, other: StyleSheet) -> StyleSheet {
        StyleSheet {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            border_fg: other.border_fg.or(self.border_fg),
            modifier: other.modifier.or(self.modifier),
            padding: other.padding.or(self.padding),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            alignment: other.alignment.or(self.alignment),
        }
    }

    /// Text style carried by this sheet
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if let Some(modifier) = self.modifier {
            style = style.add_modifier(modifier);
        }
        style
    }

    /// Container block: rounded border when a border color is set
    pub fn block(&self) -> Block<'static> {
        let mut block = Block::default().style(self.style());
        if let Some(border_fg) = self.border_fg {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_fg));
        }
        if let Some(padding) = self.padding {
            block = block.padding(padding);
        }
        block
    }

    pub fn alignment_or_left(&self) -> Alignment {
        self.alignment.unwrap_or(Alignment::Left)
    }
}

/// A style value that may depend on the theme
#[derive(Clone, Copy)]
pub enum StyleInput {
    Static(StyleSheet),
    Computed(fn(&ThemeState) -> StyleSheet),
}

impl std::fmt::Debug for StyleInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleInput::Static(sheet) => f.debug_tuple("Static").field(sheet).finish(),
            StyleInput::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<StyleSheet> for StyleInput {
    fn from(sheet: StyleSheet) -> Self {
        StyleInput::Static(sheet)
    }
}

/// Resolve a single input against a theme
pub fn resolve(theme: &ThemeState, input: &StyleInput) -> StyleSheet {
    match input {
        StyleInput::Static(sheet) => *sheet,
        StyleInput::Computed(f) => f(theme),
    }
}

/// Resolve and merge inputs left to right
pub fn resolve_all(theme: &ThemeState, inputs: &[StyleInput]) -> StyleSheet {
    inputs
        .iter()
        .fold(StyleSheet::default(), |acc, input| acc.merge(resolve(theme, input)))
}

/// Theme context for one render pass
///
/// Holds a single snapshot so every style resolved during the pass sees
/// the same tokens, even if the store switches themes in between.
#[derive(Debug, Clone)]
pub struct Themed {
    theme: Rc<ThemeState>,
}

impl Themed {
    pub fn new(theme: Rc<ThemeState>) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn resolve(&self, input: &StyleInput) -> StyleSheet {
        resolve(&self.theme, input)
    }

    pub fn resolve_all(&self, inputs: &[StyleInput]) -> StyleSheet {
        resolve_all(&self.theme, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;

    fn card(theme: &ThemeState) -> StyleSheet {
        StyleSheet::new()
            .bg(theme.colors.background)
            .border_fg(theme.colors.border)
            .margin_bottom(theme.spacing.md)
    }

    #[test]
    fn test_static_input_is_unchanged() {
        let sheet = StyleSheet::new().fg(Color::Red).alignment(Alignment::Center);
        let theme = ThemeState::light();
        assert_eq!(resolve(&theme, &StyleInput::Static(sheet)), sheet);
    }

    #[test]
    fn test_computed_input_is_called_with_theme() {
        for name in ThemeName::all() {
            let theme = ThemeState::from_name(*name);
            assert_eq!(resolve(&theme, &StyleInput::Computed(card)), card(&theme));
        }
    }

    #[test]
    fn test_later_input_overrides_shared_keys() {
        let theme = ThemeState::dark();
        let a = StyleInput::Static(StyleSheet::new().fg(Color::Red).margin_bottom(1));
        let b = StyleInput::Static(StyleSheet::new().fg(Color::Blue));

        let merged = resolve_all(&theme, &[a, b]);
        assert_eq!(merged.fg, Some(Color::Blue));
        // Keys only set by the earlier input survive
        assert_eq!(merged.margin_bottom, Some(1));
    }

    #[test]
    fn test_merge_mixes_static_and_computed() {
        let theme = ThemeState::light();
        let merged = resolve_all(
            &theme,
            &[
                StyleInput::Computed(card),
                StyleSheet::new().border_fg(Color::Green).into(),
            ],
        );

        assert_eq!(merged.border_fg, Some(Color::Green));
        assert_eq!(merged.bg, Some(theme.colors.background));
    }

    #[test]
    fn test_resolve_all_empty_is_default() {
        assert_eq!(resolve_all(&ThemeState::light(), &[]), StyleSheet::default());
    }

    #[test]
    fn test_sheet_style_carries_colors_and_modifier() {
        let style = StyleSheet::new()
            .fg(Color::Red)
            .modifier(Modifier::BOLD)
            .style();
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_themed_keeps_its_snapshot() {
        let themed = Themed::new(Rc::new(ThemeState::dark()));
        assert_eq!(themed.theme().name, ThemeName::Dark);
        assert_eq!(
            themed.resolve(&StyleInput::Computed(card)),
            card(&ThemeState::dark())
        );
    }
}
