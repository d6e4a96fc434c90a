//! Receipts tab: every stored receipt with a detail pane

use super::{card, card_heading, heading, screen_container, text_dim};
use super::{NavParams, Screen, ScreenAction};
use crate::sample;
use crate::types::{format_amount, total_amount, Expense};
use crate::ui::style::{StyleInput, Themed};
use crate::ui::widgets;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ReceiptsScreen {
    receipts: Vec<Expense>,
    selected: usize,
    origin: Option<String>,
}

impl ReceiptsScreen {
    pub fn new() -> Self {
        Self {
            receipts: sample::receipts(),
            selected: 0,
            origin: None,
        }
    }

    pub fn selected(&self) -> Option<&Expense> {
        self.receipts.get(self.selected)
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block().title(Span::styled(
            format!(" All Receipts ({}) ", self.receipts.len()),
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let items: Vec<ListItem> = self
            .receipts
            .iter()
            .map(|r| {
                ListItem::new(widgets::spread_line(
                    vec![
                        Span::styled(format!("{} ", r.icon), Style::default().fg(r.icon_color)),
                        Span::styled(format!("{}  ", r.formatted_date()), dim),
                        Span::raw(r.name.clone()),
                    ],
                    Span::raw(r.formatted_amount()),
                    inner.width,
                ))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.colors.selection_bg)
                .add_modifier(theme.typography.bold),
        );
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block().title(Span::styled(
            " Details ",
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(receipt) = self.selected() else {
            frame.render_widget(
                Paragraph::new("No receipts").style(theme.text_dim()),
                inner,
            );
            return;
        };

        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let amount_color = if receipt.amount < 0.0 {
            theme.colors.accent
        } else {
            theme.colors.success
        };

        let lines = vec![
            Line::styled(receipt.name.clone(), theme.title()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Date      ", dim),
                Span::raw(receipt.formatted_date()),
            ]),
            Line::from(vec![
                Span::styled("Category  ", dim),
                Span::raw(receipt.category),
            ]),
            Line::from(vec![
                Span::styled("Amount    ", dim),
                Span::styled(
                    receipt.formatted_amount(),
                    Style::default()
                        .fg(amount_color)
                        .add_modifier(theme.typography.bold),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for ReceiptsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ReceiptsScreen {
    fn render(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let container = themed.resolve(&StyleInput::Computed(screen_container));
        let block = container.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = widgets::vertical_layout(
            inner,
            vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ],
        );

        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let mut title = vec![Span::styled(
            "Receipts",
            themed.resolve(&StyleInput::Computed(heading)).style(),
        )];
        if let Some(origin) = &self.origin {
            title.push(Span::styled(format!("  · from {}", origin), dim));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), rows[0]);

        let panels = widgets::horizontal_split(rows[2], &[60, 40]);
        self.render_list(frame, panels[0], themed);
        self.render_detail(frame, panels[1], themed);

        let total = widgets::spread_line(
            vec![Span::styled("Total", dim)],
            Span::styled(
                format_amount(total_amount(&self.receipts)),
                themed.theme().title(),
            ),
            rows[3].width,
        );
        frame.render_widget(Paragraph::new(total), rows[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let last = self.receipts.len().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected < last {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.selected = last,
            _ => {}
        }
        ScreenAction::None
    }

    fn key_hints(&self) -> &'static str {
        "[j/k] Navigate  [g/G] First/Last"
    }

    fn on_unmount(&mut self) {
        self.selected = 0;
        self.origin = None;
    }

    fn on_focus(&mut self, params: &NavParams) {
        self.origin = params.origin.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;
    use crate::screens::test_support::render_screen;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut screen = ReceiptsScreen::new();
        screen.handle_key(key('k'));
        assert_eq!(screen.selected, 0);

        for _ in 0..20 {
            screen.handle_key(key('j'));
        }
        assert_eq!(screen.selected, screen.receipts.len() - 1);

        screen.handle_key(key('g'));
        assert_eq!(screen.selected, 0);
        screen.handle_key(key('G'));
        assert_eq!(screen.selected, screen.receipts.len() - 1);
    }

    #[test]
    fn test_unmount_resets_state() {
        let mut screen = ReceiptsScreen::new();
        screen.on_focus(&NavParams { origin: Some("Home".into()) });
        screen.handle_key(key('j'));

        screen.on_unmount();
        assert_eq!(screen.selected, 0);
        assert_eq!(screen.origin, None);
    }

    #[test]
    fn test_renders_origin_and_total() {
        let mut screen = ReceiptsScreen::new();
        screen.on_focus(&NavParams { origin: Some("Home".into()) });

        let text = render_screen(&screen, ThemeName::Light, 90, 20);
        assert!(text.contains("from Home"));
        // -4 + 3 - 1 - 13 - 12
        assert!(text.contains("-$27.00"));
        assert!(text.contains("Corner Market"));
    }

    #[test]
    fn test_detail_follows_selection() {
        let mut screen = ReceiptsScreen::new();
        screen.handle_key(key('G'));
        let name = screen.selected().unwrap().name.clone();

        let text = render_screen(&screen, ThemeName::Dark, 90, 20);
        assert!(text.contains(&name));
    }
}
