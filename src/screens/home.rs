//! Home tab: scan shortcut, recent expenses and monthly spending

use super::{card, card_heading, heading, screen_container, separator, text_dim};
use super::{NavParams, Screen, ScreenAction};
use crate::sample;
use crate::types::{format_compact, Expense, MonthlySpending};
use crate::ui::style::{StyleInput, StyleSheet, Themed};
use crate::ui::theme::{FontWeight, ThemeState};
use crate::ui::widgets;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Rows taken by one expense entry, separator included
const EXPENSE_ROWS: u16 = 3;

pub struct HomeScreen {
    expenses: Vec<Expense>,
    monthly: MonthlySpending,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            expenses: sample::recent_expenses(),
            monthly: sample::monthly_spending(),
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let title = themed.resolve(&StyleInput::Computed(heading));
        let bell = themed.resolve(&StyleInput::Computed(|t| StyleSheet::new().fg(t.colors.text)));

        let line = widgets::spread_line(
            vec![Span::styled("Home", title.style())],
            Span::styled("🔔", bell.style()),
            area.width,
        );
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_scan_card(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let sheet = themed.resolve_all(&[
            StyleInput::Computed(card),
            StyleSheet::new().alignment(Alignment::Center).into(),
        ]);
        let block = sheet.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let theme = themed.theme();
        let ring = Style::default().fg(theme.colors.border);
        let button = Style::default()
            .fg(theme.colors.background)
            .bg(theme.colors.accent);
        let label = themed.resolve(&StyleInput::Computed(scan_label));

        let lines = vec![
            Line::styled("╭───────╮", ring),
            Line::from(vec![
                Span::styled("│ ", ring),
                Span::styled("  ⌗  ", button),
                Span::styled(" │", ring),
            ]),
            Line::styled("╰───────╯", ring),
            Line::styled("Scan Receipt", label.style()),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(sheet.alignment_or_left()),
            inner,
        );
    }

    fn render_expenses_card(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let link = themed.resolve(&StyleInput::Computed(see_all));
        let block = sheet
            .block()
            .title(Span::styled(
                " Recent Expenses ",
                themed.resolve(&StyleInput::Computed(card_heading)).style(),
            ))
            .title(
                Line::from(Span::styled(" See All [a] ", link.style()))
                    .alignment(Alignment::Right),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let rule = themed.resolve(&StyleInput::Computed(separator)).style();
        let name_style = Style::default()
            .fg(theme.colors.text)
            .add_modifier(theme.typography.weight(FontWeight::Medium));
        let amount_style = Style::default()
            .fg(theme.colors.text)
            .add_modifier(theme.typography.weight(FontWeight::Bold));

        let mut lines = Vec::new();
        for (i, expense) in self.expenses.iter().enumerate() {
            lines.push(widgets::spread_line(
                vec![
                    Span::styled(format!("{} ", expense.icon), Style::default().fg(expense.icon_color)),
                    Span::styled(expense.name.clone(), name_style),
                ],
                Span::styled(expense.formatted_amount(), amount_style),
                inner.width,
            ));
            lines.push(Line::styled(format!("  {}", expense.formatted_date()), dim));
            if i < self.expenses.len() - 1 {
                lines.push(Line::styled("─".repeat(inner.width as usize), rule));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_spending_card(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block().title(Span::styled(
            " Monthly Spending ",
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bar_style = Style::default().fg(theme.colors.accent);
        let bars: Vec<Bar> = self
            .monthly
            .values
            .iter()
            .zip(MonthlySpending::LABELS)
            .map(|(value, label)| {
                Bar::default()
                    .value(*value)
                    .label(Line::from(label))
                    .text_value(format_compact(*value))
                    .style(bar_style)
            })
            .collect();

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width(inner.width, bars.len() as u16))
            .bar_gap(1)
            .max(self.monthly.max())
            .value_style(
                Style::default()
                    .fg(theme.colors.background)
                    .bg(theme.colors.accent),
            )
            .label_style(Style::default().fg(theme.colors.text_dim));

        frame.render_widget(chart, inner);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn render(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let container = themed.resolve(&StyleInput::Computed(screen_container));
        let block = container.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let gap = themed
            .resolve(&StyleInput::Computed(card))
            .margin_bottom
            .unwrap_or(0);
        let expenses_height = self.expenses.len() as u16 * EXPENSE_ROWS + 1;
        let rows = widgets::vertical_layout(
            inner,
            vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Length(gap),
                Constraint::Length(expenses_height),
                Constraint::Length(gap),
                Constraint::Min(8),
            ],
        );

        self.render_header(frame, rows[0], themed);
        self.render_scan_card(frame, rows[2], themed);
        self.render_expenses_card(frame, rows[4], themed);
        self.render_spending_card(frame, rows[6], themed);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char('a') => ScreenAction::Navigate {
                route: "Receipts".into(),
                params: NavParams {
                    origin: Some("Home".into()),
                },
            },
            KeyCode::Char('s') => ScreenAction::Flash {
                message: "Receipt scanning needs a camera".into(),
                is_error: true,
            },
            _ => ScreenAction::None,
        }
    }

    fn key_hints(&self) -> &'static str {
        "[a] See All  [s] Scan Receipt"
    }
}

fn scan_label(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new()
        .fg(theme.colors.text)
        .modifier(theme.typography.weight(FontWeight::Medium))
}

fn see_all(theme: &ThemeState) -> StyleSheet {
    StyleSheet::new().fg(theme.colors.tint)
}

/// Widest bar that fits `count` bars with one-cell gaps
fn bar_width(width: u16, count: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    ((width + 1) / count).saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;
    use crate::screens::test_support::render_screen;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_renders_expenses_with_sign() {
        let text = render_screen(&HomeScreen::new(), ThemeName::Light, 60, 40);
        assert!(text.contains("-$13.00"));
        assert!(text.contains("-$12.00"));
        assert!(text.contains("Denorel Back"));
        assert!(text.contains("10/06/2021"));
    }

    #[test]
    fn test_renders_cards() {
        let text = render_screen(&HomeScreen::new(), ThemeName::Dark, 60, 40);
        assert!(text.contains("Home"));
        assert!(text.contains("Scan Receipt"));
        assert!(text.contains("Recent Expenses"));
        assert!(text.contains("Monthly Spending"));
    }

    #[test]
    fn test_renders_in_tiny_area() {
        // Must not panic when the terminal is smaller than the layout
        render_screen(&HomeScreen::new(), ThemeName::Terminal, 10, 5);
    }

    #[test]
    fn test_see_all_navigates_to_receipts() {
        let mut screen = HomeScreen::new();
        let action = screen.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(
            action,
            ScreenAction::Navigate {
                route: "Receipts".into(),
                params: NavParams { origin: Some("Home".into()) },
            }
        );
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(47, 12), 3);
        assert_eq!(bar_width(5, 12), 1);
        assert_eq!(bar_width(10, 0), 1);
    }
}
