//! Analytics tab: category donut chart and top categories

use super::{card, card_heading, heading, screen_container, separator, text_dim};
use super::Screen;
use crate::sample;
use crate::types::{category_shares, format_amount, Category};
use crate::ui::style::{StyleInput, StyleSheet, Themed};
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Paragraph, Wrap,
    },
    Frame,
};
use std::f64::consts::TAU;

/// Inner radius of the donut, as a fraction of the outer radius
const DONUT_HOLE: f64 = 0.45;

/// Categories listed under "Top Categories"
const TOP_CATEGORIES: usize = 4;

pub struct AnalyticsScreen {
    categories: Vec<Category>,
}

impl AnalyticsScreen {
    pub fn new() -> Self {
        Self {
            categories: sample::categories(),
        }
    }

    fn render_chart_card(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let theme = themed.theme();
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = widgets::vertical_layout(
            inner,
            vec![Constraint::Min(3), Constraint::Length(2)],
        );

        // Braille cells are twice as tall as wide, so a square chart is 2:1 in cells
        let side = rows[0].height.min(rows[0].width / 2);
        let chart_area = widgets::centered_rect(side * 2, side, rows[0]);
        let segments = donut_segments(
            &category_shares(&self.categories),
            chart_area.width,
            chart_area.height,
        );

        let categories = &self.categories;
        let chart = Canvas::default()
            .marker(Marker::Braille)
            .background_color(theme.colors.background)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (coords, category) in segments.iter().zip(categories) {
                    ctx.draw(&Points {
                        coords,
                        color: category.color,
                    });
                }
            });
        frame.render_widget(chart, chart_area);

        let legend = themed.resolve(&StyleInput::Computed(text_dim)).style();
        let spans: Vec<Span> = self
            .categories
            .iter()
            .flat_map(|c| {
                [
                    Span::styled("● ", Style::default().fg(c.color)),
                    Span::styled(format!("{}   ", c.name), legend),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
            rows[1],
        );
    }

    fn render_top_categories(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let sheet = themed.resolve(&StyleInput::Computed(card));
        let block = sheet.block().title(Span::styled(
            " Top Categories ",
            themed.resolve(&StyleInput::Computed(card_heading)).style(),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = themed.theme().text();
        let rule = themed.resolve(&StyleInput::Computed(separator)).style();
        let top: Vec<&Category> = self.categories.iter().take(TOP_CATEGORIES).collect();

        let mut lines = Vec::new();
        for (i, category) in top.iter().enumerate() {
            lines.push(widgets::spread_line(
                vec![
                    Span::styled("● ", Style::default().fg(category.color)),
                    Span::styled(category.name, text),
                ],
                Span::styled(format_amount(category.amount), text),
                inner.width,
            ));
            if i < top.len() - 1 {
                lines.push(Line::styled("─".repeat(inner.width as usize), rule));
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for AnalyticsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AnalyticsScreen {
    fn render(&self, frame: &mut Frame, area: Rect, themed: &Themed) {
        let container = themed.resolve(&StyleInput::Computed(screen_container));
        let block = container.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let top_rows = self.categories.len().min(TOP_CATEGORIES) as u16 * 2 + 1;
        let rows = widgets::vertical_layout(
            inner,
            vec![
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(top_rows),
            ],
        );

        let title = themed.resolve_all(&[
            StyleInput::Computed(heading),
            StyleSheet::new().alignment(Alignment::Center).into(),
        ]);
        frame.render_widget(
            Paragraph::new(Span::styled("Analytics", title.style()))
                .alignment(title.alignment_or_left()),
            rows[0],
        );

        self.render_chart_card(frame, rows[2], themed);
        self.render_top_categories(frame, rows[3], themed);
    }
}

/// Split a donut into per-segment sample points
///
/// The unit square is sampled at braille resolution for a `cols` x `rows`
/// cell area. Each point inside the ring is assigned to the segment whose
/// angular range contains it, measured clockwise from twelve o'clock.
/// Returns one point list per share, in the same order.
pub fn donut_segments(shares: &[f64], cols: u16, rows: u16) -> Vec<Vec<(f64, f64)>> {
    let mut segments = vec![Vec::new(); shares.len()];

    let mut bounds = Vec::with_capacity(shares.len());
    let mut acc = 0.0;
    for share in shares {
        acc += share;
        bounds.push(acc);
    }
    if acc <= 0.0 {
        return segments;
    }

    let nx = cols as usize * 2;
    let ny = rows as usize * 4;
    for i in 0..nx {
        let x = -1.0 + (2 * i + 1) as f64 / nx as f64;
        for j in 0..ny {
            let y = -1.0 + (2 * j + 1) as f64 / ny as f64;

            let r = x.hypot(y);
            if !(DONUT_HOLE..=1.0).contains(&r) {
                continue;
            }

            let mut angle = x.atan2(y);
            if angle < 0.0 {
                angle += TAU;
            }
            let position = angle / TAU * acc;

            if let Some(idx) = bounds.iter().position(|b| position < *b) {
                segments[idx].push((x, y));
            }
        }
    }

    segments
}
