//! Built-in demo data
//!
//! Everything here is a fixture: created on demand, never mutated.

use crate::types::{Category, Expense, MonthlySpending};
use chrono::NaiveDate;
use ratatui::style::Color;

const ORANGE: Color = Color::Rgb(232, 152, 30); // #e8981e

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Expenses shown on the Home screen
pub fn recent_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            name: "Denorel Back".into(),
            date: date(2021, 6, 10),
            amount: -13.0,
            icon: "▭",
            icon_color: ORANGE,
            category: "Spending",
        },
        Expense {
            id: 2,
            name: "Tester".into(),
            date: date(2021, 6, 12),
            amount: -12.0,
            icon: "▤",
            icon_color: ORANGE,
            category: "Business",
        },
    ]
}

/// Every stored receipt, newest first
pub fn receipts() -> Vec<Expense> {
    let mut all = vec![
        Expense {
            id: 3,
            name: "Corner Market".into(),
            date: date(2021, 6, 14),
            amount: -4.0,
            icon: "▦",
            icon_color: Color::Rgb(240, 192, 96),
            category: "Food",
        },
        Expense {
            id: 4,
            name: "Savings Transfer".into(),
            date: date(2021, 6, 15),
            amount: 3.0,
            icon: "▣",
            icon_color: Color::Rgb(144, 200, 83),
            category: "Savings",
        },
        Expense {
            id: 5,
            name: "Stationery".into(),
            date: date(2021, 6, 9),
            amount: -1.0,
            icon: "▧",
            icon_color: Color::Rgb(196, 106, 8),
            category: "Others",
        },
    ];
    all.extend(recent_expenses());
    all.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
    all
}

/// Spending per category for the Analytics screen
pub fn categories() -> Vec<Category> {
    vec![
        Category { name: "Category", amount: 12.0, color: ORANGE },
        Category { name: "Spending", amount: 10.0, color: Color::Rgb(245, 176, 65) },
        Category { name: "Food", amount: 4.0, color: Color::Rgb(240, 192, 96) },
        Category { name: "Business", amount: 2.0, color: Color::Rgb(212, 120, 10) },
        Category { name: "Savings", amount: 3.0, color: Color::Rgb(144, 200, 83) },
        Category { name: "Others", amount: 1.0, color: Color::Rgb(196, 106, 8) },
    ]
}

/// Monthly totals for the Home screen bar chart
pub fn monthly_spending() -> MonthlySpending {
    MonthlySpending {
        values: [500, 2200, 800, 5200, 8500, 7800, 5500, 3200, 6800, 7200, 5800, 6500],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_expenses_are_debits() {
        let expenses = recent_expenses();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|e| e.amount < 0.0));
    }

    #[test]
    fn test_receipts_include_recent_and_are_sorted() {
        let receipts = receipts();
        for expense in recent_expenses() {
            assert!(receipts.iter().any(|r| r.id == expense.id));
        }
        assert!(receipts.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        assert!(receipts().iter().all(|r| r.date != NaiveDate::default()));
    }
}
