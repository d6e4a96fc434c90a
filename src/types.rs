//! Core data types for spendtab
//!
//! This module defines the shared data structures rendered by the screens
//! and the formatting helpers they use.

use chrono::NaiveDate;
use ratatui::style::Color;

/// A single expense or receipt
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub icon: &'static str,
    pub icon_color: Color,
    pub category: &'static str,
}

impl Expense {
    /// Format the date for display
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Format the amount for display
    pub fn formatted_amount(&self) -> String {
        format_amount(self.amount)
    }
}

/// A spending category with its total
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub amount: f64,
    pub color: Color,
}

/// Twelve months of spending totals, January first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySpending {
    pub values: [u64; 12],
}

impl MonthlySpending {
    pub const LABELS: [&'static str; 12] =
        ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

// Helper functions

/// Format a currency amount with its sign and two decimals ("-$13.00")
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Short axis label for a bar value ("500", "2.2k")
pub fn format_compact(value: u64) -> String {
    if value >= 1000 {
        let thousands = value as f64 / 1000.0;
        if value % 1000 == 0 {
            format!("{}k", value / 1000)
        } else {
            format!("{:.1}k", thousands)
        }
    } else {
        value.to_string()
    }
}

/// Fraction of the total held by each category
///
/// Negative amounts count as zero. An all-zero input yields all-zero shares.
pub fn category_shares(categories: &[Category]) -> Vec<f64> {
    let total: f64 = categories.iter().map(|c| c.amount.max(0.0)).sum();
    categories
        .iter()
        .map(|c| {
            if total > 0.0 {
                c.amount.max(0.0) / total
            } else {
                0.0
            }
        })
        .collect()
}

/// Sum of expense amounts
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &'static str, amount: f64) -> Category {
        Category { name, amount, color: Color::Reset }
    }

    #[test]
    fn test_format_amount_keeps_sign() {
        assert_eq!(format_amount(-13.0), "-$13.00");
        assert_eq!(format_amount(-12.0), "-$12.00");
        assert_eq!(format_amount(12.0), "$12.00");
        assert_eq!(format_amount(4.5), "$4.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(500), "500");
        assert_eq!(format_compact(2200), "2.2k");
        assert_eq!(format_compact(8000), "8k");
    }

    #[test]
    fn test_category_shares() {
        let shares = category_shares(&[category("a", 3.0), category("b", 1.0)]);
        assert_eq!(shares, vec![0.75, 0.25]);

        let zero = category_shares(&[category("a", 0.0), category("b", -2.0)]);
        assert_eq!(zero, vec![0.0, 0.0]);
    }

    #[test]
    fn test_expense_formatting() {
        let expense = Expense {
            id: 1,
            name: "Coffee".into(),
            date: NaiveDate::from_ymd_opt(2021, 6, 10).unwrap(),
            amount: -3.5,
            icon: "☕",
            icon_color: Color::Reset,
            category: "Food",
        };
        assert_eq!(expense.formatted_date(), "10/06/2021");
        assert_eq!(expense.formatted_amount(), "-$3.50");
    }

    #[test]
    fn test_monthly_max() {
        let monthly = MonthlySpending { values: [1, 9, 3, 0, 0, 0, 0, 0, 0, 0, 0, 2] };
        assert_eq!(monthly.max(), 9);
    }
}
