//! Amount formatting for display.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end, and formatting rounds to
//! whole currency units only at the very edge.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats amounts with thousands grouping, no decimal places and a
/// currency-unit suffix (e.g. `3,300원`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    /// Separator inserted between groups of three digits.
    pub group_separator: String,
    /// Label appended after the number.
    pub currency_label: String,
}

impl AmountFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new(group_separator: impl Into<String>, currency_label: impl Into<String>) -> Self {
        Self {
            group_separator: group_separator.into(),
            currency_label: currency_label.into(),
        }
    }

    /// Formats the amount without the currency label.
    #[must_use]
    pub fn format_number(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            return "0".to_string();
        }

        let digits = rounded.abs().trunc().to_string();
        let grouped = group_digits(&digits, &self.group_separator);

        if rounded.is_sign_negative() {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Formats the amount followed by the currency label.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{}", self.format_number(amount), self.currency_label)
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new(",", "원")
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
