//! Rendering amounts and dates for display.

use crate::config::{CurrencyConfig, DisplayConfig};
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::warn;

/// Format an amount as currency.
///
/// With the default configuration this matches US dollar formatting.
///
/// ```rust
/// use freelance_ledger::config::CurrencyConfig;
/// use freelance_ledger::format::format_currency;
///
/// let usd = CurrencyConfig::default();
/// assert_eq!(format_currency(32500.0, &usd), "$32,500.00");
/// assert_eq!(format_currency(-5.0, &usd), "-$5.00");
/// ```
pub fn format_currency(amount: f64, currency: &CurrencyConfig) -> String {
    let fixed = format!("{:.*}", currency.decimal_places, amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    // Rounding can turn a tiny negative amount into zero; no "-$0.00".
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(fixed.len() + currency.symbol.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&currency.symbol);
    out.push_str(&group_thousands(integer, currency.thousands_separator));
    if let Some(fraction) = fraction {
        out.push(currency.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a payment date, e.g. `Jan 15, 2025` with the default pattern.
///
/// An invalid pattern falls back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, config: &DisplayConfig) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&config.date_format)).is_err() {
        warn!(pattern = %config.date_format, "invalid date format, using ISO");
        return date.to_string();
    }
    out
}
