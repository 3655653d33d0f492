//! String formatting utilities for UI rendering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use subtrack_core::round_money;

/// Render an amount with the currency symbol and exactly two decimals.
pub fn money(currency: &str, amount: Decimal) -> String {
    format!("{}{:.2}", currency, round_money(amount))
}

/// Long display form of a date, e.g. `Feb 28, 2023`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// ISO form of a date, e.g. `2023-02-28`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Quote a value for plain `key=value` output when it contains spaces.
pub fn plain_value(s: &str) -> String {
    let flat = single_line(s);
    if flat.contains(char::is_whitespace) || flat.contains('"') || flat.is_empty() {
        format!("\"{}\"", flat.replace('"', "\\\""))
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_pads_to_cents() {
        assert_eq!(money("$", dec!(40)), "$40.00");
        assert_eq!(money("$", dec!(11.583333)), "$11.58");
        assert_eq!(money("€", dec!(0.005)), "€0.01");
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 8).unwrap();
        assert_eq!(display_date(date), "Feb 8, 2023");
        assert_eq!(iso_date(date), "2023-02-08");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("hi", 5), "hi   ");
        assert_eq!(pad_right("hello", 3), "hello");
    }

    #[test]
    fn test_plain_value_quotes_when_needed() {
        assert_eq!(plain_value("Netflix"), "Netflix");
        assert_eq!(plain_value("Netflix Premium"), "\"Netflix Premium\"");
        assert_eq!(plain_value("a\nb"), "\"a b\"");
        assert_eq!(plain_value(""), "\"\"");
    }
}
