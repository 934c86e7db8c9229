//! Permissive parsing of raw form text.
//!
//! Amounts are typed as free text. Parsing takes the longest leading numeric
//! prefix (`"12500원"` reads as 12500) and anything without one reads as
//! "no amount"; it never reports an error.

use std::num::IntErrorKind;
use std::str::FromStr;

use rust_decimal::Decimal;

use dutchpay_shared::config::MAX_PEOPLE;

/// Largest accepted total magnitude (10^18).
///
/// Larger amounts read as "no amount". The cap keeps every derived sum,
/// including the ceiling surplus, well inside `Decimal` range.
pub const MAX_TOTAL: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Parses a raw amount.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Leading whitespace is skipped and trailing text ignored.
/// Returns `None` for empty text, text without a leading number, or numbers
/// whose magnitude exceeds [`MAX_TOTAL`].
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &text[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &text[frac_start..end];
        pos = end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let exponent = parse_exponent(&bytes[pos..]);

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 8);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }

    let amount = match exponent {
        Some(exp) => {
            normalized.push('e');
            normalized.push_str(exp);
            Decimal::from_scientific(&normalized).ok()
        }
        None => Decimal::from_str(&normalized).ok(),
    }?;

    (amount.abs() <= MAX_TOTAL).then_some(amount)
}

// `e`/`E`, optional sign, at least one digit. Anything else is trailing text.
fn parse_exponent(rest: &[u8]) -> Option<&str> {
    if !matches!(rest.first(), Some(b'e' | b'E')) {
        return None;
    }
    let mut end = 1;
    if matches!(rest.get(1), Some(b'+' | b'-')) {
        end = 2;
    }
    let digits_start = end;
    while end < rest.len() && rest[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    std::str::from_utf8(&rest[1..end]).ok()
}

/// Parses a direct people-count entry, clamping to `1..=MAX_PEOPLE`.
///
/// Unparseable text counts as 1.
#[must_use]
pub fn parse_people_count(raw: &str) -> u32 {
    let text = raw.trim();
    let digits_end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(text.len(), |(i, _)| i);

    match text[..digits_end].parse::<i64>() {
        Ok(n) => u32::try_from(n.clamp(1, i64::from(MAX_PEOPLE))).unwrap_or(MAX_PEOPLE),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => MAX_PEOPLE,
        Err(_) => 1,
    }
}
