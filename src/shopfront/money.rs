//! Currency display.
//!
//! Amounts live as integer minor units everywhere; this module is the only
//! place that turns them into major-unit text. Formatting is done with
//! integer division and remainder so no float ever touches a total.
//!
//! Grouping follows the `en-NG` convention: `,` between thousands, `.`
//! before the fraction.

use crate::model::MinorUnits;

pub const DEFAULT_CURRENCY_GLYPH: &str = "₦";

const MINOR_PER_MAJOR: MinorUnits = 100;

/// Formats with the default glyph, e.g. `200000` -> `₦2,000`.
pub fn format_currency(minor_units: MinorUnits) -> String {
    format_with_glyph(minor_units, DEFAULT_CURRENCY_GLYPH)
}

/// Glyph-prefixed amount with trailing zero fraction digits trimmed,
/// e.g. `150` -> `₦1.5`, `123456` -> `₦1,234.56`.
pub fn format_with_glyph(minor_units: MinorUnits, glyph: &str) -> String {
    let major = minor_units / MINOR_PER_MAJOR;
    let fraction = minor_units % MINOR_PER_MAJOR;

    let mut out = format!("{}{}", glyph, group_thousands(major));
    if fraction != 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Grouped amount with exactly two fraction digits and no glyph,
/// e.g. `350000` -> `3,500.00`. Used for the grand total figure.
pub fn format_amount(minor_units: MinorUnits) -> String {
    format!(
        "{}.{:02}",
        group_thousands(minor_units / MINOR_PER_MAJOR),
        minor_units % MINOR_PER_MAJOR
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
