//! Money and duration formatting utilities for user-friendly display.
//!
//! Amounts are always integer cents and durations always milliseconds; the
//! functions here are the only place they turn into strings.
//!
//! ## Formats
//!
//! - Currency: symbol, thousands separators, two decimals (`$1,234.56`)
//! - Compact currency: one optional decimal with a K/M/B suffix from
//!   $1,000 upwards (`$1.2K`, `$3M`)
//! - Clock: `HH:MM:SS`, hours grow past 99 if needed
//! - Human duration: `45m`, `2h`, `1h 23m` (seconds are dropped)
//!
//! ## Examples
//!
//! ```rust
//! use meetcost::libs::formatter::{format_clock, format_currency, format_duration_human};
//!
//! assert_eq!(format_currency(123456), "$1,234.56");
//! assert_eq!(format_clock(3_725_000), "01:02:05");
//! assert_eq!(format_duration_human(83 * 60_000), "1h 23m");
//! ```

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Formats cents as currency with the default `$` symbol.
pub fn format_currency(cents: u64) -> String {
    format_currency_with(DEFAULT_CURRENCY_SYMBOL, cents)
}

/// Formats cents as currency with an arbitrary symbol prefix.
pub fn format_currency_with(symbol: &str, cents: u64) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;
    format!("{}{}.{:02}", symbol, group_thousands(dollars), remainder)
}

/// Short currency form for large amounts (`$1.2K`); below $1,000 it matches [`format_currency`].
pub fn format_currency_compact(cents: u64) -> String {
    format_currency_compact_with(DEFAULT_CURRENCY_SYMBOL, cents)
}

pub fn format_currency_compact_with(symbol: &str, cents: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(100_000_000_000, "B"), (100_000_000, "M"), (100_000, "K")];

    for (unit_cents, suffix) in UNITS {
        if cents >= unit_cents {
            // Tenths of the unit, rounded half-up.
            let tenths = (cents as u128 * 10 + unit_cents as u128 / 2) / unit_cents as u128;
            let whole = tenths / 10;
            let fraction = tenths % 10;
            return if fraction == 0 {
                format!("{}{}{}", symbol, whole, suffix)
            } else {
                format!("{}{}.{}{}", symbol, whole, fraction, suffix)
            };
        }
    }

    format_currency_with(symbol, cents)
}

/// Formats an hourly rate (`$95.00/hr`).
pub fn format_hourly_rate(cents: u64) -> String {
    format!("{}/hr", format_currency(cents))
}

/// Formats a fractional cent amount (such as a per-minute burn rate) as currency.
pub fn format_fractional_cents(cents: f64) -> String {
    format_fractional_cents_with(DEFAULT_CURRENCY_SYMBOL, cents)
}

pub fn format_fractional_cents_with(symbol: &str, cents: f64) -> String {
    format_currency_with(symbol, cents.max(0.0).round() as u64)
}

/// Formats milliseconds as `HH:MM:SS`.
pub fn format_clock(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats milliseconds as a short human duration (`1h 23m`).
pub fn format_duration_human(ms: u64) -> String {
    let total_minutes = ms / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Parses a dollar amount such as `95`, `95.5`, `$1,200.00` into cents.
///
/// Returns `None` for negative, malformed, or sub-cent input.
pub fn parse_dollars(input: &str) -> Option<u64> {
    let cleaned: String = input.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if fraction.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(fraction)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
