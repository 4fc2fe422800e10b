//! Currency formatting for display.
//!
//! Amounts are rounded half away from zero and grouped with commas. KRW and
//! KHR show no decimals, USD shows two.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a KRW amount, e.g. `₩2,456,550`.
///
/// ```
/// use eps_salary_engine::display::format_krw;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_krw(Decimal::from_str("2225534.134").unwrap()), "₩2,225,534");
/// assert_eq!(format_krw(Decimal::from(-245_655)), "-₩245,655");
/// ```
pub fn format_krw(amount: Decimal) -> String {
    with_symbol("₩", amount, 0)
}

/// Formats a USD amount, e.g. `$1,648.54`.
///
/// ```
/// use eps_salary_engine::display::format_usd;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_usd(Decimal::from_str("740.7407407").unwrap()), "$740.74");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    with_symbol("$", amount, 2)
}

/// Formats a KHR amount, e.g. `៛3,050,000`.
pub fn format_khr(amount: Decimal) -> String {
    with_symbol("៛", amount, 0)
}

fn with_symbol(symbol: &str, amount: Decimal, dp: u32) -> String {
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs(), dp))
}

/// Renders a non-negative amount with exactly `dp` decimals and comma grouping.
fn group_thousands(amount: Decimal, dp: u32) -> String {
    let text = format!("{:.*}", dp as usize, amount);
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 4);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
