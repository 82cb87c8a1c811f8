//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculation
//! stages, including the currency formatting used in trace strings and
//! band labels.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₦";

/// Rounds to the nearest whole unit, with halves rounded towards positive
/// infinity (`floor(value + 0.5)`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_to_whole(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_to_whole(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Formats an amount as whole naira with comma thousands separators.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::format_naira;
///
/// assert_eq!(format_naira(dec!(800000)), "₦800,000");
/// assert_eq!(format_naira(dec!(1234567.5)), "₦1,234,568");
/// assert_eq!(format_naira(dec!(0)), "₦0");
/// ```
pub fn format_naira(value: Decimal) -> String {
    let rounded = round_to_whole(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().to_string();

    format!("{CURRENCY_SYMBOL}{sign}{}", group_thousands(&digits))
}

/// Formats a fractional rate as a percentage without trailing zeros
/// (`0.025` becomes `2.5%`).
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", percent(rate))
}

/// Converts a fractional rate to a normalized percentage number.
pub fn percent(rate: Decimal) -> Decimal {
    (rate * dec!(100)).normalize()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
