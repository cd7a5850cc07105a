//! Fixed-decimal presentation of monetary doubles.
//!
//! Values are truncated toward zero, never rounded, and only once at the
//! output boundary: sums are accumulated on full-precision values and
//! truncated afterwards.

use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 2^52: from here on every double is an integer.
const MAX_FRACTIONAL_DOUBLE: f64 = 4_503_599_627_370_496.0;

/// Truncates `value` toward zero at `digits` decimal places.
///
/// The cut happens on the shortest decimal form of the double, so a value
/// such as `0.29` (stored as `0.28999…`) stays `0.29` instead of losing a
/// cent. Non-finite values are returned unchanged.
pub fn truncate_fixed(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let truncated = match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(digits, RoundingStrategy::ToZero)
            .to_f64()
            .unwrap_or(value),
        // Doubles this large have no fractional part.
        Err(_) if value.abs() >= MAX_FRACTIONAL_DOUBLE => value,
        Err(_) => {
            let scale = 10f64.powi(digits as i32);
            (value * scale).trunc() / scale
        }
    };

    normalize_zero(truncated)
}

/// Fixed-point text with exactly `digits` decimals, `.` separator and no
/// grouping.
pub fn format_fixed(value: f64, digits: u32) -> String {
    format!("{:.*}", digits as usize, normalize_zero(value))
}

/// `format_fixed(truncate_fixed(value, digits), digits)`.
pub fn format_truncated(value: f64, digits: u32) -> String {
    format_fixed(truncate_fixed(value, digits), digits)
}

// -0.0 would print as "-0.00"
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
