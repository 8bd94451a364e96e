//! Amount normalization for statement figures.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a statement amount such as `"1,234.56"`.
///
/// Commas are thousands separators and the period is the decimal point.
/// Empty or malformed input yields zero. Negative amounts in parentheses
/// are not recognized and also yield zero.
pub fn normalize_amount(s: &str) -> Decimal {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let cleaned = trimmed.replace(',', "");
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
