//! Recovery of raw form input.
//!
//! Field widgets hand over text. Anything non-numeric is replaced by a safe
//! default here (0 for amounts, 1 for package bounds) so that no invalid
//! value ever reaches the sequencer or the totals engine.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::MAX_PACKAGE_NUMBER;

/// Parse a quantity, rate or money field.
///
/// Empty or non-numeric input yields 0. Negative values are clamped to 0.
pub fn parse_amount(value: &str) -> Decimal {
    clamp_non_negative(value.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO))
}

/// Clamp a decimal to `>= 0`.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Parse a package bound typed into a from/to field.
///
/// Empty, non-numeric, below-1 or above [`MAX_PACKAGE_NUMBER`] input
/// yields 1.
pub fn parse_package_bound(value: &str) -> u32 {
    parse_package_opt(value).unwrap_or(1)
}

/// Parse a stored package bound, keeping invalid input as `None` so the
/// sequencer can apply its fallback width.
pub fn parse_package_opt(value: &str) -> Option<u32> {
    let value = value.trim();
    let n = match value.parse::<u32>() {
        Ok(n) => n,
        // Number inputs may deliver "12.0"; accept integral decimals.
        Err(_) => {
            let d = value.parse::<Decimal>().ok()?;
            if !d.fract().is_zero() || d.is_sign_negative() {
                return None;
            }
            d.to_u32()?
        }
    };
    (1..=MAX_PACKAGE_NUMBER).contains(&n).then_some(n)
}
