//! Common utility functions for status calculations.
//!
//! This module provides the currency rounding shared by every status model
//! and the small ratio helpers used when labelling results.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, which is the usual
/// convention for euro amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// assert_eq!(round_half_up(dec!(70000)).to_string(), "70000.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Always carry two decimals so amounts render as cents.
    rounded.rescale(2);
    rounded
}

/// Converts a ratio into a whole percentage, dropping any fractional part.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::calculations::common::whole_percent;
///
/// assert_eq!(whole_percent(dec!(0.7)).to_string(), "70");
/// assert_eq!(whole_percent(dec!(1.0)).to_string(), "100");
/// assert_eq!(whole_percent(dec!(0.335)).to_string(), "33");
/// ```
pub fn whole_percent(ratio: Decimal) -> Decimal {
    (ratio * Decimal::ONE_HUNDRED).trunc().normalize()
}

/// Returns `true` when `value` lies within `[0, 1]`.
pub fn is_unit_ratio(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}
