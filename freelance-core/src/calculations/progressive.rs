//! Marginal-rate taxation over a [`BracketTable`].
//!
//! Each slice of the taxable amount that falls inside a bracket is taxed at
//! that bracket's own rate; nothing is taxed at a rate it has not reached.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use freelance_core::BracketTable;
//! use freelance_core::calculations::compute_progressive_tax;
//!
//! let table = BracketTable::income_tax();
//!
//! // (15000 - 11294) × 11%
//! assert_eq!(compute_progressive_tax(dec!(15000), &table), dec!(407.66));
//! assert_eq!(compute_progressive_tax(dec!(-500), &table), dec!(0));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::BracketTable;
use crate::calculations::common::round_half_up;

/// Computes the tax owed on `taxable_amount` under `brackets`.
///
/// Zero and negative amounts owe nothing. The total is rounded to cents
/// once, after all slices have been summed.
pub fn compute_progressive_tax(
    taxable_amount: Decimal,
    brackets: &BracketTable,
) -> Decimal {
    let mut total = Decimal::ZERO;

    for bracket in brackets {
        if taxable_amount <= bracket.min_income {
            break;
        }

        let upper = bracket
            .max_income
            .map_or(taxable_amount, |max| taxable_amount.min(max));
        total += (upper - bracket.min_income) * bracket.rate;
    }

    let tax = round_half_up(total);
    debug!(taxable_amount = %taxable_amount, tax = %tax, "progressive tax computed");
    tax
}
