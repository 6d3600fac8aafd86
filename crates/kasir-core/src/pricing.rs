//! # Pricing Calculator
//!
//! Pure line/cart total computation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Data Flow                                │
//! │                                                                     │
//! │  unit_price × quantity ──► subtotal                                 │
//! │  subtotal × rate (if taxable) ──► tax                               │
//! │  subtotal + tax ──► total                                           │
//! │                                                                     │
//! │  Σ over line items ──► CartTotals                                   │
//! │                                                                     │
//! │  Deterministic, no side effects. The backend repeats this math      │
//! │  with authority; the client copy exists so totals update the        │
//! │  instant the cashier touches the cart.                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here beyond the integer tax rounding in
//! [`Money::calculate_tax`]; currency formatting is a display concern.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TaxRate;

/// Rates of 100% or more are outside the domain; tax is a fraction of the
/// subtotal, never a multiple.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Computed Totals
// =============================================================================

/// Derived pricing for a single line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Derived pricing for the whole cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes subtotal, tax and total for one line.
///
/// ## Contract
/// - `subtotal = unit_price × quantity`
/// - `tax = is_taxable ? subtotal × rate : 0`
/// - `total = subtotal + tax`
///
/// ## Errors
/// `CoreError::InvalidArgument` when `unit_price` is negative, `quantity`
/// is below 1 (callers enforce quantity >= 1; zero never reaches pricing),
/// or `rate` is 100% or more.
pub fn compute_line(
    unit_price: Money,
    quantity: i64,
    is_taxable: bool,
    rate: TaxRate,
) -> CoreResult<LineTotals> {
    if unit_price.is_negative() {
        return Err(CoreError::invalid_argument(
            "unit_price",
            "must not be negative",
        ));
    }
    if quantity < 1 {
        return Err(CoreError::invalid_argument("quantity", "must be at least 1"));
    }
    if rate.bps() >= MAX_TAX_RATE_BPS {
        return Err(CoreError::invalid_argument(
            "tax_rate",
            format!("must be below {} bps", MAX_TAX_RATE_BPS),
        ));
    }

    Ok(line_totals(unit_price, quantity, is_taxable, rate))
}

/// The infallible core of [`compute_line`], for inputs already validated by
/// construction (line items inside a [`crate::cart::Cart`]).
pub(crate) fn line_totals(
    unit_price: Money,
    quantity: i64,
    is_taxable: bool,
    rate: TaxRate,
) -> LineTotals {
    let subtotal = unit_price.multiply_quantity(quantity);
    let tax = if is_taxable {
        subtotal.calculate_tax(rate)
    } else {
        Money::zero()
    };

    LineTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Sums line totals across the cart. An empty cart yields all zeros.
pub fn compute_cart(items: &[LineItem]) -> CartTotals {
    let mut totals = CartTotals::default();
    for item in items {
        let line = item.totals();
        totals.subtotal += line.subtotal;
        totals.tax += line.tax;
        totals.total += line.total;
    }
    totals
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    #[test]
    fn test_taxable_line() {
        let line = compute_line(rp(10_000), 2, true, TaxRate::from_bps(1000)).unwrap();
        assert_eq!(line.subtotal, rp(20_000));
        assert_eq!(line.tax, rp(2_000));
        assert_eq!(line.total, rp(22_000));
    }

    #[test]
    fn test_non_taxable_line_ignores_rate() {
        let line = compute_line(rp(5_000), 3, false, TaxRate::from_bps(1000)).unwrap();
        assert_eq!(line.subtotal, rp(15_000));
        assert_eq!(line.tax, Money::zero());
        assert_eq!(line.total, rp(15_000));
    }

    #[test]
    fn test_total_always_subtotal_plus_tax() {
        // p*q + p*q*r for a spread of inputs
        for (price, qty, bps) in [(1, 1, 0), (999, 7, 1100), (12_500, 3, 1000), (0, 5, 2500)] {
            let line = compute_line(rp(price), qty, true, TaxRate::from_bps(bps)).unwrap();
            assert_eq!(line.subtotal, rp(price * qty));
            assert_eq!(line.total, line.subtotal + line.tax);
        }
    }

    #[test]
    fn test_idempotent() {
        let a = compute_line(rp(10_000), 2, true, TaxRate::from_bps(1000)).unwrap();
        let b = compute_line(rp(10_000), 2, true, TaxRate::from_bps(1000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(compute_line(rp(-1), 1, true, TaxRate::zero()).is_err());
        assert!(compute_line(rp(100), 0, true, TaxRate::zero()).is_err());
        assert!(compute_line(rp(100), -3, true, TaxRate::zero()).is_err());
        assert!(compute_line(rp(100), 1, true, TaxRate::from_bps(10_000)).is_err());
        // 99.99% is still in-domain
        assert!(compute_line(rp(100), 1, true, TaxRate::from_bps(9_999)).is_ok());
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = compute_cart(&[]);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_mixed_cart_scenario() {
        // A: Rp10.000 × 2, taxable at 10% ── B: Rp5.000 × 1, non-taxable
        let items = vec![
            LineItem::for_test(1, "Nasi Goreng", rp(10_000), 2, true, TaxRate::from_bps(1000)),
            LineItem::for_test(2, "Es Teh", rp(5_000), 1, false, TaxRate::zero()),
        ];

        let totals = compute_cart(&items);
        assert_eq!(totals.subtotal, rp(25_000));
        assert_eq!(totals.tax, rp(2_000));
        assert_eq!(totals.total, rp(27_000));
    }
}
