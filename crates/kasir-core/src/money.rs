//! # Money Module
//!
//! Provides the `Money` type for handling rupiah amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Rupiah                                       │
//! │    IDR has no minor unit in retail practice, so Money is simply     │
//! │    a whole number of rupiah. Sums, tax and change are exact.        │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_rupiah(15_000);
//! let line = price * 2;                       // Rp30.000
//! let rounded = line.round_up_to(Money::from_rupiah(50_000));
//! assert_eq!(rounded.rupiah(), 50_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are meaningful (change shortfall while
///   the cashier is still typing, refunds)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, so wire DTOs carry plain numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    #[inline]
    pub const fn from_rupiah(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Zero rupiah.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math in basis points: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds the half-basis-point remainder instead of truncating,
    /// so `Rp9.999` at 10% yields `Rp1.000`, not `Rp999`.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    /// use kasir_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupiah(20_000);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.rupiah(), 2_000);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 to prevent overflow on large amounts
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_rupiah(tax as i64)
    }

    /// Multiplies by a quantity (line total = unit price × quantity).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Rounds up to the next multiple of `denomination`.
    ///
    /// Used by the tender screen's quick-cash buttons: a total of `Rp47.000`
    /// rounds to `Rp50.000` for the 50k denomination, minimising change
    /// making at the drawer.
    ///
    /// Amounts already on a multiple are returned unchanged. A non-positive
    /// denomination returns the amount unchanged (callers pass the fixed
    /// [`crate::tender::QUICK_CASH_DENOMINATIONS`]).
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let total = Money::from_rupiah(47_000);
    /// assert_eq!(total.round_up_to(Money::from_rupiah(50_000)).rupiah(), 50_000);
    /// assert_eq!(total.round_up_to(Money::from_rupiah(1_000)).rupiah(), 47_000);
    /// ```
    pub const fn round_up_to(&self, denomination: Money) -> Money {
        let d = denomination.0;
        if d <= 0 {
            return *self;
        }
        Money(self.0.div_euclid(d) * d + if self.0.rem_euclid(d) > 0 { d } else { 0 })
    }
}

/// Parses free-text cash input from the tender screen.
///
/// Accepts what cashiers actually type: an optional `Rp` prefix, `.` or `,`
/// thousands grouping, surrounding whitespace. Anything else (including a
/// minus sign) is rejected with `None` - the caller treats an unparseable
/// entry as "not ready to process".
///
/// ## Example
/// ```rust
/// use kasir_core::money::parse_cash_input;
///
/// assert_eq!(parse_cash_input("50000").map(|m| m.rupiah()), Some(50_000));
/// assert_eq!(parse_cash_input("Rp 50.000").map(|m| m.rupiah()), Some(50_000));
/// assert_eq!(parse_cash_input("-100"), None);
/// assert_eq!(parse_cash_input("abc"), None);
/// ```
pub fn parse_cash_input(input: &str) -> Option<Money> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("Rp")
        .or_else(|| trimmed.strip_prefix("rp"))
        .unwrap_or(trimmed)
        .trim();

    if trimmed.is_empty() {
        return None;
    }

    let mut digits = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '0'..='9' => digits.push(c),
            // thousands grouping, both local conventions
            '.' | ',' => {}
            _ => return None,
        }
    }

    digits.parse::<i64>().ok().map(Money::from_rupiah)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display in Indonesian retail format: `Rp12.500`, `-Rp500`.
///
/// This is for logs and receipts; the UI formats with its own locale layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();

        // group digits in threes from the right with '.'
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(f, "{}Rp{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupiah() {
        let money = Money::from_rupiah(15_000);
        assert_eq!(money.rupiah(), 15_000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_rupiah(0)), "Rp0");
        assert_eq!(format!("{}", Money::from_rupiah(500)), "Rp500");
        assert_eq!(format!("{}", Money::from_rupiah(12_500)), "Rp12.500");
        assert_eq!(format!("{}", Money::from_rupiah(1_250_000)), "Rp1.250.000");
        assert_eq!(format!("{}", Money::from_rupiah(-20_000)), "-Rp20.000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(10_000);
        let b = Money::from_rupiah(5_000);

        assert_eq!((a + b).rupiah(), 15_000);
        assert_eq!((a - b).rupiah(), 5_000);
        assert_eq!((a * 3).rupiah(), 30_000);
        assert_eq!(a.multiply_quantity(2).rupiah(), 20_000);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // Rp20.000 at 10% = Rp2.000
        let amount = Money::from_rupiah(20_000);
        let tax = amount.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.rupiah(), 2_000);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // Rp9.999 at 10% = Rp999.9 → Rp1.000
        let amount = Money::from_rupiah(9_999);
        let tax = amount.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.rupiah(), 1_000);

        // Rp3 at 11% = Rp0.33 → Rp0
        let amount = Money::from_rupiah(3);
        let tax = amount.calculate_tax(TaxRate::from_bps(1100));
        assert_eq!(tax.rupiah(), 0);
    }

    #[test]
    fn test_round_up_to() {
        let total = Money::from_rupiah(47_000);
        let denom = |d| Money::from_rupiah(d);

        assert_eq!(total.round_up_to(denom(1_000)).rupiah(), 47_000);
        assert_eq!(total.round_up_to(denom(5_000)).rupiah(), 50_000);
        assert_eq!(total.round_up_to(denom(10_000)).rupiah(), 50_000);
        assert_eq!(total.round_up_to(denom(50_000)).rupiah(), 50_000);
        assert_eq!(total.round_up_to(denom(100_000)).rupiah(), 100_000);

        // exact multiple stays put
        assert_eq!(denom(50_000).round_up_to(denom(50_000)).rupiah(), 50_000);
        // degenerate denomination is a no-op
        assert_eq!(total.round_up_to(Money::zero()).rupiah(), 47_000);
    }

    #[test]
    fn test_parse_cash_input() {
        assert_eq!(parse_cash_input("50000").map(|m| m.rupiah()), Some(50_000));
        assert_eq!(parse_cash_input("  50.000 ").map(|m| m.rupiah()), Some(50_000));
        assert_eq!(parse_cash_input("Rp100,000").map(|m| m.rupiah()), Some(100_000));
        assert_eq!(parse_cash_input("0").map(|m| m.rupiah()), Some(0));

        assert_eq!(parse_cash_input(""), None);
        assert_eq!(parse_cash_input("   "), None);
        assert_eq!(parse_cash_input("Rp"), None);
        assert_eq!(parse_cash_input("-100"), None);
        assert_eq!(parse_cash_input("12a00"), None);
        assert_eq!(parse_cash_input("10 000"), None);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_rupiah(-100).is_negative());
        assert_eq!(Money::from_rupiah(-100).abs().rupiah(), 100);
        assert_eq!(Money::default(), Money::zero());
    }
}
