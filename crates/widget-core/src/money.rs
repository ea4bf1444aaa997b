//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Mills?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE HALF-CENT PROBLEM                                                  │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    3 × 32.95 − 16.475 = 82.37499999...  → "82.37"  ❌ WRONG!            │
//! │                                                                         │
//! │  In integer cents:                                                      │
//! │    half of 3295 cents = 1647 (or 1648)  → lost half a cent              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Mills (1/1000 of a dollar)                       │
//! │    half of 32950 mills = 16475 mills, exact                             │
//! │    98850 − 16475 = 82375 mills → rounded ONCE → 8238 cents = $82.38     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use widget_core::money::Money;
//!
//! let price = Money::from_cents(3295); // $32.95
//! let pair = price * 2u32;             // $65.90
//! let discounted = pair - price.half(); // $49.425 (not rounded yet)
//!
//! assert_eq!(discounted.mills(), 49_425);
//! assert_eq!(discounted.round_to_cents().cents(), 4943);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Mills in one cent.
const MILLS_PER_CENT: i64 = 10;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in mills (thousandths of a dollar).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts
/// - **Mills, not cents**: Catalog prices are whole cents, so halving any of
///   them stays exact. Rounding to cents happens once, at the very end.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// CatalogEntry.unit_price ──► × quantity ──► Basket.subtotal
///                                                 │
///             Offer.discount ────────────────► − │
///             DeliveryCharges.charge_for ────► + │
///                                                 ▼
///                                   round_to_cents() ──► Basket.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::money::Money;
    ///
    /// let price = Money::from_cents(795); // $7.95
    /// assert_eq!(price.cents(), 795);
    /// assert_eq!(price.mills(), 7950);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MILLS_PER_CENT)
    }

    /// Creates a Money value from mills (thousandths of a dollar).
    #[inline]
    pub const fn from_mills(mills: i64) -> Self {
        Money(mills)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::money::Money;
    ///
    /// let price = Money::from_major_minor(32, 95); // $32.95
    /// assert_eq!(price.cents(), 3295);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_cents(major * 100 - minor)
        } else {
            Money::from_cents(major * 100 + minor)
        }
    }

    /// Returns the exact value in mills.
    #[inline]
    pub const fn mills(&self) -> i64 {
        self.0
    }

    /// Returns the value in whole cents, rounding half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::money::Money;
    ///
    /// assert_eq!(Money::from_mills(82_375).cents(), 8238);
    /// assert_eq!(Money::from_mills(82_374).cents(), 8237);
    /// assert_eq!(Money::from_mills(-82_375).cents(), -8238);
    /// ```
    #[inline]
    pub const fn cents(&self) -> i64 {
        let half = MILLS_PER_CENT / 2;
        if self.0 < 0 {
            -((-self.0 + half) / MILLS_PER_CENT)
        } else {
            (self.0 + half) / MILLS_PER_CENT
        }
    }

    /// Rounds to currency precision (whole cents).
    ///
    /// This is the single rounding step applied when a basket total is
    /// produced. Intermediate sums must stay unrounded.
    #[inline]
    pub const fn round_to_cents(&self) -> Self {
        Money::from_cents(self.cents())
    }

    /// Returns the dollar portion of the rounded value.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.cents() / 100
    }

    /// Returns the cents portion of the rounded value (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.cents() % 100).abs()
    }

    /// Returns half of this amount.
    ///
    /// Exact for any value built from whole cents.
    #[inline]
    pub const fn half(&self) -> Self {
        Money(self.0 / 2)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use widget_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(795); // $7.95
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 2385); // $23.85
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Formats the rounded amount as a plain decimal, e.g. `57.90`.
    ///
    /// This is what the shell prints for `total`; `Display` adds the `$`.
    pub fn to_decimal_string(&self) -> String {
        let (sign, digits) = self.sign_and_digits();
        format!("{}{}", sign, digits)
    }

    /// Sign and unsigned `dollars.cents` of the rounded amount.
    fn sign_and_digits(&self) -> (&'static str, String) {
        let sign = if self.cents() < 0 { "-" } else { "" };
        (sign, format!("{}.{:02}", self.dollars().abs(), self.cents_part()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the rounded amount with a dollar sign, e.g. `$32.95`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, digits) = self.sign_and_digits();
        write!(f, "{}${}", sign, digits)
    }
}

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

/// Multiplication by a basket quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(3295);
        assert_eq!(money.cents(), 3295);
        assert_eq!(money.mills(), 32_950);
        assert_eq!(money.dollars(), 32);
        assert_eq!(money.cents_part(), 95);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(24, 95).cents(), 2495);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(3295)), "$32.95");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::from_mills(16_475)), "$16.48");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(5790).to_decimal_string(), "57.90");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    }

    #[test]
    fn test_display_matches_decimal_string() {
        for mills in [0, 4, 5, 7_950, 16_475, -5_500, -50, 1_234_567] {
            let money = Money::from_mills(mills);
            let decimal = money.to_decimal_string();
            let expected = match decimal.strip_prefix('-') {
                Some(digits) => format!("-${}", digits),
                None => format!("${}", decimal),
            };
            assert_eq!(money.to_string(), expected, "mills = {}", mills);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(250);
        assert_eq!(c.cents(), 1250);
    }

    #[test]
    fn test_half_is_exact_for_cent_values() {
        let red = Money::from_cents(3295);
        assert_eq!(red.half().mills(), 16_475);
        assert_eq!(red.half() + red.half(), red);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Money::from_mills(82_375).round_to_cents().cents(), 8238);
        assert_eq!(Money::from_mills(74_375).round_to_cents().cents(), 7438);
        assert_eq!(Money::from_mills(74_374).round_to_cents().cents(), 7437);
        assert_eq!(Money::from_mills(-16_475).round_to_cents().cents(), -1648);
        assert_eq!(Money::from_mills(4).round_to_cents(), Money::zero());
    }

    #[test]
    fn test_rounding_happens_once() {
        // Rounding the discount first would give 98.85 - 16.48 = 82.37.
        let raw = Money::from_cents(3295) * 3u32 - Money::from_cents(3295).half();
        assert_eq!(raw.round_to_cents().to_decimal_string(), "82.38");
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(3295), Money::from_cents(2495)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 5790);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_serde_transparent_mills() {
        let json = serde_json::to_string(&Money::from_cents(795)).unwrap();
        assert_eq!(json, "7950");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(795));
    }
}
