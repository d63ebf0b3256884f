//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Splitting a bill:                                                      │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                         │
//! │    We KNOW we lost 1 cent, and report it as the split remainder        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::money::Money;
//!
//! let bill = Money::from_cents(4250); // $42.50
//! let total = bill + Money::from_cents(850);
//! assert_eq!(total.cents(), 5100);
//!
//! // Keypad text is parsed exactly, never through f64
//! let parsed = Money::parse_decimal("42.5").unwrap();
//! assert_eq!(parsed.rounded(), bill);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::TipRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic never has to special-case a subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  keypad buffer "42.5" ──► parse_decimal ──► bill (4250 cents)          │
/// │                                                 │                       │
/// │                        percentage_of(tip rate) ◄┘                       │
/// │                                 │                                       │
/// │  tip ──► bill + tip ──► divide_evenly(split) ──► per person            │
/// │                                                                         │
/// │  Every value on the summary card flows through this type               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a tip rate, rounding half away from zero to whole cents.
    ///
    /// ## Implementation
    /// Integer math on i128: `(amount * bps ± 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    /// use tipcalc_core::types::TipRate;
    ///
    /// let bill = Money::from_cents(4250);     // $42.50
    /// let tip = bill.percentage_of(TipRate::from_bps(1800)); // 18%
    /// // $42.50 × 18% = $7.65
    /// assert_eq!(tip.cents(), 765);
    /// ```
    pub fn percentage_of(&self, rate: TipRate) -> Money {
        let tip = div_round_half_up(self.0 as i128 * rate.bps() as i128, 10_000);
        Money::from_cents(tip as i64)
    }

    /// Divides the amount into `parts` equal shares, rounded half up to
    /// whole cents.
    ///
    /// A `parts` of zero returns the amount unchanged; callers hold a
    /// [`SplitCount`](crate::types::SplitCount), which is never zero.
    ///
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(12000).divide_evenly(4).cents(), 3000);
    /// assert_eq!(Money::from_cents(1000).divide_evenly(3).cents(), 333);
    /// assert_eq!(Money::from_cents(1000).divide_evenly(6).cents(), 167);
    /// ```
    pub fn divide_evenly(&self, parts: u32) -> Money {
        if parts == 0 {
            return *self;
        }
        Money::from_cents(div_round_half_up(self.0 as i128, parts as i128) as i64)
    }

    /// Renders the amount the way a text field shows a number: no currency
    /// symbol, no grouping, no trailing fraction zeros.
    ///
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1250).to_plain_string(), "12.5");
    /// assert_eq!(Money::from_cents(1200).to_plain_string(), "12");
    /// assert_eq!(Money::from_cents(1207).to_plain_string(), "12.07");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = self.dollars().abs();
        let frac = self.cents_part();
        if frac == 0 {
            format!("{sign}{whole}")
        } else if frac % 10 == 0 {
            format!("{sign}{whole}.{}", frac / 10)
        } else {
            format!("{sign}{whole}.{frac:02}")
        }
    }

    /// Parses plain decimal text exactly.
    ///
    /// ## Rules
    /// - Only ASCII digits and at most one `.` are allowed
    /// - Empty text, or text without any digit (`"."`), parses to zero
    /// - Digits past the cents are kept as rounding information, not dropped
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// let parsed = Money::parse_decimal("0.").unwrap();
    /// assert!(parsed.rounded().is_zero());
    ///
    /// let parsed = Money::parse_decimal("1.005").unwrap();
    /// assert_eq!(parsed.truncated().cents(), 100);
    /// assert_eq!(parsed.rounded().cents(), 101);
    ///
    /// assert!(Money::parse_decimal("1.2.3").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<ParsedDecimal, ValidationError> {
        let (whole_text, frac_text) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole_text) || !all_digits(frac_text) {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "only digits and a single decimal point are allowed".to_string(),
            });
        }

        // Saturate instead of overflowing: anything that large is over every bound
        let whole = whole_text.bytes().fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as i64)
        });

        let frac_digits = frac_text.as_bytes();
        let digit_at = |i: usize| frac_digits.get(i).map_or(0, |b| (b - b'0') as i64);
        let cents = whole
            .saturating_mul(100)
            .saturating_add(digit_at(0) * 10 + digit_at(1));

        let rest = frac_digits.get(2..).unwrap_or(&[]);
        Ok(ParsedDecimal {
            truncated: Money(cents),
            has_sub_cent: rest.iter().any(|&b| b != b'0'),
            rounds_up: rest.first().is_some_and(|&b| b >= b'5'),
        })
    }
}

/// Integer division rounding half away from zero.
fn div_round_half_up(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    }
}

// =============================================================================
// Parsed Decimal
// =============================================================================

/// Exact result of [`Money::parse_decimal`].
///
/// Keeps enough information to tell `999999.99` (allowed) apart from
/// `999999.991` (over the bound) even though both truncate to the same cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDecimal {
    truncated: Money,
    has_sub_cent: bool,
    rounds_up: bool,
}

impl ParsedDecimal {
    /// The value with every digit past the cents dropped.
    pub fn truncated(&self) -> Money {
        self.truncated
    }

    /// The value rounded half up to whole cents.
    pub fn rounded(&self) -> Money {
        if self.rounds_up {
            Money(self.truncated.0.saturating_add(1))
        } else {
            self.truncated
        }
    }

    /// Whether the exact value is strictly greater than `max`.
    pub fn exceeds(&self, max: Money) -> bool {
        self.truncated > max || (self.truncated == max && self.has_sub_cent)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money without grouping.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::format::format_currency`]
/// for anything a user reads.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a head count (reconstructing a split total).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3u32;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_percentage_of() {
        // $100.00 at 20% = $20.00
        let tip = Money::from_cents(10_000).percentage_of(TipRate::from_bps(2000));
        assert_eq!(tip.cents(), 2000);

        // $10.05 at 15% = $1.5075 → $1.51
        let tip = Money::from_cents(1005).percentage_of(TipRate::from_bps(1500));
        assert_eq!(tip.cents(), 151);

        // $0.10 at 25% = $0.025 → $0.03 (half up)
        let tip = Money::from_cents(10).percentage_of(TipRate::from_bps(2500));
        assert_eq!(tip.cents(), 3);
    }

    #[test]
    fn test_percentage_of_max_bill_does_not_overflow() {
        let tip = Money::from_cents(99_999_999).percentage_of(TipRate::from_bps(10_000));
        assert_eq!(tip.cents(), 99_999_999);
    }

    #[test]
    fn test_divide_evenly_rounding() {
        assert_eq!(Money::from_cents(12_000).divide_evenly(4).cents(), 3000);
        assert_eq!(Money::from_cents(1000).divide_evenly(3).cents(), 333);
        assert_eq!(Money::from_cents(1001).divide_evenly(2).cents(), 501);
        assert_eq!(Money::from_cents(500).divide_evenly(1).cents(), 500);
        assert_eq!(Money::from_cents(500).divide_evenly(0).cents(), 500);
    }

    /// $10.00 split three ways loses a cent; the loss is visible, not hidden.
    #[test]
    fn test_division_precision_loss_documented() {
        let ten_dollars = Money::from_cents(1000);
        let share = ten_dollars.divide_evenly(3);
        let reconstructed = share * 3u32;

        assert_eq!(reconstructed.cents(), 999);
        assert_eq!((ten_dollars - reconstructed).cents(), 1);
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::zero().to_plain_string(), "0");
        assert_eq!(Money::from_cents(5).to_plain_string(), "0.05");
        assert_eq!(Money::from_cents(12_350).to_plain_string(), "123.5");
        assert_eq!(Money::from_cents(99_999_999).to_plain_string(), "999999.99");
        assert_eq!(Money::from_cents(-250).to_plain_string(), "-2.5");
    }

    #[test]
    fn test_parse_decimal_plain_values() {
        let value = |s: &str| Money::parse_decimal(s).unwrap().rounded().cents();

        assert_eq!(value(""), 0);
        assert_eq!(value("."), 0);
        assert_eq!(value("0."), 0);
        assert_eq!(value("007"), 700);
        assert_eq!(value("123"), 12_300);
        assert_eq!(value("123.5"), 12_350);
        assert_eq!(value(".75"), 75);
        assert_eq!(value("12."), 1200);
    }

    #[test]
    fn test_parse_decimal_sub_cent_digits() {
        let parsed = Money::parse_decimal("1.234").unwrap();
        assert_eq!(parsed.truncated().cents(), 123);
        assert_eq!(parsed.rounded().cents(), 123);

        let parsed = Money::parse_decimal("1.235").unwrap();
        assert_eq!(parsed.rounded().cents(), 124);

        let parsed = Money::parse_decimal("1.2300").unwrap();
        assert!(!parsed.exceeds(Money::from_cents(123)));
    }

    #[test]
    fn test_parse_decimal_bound_is_exact() {
        let max = Money::from_cents(99_999_999);
        assert!(!Money::parse_decimal("999999.99").unwrap().exceeds(max));
        assert!(!Money::parse_decimal("999999.990").unwrap().exceeds(max));
        assert!(Money::parse_decimal("999999.991").unwrap().exceeds(max));
        assert!(Money::parse_decimal("1000000").unwrap().exceeds(max));
    }

    #[test]
    fn test_parse_decimal_saturates_huge_input() {
        let parsed = Money::parse_decimal("99999999999999999999999999").unwrap();
        assert!(parsed.exceeds(Money::from_cents(99_999_999)));
        assert_eq!(parsed.rounded().cents(), i64::MAX);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("12a").is_err());
        assert!(Money::parse_decimal("1.2.3").is_err());
        assert!(Money::parse_decimal("-5").is_err());
        assert!(Money::parse_decimal(" 5").is_err());
    }
}
