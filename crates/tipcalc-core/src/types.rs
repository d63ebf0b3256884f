//! # Domain Types
//!
//! Core value types used throughout Tipcalc.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TipRate      │   │   SplitCount    │   │   TipResult     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  1..=1000       │   │  tip_amount     │       │
//! │  │  1500 = 15%     │   │  never zero     │   │  total_with_tip │       │
//! │  └─────────────────┘   └─────────────────┘   │  per_person     │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐                                                    │
//! │  │    Feedback     │   Light • Medium • Success • Error                 │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_split_count, validate_tip_rate_bps, ValidationResult};
use crate::{DEFAULT_TIP_RATE_BPS, MAX_SPLIT_COUNT, MIN_SPLIT_COUNT};

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 17.5% is exactly 1750 bps and the
/// tip stays integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipRate(u32);

impl TipRate {
    /// Creates a tip rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipRate(bps)
    }

    /// Creates a validated tip rate from a percentage such as `18.0`.
    ///
    /// ```rust
    /// use tipcalc_core::types::TipRate;
    ///
    /// assert_eq!(TipRate::from_percentage(17.5).unwrap().bps(), 1750);
    /// assert!(TipRate::from_percentage(-1.0).is_err());
    /// assert!(TipRate::from_percentage(250.0).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        if !pct.is_finite() || pct < 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: "tip_rate".to_string(),
                reason: "must be a non-negative number".to_string(),
            });
        }
        let bps = (pct * 100.0).round();
        if bps > u32::MAX as f64 {
            return Err(ValidationError::OutOfRange {
                field: "tip_rate".to_string(),
                min: 0,
                max: crate::MAX_TIP_RATE_BPS as i64,
            });
        }
        let rate = TipRate(bps as u32);
        validate_tip_rate_bps(rate.bps())?;
        Ok(rate)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TipRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate(DEFAULT_TIP_RATE_BPS)
    }
}

/// Shows `"15%"`, `"17.5%"`, `"12.25%"`.
impl fmt::Display for TipRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill.
///
/// ## Invariant
/// Always within `MIN_SPLIT_COUNT..=MAX_SPLIT_COUNT` (1..=1000). There is no
/// way to build a zero, so the per-person division can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(as = "u32")]
pub struct SplitCount(u32);

impl SplitCount {
    /// A party of one.
    pub const ONE: SplitCount = SplitCount(MIN_SPLIT_COUNT);

    /// The largest accepted party.
    pub const MAX: SplitCount = SplitCount(MAX_SPLIT_COUNT);

    /// Creates a validated split count.
    ///
    /// ```rust
    /// use tipcalc_core::types::SplitCount;
    ///
    /// assert_eq!(SplitCount::new(4).unwrap().get(), 4);
    /// assert!(SplitCount::new(0).is_err());
    /// assert!(SplitCount::new(1001).is_err());
    /// ```
    pub fn new(count: u32) -> ValidationResult<Self> {
        validate_split_count(count as i64)?;
        Ok(SplitCount(count))
    }

    /// Returns the raw count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The next count up, or `None` at the cap.
    pub fn checked_increment(&self) -> Option<Self> {
        (self.0 < MAX_SPLIT_COUNT).then(|| SplitCount(self.0 + 1))
    }

    /// The next count down, or `None` at the floor.
    pub fn checked_decrement(&self) -> Option<Self> {
        (self.0 > MIN_SPLIT_COUNT).then(|| SplitCount(self.0 - 1))
    }

    /// Whether more than one person shares the bill.
    #[inline]
    pub const fn is_shared(&self) -> bool {
        self.0 > MIN_SPLIT_COUNT
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::ONE
    }
}

impl TryFrom<u32> for SplitCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        SplitCount::new(count)
    }
}

impl From<SplitCount> for u32 {
    fn from(count: SplitCount) -> Self {
        count.0
    }
}

impl fmt::Display for SplitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tip Result
// =============================================================================

/// Derived tip figures for one bill. Never stored, always recomputed.
///
/// ## Relationships
/// ```text
/// tip_amount       = bill × rate            (rounded to cents)
/// total_with_tip   = bill + tip_amount
/// per_person_total = total_with_tip / split (rounded to cents)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipResult {
    pub tip_amount: Money,
    pub total_with_tip: Money,
    pub per_person_total: Money,
}

impl TipResult {
    /// Computes the tip figures.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::{Money, SplitCount, TipRate, TipResult};
    ///
    /// let result = TipResult::compute(
    ///     Money::from_cents(10_000),
    ///     TipRate::from_bps(2000),
    ///     SplitCount::new(4).unwrap(),
    /// );
    /// assert_eq!(result.tip_amount.cents(), 2000);
    /// assert_eq!(result.total_with_tip.cents(), 12_000);
    /// assert_eq!(result.per_person_total.cents(), 3000);
    /// ```
    pub fn compute(bill: Money, rate: TipRate, split: SplitCount) -> Self {
        let tip_amount = bill.percentage_of(rate);
        let total_with_tip = bill + tip_amount;
        TipResult {
            tip_amount,
            total_with_tip,
            per_person_total: total_with_tip.divide_evenly(split.get()),
        }
    }

    /// Difference between the total and the rounded shares paid back.
    ///
    /// Positive when the shares fall short of the total (someone owes the
    /// extra cents), negative when rounding up overshoots it.
    ///
    /// ```rust
    /// use tipcalc_core::{Money, SplitCount, TipRate, TipResult};
    ///
    /// let result = TipResult::compute(
    ///     Money::from_cents(1000),
    ///     TipRate::zero(),
    ///     SplitCount::new(3).unwrap(),
    /// );
    /// assert_eq!(result.split_remainder(SplitCount::new(3).unwrap()).cents(), 1);
    /// ```
    pub fn split_remainder(&self, split: SplitCount) -> Money {
        self.total_with_tip - self.per_person_total * split.get()
    }
}

// =============================================================================
// Haptic Feedback Kinds
// =============================================================================

/// Intensity tag passed to the [`Haptics`](crate::haptics::Haptics) capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Feedback {
    /// Ordinary key or button press.
    Light,
    /// Destructive action (clearing the bill).
    Medium,
    /// A committed edit.
    Success,
    /// A rejected edit.
    Error,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Light => "light",
            Feedback::Medium => "medium",
            Feedback::Success => "success",
            Feedback::Error => "error",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
