//! # Validation Module
//!
//! Input validation utilities for Tipcalc.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keystroke filtering (components)                             │
//! │  ├── sanitize_amount_text: digits + one decimal point                  │
//! │  └── sanitize_count_text: digits only                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: range rules                                     │
//! │  ├── bill ≤ $999,999.99                                                │
//! │  ├── split count in 1..=1000                                           │
//! │  └── tip rate in 0..=100%                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  └── SplitCount / TipRate can only be built from valid values          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_BILL_CENTS, MAX_SPLIT_COUNT, MAX_TIP_RATE_BPS, MIN_SPLIT_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Sanitizers
// =============================================================================

/// Filters free-typed amount text down to digits and a single decimal point.
///
/// ## Rules
/// - Every character that is not an ASCII digit or `.` is dropped
/// - The second and later `.` are dropped, so their digits join the
///   fraction of the first one
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::sanitize_amount_text;
///
/// assert_eq!(sanitize_amount_text("$1,234.50"), "1234.50");
/// assert_eq!(sanitize_amount_text("1.2.3"), "1.23");
/// assert_eq!(sanitize_amount_text("abc"), "");
/// ```
pub fn sanitize_amount_text(raw: &str) -> String {
    let mut seen_decimal = false;
    raw.chars()
        .filter(|&c| match c {
            '0'..='9' => true,
            '.' if !seen_decimal => {
                seen_decimal = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Filters free-typed count text down to ASCII digits.
///
/// ```rust
/// use tipcalc_core::validation::sanitize_count_text;
///
/// assert_eq!(sanitize_count_text("1a2-3"), "123");
/// assert_eq!(sanitize_count_text("4.5"), "45");
/// ```
pub fn sanitize_count_text(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates bill text and returns its value rounded to cents.
///
/// ## Rules
/// - Text must already be sanitized (digits, at most one `.`)
/// - The exact value must not exceed $999,999.99
///
/// ## Keypad Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  buffer "999999.99" + key "9"                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_bill_text("999999.999") ← THIS FUNCTION                      │
/// │       │                                                                 │
/// │       ├── > $999,999.99? → Err(OutOfRange) → key rejected, error haptic│
/// │       │                                                                 │
/// │       └── OK(Money) → buffer and value update                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::validate_bill_text;
///
/// assert_eq!(validate_bill_text("123.5").unwrap().cents(), 12_350);
/// assert_eq!(validate_bill_text("").unwrap().cents(), 0);
/// assert!(validate_bill_text("1000000").is_err());
/// ```
pub fn validate_bill_text(text: &str) -> ValidationResult<Money> {
    let parsed = Money::parse_decimal(text)?;

    if parsed.exceeds(Money::from_cents(MAX_BILL_CENTS)) {
        return Err(ValidationError::OutOfRange {
            field: "bill".to_string(),
            min: 0,
            max: MAX_BILL_CENTS,
        });
    }

    Ok(parsed.rounded())
}

/// Validates a split count.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_SPLIT_COUNT` (1000)
pub fn validate_split_count(count: i64) -> ValidationResult<()> {
    if count < MIN_SPLIT_COUNT as i64 {
        return Err(ValidationError::MustBePositive {
            field: "split_count".to_string(),
        });
    }

    if count > MAX_SPLIT_COUNT as i64 {
        return Err(ValidationError::OutOfRange {
            field: "split_count".to_string(),
            min: MIN_SPLIT_COUNT as i64,
            max: MAX_SPLIT_COUNT as i64,
        });
    }

    Ok(())
}

/// Parses sanitized count text into a valid split count value.
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::parse_split_text;
///
/// assert_eq!(parse_split_text("12").unwrap(), 12);
/// assert_eq!(parse_split_text("007").unwrap(), 7);
/// assert!(parse_split_text("").is_err());
/// assert!(parse_split_text("0").is_err());
/// assert!(parse_split_text("1001").is_err());
/// ```
pub fn parse_split_text(text: &str) -> ValidationResult<u32> {
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "split_count".to_string(),
        });
    }

    let count: u32 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "split_count".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    validate_split_count(count as i64)?;
    Ok(count)
}

/// Validates a tip rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tip_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TIP_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tip_rate".to_string(),
            min: 0,
            max: MAX_TIP_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
