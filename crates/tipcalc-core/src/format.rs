//! # Currency Formatting
//!
//! US dollar display strings: `$` symbol, comma thousands separators,
//! exactly two fraction digits (`"$1,234.50"`).
//!
//! Locale policy stops here. Everything a user reads about money goes
//! through [`format_currency`]; `Money`'s `Display` is for logs only.

use crate::money::Money;

/// Currency symbol placed before the amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Placeholder shown by an empty bill field.
pub const AMOUNT_PLACEHOLDER: &str = "0.00";

/// Formats money as en-US currency.
///
/// ## Example
/// ```rust
/// use tipcalc_core::format::format_currency;
/// use tipcalc_core::Money;
///
/// assert_eq!(format_currency(Money::from_cents(0)), "$0.00");
/// assert_eq!(format_currency(Money::from_cents(123_456)), "$1,234.56");
/// assert_eq!(format_currency(Money::from_cents(-550)), "-$5.50");
/// ```
pub fn format_currency(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{:02}",
        group_thousands(amount.dollars().unsigned_abs()),
        amount.cents_part()
    )
}

/// Formats a preview of an amount, hiding zero.
///
/// The bill field shows its placeholder rather than `"$0.00"`, so the
/// preview only exists for positive amounts.
///
/// ```rust
/// use tipcalc_core::format::format_nonzero_currency;
/// use tipcalc_core::Money;
///
/// assert_eq!(format_nonzero_currency(Money::zero()), None);
/// assert_eq!(format_nonzero_currency(Money::from_cents(5)).as_deref(), Some("$0.05"));
/// ```
pub fn format_nonzero_currency(amount: Money) -> Option<String> {
    amount.is_positive().then(|| format_currency(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_small() {
        assert_eq!(format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(format_currency(Money::from_cents(99_999)), "$999.99");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(Money::from_cents(100_000)), "$1,000.00");
        assert_eq!(format_currency(Money::from_cents(12_345_678)), "$123,456.78");
        assert_eq!(format_currency(Money::from_cents(99_999_999)), "$999,999.99");
        assert_eq!(format_currency(Money::from_cents(123_456_789_00)), "$123,456,789.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Money::from_cents(-123_456)), "-$1,234.56");
    }

    #[test]
    fn test_format_nonzero_currency() {
        assert_eq!(format_nonzero_currency(Money::zero()), None);
        assert_eq!(format_nonzero_currency(Money::from_cents(-1)), None);
        assert_eq!(
            format_nonzero_currency(Money::from_cents(12_350)).as_deref(),
            Some("$123.50")
        );
    }
}
