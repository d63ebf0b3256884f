//! # Bill Input
//!
//! The bill amount field and its numeric keypad.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  buffer (String)          value (Money)          shown as              │
//! │  ─────────────────        ─────────────          ───────────────────   │
//! │  ""                       $0.00                  placeholder "0.00"    │
//! │  "0."                     $0.00                  "0."                  │
//! │  "007"                    $7.00                  "007"  ($7.00)        │
//! │  "123.5"                  $123.50                "123.5" ($123.50)     │
//! │                                                                         │
//! │  The buffer keeps in-progress editing states the number cannot hold.   │
//! │  Invariant: buffer parses to ≤ $999,999.99 and has at most one "."     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reporting Changes
//! Every operation returns a [`BillEdit`]. `Changed` carries the new value
//! and is the notification the owner applies to its canonical bill.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{format_nonzero_currency, AMOUNT_PLACEHOLDER};
use crate::haptics::{Haptics, NoopHaptics};
use crate::keypad::Key;
use crate::money::Money;
use crate::types::Feedback;
use crate::validation::{sanitize_amount_text, validate_bill_text};

/// Outcome of an edit on the bill field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum BillEdit {
    /// The value was (re)computed; the owner should take it.
    Changed(Money),
    /// The edit was refused; buffer and value are untouched.
    Rejected,
    /// Nothing to report.
    Unchanged,
}

impl BillEdit {
    /// The new value, if the edit produced one.
    pub fn value(&self) -> Option<Money> {
        match self {
            BillEdit::Changed(value) => Some(*value),
            BillEdit::Rejected | BillEdit::Unchanged => None,
        }
    }
}

/// Editable bill amount.
#[derive(Debug, Clone)]
pub struct BillInput<H = NoopHaptics> {
    buffer: String,
    value: Money,
    haptics: H,
}

impl<H: Haptics> BillInput<H> {
    /// Creates the field, seeded with `initial` when it is positive.
    ///
    /// ```rust
    /// use tipcalc_core::{BillInput, Money, NoopHaptics};
    ///
    /// let input = BillInput::new(Money::from_cents(1250), NoopHaptics);
    /// assert_eq!(input.text(), "12.5");
    ///
    /// let empty = BillInput::new(Money::zero(), NoopHaptics);
    /// assert_eq!(empty.text(), "");
    /// ```
    pub fn new(initial: Money, haptics: H) -> Self {
        let (buffer, value) = if initial.is_positive() {
            (initial.to_plain_string(), initial)
        } else {
            (String::new(), Money::zero())
        };
        BillInput {
            buffer,
            value,
            haptics,
        }
    }

    /// Current numeric value.
    pub fn value(&self) -> Money {
        self.value
    }

    /// Raw editable text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Placeholder shown while the text is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.buffer.is_empty().then_some(AMOUNT_PLACEHOLDER)
    }

    /// Read-only currency preview, present only when the value is positive.
    pub fn formatted_value(&self) -> Option<String> {
        format_nonzero_currency(self.value)
    }

    /// Dispatches a keypad key.
    pub fn press(&mut self, key: Key) -> BillEdit {
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Decimal => self.press_decimal(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
        }
    }

    /// Appends a digit unless the result would exceed the bill bound.
    ///
    /// ```rust
    /// use tipcalc_core::{BillEdit, BillInput, Money, NoopHaptics};
    ///
    /// let mut input = BillInput::new(Money::zero(), NoopHaptics);
    /// input.press_digit(4);
    /// assert_eq!(input.press_digit(2), BillEdit::Changed(Money::from_cents(4200)));
    /// ```
    pub fn press_digit(&mut self, digit: u8) -> BillEdit {
        let Some(ch) = char::from_digit(digit as u32, 10) else {
            return BillEdit::Unchanged;
        };

        self.haptics.trigger(Feedback::Light);

        let mut candidate = self.buffer.clone();
        candidate.push(ch);

        match validate_bill_text(&candidate) {
            Ok(value) => {
                self.buffer = candidate;
                self.value = value;
                BillEdit::Changed(value)
            }
            Err(_) => {
                self.haptics.trigger(Feedback::Error);
                BillEdit::Rejected
            }
        }
    }

    /// Adds the decimal point.
    ///
    /// ## Rules
    /// - Empty buffer: becomes `"0."` and reports zero
    /// - Buffer without a point: the point is appended, value unchanged
    /// - Buffer with a point: no-op
    pub fn press_decimal(&mut self) -> BillEdit {
        self.haptics.trigger(Feedback::Light);

        if self.buffer.is_empty() {
            self.buffer.push_str("0.");
            self.value = Money::zero();
            BillEdit::Changed(self.value)
        } else if !self.buffer.contains('.') {
            self.buffer.push('.');
            BillEdit::Unchanged
        } else {
            BillEdit::Unchanged
        }
    }

    /// Removes the last character and re-parses.
    pub fn backspace(&mut self) -> BillEdit {
        self.haptics.trigger(Feedback::Light);

        self.buffer.pop();
        // Removing characters never raises the value, so the buffer stays valid
        self.value = validate_bill_text(&self.buffer).unwrap_or_default();
        BillEdit::Changed(self.value)
    }

    /// Empties the field.
    pub fn clear(&mut self) -> BillEdit {
        self.haptics.trigger(Feedback::Medium);

        self.buffer.clear();
        self.value = Money::zero();
        BillEdit::Changed(self.value)
    }

    /// Free-text path: sanitizes `raw`, then applies the same bound as the
    /// keypad. Over-bound text is dropped silently.
    ///
    /// ```rust
    /// use tipcalc_core::{BillEdit, BillInput, Money, NoopHaptics};
    ///
    /// let mut input = BillInput::new(Money::zero(), NoopHaptics);
    /// assert_eq!(input.set_text("$1.2.5"), BillEdit::Changed(Money::from_cents(125)));
    /// assert_eq!(input.text(), "1.25");
    /// assert_eq!(input.set_text("2000000"), BillEdit::Rejected);
    /// assert_eq!(input.text(), "1.25");
    /// ```
    pub fn set_text(&mut self, raw: &str) -> BillEdit {
        let sanitized = sanitize_amount_text(raw);

        match validate_bill_text(&sanitized) {
            Ok(value) => {
                self.buffer = sanitized;
                self.value = value;
                BillEdit::Changed(value)
            }
            Err(_) => BillEdit::Rejected,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
