//! # Keypad
//!
//! Keys of the on-screen numeric keypad and their layout.
//!
//! ```text
//! ┌─────┬─────┬─────┐
//! │  1  │  2  │  3  │
//! ├─────┼─────┼─────┤
//! │  4  │  5  │  6  │
//! ├─────┼─────┼─────┤
//! │  7  │  8  │  9  │
//! ├─────┼─────┼─────┤
//! │  .  │  0  │  ⌫  │   long-press ⌫ = Clear
//! └─────┴─────┴─────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum Key {
    /// A digit 0-9. Values above 9 are ignored by the bill input.
    Digit(u8),
    Decimal,
    Backspace,
    /// Long press on backspace.
    Clear,
}

/// Label of the backspace key.
pub const BACKSPACE_LABEL: &str = "⌫";

/// Button labels, row by row.
pub const KEYPAD_LAYOUT: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    [".", "0", BACKSPACE_LABEL],
];

impl Key {
    /// Maps a button label to its key.
    ///
    /// ```rust
    /// use tipcalc_core::Key;
    ///
    /// assert_eq!(Key::from_label("7"), Some(Key::Digit(7)));
    /// assert_eq!(Key::from_label("."), Some(Key::Decimal));
    /// assert_eq!(Key::from_label("⌫"), Some(Key::Backspace));
    /// assert_eq!(Key::from_label("x"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            "." => Some(Key::Decimal),
            BACKSPACE_LABEL => Some(Key::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Key::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// The label printed on the key. `Clear` shares the backspace button.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Backspace | Key::Clear => BACKSPACE_LABEL.to_string(),
        }
    }

    /// Every key of the layout, row by row.
    pub fn layout() -> impl Iterator<Item = Key> {
        KEYPAD_LAYOUT
            .into_iter()
            .flatten()
            .filter_map(Key::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_every_label() {
        let keys: Vec<Key> = Key::layout().collect();
        assert_eq!(keys.len(), 12);
        assert_eq!(keys[0], Key::Digit(1));
        assert_eq!(keys[9], Key::Decimal);
        assert_eq!(keys[10], Key::Digit(0));
        assert_eq!(keys[11], Key::Backspace);
    }

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for key in Key::layout() {
            assert_eq!(Key::from_label(&key.label()), Some(key));
        }
    }

    #[test]
    fn test_from_label_rejects_multi_char() {
        assert_eq!(Key::from_label("12"), None);
        assert_eq!(Key::from_label(""), None);
        assert_eq!(Key::from_label("٣"), None);
    }
}
