//! # Split Selector
//!
//! Chooses how many people share the bill: `−` / `+` buttons and, when
//! enabled, direct editing of the number.
//!
//! ## States
//! ```text
//!              begin_edit (editable only)
//!   ┌─────────┐ ─────────────────────────► ┌─────────┐
//!   │ Display │                            │ Editing │ ◄── edit_text (digits only,
//!   └─────────┘ ◄───────────────────────── └─────────┘      live range filter)
//!     ▲     │      submit / blur
//!     │     │      ├── 1..=1000 → commit, success haptic
//!   +/- ◄───┘      └── otherwise → edit dropped, nothing committed
//! ```
//!
//! The count itself belongs to the owner and is passed in as `current`.
//! Both `+` and edits are capped at 1000; `−` stops at 1.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::haptics::{Haptics, NoopHaptics};
use crate::types::{Feedback, SplitCount};
use crate::validation::{parse_split_text, sanitize_count_text};

/// Outcome of a selector interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum SplitChange {
    /// The owner should adopt this count.
    Changed(SplitCount),
    Unchanged,
}

impl SplitChange {
    pub fn count(&self) -> Option<SplitCount> {
        match self {
            SplitChange::Changed(count) => Some(*count),
            SplitChange::Unchanged => None,
        }
    }
}

/// Selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SplitSelectorOptions {
    /// Allow tapping the number to type a count.
    pub editable: bool,
}

impl Default for SplitSelectorOptions {
    fn default() -> Self {
        Self { editable: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Display,
    Editing { text: String },
}

/// Split count selector.
#[derive(Debug, Clone)]
pub struct SplitSelector<H = NoopHaptics> {
    options: SplitSelectorOptions,
    mode: Mode,
    haptics: H,
}

impl<H: Haptics> SplitSelector<H> {
    pub fn new(options: SplitSelectorOptions, haptics: H) -> Self {
        SplitSelector {
            options,
            mode: Mode::Display,
            haptics,
        }
    }

    pub fn options(&self) -> SplitSelectorOptions {
        self.options
    }

    /// Whether `+` is enabled.
    pub fn can_increment(&self, current: SplitCount) -> bool {
        current.checked_increment().is_some()
    }

    /// Whether `−` is enabled.
    pub fn can_decrement(&self, current: SplitCount) -> bool {
        current.checked_decrement().is_some()
    }

    /// `+` press. A disabled button produces no feedback.
    pub fn increment(&mut self, current: SplitCount) -> SplitChange {
        match current.checked_increment() {
            Some(next) => {
                self.haptics.trigger(Feedback::Light);
                SplitChange::Changed(next)
            }
            None => SplitChange::Unchanged,
        }
    }

    /// `−` press. A disabled button produces no feedback.
    ///
    /// ```rust
    /// use tipcalc_core::{NoopHaptics, SplitChange, SplitCount, SplitSelector};
    ///
    /// let mut selector = SplitSelector::new(Default::default(), NoopHaptics);
    /// assert_eq!(selector.decrement(SplitCount::ONE), SplitChange::Unchanged);
    /// assert!(!selector.can_decrement(SplitCount::ONE));
    /// ```
    pub fn decrement(&mut self, current: SplitCount) -> SplitChange {
        match current.checked_decrement() {
            Some(next) => {
                self.haptics.trigger(Feedback::Light);
                SplitChange::Changed(next)
            }
            None => SplitChange::Unchanged,
        }
    }

    /// Enters edit mode seeded with `current`. Returns whether edit mode
    /// was entered; non-editable selectors ignore the tap.
    pub fn begin_edit(&mut self, current: SplitCount) -> bool {
        if !self.options.editable {
            return false;
        }
        self.haptics.trigger(Feedback::Light);
        self.mode = Mode::Editing {
            text: current.to_string(),
        };
        true
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Text in the edit field, `None` outside edit mode.
    pub fn edit_value(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { text } => Some(text),
            Mode::Display => None,
        }
    }

    /// Live keystroke filter. Keeps only digits and accepts the result if it
    /// is empty or a count in 1..=1000; otherwise the previous text stays.
    ///
    /// ```rust
    /// use tipcalc_core::{NoopHaptics, SplitCount, SplitSelector};
    ///
    /// let mut selector = SplitSelector::new(Default::default(), NoopHaptics);
    /// selector.begin_edit(SplitCount::new(4).unwrap());
    /// selector.edit_text("12a");
    /// assert_eq!(selector.edit_value(), Some("12"));
    /// selector.edit_text("5000");
    /// assert_eq!(selector.edit_value(), Some("12"));
    /// ```
    pub fn edit_text(&mut self, raw: &str) {
        let Mode::Editing { text } = &mut self.mode else {
            return;
        };

        let digits = sanitize_count_text(raw);
        if digits.is_empty() || parse_split_text(&digits).is_ok() {
            *text = digits;
        }
    }

    /// Commits the edit if it holds a valid count, then leaves edit mode.
    ///
    /// ```rust
    /// use tipcalc_core::{NoopHaptics, SplitChange, SplitCount, SplitSelector};
    ///
    /// let current = SplitCount::new(4).unwrap();
    /// let mut selector = SplitSelector::new(Default::default(), NoopHaptics);
    /// selector.begin_edit(current);
    /// selector.edit_text("");
    /// assert_eq!(selector.submit(), SplitChange::Unchanged);
    /// assert!(!selector.is_editing());
    /// ```
    pub fn submit(&mut self) -> SplitChange {
        let Mode::Editing { text } = &self.mode else {
            return SplitChange::Unchanged;
        };

        // An invalid edit is dropped; the next begin_edit reseeds from the owner's count
        let change = match parse_split_text(text).and_then(SplitCount::new) {
            Ok(count) => {
                self.haptics.trigger(Feedback::Success);
                SplitChange::Changed(count)
            }
            Err(_) => SplitChange::Unchanged,
        };

        self.mode = Mode::Display;
        change
    }

    /// Focus loss behaves exactly like submitting.
    pub fn blur(&mut self) -> SplitChange {
        self.submit()
    }
}

/// Unit word for a count.
///
/// ```rust
/// use tipcalc_core::split_selector::unit_label;
/// use tipcalc_core::SplitCount;
///
/// assert_eq!(unit_label(SplitCount::ONE), "person");
/// assert_eq!(unit_label(SplitCount::MAX), "people");
/// ```
pub fn unit_label(count: SplitCount) -> &'static str {
    if count.get() == 1 {
        "person"
    } else {
        "people"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::RecordingHaptics;
    use std::rc::Rc;

    fn count(n: u32) -> SplitCount {
        SplitCount::new(n).unwrap()
    }

    fn selector(editable: bool) -> (SplitSelector<Rc<RecordingHaptics>>, Rc<RecordingHaptics>) {
        let haptics = Rc::new(RecordingHaptics::new());
        (
            SplitSelector::new(SplitSelectorOptions { editable }, Rc::clone(&haptics)),
            haptics,
        )
    }

    #[test]
    fn test_increment_and_decrement() {
        let (mut sel, haptics) = selector(true);
        assert_eq!(sel.increment(count(1)), SplitChange::Changed(count(2)));
        assert_eq!(sel.decrement(count(3)), SplitChange::Changed(count(2)));
        assert_eq!(haptics.events(), vec![Feedback::Light, Feedback::Light]);
    }

    #[test]
    fn test_decrement_disabled_at_one() {
        let (mut sel, haptics) = selector(true);
        assert!(!sel.can_decrement(count(1)));
        assert_eq!(sel.decrement(count(1)), SplitChange::Unchanged);
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn test_increment_capped_at_max() {
        let (mut sel, haptics) = selector(false);
        assert!(sel.can_increment(count(999)));
        assert_eq!(sel.increment(count(999)), SplitChange::Changed(count(1000)));
        haptics.clear();

        assert!(!sel.can_increment(count(1000)));
        assert_eq!(sel.increment(count(1000)), SplitChange::Unchanged);
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn test_begin_edit_seeds_current_value() {
        let (mut sel, haptics) = selector(true);
        assert!(sel.begin_edit(count(4)));
        assert!(sel.is_editing());
        assert_eq!(sel.edit_value(), Some("4"));
        assert_eq!(haptics.events(), vec![Feedback::Light]);
    }

    #[test]
    fn test_begin_edit_ignored_when_not_editable() {
        let (mut sel, haptics) = selector(false);
        assert!(!sel.begin_edit(count(4)));
        assert!(!sel.is_editing());
        assert_eq!(sel.edit_value(), None);
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn test_edit_text_filters_and_retains() {
        let (mut sel, _) = selector(true);
        sel.begin_edit(count(4));

        sel.edit_text("");
        assert_eq!(sel.edit_value(), Some(""));
        sel.edit_text("0");
        assert_eq!(sel.edit_value(), Some(""));
        sel.edit_text("1x0");
        assert_eq!(sel.edit_value(), Some("10"));
        sel.edit_text("1000");
        assert_eq!(sel.edit_value(), Some("1000"));
        sel.edit_text("10000");
        assert_eq!(sel.edit_value(), Some("1000"));
    }

    #[test]
    fn test_edit_text_outside_edit_mode_is_ignored() {
        let (mut sel, _) = selector(true);
        sel.edit_text("12");
        assert_eq!(sel.edit_value(), None);
    }

    #[test]
    fn test_submit_commits_valid_count() {
        let (mut sel, haptics) = selector(true);
        sel.begin_edit(count(4));
        sel.edit_text("12");
        haptics.clear();

        assert_eq!(sel.submit(), SplitChange::Changed(count(12)));
        assert!(!sel.is_editing());
        assert_eq!(haptics.events(), vec![Feedback::Success]);
    }

    #[test]
    fn test_zero_edit_reverts() {
        let (mut sel, haptics) = selector(true);
        sel.begin_edit(count(4));
        sel.edit_text("");
        sel.edit_text("0");
        haptics.clear();

        assert_eq!(sel.submit(), SplitChange::Unchanged);
        assert!(!sel.is_editing());
        assert!(haptics.events().is_empty());

        // Re-entering shows the committed value again
        sel.begin_edit(count(4));
        assert_eq!(sel.edit_value(), Some("4"));
    }

    #[test]
    fn test_blur_behaves_like_submit() {
        let (mut sel, _) = selector(true);
        sel.begin_edit(count(2));
        sel.edit_text("7");
        assert_eq!(sel.blur(), SplitChange::Changed(count(7)));

        assert_eq!(sel.blur(), SplitChange::Unchanged);
    }

    #[test]
    fn test_committed_values_stay_in_range() {
        let inputs = ["0", "1", "999", "1000", "1001", "", "abc", "0005", "65536"];
        for raw in inputs {
            let (mut sel, _) = selector(true);
            sel.begin_edit(count(3));
            sel.edit_text(raw);
            if let SplitChange::Changed(c) = sel.submit() {
                assert!((1..=1000).contains(&c.get()), "{raw} committed {c}");
            }
        }
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(unit_label(count(1)), "person");
        assert_eq!(unit_label(count(2)), "people");
        assert_eq!(unit_label(count(1000)), "people");
    }
}
