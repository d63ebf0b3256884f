//! # Tip Calculator
//!
//! The screen that composes the components. It owns the canonical state
//! (bill, split count, tip rate), forwards user actions to the components
//! and adopts the outcomes they report.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  press_key / type_bill ──► BillInput ──► BillEdit::Changed ──► bill    │
//! │                                                                         │
//! │  +/-/edit/submit ──► SplitSelector(current) ──► SplitChange ──► split  │
//! │                                                                         │
//! │  set_tip_rate / select_preset ─────────────────────────────► tip_rate  │
//! │                                                                         │
//! │  (bill, tip_rate, split) ──► TipResult::compute ──► ResultSummary      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::bill_input::{BillEdit, BillInput};
use crate::error::{CoreError, CoreResult};
use crate::haptics::Haptics;
use crate::keypad::Key;
use crate::money::Money;
use crate::result_summary::ResultSummary;
use crate::split_selector::{SplitChange, SplitSelector, SplitSelectorOptions};
use crate::types::{SplitCount, TipRate, TipResult};
use crate::validation::{validate_tip_rate_bps, ValidationResult};
use crate::TIP_PRESETS_BPS;

/// Parent composition of the bill input, split selector and summary.
///
/// `H` is cloned into each component, so use a cheap shared handle
/// (`NoopHaptics`, `Rc<_>`, `Arc<_>`, `&_`).
#[derive(Debug, Clone)]
pub struct TipCalculator<H> {
    bill_input: BillInput<H>,
    split_selector: SplitSelector<H>,
    bill: Money,
    split: SplitCount,
    tip_rate: TipRate,
}

impl<H: Haptics + Clone> TipCalculator<H> {
    /// Empty bill, one person, default tip rate, editable split.
    pub fn new(haptics: H) -> Self {
        Self::with_settings(TipRate::default(), SplitSelectorOptions::default(), haptics)
    }

    pub fn with_settings(tip_rate: TipRate, split_options: SplitSelectorOptions, haptics: H) -> Self {
        TipCalculator {
            bill_input: BillInput::new(Money::zero(), haptics.clone()),
            split_selector: SplitSelector::new(split_options, haptics),
            bill: Money::zero(),
            split: SplitCount::default(),
            tip_rate,
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn bill(&self) -> Money {
        self.bill
    }

    pub fn split(&self) -> SplitCount {
        self.split
    }

    pub fn tip_rate(&self) -> TipRate {
        self.tip_rate
    }

    pub fn bill_input(&self) -> &BillInput<H> {
        &self.bill_input
    }

    pub fn split_selector(&self) -> &SplitSelector<H> {
        &self.split_selector
    }

    /// Derived figures for the current state.
    pub fn result(&self) -> TipResult {
        TipResult::compute(self.bill, self.tip_rate, self.split)
    }

    /// Summary card for the current state.
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(&self.result(), self.split)
    }

    // -------------------------------------------------------------------------
    // Bill
    // -------------------------------------------------------------------------

    pub fn press_key(&mut self, key: Key) -> BillEdit {
        let edit = self.bill_input.press(key);
        self.apply_bill(edit)
    }

    pub fn type_bill(&mut self, raw: &str) -> BillEdit {
        let edit = self.bill_input.set_text(raw);
        self.apply_bill(edit)
    }

    fn apply_bill(&mut self, edit: BillEdit) -> BillEdit {
        if let Some(value) = edit.value() {
            self.bill = value;
        }
        edit
    }

    // -------------------------------------------------------------------------
    // Split
    // -------------------------------------------------------------------------

    pub fn increment_split(&mut self) -> SplitChange {
        let change = self.split_selector.increment(self.split);
        self.apply_split(change)
    }

    pub fn decrement_split(&mut self) -> SplitChange {
        let change = self.split_selector.decrement(self.split);
        self.apply_split(change)
    }

    pub fn begin_split_edit(&mut self) -> bool {
        self.split_selector.begin_edit(self.split)
    }

    pub fn edit_split_text(&mut self, raw: &str) {
        self.split_selector.edit_text(raw);
    }

    pub fn submit_split_edit(&mut self) -> SplitChange {
        let change = self.split_selector.submit();
        self.apply_split(change)
    }

    /// Focus left the split field; same outcome as submitting.
    pub fn blur_split_edit(&mut self) -> SplitChange {
        let change = self.split_selector.blur();
        self.apply_split(change)
    }

    fn apply_split(&mut self, change: SplitChange) -> SplitChange {
        if let Some(count) = change.count() {
            self.split = count;
        }
        change
    }

    // -------------------------------------------------------------------------
    // Tip rate
    // -------------------------------------------------------------------------

    /// Replaces the tip rate; rates above 100% are refused.
    pub fn set_tip_rate(&mut self, rate: TipRate) -> ValidationResult<()> {
        validate_tip_rate_bps(rate.bps())?;
        self.tip_rate = rate;
        Ok(())
    }

    /// Picks one of [`TIP_PRESETS_BPS`].
    ///
    /// ```rust
    /// use tipcalc_core::{NoopHaptics, TipCalculator};
    ///
    /// let mut calc = TipCalculator::new(NoopHaptics);
    /// calc.select_preset(3).unwrap();
    /// assert_eq!(calc.tip_rate().to_string(), "20%");
    /// assert!(calc.select_preset(9).is_err());
    /// ```
    pub fn select_preset(&mut self, index: usize) -> CoreResult<TipRate> {
        let bps = TIP_PRESETS_BPS
            .get(index)
            .copied()
            .ok_or(CoreError::UnknownPreset {
                index,
                available: TIP_PRESETS_BPS.len(),
            })?;
        let rate = TipRate::from_bps(bps);
        self.set_tip_rate(rate)?;
        Ok(rate)
    }

    /// The preset rates, in display order.
    pub fn presets() -> impl Iterator<Item = TipRate> {
        TIP_PRESETS_BPS.into_iter().map(TipRate::from_bps)
    }
}
