//! # Result Summary
//!
//! Read-only summary card. A pure function of a [`TipResult`] and the split
//! count; it never validates or mutates anything.
//!
//! ```text
//! ┌ Summary ─────────────────────────────┐
//! │ Tip Amount                    $20.00 │
//! │ Total with Tip               $120.00 │
//! │ Per Person (4 people)         $30.00 │  ◄── only when split > 1
//! └──────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::format_currency;
use crate::split_selector::unit_label;
use crate::types::{SplitCount, TipResult};

pub const SUMMARY_TITLE: &str = "Summary";

/// One labelled amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    /// Rendered in the primary color.
    pub emphasized: bool,
}

/// The summary card contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultSummary {
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

impl ResultSummary {
    /// Builds the card.
    ///
    /// ```rust
    /// use tipcalc_core::{Money, ResultSummary, SplitCount, TipRate, TipResult};
    ///
    /// let split = SplitCount::new(4).unwrap();
    /// let result = TipResult::compute(Money::from_cents(10_000), TipRate::from_bps(2000), split);
    /// let summary = ResultSummary::new(&result, split);
    ///
    /// assert_eq!(summary.rows.len(), 3);
    /// assert_eq!(summary.rows[2].label, "Per Person (4 people)");
    /// assert_eq!(summary.rows[2].value, "$30.00");
    /// ```
    pub fn new(result: &TipResult, split: SplitCount) -> Self {
        let mut rows = vec![
            SummaryRow {
                label: "Tip Amount".to_string(),
                value: format_currency(result.tip_amount),
                emphasized: false,
            },
            SummaryRow {
                label: "Total with Tip".to_string(),
                value: format_currency(result.total_with_tip),
                emphasized: false,
            },
        ];

        if split.is_shared() {
            rows.push(SummaryRow {
                label: format!("Per Person ({} {})", split, unit_label(split)),
                value: format_currency(result.per_person_total),
                emphasized: true,
            });
        }

        ResultSummary {
            title: SUMMARY_TITLE.to_string(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::TipRate;

    #[test]
    fn test_single_person_has_two_rows() {
        let result = TipResult::compute(Money::from_cents(5000), TipRate::from_bps(1500), SplitCount::ONE);
        let summary = ResultSummary::new(&result, SplitCount::ONE);

        assert_eq!(summary.title, "Summary");
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].label, "Tip Amount");
        assert_eq!(summary.rows[0].value, "$7.50");
        assert_eq!(summary.rows[1].label, "Total with Tip");
        assert_eq!(summary.rows[1].value, "$57.50");
        assert!(summary.rows.iter().all(|row| !row.emphasized));
    }

    #[test]
    fn test_shared_bill_adds_emphasized_per_person_row() {
        let split = SplitCount::new(3).unwrap();
        let result = TipResult::compute(Money::from_cents(123_456), TipRate::from_bps(2000), split);
        let summary = ResultSummary::new(&result, split);

        let per_person = &summary.rows[2];
        assert_eq!(per_person.label, "Per Person (3 people)");
        assert_eq!(per_person.value, "$493.82");
        assert!(per_person.emphasized);
        assert_eq!(summary.rows[1].value, "$1,481.47");
    }

    #[test]
    fn test_zero_bill_shows_zero_amounts() {
        let result = TipResult::compute(Money::zero(), TipRate::default(), SplitCount::ONE);
        let summary = ResultSummary::new(&result, SplitCount::ONE);
        assert_eq!(summary.rows[0].value, "$0.00");
        assert_eq!(summary.rows[1].value, "$0.00");
    }
}
