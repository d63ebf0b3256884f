//! End-to-end scenarios driving the calculator the way a user would.

use std::rc::Rc;

use tipcalc_core::{
    BillEdit, Feedback, Key, Money, RecordingHaptics, SplitChange, SplitCount, TipCalculator,
    TipRate,
};

fn press_all(calc: &mut TipCalculator<Rc<RecordingHaptics>>, labels: &[&str]) {
    for label in labels {
        let key = Key::from_label(label).expect("keypad label");
        calc.press_key(key);
    }
}

fn calculator() -> (TipCalculator<Rc<RecordingHaptics>>, Rc<RecordingHaptics>) {
    let haptics = Rc::new(RecordingHaptics::new());
    (TipCalculator::new(Rc::clone(&haptics)), haptics)
}

#[test]
fn typing_digits_then_fraction() {
    let (mut calc, _) = calculator();
    press_all(&mut calc, &["1", "2", "3"]);
    assert_eq!(calc.bill(), Money::from_cents(12_300));

    press_all(&mut calc, &[".", "5"]);
    assert_eq!(calc.bill(), Money::from_cents(12_350));
    assert_eq!(calc.bill_input().text(), "123.5");
    assert_eq!(calc.bill_input().formatted_value().as_deref(), Some("$123.50"));
}

#[test]
fn digit_past_maximum_is_rejected_with_error_feedback() {
    let (mut calc, haptics) = calculator();
    calc.type_bill("999999.99");
    haptics.clear();

    assert_eq!(calc.press_key(Key::Digit(9)), BillEdit::Rejected);
    assert_eq!(calc.bill_input().text(), "999999.99");
    assert_eq!(calc.bill(), Money::from_cents(99_999_999));
    assert_eq!(haptics.last(), Some(Feedback::Error));
}

#[test]
fn decrement_at_one_stays_disabled() {
    let (mut calc, haptics) = calculator();
    assert_eq!(calc.decrement_split(), SplitChange::Unchanged);
    assert_eq!(calc.split(), SplitCount::ONE);
    assert!(!calc.split_selector().can_decrement(calc.split()));
    assert!(haptics.events().is_empty());
}

#[test]
fn invalid_split_edit_reverts() {
    let (mut calc, _) = calculator();
    for _ in 0..3 {
        calc.increment_split();
    }
    assert_eq!(calc.split().get(), 4);

    calc.begin_split_edit();
    calc.edit_split_text("");
    calc.edit_split_text("0");
    assert_eq!(calc.submit_split_edit(), SplitChange::Unchanged);
    assert_eq!(calc.split().get(), 4);
    assert!(!calc.split_selector().is_editing());
}

#[test]
fn hundred_dollars_twenty_percent_four_people() {
    let (mut calc, _) = calculator();
    press_all(&mut calc, &["1", "0", "0", ".", "0", "0"]);
    calc.set_tip_rate(TipRate::from_bps(2000)).unwrap();
    calc.begin_split_edit();
    calc.edit_split_text("4");
    calc.submit_split_edit();

    let result = calc.result();
    assert_eq!(result.tip_amount, Money::from_cents(2000));
    assert_eq!(result.total_with_tip, Money::from_cents(12_000));
    assert_eq!(result.per_person_total, Money::from_cents(3000));

    let summary = calc.summary();
    let values: Vec<&str> = summary.rows.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["$20.00", "$120.00", "$30.00"]);
    assert_eq!(summary.rows[2].label, "Per Person (4 people)");
}

#[test]
fn backspace_to_empty_then_clear() {
    let (mut calc, haptics) = calculator();
    press_all(&mut calc, &["7", ".", "2"]);
    press_all(&mut calc, &["⌫", "⌫"]);
    assert_eq!(calc.bill_input().text(), "7");
    assert_eq!(calc.bill(), Money::from_cents(700));

    haptics.clear();
    calc.press_key(Key::Clear);
    assert!(calc.bill().is_zero());
    assert_eq!(calc.bill_input().placeholder(), Some("0.00"));
    assert_eq!(haptics.events(), vec![Feedback::Medium]);
}

#[test]
fn split_increments_stop_at_cap() {
    let (mut calc, _) = calculator();
    calc.begin_split_edit();
    calc.edit_split_text("999");
    calc.submit_split_edit();

    assert!(matches!(calc.increment_split(), SplitChange::Changed(_)));
    assert_eq!(calc.split().get(), 1000);
    assert_eq!(calc.increment_split(), SplitChange::Unchanged);
    assert_eq!(calc.split().get(), 1000);
}

#[test]
fn totals_hold_for_many_inputs() {
    let bills = [0, 1, 99, 1005, 4250, 12_345, 99_999_999];
    let rates = [0, 1000, 1500, 1875, 2500, 10_000];
    let splits = [1, 2, 3, 7, 1000];

    for bill in bills {
        for bps in rates {
            for n in splits {
                let split = SplitCount::new(n).unwrap();
                let result = tipcalc_core::TipResult::compute(
                    Money::from_cents(bill),
                    TipRate::from_bps(bps),
                    split,
                );
                assert_eq!(result.total_with_tip, Money::from_cents(bill) + result.tip_amount);
                assert_eq!(result.per_person_total, result.total_with_tip.divide_evenly(n));
                assert!(result.split_remainder(split).cents().abs() <= n as i64 / 2);
            }
        }
    }
}
