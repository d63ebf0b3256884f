//! # Haptics Capability
//!
//! Components signal tactile feedback through an injected [`Haptics`]
//! implementation instead of calling a device API directly.
//!
//! ```text
//! ┌──────────────┐  trigger(Feedback::Error)  ┌──────────────────────────┐
//! │  BillInput   │ ─────────────────────────► │  impl Haptics            │
//! │ SplitSelector│                            │  • NoopHaptics   (tests) │
//! └──────────────┘                            │  • RecordingHaptics      │
//!                                             │  • FnHaptics(closure)    │
//!                                             │  • device / log sink     │
//!                                             └──────────────────────────┘
//! ```
//!
//! Feedback is fire-and-forget: `trigger` returns nothing and a failing
//! device must swallow its own errors.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::types::Feedback;

/// Something that can play a haptic pattern.
pub trait Haptics {
    fn trigger(&self, feedback: Feedback);
}

impl<T: Haptics + ?Sized> Haptics for &T {
    fn trigger(&self, feedback: Feedback) {
        (**self).trigger(feedback)
    }
}

impl<T: Haptics + ?Sized> Haptics for Rc<T> {
    fn trigger(&self, feedback: Feedback) {
        (**self).trigger(feedback)
    }
}

impl<T: Haptics + ?Sized> Haptics for Arc<T> {
    fn trigger(&self, feedback: Feedback) {
        (**self).trigger(feedback)
    }
}

impl<T: Haptics + ?Sized> Haptics for Box<T> {
    fn trigger(&self, feedback: Feedback) {
        (**self).trigger(feedback)
    }
}

/// Discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn trigger(&self, _feedback: Feedback) {}
}

/// Adapts a plain callable.
///
/// ```rust
/// use std::cell::Cell;
/// use tipcalc_core::{Feedback, FnHaptics, Haptics};
///
/// let errors = Cell::new(0);
/// let haptics = FnHaptics(|f: Feedback| {
///     if f == Feedback::Error {
///         errors.set(errors.get() + 1);
///     }
/// });
/// haptics.trigger(Feedback::Error);
/// assert_eq!(errors.get(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnHaptics<F>(pub F);

impl<F: Fn(Feedback)> Haptics for FnHaptics<F> {
    fn trigger(&self, feedback: Feedback) {
        (self.0)(feedback)
    }
}

/// Remembers every signal in order. Share it through `Rc` to inspect it
/// after handing a clone to a component.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: RefCell<Vec<Feedback>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals received so far.
    pub fn events(&self) -> Vec<Feedback> {
        self.events.borrow().clone()
    }

    /// The most recent signal.
    pub fn last(&self) -> Option<Feedback> {
        self.events.borrow().last().copied()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Haptics for RecordingHaptics {
    fn trigger(&self, feedback: Feedback) {
        self.events.borrow_mut().push(feedback);
    }
}
