//! # tipcalc-core: Pure Logic for the Tip Calculator
//!
//! This crate is the **heart** of Tipcalc. It contains the input rules and
//! arithmetic of the calculator as plain Rust with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tipcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (terminal, mobile, web)               │   │
//! │  │    Keypad ──► Bill field ──► Split selector ──► Summary card    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key presses, text edits               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌──────────────┐ ┌─────────────┐ ┌─────────┐  │   │
//! │  │   │ BillInput  │ │SplitSelector │ │ResultSummary│ │  Money  │  │   │
//! │  │   │ (keypad)   │ │ (+/-, edit)  │ │  (rows)     │ │ format  │  │   │
//! │  │   └─────┬──────┘ └──────┬───────┘ └──────▲──────┘ └─────────┘  │   │
//! │  │         └───────► TipCalculator ─────────┘                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • HAPTICS INJECTED • INTEGER CENTS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - TipRate, SplitCount, TipResult, Feedback
//! - [`format`] - en-US currency formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Range and format validators
//! - [`haptics`] - Injected haptic feedback capability
//! - [`theme`] - Colors and device breakpoints as an explicit object
//! - [`keypad`] - Keypad keys and layout
//! - [`bill_input`] - Bill amount entry component
//! - [`split_selector`] - Split count component
//! - [`result_summary`] - Summary rows
//! - [`calculator`] - Parent composition owning the canonical state
//!
//! ## Example Usage
//!
//! ```rust
//! use tipcalc_core::{Key, NoopHaptics, TipCalculator, TipRate};
//!
//! let mut calc = TipCalculator::new(NoopHaptics);
//! for key in [Key::Digit(1), Key::Digit(0), Key::Digit(0)] {
//!     calc.press_key(key);
//! }
//! calc.set_tip_rate(TipRate::from_bps(2000)).unwrap();
//! calc.increment_split();
//!
//! let result = calc.result();
//! assert_eq!(result.tip_amount.cents(), 2000);
//! assert_eq!(result.per_person_total.cents(), 6000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill_input;
pub mod calculator;
pub mod error;
pub mod format;
pub mod haptics;
pub mod keypad;
pub mod money;
pub mod result_summary;
pub mod split_selector;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill_input::{BillEdit, BillInput};
pub use calculator::TipCalculator;
pub use error::{CoreError, ValidationError};
pub use haptics::{FnHaptics, Haptics, NoopHaptics, RecordingHaptics};
pub use keypad::Key;
pub use money::Money;
pub use result_summary::{ResultSummary, SummaryRow};
pub use split_selector::{SplitChange, SplitSelector, SplitSelectorOptions};
pub use theme::{Breakpoints, Layout, Theme, ThemeColors};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest bill the keypad accepts, in cents ($999,999.99).
pub const MAX_BILL_CENTS: i64 = 99_999_999;

/// Smallest party size. Keeps the per-person division well defined.
pub const MIN_SPLIT_COUNT: u32 = 1;

/// Largest party size accepted by every split path.
pub const MAX_SPLIT_COUNT: u32 = 1000;

/// Largest tip rate in basis points (100%).
pub const MAX_TIP_RATE_BPS: u32 = 10_000;

/// Tip rate applied before the user picks one (15%).
pub const DEFAULT_TIP_RATE_BPS: u32 = 1500;

/// Quick-pick tip rates in basis points: 10%, 15%, 18%, 20%, 25%.
pub const TIP_PRESETS_BPS: [u32; 5] = [1000, 1500, 1800, 2000, 2500];
