//! # Error Types
//!
//! Domain-specific error types for tipcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipcalc-core errors (this file)                                       │
//! │  ├── CoreError        - Operations on the calculator                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  ├── ConfigError      - Bad environment / theme file                   │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keypad Input Never Errors
//! The components themselves never return these errors for keystrokes: an
//! invalid keystroke is rejected in place (buffer unchanged, error haptic).
//! The types here are for the typed API surface: constructors, validators
//! and the calculator's setters.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Calculator operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Preset index (zero-based) that does not exist.
    #[error("Tip preset index {index} out of range (0..{available})")]
    UnknownPreset { index: usize, available: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (stray characters, a second decimal point).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownPreset {
            index: 7,
            available: 5,
        };
        assert_eq!(err.to_string(), "Tip preset index 7 out of range (0..5)");

        let err: CoreError = ValidationError::MustBePositive {
            field: "split_count".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: split_count must be positive");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "split".to_string(),
        };
        assert_eq!(err.to_string(), "split is required");

        let err = ValidationError::OutOfRange {
            field: "split_count".to_string(),
            min: 1,
            max: 1000,
        };
        assert_eq!(err.to_string(), "split_count must be between 1 and 1000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "split_count".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
