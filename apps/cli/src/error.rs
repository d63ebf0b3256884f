//! # CLI Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Bad keystroke ──► handled inside tipcalc-core (rejected, no error)    │
//! │                                                                         │
//! │  Bad command line ──► CliError::UnknownCommand ──► printed, loop goes on│
//! │                                                                         │
//! │  Bad tip rate / preset ──► CliError::Core ──► printed, loop goes on    │
//! │                                                                         │
//! │  Bad config / broken stdout ──► CliError ──► anyhow ──► exit code 1    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tipcalc_core::{CoreError, ValidationError};

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("{command} needs an argument")]
    MissingArgument { command: &'static str },

    /// Preset numbers are 1-based, as typed.
    #[error("Tip preset {number} does not exist (choose 1-{available})")]
    UnknownPreset { number: usize, available: usize },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the session can keep reading commands after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_)
                | CliError::MissingArgument { .. }
                | CliError::UnknownPreset { .. }
                | CliError::Core(_)
        )
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::Validation(err))
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(CliError::UnknownCommand("foo".to_string()).is_recoverable());
        assert!(CliError::MissingArgument { command: "tip" }.is_recoverable());
        assert!(CliError::UnknownPreset {
            number: 6,
            available: 5
        }
        .is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!CliError::from(io).is_recoverable());
    }

    #[test]
    fn test_validation_error_becomes_core_error() {
        let err: CliError = ValidationError::MustBePositive {
            field: "split_count".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
        assert_eq!(err.to_string(), "Validation error: split_count must be positive");
    }
}
