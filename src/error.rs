//! Custom error types for splitpot
//!
//! Validation failures are ordinary values (`ValidationErrors`); everything
//! else that can go wrong (I/O, settings, CSV input, roster setup) is a
//! `SplitError`.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// The main error type for splitpot operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected expense form
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Rejected expense form read from a numbered input line
    #[error("Line {line}: {errors}")]
    RejectedRow { line: u64, errors: ValidationErrors },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Output errors (summary rendering, export formats)
    #[error("Output error: {0}")]
    Output(String),
}

impl SplitError {
    /// Create a "not found" error for participants
    pub fn participant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for participants
    pub fn duplicate_participant(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::RejectedRow { .. })
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SplitError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<ValidationErrors> for SplitError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for splitpot operations
pub type SplitResult<T> = Result<T, SplitError>;
