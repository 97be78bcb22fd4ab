//! Error types for the ranking engine.

use cockpit_core::error::CockpitError;

/// Why a single draft was rejected at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("malformed draft: {0}")]
    Malformed(String),
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
    #[error("too many impact chips: {0} (max 2)")]
    TooManyImpactChips(usize),
    #[error("impact chip {0} has a non-finite value")]
    NonFiniteChipValue(usize),
    #[error("expires_at precedes event_time")]
    ExpiresBeforeEvent,
    #[error("duplicate draft id")]
    DuplicateId,
}

/// A draft that failed validation and was excluded from the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("draft #{index} ({}): {issue}", .draft_id.as_deref().unwrap_or("<no id>"))]
pub struct ValidationError {
    /// Position of the draft in the input batch.
    pub index: usize,
    /// The draft id, when one could be read.
    pub draft_id: Option<String>,
    pub issue: ValidationIssue,
}

impl From<ValidationError> for CockpitError {
    fn from(err: ValidationError) -> Self {
        CockpitError::Validation(err.to_string())
    }
}
