//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Boundary rejection: a request field violates its constraint.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The copywriter service call failed, or its output could not be
    /// interpreted as a complete email variant.
    #[error("campaign generation failed: {0}")]
    Generation(String),

    #[error("CSV export failed: {0}")]
    Csv(String),
}

impl DomainError {
    /// Shorthand for a validation error naming the offending field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
