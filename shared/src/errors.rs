//! Error types for the ViveFit application

use thiserror::Error;

use crate::validation::{get_missing_fields_labels, ValidationError};

/// Form-level input problem, reported back to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationGap {
    /// Required fields were left empty (technical field names)
    #[error("Incomplete form: please fill in {}", get_missing_fields_labels(.0).join(", "))]
    Incomplete(Vec<String>),

    /// A field is present but out of range or not a recognised value
    #[error("Invalid form: {0}")]
    Invalid(ValidationError),
}

impl ValidationGap {
    pub fn invalid(field: &str, message: &str) -> Self {
        ValidationGap::Invalid(ValidationError::new(field, message))
    }

    /// Short label used for logging and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationGap::Incomplete(_) => "incomplete",
            ValidationGap::Invalid(_) => "invalid",
        }
    }

    /// Field the gap points at, when there is exactly one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationGap::Incomplete(fields) if fields.len() == 1 => Some(fields[0].as_str()),
            ValidationGap::Incomplete(_) => None,
            ValidationGap::Invalid(err) => Some(err.field.as_str()),
        }
    }
}
