//! Field-level validation messages shown next to form inputs.

use std::collections::BTreeMap;
use std::fmt;

use super::PostBodyValidationError;

/// Inputs that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// Group title.
    Title,
    /// Group description.
    Description,
    /// Post body.
    Body,
}

/// A validation failure on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field must be filled in.
    Required,
    /// Another group already uses this title.
    TitleTaken,
    /// The value exceeds the allowed length.
    TooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::TitleTaken => write!(f, "Group Name already exists"),
            Self::TooLong { max } => write!(f, "Must be at most {max} characters"),
        }
    }
}

impl From<PostBodyValidationError> for FieldError {
    fn from(error: PostBodyValidationError) -> Self {
        match error {
            PostBodyValidationError::Empty => Self::Required,
            PostBodyValidationError::TooLong { max } => Self::TooLong { max },
        }
    }
}

/// At most one message per field; the first validator to fail wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one.
    pub fn record(&mut self, field: FormField, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    /// Message for one field, if any.
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Whether this field currently fails validation.
    pub fn has(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate field errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// Fails with [`FieldError::Required`] for blank input.
pub fn required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}
