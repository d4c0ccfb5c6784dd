//! Required-field validation shared by the domain drafts.

use thiserror::Error;

/// A draft was missing a field the store requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    Required(&'static str),

    /// The field held something that does not read as a number.
    #[error("`{0}` must be a number")]
    NotANumber(&'static str),
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required(field))
}

/// Empty strings fail the required check just like absent ones.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or(ValidationError::Required(field))
}
