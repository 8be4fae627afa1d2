//! Person names.

use crate::{string_field_impls, FieldError};

/// A person's full name.
///
/// Names must contain only alphanumeric characters and spaces, and must
/// not start with a space. The input is trimmed of leading and trailing
/// whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Creates a new `Name` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if the trimmed input is empty, or
    /// `FieldError::Invalid` if it contains anything other than
    /// alphanumeric characters and spaces.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "name" });
        }

        let ok = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !ok {
            return Err(FieldError::Invalid {
                field: "name",
                constraint: "only alphanumeric characters and spaces are allowed",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Name);
