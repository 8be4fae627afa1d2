//! Record tags.

use crate::{string_field_impls, FieldError};

/// A single-word label attached to a record.
///
/// Tags are kept in ordered sets on records, so this type is `Ord`.
/// A tag must be one alphanumeric word with no spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Creates a new `Tag` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` for blank input and
    /// `FieldError::Invalid` if the input is not a single alphanumeric
    /// word.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "tag" });
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FieldError::Invalid {
                field: "tag",
                constraint: "must be a single alphanumeric word",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Tag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_words() {
        assert_eq!(Tag::new("diabetic").unwrap().as_str(), "diabetic");
        assert_eq!(Tag::new("ward3").unwrap().as_str(), "ward3");
    }

    #[test]
    fn rejects_spaces_and_punctuation() {
        assert!(Tag::new("high risk").is_err());
        assert!(Tag::new("high-risk").is_err());
        assert_eq!(Tag::new(""), Err(FieldError::Empty { field: "tag" }));
    }
}
