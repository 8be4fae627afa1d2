//! Contact details: phone numbers, email addresses and postal addresses.

use crate::{string_field_impls, FieldError};

/// A phone number: digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Creates a new `Phone` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` for blank input and
    /// `FieldError::Invalid` if the input contains non-digits or fewer
    /// than three digits.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "phone" });
        }

        if trimmed.len() < 3 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::Invalid {
                field: "phone",
                constraint: "must contain only digits and be at least 3 digits long",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Phone);

/// An email address of the form `local-part@domain`.
///
/// The local part may contain alphanumeric characters and `+`, `_`,
/// `.`, `-`, but must start and end alphanumeric. The domain is one or
/// more labels separated by `.`, each starting and ending alphanumeric,
/// with the final label at least two characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` for blank input and
    /// `FieldError::Invalid` if the input does not match the
    /// `local-part@domain` shape described above.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "email" });
        }

        let invalid = FieldError::Invalid {
            field: "email",
            constraint: "must be of the form local-part@domain",
        };

        let (local, domain) = match trimmed.split_once('@') {
            Some(parts) => parts,
            None => return Err(invalid),
        };

        if !Self::valid_local_part(local) || !Self::valid_domain(domain) {
            return Err(invalid);
        }

        Ok(Self(trimmed.to_owned()))
    }

    fn valid_local_part(local: &str) -> bool {
        let alnum_ends = local
            .chars()
            .next()
            .zip(local.chars().last())
            .is_some_and(|(first, last)| {
                first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric()
            });

        alnum_ends
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
    }

    fn valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();

        let last_long_enough = labels.last().is_some_and(|label| label.len() >= 2);

        last_long_enough
            && labels.iter().all(|label| {
                let alnum_ends = label
                    .chars()
                    .next()
                    .zip(label.chars().last())
                    .is_some_and(|(first, last)| {
                        first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric()
                    });
                alnum_ends
                    && label
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Email);

/// A postal address. Any non-empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Creates a new `Address` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "address" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Address);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_digit_strings() {
        assert_eq!(Phone::new("91110000").unwrap().as_str(), "91110000");
        assert_eq!(Phone::new("999").unwrap().as_str(), "999");
    }

    #[test]
    fn phone_rejects_short_or_non_digit() {
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9111 0000").is_err());
        assert!(Phone::new("phone").is_err());
        assert_eq!(Phone::new(""), Err(FieldError::Empty { field: "phone" }));
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::new("alexyeoh@example.com").is_ok());
        assert!(Email::new("a1+be.d@sub.example-1.org").is_ok());
        assert!(Email::new("a@bc").is_ok());
    }

    #[test]
    fn email_rejects_malformed_input() {
        assert!(Email::new("alexyeoh").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("alex@").is_err());
        assert!(Email::new(".alex@example.com").is_err());
        assert!(Email::new("alex@example.c").is_err());
        assert!(Email::new("alex@-example.com").is_err());
    }

    #[test]
    fn address_requires_non_empty_text() {
        assert!(Address::new("Blk 30 Geylang Street 29, #06-40").is_ok());
        assert_eq!(
            Address::new("  "),
            Err(FieldError::Empty { field: "address" })
        );
    }
}
