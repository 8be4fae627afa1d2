//! National registration identifiers.

use crate::FieldError;
use std::str::FromStr;

/// A national registration identity card number.
///
/// This is the registry's unique record identifier: no two records may
/// share an NRIC. The canonical form is a status letter (`S`, `T`, `F`
/// or `G`), seven digits, and an uppercase checksum letter, for example
/// `S1111111A`.
///
/// Lowercase input is accepted and normalised to uppercase, so two
/// identifiers that differ only in case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nric(String);

impl Nric {
    /// Parses and normalises an externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` for blank input and
    /// `FieldError::Invalid` if the input is not in canonical NRIC form.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty { field: "nric" });
        }

        let upper = trimmed.to_ascii_uppercase();
        let bytes = upper.as_bytes();

        let well_formed = bytes.len() == 9
            && matches!(bytes[0], b'S' | b'T' | b'F' | b'G')
            && bytes[1..8].iter().all(|b| b.is_ascii_digit())
            && bytes[8].is_ascii_uppercase();

        if !well_formed {
            return Err(FieldError::Invalid {
                field: "nric",
                constraint: "must be a status letter (S/T/F/G), 7 digits, and a checksum letter",
            });
        }

        Ok(Self(upper))
    }

    /// Returns the canonical uppercase form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Nric {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

crate::string_field_impls!(Nric);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_identifiers() {
        for raw in ["S1111111A", "T0123456H", "F7654321X", "G0000000Z"] {
            assert_eq!(Nric::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn normalises_lowercase_input() {
        let nric = Nric::new("s1111111a").expect("valid nric");
        assert_eq!(nric.as_str(), "S1111111A");
        assert_eq!(nric, Nric::new("S1111111A").unwrap());
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(Nric::new("A1111111A").is_err()); // bad status letter
        assert!(Nric::new("S111111A").is_err()); // too short
        assert!(Nric::new("S11111111").is_err()); // missing checksum letter
        assert!(Nric::new("S1111111AA").is_err()); // too long
        assert_eq!(Nric::new(" "), Err(FieldError::Empty { field: "nric" }));
    }
}
