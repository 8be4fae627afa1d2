//! Gender codes.

use crate::FieldError;
use std::fmt;
use std::str::FromStr;

/// A person's registered gender, recorded as the single-letter codes
/// `M` and `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the single-letter code for this gender.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(FieldError::Invalid {
                field: "gender",
                constraint: "must be M or F",
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl serde::Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_codes() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn rejects_anything_else() {
        assert!("male".parse::<Gender>().is_err());
        assert!("m".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }
}
