//! # medreg-types
//!
//! Validated value objects for the medreg record registry.
//!
//! Every field that can appear on a person record is wrapped in its own
//! type that validates on construction. Once a value exists it is known
//! to be well formed, so the core never re-checks field contents.
//!
//! All string-backed types trim surrounding whitespace during
//! construction and re-validate when deserialized, so a value that
//! arrives through serde carries the same guarantees as one built in
//! code.

mod clinical;
mod contact;
mod gender;
mod name;
mod nric;
mod remark;
mod tag;

pub use clinical::{BloodType, Condition};
pub use contact::{Address, Email, Phone};
pub use gender::Gender;
pub use name::Name;
pub use nric::Nric;
pub use remark::Remark;
pub use tag::Tag;

/// Errors that can occur when constructing a validated field value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    /// The input was empty or contained only whitespace.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The input did not satisfy the field's format constraint.
    #[error("{field} is invalid: {constraint}")]
    Invalid {
        field: &'static str,
        constraint: &'static str,
    },
}

/// Implements `Display`, `AsRef<str>` and serde for a string-backed
/// field type whose constructor is `new` and whose inner slot is `.0`.
macro_rules! string_field_impls {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_field_impls;
