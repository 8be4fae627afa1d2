//! Free-text remarks.

/// A free-text remark attached to a record.
///
/// Unlike the other field types a remark carries no constraint: any
/// text is valid, including the empty string. `new` is therefore
/// infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remark(String);

impl Remark {
    /// Creates a new `Remark` holding the given text verbatim.
    pub fn new(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Remark {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Remark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Remark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Remark::new(String::deserialize(deserializer)?))
    }
}
