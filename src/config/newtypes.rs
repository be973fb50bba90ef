//! Validated newtype wrappers for descriptor values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated GraphQL operation name (the root field being called).
///
/// Names follow the GraphQL grammar `[_A-Za-z][_0-9A-Za-z]*`, so the value can
/// be interpolated into a document without quoting.
///
/// # Example
///
/// ```rust
/// use graphql_payload::OperationName;
///
/// let name = OperationName::new("updateUser").unwrap();
/// assert_eq!(name.as_ref(), "updateUser");
///
/// assert!(OperationName::new("update-user").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperationName(String);

impl OperationName {
    /// Creates a new validated operation name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOperationName`] if the name is empty or
    /// contains characters outside the GraphQL name grammar.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim().to_string();

        if !Self::is_valid_name(&name) {
            return Err(ConfigError::InvalidOperationName { name });
        }
        Ok(Self(name))
    }

    fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OperationName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OperationName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
