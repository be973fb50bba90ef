//! Operation kind definitions.
//!
//! This module provides the [`OperationKind`] enum selecting whether a
//! rendered document is a read or a write.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of GraphQL operation a document performs.
///
/// The kind is rendered as the leading keyword of every document.
///
/// # Example
///
/// ```rust
/// use graphql_payload::OperationKind;
///
/// let kind: OperationKind = "Mutation".parse().unwrap();
/// assert_eq!(kind, OperationKind::Mutation);
/// assert_eq!(kind.to_string(), "mutation");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// A read operation (`query`).
    #[default]
    Query,
    /// A write operation (`mutation`).
    Mutation,
}

impl OperationKind {
    /// Returns the keyword used in the rendered document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }

    /// Returns `true` for [`OperationKind::Mutation`].
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            _ => Err(ConfigError::InvalidOperationKind { kind: s }),
        }
    }
}

impl<'de> Deserialize<'de> for OperationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_keyword() {
        assert_eq!(OperationKind::Query.to_string(), "query");
        assert_eq!(OperationKind::Mutation.to_string(), "mutation");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" QUERY ".parse::<OperationKind>().unwrap(), OperationKind::Query);
        assert_eq!(
            "Mutation".parse::<OperationKind>().unwrap(),
            OperationKind::Mutation
        );
    }

    #[test]
    fn test_parse_rejects_subscription() {
        let result = "subscription".parse::<OperationKind>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOperationKind { kind }) if kind == "subscription"
        ));
    }

    #[test]
    fn test_default_is_query() {
        assert_eq!(OperationKind::default(), OperationKind::Query);
        assert!(!OperationKind::Query.is_mutation());
        assert!(OperationKind::Mutation.is_mutation());
    }

    #[test]
    fn test_serde_uses_lowercase_keyword() {
        let json = serde_json::to_string(&OperationKind::Mutation).unwrap();
        assert_eq!(json, r#""mutation""#);

        let kind: OperationKind = serde_json::from_str(r#""query""#).unwrap();
        assert_eq!(kind, OperationKind::Query);
    }

    #[test]
    fn test_deserialize_accepts_what_from_str_accepts() {
        let kind: OperationKind = serde_json::from_str(r#""Mutation""#).unwrap();
        assert_eq!(kind, OperationKind::Mutation);

        let error = serde_json::from_str::<OperationKind>(r#""subscription""#).unwrap_err();
        assert!(error.to_string().contains("Invalid operation kind 'subscription'"));
    }
}
