//! Error types raised while rendering a document.
//!
//! Rendering only fails when the per-call arguments cannot be turned into
//! literals. Field selections always render.
//!
//! - [`BuildError::Serialization`]: the arguments' `Serialize` implementation failed
//! - [`BuildError::ArgumentsNotAnObject`]: the arguments were not a map
//!
//! Errors are scoped to the single call; the [`QueryBuilder`](super::QueryBuilder)
//! stays usable afterwards.
//!
//! # Example
//!
//! ```rust
//! use graphql_payload::{BuildError, OperationDescriptor, QueryBuilder};
//!
//! let descriptor = OperationDescriptor::builder()
//!     .name("users")
//!     .build()
//!     .unwrap();
//! let builder = QueryBuilder::new(descriptor);
//!
//! let result = builder.build_without_fields(&vec!["not", "a", "map"]);
//! assert!(matches!(result, Err(BuildError::ArgumentsNotAnObject { found: "array" })));
//! ```

use thiserror::Error;

/// Error type for document rendering.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The arguments could not be converted into literal values.
    ///
    /// Raised for maps with non-string keys and for custom `Serialize`
    /// implementations that report an error.
    #[error("Failed to serialize arguments: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The arguments serialized to something other than a map.
    #[error("Arguments must serialize to a map of names to values, found {found}")]
    ArgumentsNotAnObject {
        /// The JSON type the arguments serialized to.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_serialization_variant_wraps_serde_error() {
        let mut bad = HashMap::new();
        bad.insert(vec![1_u8], "value");
        let serde_error = serde_json::to_value(&bad).unwrap_err();

        let error: BuildError = serde_error.into();
        assert!(matches!(error, BuildError::Serialization(_)));
        assert!(error.to_string().starts_with("Failed to serialize arguments"));
    }

    #[test]
    fn test_arguments_not_an_object_message() {
        let error = BuildError::ArgumentsNotAnObject { found: "string" };
        let message = error.to_string();
        assert!(message.contains("map of names to values"));
        assert!(message.contains("string"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &BuildError::ArgumentsNotAnObject { found: "number" };
        let _ = error;
    }
}
