//! Error types for the GraphQL payload builder.
//!
//! This module contains the error type used when constructing operation
//! descriptors. Errors raised while rendering a document live in
//! [`crate::builder::BuildError`].
//!
//! # Error Handling
//!
//! All descriptor constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use graphql_payload::{ConfigError, OperationName};
//!
//! let result = OperationName::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidOperationName { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while describing an operation.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Operation name does not follow the GraphQL name grammar.
    #[error("Invalid operation name '{name}'. Expected a GraphQL name such as 'users' or 'updateUser'.")]
    InvalidOperationName {
        /// The invalid name that was provided.
        name: String,
    },

    /// Operation kind is not one of the supported kinds.
    #[error("Invalid operation kind '{kind}'. Expected 'query' or 'mutation'.")]
    InvalidOperationKind {
        /// The invalid kind string that was provided.
        kind: String,
    },

    /// A field selection could not be read from its JSON description.
    #[error("Invalid field spec: {reason}")]
    InvalidFieldSpec {
        /// The reason the field spec is invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the descriptor.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
