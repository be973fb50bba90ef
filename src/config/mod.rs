//! Operation descriptors.
//!
//! An [`OperationDescriptor`] carries everything the schema layer knows about
//! one root operation: its kind, its name, the fields returned when a caller
//! does not ask for specific ones, and which arguments are enum symbols.
//! A [`QueryBuilder`](crate::QueryBuilder) is constructed from one descriptor
//! and keeps it for its whole lifetime.
//!
//! # Overview
//!
//! - [`OperationDescriptor`]: the immutable operation metadata
//! - [`OperationDescriptorBuilder`]: a validating builder for descriptors
//! - [`OperationKind`]: `query` or `mutation`
//! - [`OperationName`]: a validated GraphQL root field name
//!
//! # Example
//!
//! ```rust
//! use graphql_payload::{FieldSpec, OperationDescriptor, OperationKind};
//!
//! let descriptor = OperationDescriptor::builder()
//!     .kind(OperationKind::Mutation)
//!     .name("updateUser")
//!     .default_fields(FieldSpec::from_names(["id", "status"]))
//!     .enum_argument("status")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.name().as_ref(), "updateUser");
//! assert!(descriptor.is_enum_argument("status"));
//! ```
//!
//! Descriptors can also be loaded from JSON:
//!
//! ```rust
//! use graphql_payload::OperationDescriptor;
//!
//! let descriptor: OperationDescriptor = serde_json::from_str(
//!     r#"{"kind": "query", "name": "users", "default_fields": ["id", "name"], "enum_arguments": ["role"]}"#,
//! )
//! .unwrap();
//! assert_eq!(descriptor.default_fields().len(), 2);
//! ```

mod kind;
mod newtypes;

pub use kind::OperationKind;
pub use newtypes::OperationName;

use serde::{Deserialize, Serialize};

use crate::builder::FieldSpec;
use crate::error::ConfigError;

/// Metadata describing one GraphQL root operation.
///
/// # Thread Safety
///
/// `OperationDescriptor` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    #[serde(default)]
    kind: OperationKind,
    name: OperationName,
    #[serde(default, alias = "output")]
    default_fields: FieldSpec,
    #[serde(default, alias = "enums")]
    enum_arguments: Vec<String>,
}

impl OperationDescriptor {
    /// Creates a new builder for constructing an `OperationDescriptor`.
    #[must_use]
    pub fn builder() -> OperationDescriptorBuilder {
        OperationDescriptorBuilder::new()
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the operation name.
    #[must_use]
    pub const fn name(&self) -> &OperationName {
        &self.name
    }

    /// Returns the fields selected when a call supplies none.
    #[must_use]
    pub const fn default_fields(&self) -> &FieldSpec {
        &self.default_fields
    }

    /// Returns the names of arguments rendered as bare enum symbols.
    #[must_use]
    pub fn enum_arguments(&self) -> &[String] {
        &self.enum_arguments
    }

    /// Returns `true` if `argument` is rendered as a bare enum symbol.
    #[must_use]
    pub fn is_enum_argument(&self, argument: &str) -> bool {
        self.enum_arguments.iter().any(|name| name == argument)
    }
}

// Verify OperationDescriptor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OperationDescriptor>();
};

/// Builder for constructing [`OperationDescriptor`] instances.
///
/// The only required field is `name`.
///
/// # Defaults
///
/// - `kind`: [`OperationKind::Query`]
/// - `default_fields`: empty (renders as `{ }`)
/// - `enum_arguments`: empty
#[derive(Debug, Default)]
pub struct OperationDescriptorBuilder {
    kind: Option<OperationKind>,
    name: Option<String>,
    default_fields: Option<FieldSpec>,
    enum_arguments: Vec<String>,
}

impl OperationDescriptorBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation kind.
    #[must_use]
    pub const fn kind(mut self, kind: OperationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the operation name (required). Validated by [`build`](Self::build).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the fields selected when a call supplies none.
    #[must_use]
    pub fn default_fields(mut self, fields: FieldSpec) -> Self {
        self.default_fields = Some(fields);
        self
    }

    /// Marks one argument as an enum symbol. Duplicates are ignored.
    #[must_use]
    pub fn enum_argument(mut self, argument: impl Into<String>) -> Self {
        let argument = argument.into();
        if !self.enum_arguments.contains(&argument) {
            self.enum_arguments.push(argument);
        }
        self
    }

    /// Marks several arguments as enum symbols.
    #[must_use]
    pub fn enum_arguments<I, S>(self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        arguments.into_iter().fold(self, Self::enum_argument)
    }

    /// Builds the [`OperationDescriptor`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `name` is not set, and
    /// [`ConfigError::InvalidOperationName`] if it is not a GraphQL name.
    pub fn build(self) -> Result<OperationDescriptor, ConfigError> {
        let name = self
            .name
            .ok_or(ConfigError::MissingRequiredField { field: "name" })?;

        Ok(OperationDescriptor {
            kind: self.kind.unwrap_or_default(),
            name: OperationName::new(name)?,
            default_fields: self.default_fields.unwrap_or_default(),
            enum_arguments: self.enum_arguments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_requires_name() {
        let result = OperationDescriptorBuilder::new()
            .kind(OperationKind::Mutation)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "name" })
        ));
    }

    #[test]
    fn test_builder_validates_name() {
        let result = OperationDescriptor::builder().name("bad name").build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOperationName { .. })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let descriptor = OperationDescriptor::builder().name("users").build().unwrap();

        assert_eq!(descriptor.kind(), OperationKind::Query);
        assert!(descriptor.default_fields().is_empty());
        assert!(descriptor.enum_arguments().is_empty());
    }

    #[test]
    fn test_enum_arguments_are_deduplicated_in_order() {
        let descriptor = OperationDescriptor::builder()
            .name("users")
            .enum_arguments(["status", "role"])
            .enum_argument("status")
            .build()
            .unwrap();

        assert_eq!(descriptor.enum_arguments(), ["status", "role"]);
        assert!(descriptor.is_enum_argument("role"));
        assert!(!descriptor.is_enum_argument("name"));
    }

    #[test]
    fn test_descriptor_deserializes_with_aliases() {
        let descriptor: OperationDescriptor = serde_json::from_value(json!({
            "kind": "mutation",
            "name": "updateUser",
            "output": {"id": "id", "profile": {"name": "name"}},
            "enums": ["status"]
        }))
        .unwrap();

        assert_eq!(descriptor.kind(), OperationKind::Mutation);
        assert_eq!(
            descriptor.default_fields().render(),
            "{ id profile { name } } "
        );
        assert!(descriptor.is_enum_argument("status"));
    }

    #[test]
    fn test_descriptor_deserialization_rejects_invalid_name() {
        let result: Result<OperationDescriptor, _> =
            serde_json::from_value(json!({"name": "not-valid"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor_round_trips_through_json() {
        let descriptor = OperationDescriptor::builder()
            .kind(OperationKind::Mutation)
            .name("updateUser")
            .default_fields(FieldSpec::new().field("id"))
            .enum_argument("status")
            .build()
            .unwrap();

        let json = serde_json::to_string(&descriptor).unwrap();
        let restored: OperationDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, descriptor);
    }

    #[test]
    fn test_descriptor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OperationDescriptor>();
    }
}
