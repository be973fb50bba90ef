//! GraphQL document assembly.
//!
//! This module provides the [`QueryBuilder`], which turns per-call arguments
//! and field selections into query or mutation documents for the operation
//! described by an [`OperationDescriptor`].
//!
//! # Overview
//!
//! - [`QueryBuilder`]: renders documents for one operation
//! - [`FieldSpec`] / [`FieldNode`]: ordered, nested output selections
//! - [`EnumStrategy`]: how enum arguments lose their quotes
//! - [`Pagination`]: `limit` / `page` pair for paginated operations
//! - [`BuildError`]: argument serialization failures
//! - [`request_body`]: wraps a document into the JSON body a transport posts
//!
//! # Document Shapes
//!
//! | Method | Document |
//! |---|---|
//! | [`build`](QueryBuilder::build) | `<kind> { <name>(<args>) <graph> }` |
//! | [`build_without_fields`](QueryBuilder::build_without_fields) | `<kind> { <name>(<args>) }` |
//! | [`build_update`](QueryBuilder::build_update) | `<kind> { <name>(id:<id> <args>) <graph> }` |
//! | [`build_list`](QueryBuilder::build_list) | `<kind> { <name> { <graph> } }` |
//! | [`build_single`](QueryBuilder::build_single) | `<kind> { <name>(id:<id>) <graph> }` |
//! | [`build_paginate`](QueryBuilder::build_paginate) | `<kind> { <name>(limit:<l>,page:<p>){data<graph>},total,per_page }` |
//! | [`build_search`](QueryBuilder::build_search) | `<kind> { <name>(limit:<l>,page:<p>,<args>){data <graph> }}` |
//!
//! # Example
//!
//! ```rust
//! use graphql_payload::{FieldSpec, OperationDescriptor, QueryBuilder};
//! use serde_json::json;
//!
//! let descriptor = OperationDescriptor::builder()
//!     .name("users")
//!     .default_fields(FieldSpec::from_names(["id", "name"]))
//!     .enum_argument("status")
//!     .build()
//!     .unwrap();
//! let builder = QueryBuilder::new(descriptor);
//!
//! let document = builder
//!     .build(&json!({"status": "ACTIVE", "name": "Bob"}), None)
//!     .unwrap();
//! assert_eq!(document, r#"query { users(status:ACTIVE,name:"Bob") { id name } }"#);
//! ```

mod arguments;
mod body;
mod errors;
mod fields;
mod finite;

pub use arguments::EnumStrategy;
pub use body::request_body;
pub use errors::BuildError;
pub use fields::{FieldNode, FieldSpec};

use serde::Serialize;
use std::fmt::Display;

use crate::config::{OperationDescriptor, OperationKind, OperationName};

/// Page selection for [`QueryBuilder::build_paginate`] and
/// [`QueryBuilder::build_search`].
///
/// Defaults to `limit: 1, page: 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// Records per page.
    pub limit: u32,
    /// One-based page number.
    pub page: u32,
}

impl Pagination {
    /// Creates a page selection.
    #[must_use]
    pub const fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Renders GraphQL documents for a single operation.
///
/// Every method is a pure function of its inputs and the descriptor fixed at
/// construction. Rendered graphs always end with a space, and each template
/// relies on that space to separate the graph from the closing brace.
///
/// # Thread Safety
///
/// `QueryBuilder` is `Send + Sync`; calls never mutate it.
///
/// # Example
///
/// ```rust
/// use graphql_payload::{FieldSpec, OperationDescriptor, Pagination, QueryBuilder};
///
/// let descriptor = OperationDescriptor::builder().name("items").build().unwrap();
/// let builder = QueryBuilder::new(descriptor);
///
/// let document = builder.build_paginate(Pagination::new(10, 2), &FieldSpec::from_names(["id"]));
/// assert_eq!(document, "query { items(limit:10,page:2){data{ id } },total,per_page }");
/// ```
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    descriptor: OperationDescriptor,
    enum_strategy: EnumStrategy,
}

// Verify QueryBuilder is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryBuilder>();
};

impl QueryBuilder {
    /// Creates a builder using [`EnumStrategy::Structural`].
    #[must_use]
    pub fn new(descriptor: OperationDescriptor) -> Self {
        Self::with_enum_strategy(descriptor, EnumStrategy::default())
    }

    /// Creates a builder with an explicit enum substitution strategy.
    #[must_use]
    pub fn with_enum_strategy(descriptor: OperationDescriptor, enum_strategy: EnumStrategy) -> Self {
        if enum_strategy == EnumStrategy::TextReplace && !descriptor.enum_arguments().is_empty() {
            tracing::debug!(
                "Operation '{}' replaces enum values textually; equal string arguments will be unquoted too",
                descriptor.name()
            );
        }

        Self {
            descriptor,
            enum_strategy,
        }
    }

    /// Returns the descriptor this builder renders documents for.
    #[must_use]
    pub const fn descriptor(&self) -> &OperationDescriptor {
        &self.descriptor
    }

    /// Returns the enum substitution strategy.
    #[must_use]
    pub const fn enum_strategy(&self) -> EnumStrategy {
        self.enum_strategy
    }

    /// Builds `<kind> { <name>(<args>) <graph> }`.
    ///
    /// When `fields` is `None` or empty the descriptor's default fields are
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the arguments cannot be serialized.
    pub fn build<A>(&self, arguments: &A, fields: Option<&FieldSpec>) -> Result<String, BuildError>
    where
        A: Serialize + ?Sized,
    {
        let arguments = self.serialize_arguments(arguments)?;
        let graph = self.render_graph(fields);

        Ok(self.finish(format!(
            "{} {{ {}({arguments}) {graph}}}",
            self.kind(),
            self.name()
        )))
    }

    /// Builds `<kind> { <name>(<args>) }`, for mutations whose result is not
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the arguments cannot be serialized.
    pub fn build_without_fields<A>(&self, arguments: &A) -> Result<String, BuildError>
    where
        A: Serialize + ?Sized,
    {
        let arguments = self.serialize_arguments(arguments)?;

        Ok(self.finish(format!(
            "{} {{ {}({arguments}) }}",
            self.kind(),
            self.name()
        )))
    }

    /// Builds `<kind> { <name>(id:<id> <args>) <graph> }`.
    ///
    /// The id is written bare. The remaining arguments follow after a single
    /// space with no comma; GraphQL treats commas as whitespace, so the
    /// document parses either way.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the arguments cannot be serialized.
    pub fn build_update<A>(
        &self,
        id: impl Display,
        arguments: &A,
        fields: Option<&FieldSpec>,
    ) -> Result<String, BuildError>
    where
        A: Serialize + ?Sized,
    {
        let arguments = self.serialize_arguments(arguments)?;
        let graph = self.render_graph(fields);

        Ok(self.finish(format!(
            "{} {{ {}(id:{id} {arguments}) {graph}}}",
            self.kind(),
            self.name()
        )))
    }

    /// Builds `<kind> { <name> { <graph> } }`, an unfiltered collection fetch.
    #[must_use]
    pub fn build_list(&self, fields: &FieldSpec) -> String {
        let graph = self.render_graph(Some(fields));

        self.finish(format!("{} {{ {} {{ {graph}}} }}", self.kind(), self.name()))
    }

    /// Builds `<kind> { <name>(id:<id>) <graph> }`, a single record fetch.
    #[must_use]
    pub fn build_single(&self, id: impl Display, fields: &FieldSpec) -> String {
        let graph = self.render_graph(Some(fields));

        self.finish(format!(
            "{} {{ {}(id:{id}) {graph}}}",
            self.kind(),
            self.name()
        ))
    }

    /// Builds a paginated collection fetch wrapped in the
    /// `data` / `total` / `per_page` envelope.
    #[must_use]
    pub fn build_paginate(&self, pagination: Pagination, fields: &FieldSpec) -> String {
        let Pagination { limit, page } = pagination;
        let graph = self.render_graph(Some(fields));

        self.finish(format!(
            "{} {{ {}(limit:{limit},page:{page}){{data{graph}}},total,per_page }}",
            self.kind(),
            self.name()
        ))
    }

    /// Builds a paginated collection fetch filtered by `arguments`.
    ///
    /// With no arguments the separating comma after `page` is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the arguments cannot be serialized.
    pub fn build_search<A>(
        &self,
        pagination: Pagination,
        arguments: &A,
        fields: &FieldSpec,
    ) -> Result<String, BuildError>
    where
        A: Serialize + ?Sized,
    {
        let Pagination { limit, page } = pagination;
        let arguments = self.serialize_arguments(arguments)?;
        let separator = if arguments.is_empty() { "" } else { "," };
        let graph = self.render_graph(Some(fields));

        Ok(self.finish(format!(
            "{} {{ {}(limit:{limit},page:{page}{separator}{arguments}){{data {graph}}}}}",
            self.kind(),
            self.name()
        )))
    }

    /// Serializes `arguments` into `key:value` pairs separated by commas,
    /// with enum arguments unquoted.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the arguments cannot be serialized or are
    /// not a map.
    pub fn serialize_arguments<A>(&self, arguments: &A) -> Result<String, BuildError>
    where
        A: Serialize + ?Sized,
    {
        arguments::serialize_arguments(
            arguments,
            self.descriptor.enum_arguments(),
            self.enum_strategy,
        )
    }

    /// Renders `fields`, falling back to the default fields when `fields` is
    /// `None` or empty, and for every nested sub-object that is empty.
    #[must_use]
    pub fn render_graph(&self, fields: Option<&FieldSpec>) -> String {
        match fields {
            Some(fields) if !fields.is_empty() => {
                fields.render_with_defaults(self.descriptor.default_fields())
            }
            _ => self.descriptor.default_fields().render(),
        }
    }

    const fn kind(&self) -> OperationKind {
        self.descriptor.kind()
    }

    const fn name(&self) -> &OperationName {
        self.descriptor.name()
    }

    fn finish(&self, document: String) -> String {
        tracing::trace!("Built {} document for '{}': {}", self.kind(), self.name(), document);
        document
    }
}

impl From<OperationDescriptor> for QueryBuilder {
    fn from(descriptor: OperationDescriptor) -> Self {
        Self::new(descriptor)
    }
}
