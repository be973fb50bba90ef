//! # GraphQL Payload Builder
//!
//! Assembles GraphQL query and mutation documents as plain strings from an
//! operation descriptor, per-call arguments and an output field selection.
//! No transport, schema introspection or response parsing is involved: the
//! rendered document is handed unmodified to whatever client sends it.
//!
//! ## Overview
//!
//! This crate provides:
//! - Operation metadata via [`OperationDescriptor`] and [`OperationDescriptorBuilder`]
//! - Validated [`OperationName`] and [`OperationKind`] values
//! - Ordered, nested output selections via [`FieldSpec`]
//! - Argument serialization with bare enum symbols
//! - The [`QueryBuilder`] document templates: plain, update-by-id, list,
//!   single record, paginated and search
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_payload::{FieldSpec, OperationDescriptor, OperationKind, QueryBuilder};
//! use serde_json::json;
//!
//! let descriptor = OperationDescriptor::builder()
//!     .kind(OperationKind::Mutation)
//!     .name("updateUser")
//!     .default_fields(FieldSpec::new().field("id").nested("profile", FieldSpec::from_names(["name"])))
//!     .enum_argument("status")
//!     .build()
//!     .unwrap();
//!
//! let builder = QueryBuilder::new(descriptor);
//! let document = builder
//!     .build_update(42, &json!({"status": "ACTIVE"}), None)
//!     .unwrap();
//!
//! assert_eq!(
//!     document,
//!     "mutation { updateUser(id:42 status:ACTIVE) { id profile { name } } }"
//! );
//! ```
//!
//! ## Loading Descriptors
//!
//! Descriptors are plain configuration and deserialize from JSON:
//!
//! ```rust
//! use graphql_payload::{OperationDescriptor, Pagination, QueryBuilder, FieldSpec};
//!
//! let descriptor: OperationDescriptor = serde_json::from_str(
//!     r#"{"name": "people", "default_fields": {"id": "id", "address": ["city"]}}"#,
//! )
//! .unwrap();
//!
//! let builder = QueryBuilder::new(descriptor);
//! assert_eq!(
//!     builder.build_paginate(Pagination::default(), &FieldSpec::new()),
//!     "query { people(limit:1,page:1){data{ id address { city } } },total,per_page }"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Operation metadata is injected at construction
//! - **Fail-fast validation**: Descriptor values validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Pure rendering**: Every build call depends only on its inputs

pub mod builder;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use builder::{
    request_body, BuildError, EnumStrategy, FieldNode, FieldSpec, Pagination, QueryBuilder,
};
pub use config::{OperationDescriptor, OperationDescriptorBuilder, OperationKind, OperationName};
pub use error::ConfigError;
