//! Integration tests for operation descriptors.
//!
//! These tests verify descriptor construction, validation and JSON loading
//! through the public API.

use graphql_payload::{
    ConfigError, FieldSpec, OperationDescriptor, OperationKind, OperationName, QueryBuilder,
};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_descriptor_builder_with_all_fields() {
    let descriptor = OperationDescriptor::builder()
        .kind(OperationKind::Mutation)
        .name("updatePerson")
        .default_fields(FieldSpec::from_names(["id", "status"]))
        .enum_arguments(["status", "gender"])
        .build()
        .unwrap();

    assert_eq!(descriptor.kind(), OperationKind::Mutation);
    assert_eq!(descriptor.name(), &OperationName::new("updatePerson").unwrap());
    assert_eq!(descriptor.default_fields().render(), "{ id status } ");
    assert_eq!(descriptor.enum_arguments(), ["status", "gender"]);
}

#[test]
fn test_descriptor_builder_reports_missing_name() {
    let error = OperationDescriptor::builder().build().unwrap_err();
    assert_eq!(error, ConfigError::MissingRequiredField { field: "name" });
    assert!(error.to_string().contains("'name'"));
}

#[test]
fn test_descriptor_builder_reports_invalid_name() {
    let error = OperationDescriptor::builder()
        .name("items { id }")
        .build()
        .unwrap_err();
    assert!(matches!(error, ConfigError::InvalidOperationName { .. }));
}

// ============================================================================
// JSON Loading Tests
// ============================================================================

#[test]
fn test_descriptor_loads_from_json() {
    let descriptor: OperationDescriptor = serde_json::from_str(
        r#"{
            "kind": "mutation",
            "name": "updatePerson",
            "default_fields": {"id": "id", "address": {"city": "city"}},
            "enum_arguments": ["status"]
        }"#,
    )
    .unwrap();

    let builder = QueryBuilder::new(descriptor);
    assert_eq!(
        builder.build_update(1, &serde_json::json!({}), None).unwrap(),
        "mutation { updatePerson(id:1 ) { id address { city } } }"
    );
}

#[test]
fn test_descriptor_json_defaults_to_query_without_fields() {
    let descriptor: OperationDescriptor = serde_json::from_str(r#"{"name": "people"}"#).unwrap();

    assert_eq!(descriptor.kind(), OperationKind::Query);
    assert!(descriptor.default_fields().is_empty());
    assert!(descriptor.enum_arguments().is_empty());
}

#[test]
fn test_descriptor_json_accepts_capitalized_kind() {
    let descriptor: OperationDescriptor =
        serde_json::from_str(r#"{"kind": "Mutation", "name": "people"}"#).unwrap();
    assert_eq!(descriptor.kind(), OperationKind::Mutation);
}

#[test]
fn test_descriptor_json_rejects_unknown_kind() {
    let result: Result<OperationDescriptor, _> =
        serde_json::from_str(r#"{"kind": "subscription", "name": "people"}"#);
    assert!(result.is_err());
}

#[test]
fn test_descriptor_json_rejects_invalid_fields() {
    let result: Result<OperationDescriptor, _> =
        serde_json::from_str(r#"{"name": "people", "default_fields": {"id": true}}"#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid field spec"));
}

#[test]
fn test_descriptor_is_clone_and_debug() {
    let descriptor = OperationDescriptor::builder().name("people").build().unwrap();
    let cloned = descriptor.clone();
    assert_eq!(cloned, descriptor);
    assert!(format!("{descriptor:?}").contains("OperationDescriptor"));
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OperationDescriptor>();
    assert_send_sync::<QueryBuilder>();
    assert_send_sync::<FieldSpec>();
}
