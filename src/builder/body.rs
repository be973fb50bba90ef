//! Request body construction.

use serde_json::Value;

/// Wraps a rendered document in the JSON body GraphQL endpoints accept.
///
/// The document is passed through untouched; `variables` is emitted as
/// `null` when absent.
///
/// # Example
///
/// ```rust
/// use graphql_payload::request_body;
/// use serde_json::json;
///
/// let body = request_body("query { shop { name } }", None);
/// assert_eq!(body, json!({"query": "query { shop { name } }", "variables": null}));
/// ```
#[must_use]
pub fn request_body(document: &str, variables: Option<Value>) -> Value {
    serde_json::json!({
        "query": document,
        "variables": variables
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_includes_variables() {
        let body = request_body("query { users { id } }", Some(json!({"first": 10})));
        assert_eq!(body["query"], "query { users { id } }");
        assert_eq!(body["variables"]["first"], 10);
    }

    #[test]
    fn test_request_body_keeps_document_verbatim() {
        let document = r#"mutation { update(id:1 name:"Zoë") { id } }"#;
        let body = request_body(document, None);
        assert_eq!(body["query"].as_str(), Some(document));
        assert!(body["variables"].is_null());
    }
}
