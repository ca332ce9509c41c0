//! Input classification and normalization.
//!
//! Maps an arbitrary JSON value to a [`ClassifiedInput`]: operation-shaped
//! objects pass through unchanged, every other object is canonicalized to a
//! [`PartialHttpRequest`], and non-objects (including `null`) resolve to the
//! all-defaults request. The function is total and pure — no input errors,
//! no side effects — and deterministic, which is what makes the cache's
//! structural-equality lookup meaningful.

use serde_json::Value;

use crate::types::{ClassifiedInput, JsonMap, PartialHttpRequest};

/// Classify a request descriptor and produce its canonical form.
///
/// Classification rule:
/// - an object carrying an operation discriminant (`responses` or `id`)
///   is an operation and is cloned through unchanged;
/// - any other object is a request, canonicalized by [`normalize_request`];
/// - everything else (`null`, strings, numbers, booleans, arrays) is a
///   request with default method and url.
pub fn classify(input: &Value) -> ClassifiedInput {
    match input {
        Value::Object(obj) if is_operation_shaped(obj) => {
            ClassifiedInput::Operation(input.clone())
        }
        Value::Object(obj) => ClassifiedInput::Request(normalize_request(obj)),
        _ => ClassifiedInput::Request(PartialHttpRequest::default()),
    }
}

/// Operation discriminant: a `responses` collection or an operation `id`.
///
/// Request-shaped objects carry neither (method/url/baseUrl/headers/query/body).
fn is_operation_shaped(obj: &JsonMap) -> bool {
    obj.contains_key("responses") || obj.contains_key("id")
}

/// Canonicalize a request-shaped object.
///
/// String fields that hold a non-string value, and map fields that hold a
/// non-object value, are treated as absent; classification never fails.
fn normalize_request(obj: &JsonMap) -> PartialHttpRequest {
    let method = match obj.get("method") {
        Some(Value::String(m)) => m.to_lowercase(),
        _ => "get".to_string(),
    };
    let url = match obj.get("url") {
        Some(Value::String(u)) => u.clone(),
        _ => "/".to_string(),
    };
    let base_url = match obj.get("baseUrl") {
        Some(Value::String(b)) => Some(b.clone()),
        _ => None,
    };
    let headers = match obj.get("headers") {
        Some(Value::Object(h)) => Some(h.clone()),
        _ => None,
    };
    let query = match obj.get("query") {
        Some(Value::Object(q)) => Some(normalize_query(q)),
        _ => None,
    };
    let body = obj.get("body").cloned();

    PartialHttpRequest {
        method,
        url,
        base_url,
        headers,
        query,
        body,
    }
}

/// Collapse single-element arrays in query values to their sole element.
///
/// `{foo: "bar", bear: ["cave"]}` becomes `{foo: "bar", bear: "cave"}`.
/// Empty arrays, multi-element arrays, and nested objects are copied
/// verbatim — only the exactly-one-element shape is coerced.
fn normalize_query(query: &JsonMap) -> JsonMap {
    query
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::Array(items) if items.len() == 1 => items[0].clone(),
                other => other.clone(),
            };
            (name.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_element_arrays_collapse() {
        let query = json!({"bear": ["cave"]});
        let normalized = normalize_query(query.as_object().unwrap());
        assert_eq!(normalized["bear"], json!("cave"));
    }

    #[test]
    fn scalars_and_longer_arrays_pass_through() {
        let query = json!({"foo": "bar", "tags": ["a", "b"], "empty": []});
        let normalized = normalize_query(query.as_object().unwrap());
        assert_eq!(normalized["foo"], json!("bar"));
        assert_eq!(normalized["tags"], json!(["a", "b"]));
        assert_eq!(normalized["empty"], json!([]));
    }

    #[test]
    fn nested_objects_pass_through() {
        let query = json!({"filter": {"deep": ["x"]}});
        let normalized = normalize_query(query.as_object().unwrap());
        // Collapsing is top-level only; nested shapes are untouched.
        assert_eq!(normalized["filter"], json!({"deep": ["x"]}));
    }

    #[test]
    fn operation_discriminant_on_responses() {
        assert!(is_operation_shaped(
            json!({"responses": []}).as_object().unwrap()
        ));
    }

    #[test]
    fn operation_discriminant_on_id() {
        assert!(is_operation_shaped(json!({"id": "todo"}).as_object().unwrap()));
    }

    #[test]
    fn plain_request_is_not_operation_shaped() {
        assert!(!is_operation_shaped(
            json!({"method": "get", "url": "/todos"}).as_object().unwrap()
        ));
    }

    #[test]
    fn malformed_fields_degrade_to_defaults() {
        let req = normalize_request(
            json!({"method": 42, "url": true, "baseUrl": [], "headers": "nope", "query": 1})
                .as_object()
                .unwrap(),
        );
        assert_eq!(req, PartialHttpRequest::default());
    }
}
