//! Tests for [`RequestContext`] — accessors and shared mutable state.

use muninn::{ContextCache, InputKind, PartialHttpRequest, RequestContext, classify};
use serde_json::{Value, json};

#[test]
fn request_context_exposes_exact_construction_fields() {
    let cache = ContextCache::new();
    let input = json!({
        "method": "get",
        "url": "http://todos.example/todos",
        "headers": { "content-type": "application/json" },
    });

    let context = cache.acquire(&input, false).unwrap();
    let request = context.to_partial_http_request().unwrap();

    // Exactly what normalization produced — no further defaulting.
    assert_eq!(request.method, "get");
    assert_eq!(request.url, "http://todos.example/todos");
    assert_eq!(
        request.headers.as_ref().map(|h| &h["content-type"]),
        Some(&json!("application/json"))
    );
    assert!(request.base_url.is_none());
    assert!(request.query.is_none());
    assert!(request.body.is_none());
}

#[test]
fn junk_input_context_exposes_the_default_request() {
    let cache = ContextCache::new();

    let context = cache.acquire(&Value::Null, false).unwrap();

    assert_eq!(
        context.to_partial_http_request(),
        Some(PartialHttpRequest::default())
    );
    assert_eq!(context.kind(), InputKind::Request);
}

#[test]
fn operation_context_exposes_the_unchanged_operation() {
    let cache = ContextCache::new();
    let operation = json!({
        "id": "todo",
        "method": "get",
        "path": "/todos",
        "responses": [ { "code": "200" } ],
    });

    let context = cache.acquire(&operation, false).unwrap();

    assert_eq!(context.kind(), InputKind::Operation);
    assert_eq!(context.operation(), Some(&operation));
    assert!(context.to_partial_http_request().is_none());
}

#[test]
fn request_context_has_no_operation() {
    let cache = ContextCache::new();
    let context = cache.acquire(&json!({"url": "/todos"}), false).unwrap();
    assert!(context.operation().is_none());
}

#[test]
fn base_url_override_is_shared_across_clones() {
    let context = RequestContext::new(classify(&json!({"url": "/todos"})));
    let clone = context.clone();

    assert!(context.public_base_url().is_none());

    clone.set_public_base_url("http://todos.example");

    // Clones share one live instance.
    assert!(RequestContext::ptr_eq(&context, &clone));
    assert_eq!(
        context.public_base_url().as_deref(),
        Some("http://todos.example")
    );
}

#[test]
fn base_url_override_can_be_replaced() {
    let context = RequestContext::new(classify(&json!({"url": "/todos"})));

    context.set_public_base_url("http://a.example");
    context.set_public_base_url("http://b.example");

    assert_eq!(context.public_base_url().as_deref(), Some("http://b.example"));
}

#[test]
fn override_does_not_leak_into_the_canonical_request() {
    let context = RequestContext::new(classify(&json!({"url": "/todos"})));

    context.set_public_base_url("http://todos.example");

    // The canonical form keeps the fields it was constructed with.
    let request = context.to_partial_http_request().unwrap();
    assert!(request.base_url.is_none());
}
