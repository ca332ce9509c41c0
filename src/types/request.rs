//! Canonical partial HTTP request

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON object, as used for headers and query parameters.
pub type JsonMap = serde_json::Map<String, Value>;

/// Canonical form of a request-shaped descriptor.
///
/// Produced by [`classify`](crate::classify::classify) and used both as the
/// state seeded into a [`RequestContext`](crate::RequestContext) and as the
/// cache key for structural-equality lookup. The derived `PartialEq` is the
/// deep equality the cache relies on: object fields compare by key set
/// (insertion order irrelevant), arrays element-wise in order, scalars by
/// value — exactly `serde_json`'s semantics.
///
/// Serializes with the wire-shape field names (`baseUrl`), so a canonical
/// request round-trips through classification unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialHttpRequest {
    /// HTTP method, lower-cased. Defaults to `"get"`.
    pub method: String,
    /// Request URL. Defaults to `"/"`.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl Default for PartialHttpRequest {
    fn default() -> Self {
        Self {
            method: "get".to_string(),
            url: "/".to_string(),
            base_url: None,
            headers: None,
            query: None,
            body: None,
        }
    }
}

impl PartialHttpRequest {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_lowercase();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a single header, creating the header map if needed.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(JsonMap::new)
            .insert(name.into(), Value::String(value.into()));
        self
    }

    /// Add a single query parameter, creating the query map if needed.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(JsonMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }
}
