//! Muninn - request descriptor normalization with memoized request contexts
//!
//! This crate turns heterogeneous "request descriptor" inputs — an
//! API-operation definition, a partial HTTP request, or junk — into a
//! canonical internal form, and hands back an opaque [`RequestContext`]
//! for it. Acquiring with caching enabled memoizes the context by the
//! *structure* of its canonical descriptor: a later call with a deeply
//! equal input returns the same live handle, mutations and all.
//!
//! # Example
//!
//! ```rust
//! use muninn::ContextCache;
//! use serde_json::json;
//!
//! fn main() -> muninn::Result<()> {
//!     let cache = ContextCache::new();
//!
//!     let descriptor = json!({
//!         "method": "GET",
//!         "url": "http://todos.example/todos",
//!         "query": { "foo": "bar", "bear": ["cave"] },
//!     });
//!
//!     let context = cache.acquire(&descriptor, true)?;
//!     let request = context
//!         .to_partial_http_request()
//!         .expect("request-kind context");
//!     assert_eq!(request.method, "get");
//!     // Single-element query sequences collapse to their sole element.
//!     assert_eq!(request.query.as_ref().map(|q| &q["bear"]), Some(&json!("cave")));
//!
//!     // A structurally equal descriptor resolves to the same live handle.
//!     let again = cache.acquire(&descriptor, true)?;
//!     assert!(muninn::RequestContext::ptr_eq(&context, &again));
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod classify;
pub mod context;
pub mod error;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{ContextCache, ContextCacheBuilder};
pub use classify::classify;
pub use context::{ContextFactory, DefaultContextFactory, RequestContext};
pub use error::{MuninnError, Result};

// Re-export all types
pub use types::{ClassifiedInput, InputKind, JsonMap, PartialHttpRequest};
