//! Request contexts and the factory seam.
//!
//! A [`RequestContext`] is the opaque handle returned to callers: it holds
//! the classified descriptor it was built from (the operation reference
//! unchanged, or the canonical request) plus the mutable per-context state
//! layered on top. Handles are `Arc`-shared — cloning is cheap, and a
//! mutation through any clone is visible to every holder, including later
//! cache hits that return the same handle.
//!
//! [`ContextFactory`] is the construction seam: the cache builds contexts
//! through it, so tests and embedders can substitute their own factory.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::Result;
use crate::types::{ClassifiedInput, InputKind, PartialHttpRequest};

/// Shared handle to a request context.
#[derive(Debug, Clone)]
pub struct RequestContext {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    input: ClassifiedInput,
    public_base_url: RwLock<Option<String>>,
}

impl RequestContext {
    /// Build a context seeded from a classified descriptor.
    pub fn new(input: ClassifiedInput) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                input,
                public_base_url: RwLock::new(None),
            }),
        }
    }

    pub fn kind(&self) -> InputKind {
        self.inner.input.kind()
    }

    /// The operation definition, unchanged, for operation-kind contexts.
    pub fn operation(&self) -> Option<&Value> {
        match &self.inner.input {
            ClassifiedInput::Operation(op) => Some(op),
            ClassifiedInput::Request(_) => None,
        }
    }

    /// The canonical request this context was constructed with, for
    /// request-kind contexts.
    ///
    /// Returns exactly the fields populated at construction — no further
    /// defaulting is applied here.
    pub fn to_partial_http_request(&self) -> Option<PartialHttpRequest> {
        match &self.inner.input {
            ClassifiedInput::Request(req) => Some(req.clone()),
            ClassifiedInput::Operation(_) => None,
        }
    }

    /// The base-URL override, if one has been set.
    pub fn public_base_url(&self) -> Option<String> {
        match self.inner.public_base_url.read() {
            Ok(guard) => guard.clone(),
            // A poisoned override still holds a coherent value.
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Override the base URL. Visible to every holder of this handle.
    pub fn set_public_base_url(&self, base_url: impl Into<String>) {
        let value = Some(base_url.into());
        match self.inner.public_base_url.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    /// Whether two handles are the same live instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

/// Construction seam for request contexts.
///
/// The cache calls [`create`](ContextFactory::create) on every miss and on
/// every uncached acquisition. A well-formed classified input must not be
/// rejected by the built-in factory; failures from custom factories
/// propagate to the caller unmodified.
pub trait ContextFactory: Send + Sync {
    fn create(&self, input: ClassifiedInput) -> Result<RequestContext>;
}

/// Builds contexts directly from the classified input. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContextFactory;

impl ContextFactory for DefaultContextFactory {
    fn create(&self, input: ClassifiedInput) -> Result<RequestContext> {
        Ok(RequestContext::new(input))
    }
}
