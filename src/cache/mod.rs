//! Structural context cache.
//!
//! [`ContextCache`] memoizes request contexts by the *content* of their
//! canonical descriptor, not by identity: two deeply-equal inputs acquired
//! with caching enabled yield the same live [`RequestContext`] instance.
//! Entries are scoped per [`InputKind`] — an operation never matches a
//! request entry, however similar the shapes.
//!
//! # Architecture
//!
//! Each kind has its own append-only entry list guarded by a mutex, scanned
//! linearly with the canonical form's structural equality. A hash-keyed map
//! would need a hash that agrees exactly with that equality (key-order
//! independent for objects), which JSON values do not provide; the linear
//! scan keeps lookup and comparison trivially in agreement. The lock is held
//! across the whole lookup-then-insert, so concurrent misses for the same
//! input cannot create duplicate contexts.
//!
//! There is no eviction, TTL, or invalidation: entries live as long as the
//! cache, and the cache only grows. Eviction would break the identity
//! guarantee — a handle returned once must keep being returned for equal
//! input. Unbounded growth under unique-input churn is the accepted cost;
//! callers that do not want memoization pass `use_cache = false` and the
//! cache is never touched.

use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use crate::classify::classify;
use crate::context::{ContextFactory, DefaultContextFactory, RequestContext};
use crate::error::{MuninnError, Result};
use crate::telemetry;
use crate::types::{ClassifiedInput, InputKind, PartialHttpRequest};

/// Memoizing store of request contexts, keyed by canonical descriptor.
///
/// Explicitly owned state — construct one per embedding scope (application,
/// test) rather than sharing a global instance.
pub struct ContextCache {
    factory: Box<dyn ContextFactory>,
    operations: Mutex<Vec<(Value, RequestContext)>>,
    requests: Mutex<Vec<(PartialHttpRequest, RequestContext)>>,
}

impl ContextCache {
    /// Create an empty cache with the built-in context factory.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new builder for configuring cache instances.
    pub fn builder() -> ContextCacheBuilder {
        ContextCacheBuilder::new()
    }

    /// Resolve a request descriptor to a context.
    ///
    /// The descriptor is classified and canonicalized first (see
    /// [`classify`]). With `use_cache = false` a fresh context is built on
    /// every call and the cache is neither read nor written. With
    /// `use_cache = true` the first entry of the matching kind whose stored
    /// canonical value is structurally equal is returned; otherwise a new
    /// context is built, stored, and returned.
    ///
    /// Factory failures propagate unmodified.
    pub fn acquire(&self, input: &Value, use_cache: bool) -> Result<RequestContext> {
        let classified = classify(input);
        if !use_cache {
            return self.create(classified);
        }
        match classified {
            ClassifiedInput::Operation(op) => self.lookup_or_create(
                &self.operations,
                op,
                InputKind::Operation,
                ClassifiedInput::Operation,
            ),
            ClassifiedInput::Request(req) => self.lookup_or_create(
                &self.requests,
                req,
                InputKind::Request,
                ClassifiedInput::Request,
            ),
        }
    }

    /// [`acquire`](Self::acquire) for a descriptor in JSON text form.
    pub fn acquire_str(&self, json: &str, use_cache: bool) -> Result<RequestContext> {
        let input: Value = serde_json::from_str(json)?;
        self.acquire(&input, use_cache)
    }

    /// Number of memoized contexts across both kinds.
    pub fn len(&self) -> usize {
        count_entries(&self.operations) + count_entries(&self.requests)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup_or_create<K: PartialEq + Clone>(
        &self,
        entries: &Mutex<Vec<(K, RequestContext)>>,
        key: K,
        kind: InputKind,
        wrap: fn(K) -> ClassifiedInput,
    ) -> Result<RequestContext> {
        let mut entries = entries
            .lock()
            .map_err(|e| MuninnError::Internal(format!("failed to acquire cache lock: {e}")))?;

        if let Some(position) = entries.iter().position(|(stored, _)| *stored == key) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "kind" => kind.as_str()).increment(1);
            debug!(kind = kind.as_str(), entry = position, "context cache hit");
            return Ok(entries[position].1.clone());
        }

        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "kind" => kind.as_str()).increment(1);
        debug!(kind = kind.as_str(), entries = entries.len(), "context cache miss");
        let context = self.create(wrap(key.clone()))?;
        entries.push((key, context.clone()));
        Ok(context)
    }

    fn create(&self, input: ClassifiedInput) -> Result<RequestContext> {
        let kind = input.kind();
        let context = self.factory.create(input)?;
        metrics::counter!(telemetry::CONTEXTS_CREATED_TOTAL, "kind" => kind.as_str()).increment(1);
        Ok(context)
    }
}

impl Default for ContextCache {
    fn default() -> Self {
        Self::new()
    }
}

fn count_entries<K>(entries: &Mutex<Vec<(K, RequestContext)>>) -> usize {
    match entries.lock() {
        Ok(guard) => guard.len(),
        // A poisoned lock still holds a coherent list.
        Err(poisoned) => poisoned.into_inner().len(),
    }
}

/// Builder for configuring cache instances.
pub struct ContextCacheBuilder {
    factory: Option<Box<dyn ContextFactory>>,
}

impl ContextCacheBuilder {
    pub fn new() -> Self {
        Self { factory: None }
    }

    /// Substitute a custom context factory.
    pub fn factory(mut self, factory: impl ContextFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> ContextCache {
        ContextCache {
            factory: self
                .factory
                .unwrap_or_else(|| Box::new(DefaultContextFactory)),
            operations: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl Default for ContextCacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}
