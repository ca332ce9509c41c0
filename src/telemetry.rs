//! Telemetry metric name constants.
//!
//! Centralised metric names for muninn operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `muninn_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `kind` — descriptor kind: "operation" or "request"

/// Total cache hits in the context cache.
///
/// Labels: `kind`.
pub const CACHE_HITS_TOTAL: &str = "muninn_cache_hits_total";

/// Total cache misses in the context cache.
///
/// Only emitted for cached lookups; uncached acquisitions never consult the
/// cache and count only toward [`CONTEXTS_CREATED_TOTAL`].
///
/// Labels: `kind`.
pub const CACHE_MISSES_TOTAL: &str = "muninn_cache_misses_total";

/// Total request contexts built by the factory.
///
/// Labels: `kind`.
pub const CONTEXTS_CREATED_TOTAL: &str = "muninn_contexts_created_total";
