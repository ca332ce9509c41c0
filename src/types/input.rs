//! Classified request descriptors

use serde_json::Value;

use super::request::PartialHttpRequest;

/// Kind of a classified descriptor.
///
/// Closed: every input resolves to one of the two kinds, however malformed.
/// The cache scopes its entries per kind, so an operation never matches a
/// request entry and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Operation,
    Request,
}

impl InputKind {
    /// Stable label, used for metrics and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Operation => "operation",
            InputKind::Request => "request",
        }
    }
}

/// A request descriptor after classification.
///
/// All shape discrimination happens in [`classify`](crate::classify::classify);
/// downstream code matches on this enum instead of re-inspecting JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedInput {
    /// An API-operation definition, passed through unchanged.
    Operation(Value),
    /// Anything else, normalized to its canonical request form.
    Request(PartialHttpRequest),
}

impl ClassifiedInput {
    pub fn kind(&self) -> InputKind {
        match self {
            ClassifiedInput::Operation(_) => InputKind::Operation,
            ClassifiedInput::Request(_) => InputKind::Request,
        }
    }
}
