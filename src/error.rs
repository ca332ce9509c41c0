//! Muninn error types

/// Muninn error types
#[derive(Debug, thiserror::Error)]
pub enum MuninnError {
    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom [`ContextFactory`](crate::ContextFactory) refused to build a
    /// context. The built-in factory never returns this.
    #[error("context factory error: {0}")]
    Factory(String),

    // Internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for Muninn operations
pub type Result<T> = std::result::Result<T, MuninnError>;
