//! Error types for request dispatch.
//!
//! None of these ever reach the voice platform: handlers convert their own
//! failures into an apology, and the skill boundary converts the rest.

/// Errors from scanning the dataset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("Non-numeric value for '{key}' in record {index}")]
    NonNumeric { key: String, index: usize },
    #[error("Sum of '{key}' is not a finite number")]
    NonFinite { key: String },
}

/// Errors raised while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("No handler can serve request: {0}")]
    NoHandler(String),
    #[error("Required slot missing: {0}")]
    MissingSlot(String),
    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] AggregateError),
    #[error("Handler failed: {0}")]
    HandlerFailed(String),
    #[error("Handler panicked: {0}")]
    Panicked(String),
}
