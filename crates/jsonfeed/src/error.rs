// crates/jsonfeed/src/error.rs
//! Error types for feed decoding

use thiserror::Error;

/// Result type for feed decoding operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while decoding a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// Input is not well-formed JSON, or does not match the target shape.
    /// Carries the decoder's error unchanged.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Input stream could not be fully consumed
    #[error("Failed to read feed input: {0}")]
    Io(#[from] std::io::Error),

    /// No input source was supplied
    #[error("Feed source was nil")]
    NilSource,

    /// Input parsed as JSON but holds no recognizable feed data
    #[error("JSON decoded, but the feed is null or empty; check the input for valid JSON Feed data")]
    EmptyFeed,

    /// In-place decode produced a null target
    #[error("JSON decoded, but the target is null")]
    NilTarget,

    /// Input exceeded the configured size limit
    #[error("Feed input exceeds the limit of {limit} bytes")]
    TooLarge { limit: u64 },

    /// Decoded feed failed validation
    #[error("Feed is not valid: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// Parser options are inconsistent
    #[error("Invalid parser options: {}", join_errors(.0))]
    InvalidOptions(Vec<ValidationError>),
}

/// Broad category of a [`FeedError`], for callers that branch on the
/// kind of failure rather than its details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not JSON, or JSON of the wrong type for the target
    Syntax,
    /// Reading the input failed
    Read,
    /// No source given
    NilSource,
    /// Valid JSON, but not a feed
    SemanticEmpty,
    /// In-place target ended up null
    NilTarget,
    /// Size limit exceeded
    TooLarge,
    /// Failed validation
    Invalid,
    /// Rejected parser options
    Options,
}

impl FeedError {
    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::Json(_) => ErrorKind::Syntax,
            FeedError::Io(_) => ErrorKind::Read,
            FeedError::NilSource => ErrorKind::NilSource,
            FeedError::EmptyFeed => ErrorKind::SemanticEmpty,
            FeedError::NilTarget => ErrorKind::NilTarget,
            FeedError::TooLarge { .. } => ErrorKind::TooLarge,
            FeedError::Invalid(_) => ErrorKind::Invalid,
            FeedError::InvalidOptions(_) => ErrorKind::Options,
        }
    }
}

/// A single failed validity rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the field (e.g., "items" or "hubs")
    pub field: String,

    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
