//! Error types for comment-iter

use thiserror::Error;

/// Main error type for comment-iter
#[derive(Debug, Error)]
pub enum IterError {
    /// Index outside `[0, count)`, including a `next()` call past exhaustion
    #[error("Index {index} out of range for aggregate of {count} comments")]
    OutOfRange { index: i64, count: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<IterError>,
    },
}

impl IterError {
    /// Build an out-of-range fault for a position that fits in `usize`
    pub fn out_of_range(index: usize, count: usize) -> Self {
        IterError::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            count,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        IterError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this is (or wraps) a bounds fault
    pub fn is_out_of_range(&self) -> bool {
        match self {
            IterError::OutOfRange { .. } => true,
            IterError::WithContext { source, .. } => source.is_out_of_range(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for IterError {
    fn from(err: toml::de::Error) -> Self {
        IterError::Toml(err.to_string())
    }
}

/// Result type alias for comment-iter
pub type Result<T> = std::result::Result<T, IterError>;
