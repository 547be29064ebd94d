//! Error types for dispatch operations

use thiserror::Error;

/// Errors returned when a value cannot be dispatched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No arm accepted the value and no fallback was registered
    #[error("no matching pattern found for value: {value}")]
    NoMatch {
        /// `Debug` rendering of the rejected value
        value: String,
    },

    /// The value has no type tag to dispatch on
    #[error("value carries no type tag")]
    MissingTag,

    /// The value's tag has no registered handler
    #[error("no handler found for type: {tag}")]
    UnknownTag {
        /// Tag that was looked up
        tag: String,
    },

    /// A string pattern failed to compile
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },
}

impl MatchError {
    /// Create a no-match error from any `Debug` value
    pub fn no_match(value: &impl std::fmt::Debug) -> Self {
        Self::NoMatch {
            value: format!("{value:?}"),
        }
    }

    /// Create an unknown tag error
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Result type for dispatch operations
pub type MatchResult<T> = Result<T, MatchError>;
