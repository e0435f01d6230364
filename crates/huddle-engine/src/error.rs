//! Error types for huddle-engine operations.

use thiserror::Error;

/// Errors that can occur while building or querying a plan.
#[derive(Error, Debug)]
pub enum HuddleError {
    /// A time string did not match the `"<day> HH:MM+TZ"` grammar.
    /// Includes the offending string and which part of it was rejected.
    #[error("malformed time string '{text}': {reason}")]
    MalformedTime { text: String, reason: String },
}

/// Convenience alias used throughout huddle-engine.
pub type Result<T> = std::result::Result<T, HuddleError>;
