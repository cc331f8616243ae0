//! Error types for the summarization pipeline.

use data_loader::ListenerId;
use thiserror::Error;

/// Errors that can occur while summarizing profiles.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// An event's timestamp could not be decomposed into a date, a time
    /// and a valid 0-23 hour
    #[error("Malformed timestamp {timestamp:?} for listener {listener}: {reason}")]
    MalformedTimestamp {
        listener: ListenerId,
        timestamp: String,
        reason: String,
    },

    /// The aggregate step received zero user profiles
    #[error("Cannot aggregate an empty set of profiles")]
    EmptyDataset,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProfileError>;
