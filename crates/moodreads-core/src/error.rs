//! Error types for MoodReads

use thiserror::Error;

use crate::surface::NodeId;

/// Main error type for MoodReads operations
#[derive(Error, Debug)]
pub enum MoodError {
    /// A page container required at mount time was not found
    #[error("Required container not found: #{0}")]
    MissingContainer(String),

    /// A surface node id does not (or no longer) exist
    #[error("Unknown surface node: {0}")]
    UnknownNode(NodeId),

    /// The rendering surface rejected an operation
    #[error("Surface error: {0}")]
    Surface(String),

    /// Session storage cannot be reached at all (privacy mode, quota)
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A storage operation failed after the store was reached
    #[error("Storage error: {0}")]
    Storage(String),

    /// The book source failed while looking up a mood
    #[error("Book lookup failed: {0}")]
    Lookup(String),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using MoodError
pub type MoodResult<T> = Result<T, MoodError>;
