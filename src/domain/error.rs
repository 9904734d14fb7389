use thiserror::Error;

use super::todo::TodoId;

/// Every failure the tracker can report, with `Display` strings matching the
/// CLI contract. Validation variants carry no cause; storage variants carry
/// the underlying I/O error.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid todo ID: must be a positive integer")]
    InvalidId,

    #[error("Todo #{0} not found")]
    NotFound(TodoId),

    #[error("Failed to load todos: {source}")]
    Load {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save todo: {source}")]
    Save {
        #[source]
        source: std::io::Error,
    },
}
