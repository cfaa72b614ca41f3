//! Error types for the watch-list core

use thiserror::Error;

/// Why a submission did not add an entry
///
/// Every kind is user-correctable. The controller records it as state
/// instead of propagating it to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input was blank after trimming
    #[error("a repository name is required")]
    EmptyInput,

    /// The repository is already in the list
    #[error("repository is already in the watch-list")]
    DuplicateEntry,

    /// The lookup rejected the name or could not be reached
    #[error("repository not found or lookup service unreachable")]
    LookupFailed,

    /// Another submission is still running
    #[error("a submission is already in progress")]
    InFlight,
}

/// Errors returned by list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Entry name was empty
    #[error("repository name cannot be empty")]
    EmptyName,

    /// An entry with the same name already exists
    #[error("repository already exists: {0}")]
    Duplicate(String),
}

/// Errors raised by a persistent store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold a valid key-value object
    #[error("store content is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(SubmitError::EmptyInput.to_string(), "a repository name is required");
        assert_eq!(
            SubmitError::DuplicateEntry.to_string(),
            "repository is already in the watch-list"
        );
        assert_eq!(
            SubmitError::LookupFailed.to_string(),
            "repository not found or lookup service unreachable"
        );
    }
}
