//! Core error types

use thiserror::Error;

/// Errors raised by trie lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The key is not present, or its terminal node stores no value
    #[error("key not found: {key:?}")]
    NotFound {
        /// The key that was looked up
        key: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, TrieError>;
