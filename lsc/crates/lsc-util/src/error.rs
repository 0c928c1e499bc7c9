//! Core error types for lsc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for lookup table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The same key was supplied more than once
    #[error("Duplicate lookup key: {key}")]
    DuplicateKey { key: String },
}

/// Result type alias for lookup operations
pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = LookupError::DuplicateKey {
            key: "\"<<\"".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate lookup key: \"<<\"");
    }
}
