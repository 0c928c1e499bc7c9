//! Error types for token table construction.
//!
//! Scanning itself never fails: "no operator here" and "not a keyword" are
//! reported as `None`. The only errors are defects in the static tables,
//! detected once when [`crate::TokenTables`] is built.

use lsc_util::LookupError;
use thiserror::Error;

use crate::token::ReservedToken;

/// Error type for token table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A spelling appears twice in the same source table
    #[error("Duplicate spelling '{spelling}' in {table} table")]
    DuplicateSpelling {
        /// Name of the offending table
        table: &'static str,
        /// The repeated spelling
        spelling: &'static str,
    },

    /// A spelling breaks the length or ASCII rules
    #[error("Invalid spelling {spelling:?} in {table} table")]
    InvalidSpelling {
        /// Name of the offending table
        table: &'static str,
        /// The rejected spelling
        spelling: &'static str,
    },

    /// A token is registered under more than one spelling
    #[error("Token {token:?} registered as both '{first}' and '{second}'")]
    DuplicateToken {
        /// The token registered twice
        token: ReservedToken,
        /// Spelling seen first
        first: &'static str,
        /// Spelling seen second
        second: &'static str,
    },

    /// A token has no spelling in any table
    #[error("Token {0:?} has no spelling")]
    MissingSpelling(ReservedToken),

    /// The underlying sorted lookup rejected the table
    #[error("Failed to build {table} table: {source}")]
    Table {
        /// Name of the offending table
        table: &'static str,
        /// Error reported by the lookup
        #[source]
        source: LookupError,
    },
}

/// Result type alias for lexer table operations
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_spelling_display() {
        let err = LexError::DuplicateSpelling {
            table: "operator",
            spelling: "<<",
        };
        assert_eq!(err.to_string(), "Duplicate spelling '<<' in operator table");
    }

    #[test]
    fn test_duplicate_token_display() {
        let err = LexError::DuplicateToken {
            token: ReservedToken::Lt,
            first: "<",
            second: "lt",
        };
        assert_eq!(err.to_string(), "Token Lt registered as both '<' and 'lt'");
    }

    #[test]
    fn test_missing_spelling_display() {
        let err = LexError::MissingSpelling(ReservedToken::KwVoid);
        assert_eq!(err.to_string(), "Token KwVoid has no spelling");
    }

    #[test]
    fn test_table_error_keeps_source() {
        use std::error::Error as _;

        let err = LexError::Table {
            table: "operator",
            source: LookupError::DuplicateKey {
                key: "\"+\"".to_string(),
            },
        };
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to build operator table: Duplicate lookup key: \"+\""
        );
    }
}
