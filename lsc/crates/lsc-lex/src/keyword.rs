//! Keyword resolution.
//!
//! Words reach this module already segmented by the identifier scanner, so
//! resolution is a single exact lookup. Keywords are case-sensitive and a
//! keyword embedded in a longer word does not match.

use crate::tables::TokenTables;
use crate::token::ReservedToken;

/// Resolves `word` to a keyword token using the process-wide tables.
///
/// # Example
///
/// ```
/// use lsc_lex::{resolve_keyword, ReservedToken};
///
/// assert_eq!(resolve_keyword("fun"), Some(ReservedToken::KwFun));
/// assert_eq!(resolve_keyword("funny"), None);
/// ```
pub fn resolve_keyword(word: &str) -> Option<ReservedToken> {
    TokenTables::global().find_keyword(word)
}

/// Returns true if `word` is reserved.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    resolve_keyword(word).is_some()
}
