//! lsc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of containers shared by the lsc compiler
//! crates. Everything here is built once and read many times.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. IMMUTABLE AFTER CONSTRUCTION
//!    Containers validate their contents when they are built and expose no
//!    mutation afterwards, so shared references are freely `Sync`.
//!
//! 2. ERRORS AT BUILD TIME
//!    Inconsistent input (duplicate keys) is rejected with a typed error
//!    instead of silently picking one of the entries.
//
// ============================================================================
// SORTED LOOKUP
// ============================================================================
//
// A sorted vector of pairs is the densest possible map for small, fixed
// vocabularies:
//
// ```
// ┌──────────┬──────────┬──────────┬──────────┐
// │ ("!",  ) │ ("!=", ) │ ("%",  ) │ ("%=", ) │ ...
// └──────────┴──────────┴──────────┴──────────┘
// ```
//
// - Exact lookup: O(log n) binary search
// - Range queries: entries sharing a prefix are contiguous, so a range can be
//   narrowed with two `partition_point` calls
// - Memory: exactly n pairs, no buckets

pub mod error;
pub mod lookup;

pub use error::{LookupError, LookupResult};
pub use lookup::Lookup;
