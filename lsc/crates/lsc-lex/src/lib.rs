//! lsc-lex - Reserved Token Front-End for LightScript
//!
//! This crate resolves the fixed vocabulary of LightScript: operators,
//! punctuation and keywords. Identifier, literal and whitespace scanning live
//! elsewhere; this crate only answers "which reserved token starts here?" and
//! "how is this token spelled?".
//!
//! # Example Usage
//!
//! ```
//! use lsc_lex::{resolve_keyword, scan_operator, CharStream, ReservedToken};
//!
//! let mut stream = CharStream::new("<<= 1");
//! assert_eq!(scan_operator(&mut stream), Some(ReservedToken::ShiftlAssign));
//! assert_eq!(stream.remaining(), " 1");
//!
//! assert_eq!(resolve_keyword("while"), Some(ReservedToken::KwWhile));
//! assert_eq!(ReservedToken::Ne.to_string(), "!=");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Reserved token kinds and categories
//! - [`tables`] - Forward and reverse symbol tables
//! - [`stream`] - Push-back character streams
//! - [`scanner`] - Maximal-munch operator scanning
//! - [`keyword`] - Keyword resolution
//!
//! # Token Categories
//!
//! - **Operators**: `++ -- + - * / \ % ~ & | ^ << >> ! && ||`
//! - **Assignment**: `= += -= *= /= \= %= &= |= ^= <<= >>=`
//! - **Comparison**: `== != < > <= >=`
//! - **Punctuation**: `? : , ; ( ) { } [ ]`
//! - **Keywords**: `if else elif switch case default for while do break
//!   continue return var fun void number string`
//!
//! # Longest Match
//!
//! Operators are resolved by maximal munch: `<<=` is one token, never `<`
//! followed by `<=`. Characters read ahead of the committed operator are
//! pushed back onto the stream, so a failed or short match never moves the
//! caller's position past the operator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod edge_cases;
pub mod error;
pub mod keyword;
pub mod scanner;
pub mod stream;
pub mod tables;
pub mod token;

// Re-export main types for convenience
pub use error::{LexError, LexResult};
pub use keyword::{is_keyword, resolve_keyword};
pub use scanner::scan_operator;
pub use stream::{CharStream, PushBackStream};
pub use tables::{TokenTables, MAX_OPERATOR_LEN, PUSH_BACK_DEPTH};
pub use token::{ReservedToken, TokenCategory};
