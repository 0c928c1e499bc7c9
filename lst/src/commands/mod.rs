//! Command modules for the lst CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod common;
pub mod traits;

pub mod config;
pub mod keyword;
pub mod scan;
pub mod table;

// Re-export command types and functions
pub use config::{ConfigArgs, ConfigCommand};
pub use keyword::{KeywordArgs, KeywordCommand};
pub use scan::{ScanArgs, ScanCommand};
pub use table::{TableArgs, TableCommand};
pub use traits::Command;
