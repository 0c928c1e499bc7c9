//! Common types and utilities for lst commands.
//!
//! This module provides the output format handling and token row rendering
//! shared by all command implementations.

use std::io::Write;

use lsc_lex::ReservedToken;
use serde::Serialize;

use crate::config::Config;
use crate::error::{LstError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text columns
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determine the effective format from the command line and config.
    ///
    /// A format given on the command line wins over the configured one.
    pub fn resolve(cli_format: Option<&str>, config: &Config) -> Result<Self> {
        if let Some(format) = cli_format {
            return Self::from_str(format).ok_or_else(|| {
                LstError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, format))
            });
        }

        Self::from_str(&config.output.format).ok_or_else(|| {
            LstError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                config.output.format
            ))
        })
    }
}

// ============================================================================
// Token Rows
// ============================================================================

/// One reserved token as shown by the commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRow {
    /// Canonical source spelling.
    pub spelling: &'static str,
    /// Token name.
    pub token: String,
    /// Token category.
    pub category: &'static str,
}

impl From<ReservedToken> for TokenRow {
    fn from(token: ReservedToken) -> Self {
        Self {
            spelling: token.spelling(),
            token: format!("{:?}", token),
            category: token.category().as_str(),
        }
    }
}

/// Write token rows as aligned text columns.
pub fn write_rows_text(out: &mut dyn Write, rows: &[TokenRow]) -> Result<()> {
    let width = rows.iter().map(|row| row.spelling.len()).max().unwrap_or(0);
    for row in rows {
        writeln!(
            out,
            "{:<width$}  {:<14} {}",
            row.spelling,
            row.token,
            row.category,
            width = width
        )?;
    }
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when an unknown table kind is specified.
    pub const UNKNOWN_TABLE: &str = "Unknown table:";

    /// Error when strict keyword resolution fails.
    pub const NOT_KEYWORDS: &str = "Not keywords:";
}
