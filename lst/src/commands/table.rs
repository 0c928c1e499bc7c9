//! Table command implementation.
//!
//! Lists the reserved-token tables: operator spellings in the order the
//! scanner searches them, and keywords in declaration order.

use std::io::Write;

use lsc_lex::TokenTables;
use serde::Serialize;

use crate::commands::common::{error_messages, write_json, write_rows_text, OutputFormat, TokenRow};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{LstError, Result};

/// Which table to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Operators and punctuation.
    Operators,
    /// Keywords.
    Keywords,
    /// Both tables.
    All,
}

impl TableKind {
    /// Parse a table name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "operators" | "ops" => Some(Self::Operators),
            "keywords" | "kw" => Some(Self::Keywords),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Arguments for the table command.
#[derive(Debug, Clone, Default)]
pub struct TableArgs {
    /// Table to list; all tables when absent.
    pub kind: Option<String>,
    /// Output format override.
    pub format: Option<String>,
}

/// JSON shape of the table report.
#[derive(Debug, Serialize)]
struct TableReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    operators: Option<Vec<TokenRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<TokenRow>>,
}

/// Table command handler.
pub struct TableCommand {
    args: TableArgs,
    config: Config,
}

impl TableCommand {
    fn table_kind(&self) -> Result<TableKind> {
        match self.args.kind.as_deref() {
            None => Ok(TableKind::All),
            Some(kind) => TableKind::from_str(kind).ok_or_else(|| {
                LstError::Validation(format!("{} {}", error_messages::UNKNOWN_TABLE, kind))
            }),
        }
    }

    fn build_report(&self, kind: TableKind) -> TableReport {
        let tables = TokenTables::global();
        let operators: Option<Vec<TokenRow>> = matches!(kind, TableKind::Operators | TableKind::All)
            .then(|| tables.operators().map(|(_, token)| TokenRow::from(token)).collect());
        let keywords: Option<Vec<TokenRow>> = matches!(kind, TableKind::Keywords | TableKind::All)
            .then(|| tables.keywords().map(|(_, token)| TokenRow::from(token)).collect());
        TableReport {
            operators,
            keywords,
        }
    }
}

impl Command for TableCommand {
    type Args = TableArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let kind = self.table_kind()?;
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let report = self.build_report(kind);

        tracing::debug!(
            operators = report.operators.as_ref().map_or(0, Vec::len),
            keywords = report.keywords.as_ref().map_or(0, Vec::len),
            "listing token tables"
        );

        match format {
            OutputFormat::Json => write_json(out, &report),
            OutputFormat::Text => {
                if let Some(ref operators) = report.operators {
                    writeln!(out, "# operators")?;
                    write_rows_text(out, operators)?;
                }
                if let Some(ref keywords) = report.keywords {
                    if report.operators.is_some() {
                        writeln!(out)?;
                    }
                    writeln!(out, "# keywords")?;
                    write_rows_text(out, keywords)?;
                }
                Ok(())
            }
        }
    }

    fn name() -> &'static str {
        "table"
    }

    fn description() -> &'static str {
        "List the reserved-token tables"
    }
}
