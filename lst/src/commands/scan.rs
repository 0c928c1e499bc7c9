//! Scan command implementation.
//!
//! Runs the maximal-munch operator scanner repeatedly over a piece of text
//! and reports every operator it commits to, plus whatever input it stopped
//! in front of.

use std::io::Write;

use lsc_lex::{scan_operator, CharStream};
use serde::Serialize;

use crate::commands::common::{write_json, write_rows_text, OutputFormat, TokenRow};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Text to scan.
    pub text: String,
    /// Output format override.
    pub format: Option<String>,
    /// Whitespace skipping override; the configured value applies when absent.
    pub skip_whitespace: Option<bool>,
}

/// Result of scanning one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Operators in the order they were recognized.
    pub tokens: Vec<TokenRow>,
    /// Input left unconsumed when scanning stopped.
    pub remaining: String,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    config: Config,
}

impl ScanCommand {
    fn skip_whitespace(&self) -> bool {
        self.args
            .skip_whitespace
            .unwrap_or(self.config.scan.skip_whitespace)
    }

    /// Scan the input until no operator starts at the current position.
    pub fn scan(&self) -> ScanReport {
        let skip_whitespace = self.skip_whitespace();
        let mut stream = CharStream::new(&self.args.text);
        let mut tokens = Vec::new();

        loop {
            if skip_whitespace {
                stream.skip_whitespace();
            }
            match scan_operator(&mut stream) {
                Some(token) => tokens.push(TokenRow::from(token)),
                None => break,
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            line = stream.line(),
            index = stream.index(),
            "scan stopped"
        );

        ScanReport {
            tokens,
            remaining: stream.remaining(),
        }
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let report = self.scan();

        match format {
            OutputFormat::Json => write_json(out, &report),
            OutputFormat::Text => {
                write_rows_text(out, &report.tokens)?;
                writeln!(out, "remaining: {:?}", report.remaining)?;
                Ok(())
            }
        }
    }

    fn name() -> &'static str {
        "scan"
    }

    fn description() -> &'static str {
        "Scan operators from text by longest match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, skip_whitespace: Option<bool>) -> ScanReport {
        let args = ScanArgs {
            text: text.to_string(),
            format: None,
            skip_whitespace,
        };
        ScanCommand::new(args, Config::default()).scan()
    }

    fn spellings(report: &ScanReport) -> Vec<&'static str> {
        report.tokens.iter().map(|row| row.spelling).collect()
    }

    #[test]
    fn test_scan_command_name() {
        assert_eq!(ScanCommand::name(), "scan");
        assert!(!ScanCommand::description().is_empty());
    }

    #[test]
    fn test_scan_longest_match() {
        let report = scan("<<=<=<", None);
        assert_eq!(spellings(&report), vec!["<<=", "<=", "<"]);
        assert_eq!(report.remaining, "");
    }

    #[test]
    fn test_scan_stops_before_identifier() {
        let report = scan("+= x", None);
        assert_eq!(spellings(&report), vec!["+="]);
        assert_eq!(report.remaining, "x");
    }

    #[test]
    fn test_scan_without_whitespace_skipping() {
        let report = scan("+ -", Some(false));
        assert_eq!(spellings(&report), vec!["+"]);
        assert_eq!(report.remaining, " -");
    }

    #[test]
    fn test_scan_config_disables_skipping() {
        let mut config = Config::default();
        config.scan.skip_whitespace = false;
        let args = ScanArgs {
            text: "( )".to_string(),
            ..ScanArgs::default()
        };
        let report = ScanCommand::new(args, config).scan();
        assert_eq!(spellings(&report), vec!["("]);
        assert_eq!(report.remaining, " )");
    }

    #[test]
    fn test_scan_text_output() {
        let args = ScanArgs {
            text: "a".to_string(),
            ..ScanArgs::default()
        };
        let mut out = Vec::new();
        ScanCommand::new(args, Config::default())
            .execute(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "remaining: \"a\"\n");
    }

    #[test]
    fn test_scan_json_output() {
        let args = ScanArgs {
            text: "&&|".to_string(),
            format: Some("json".to_string()),
            skip_whitespace: None,
        };
        let mut out = Vec::new();
        ScanCommand::new(args, Config::default())
            .execute(&mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tokens"][0]["token"], "LogicalAnd");
        assert_eq!(value["tokens"][1]["token"], "BitwiseOr");
        assert_eq!(value["remaining"], "");
    }
}
