//! Keyword command implementation.
//!
//! Resolves whole words against the keyword table. Matching is exact and
//! case-sensitive; a word that merely starts with a keyword is not one.

use std::io::Write;

use lsc_lex::resolve_keyword;
use serde::Serialize;

use crate::commands::common::{error_messages, write_json, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{LstError, Result};

/// Arguments for the keyword command.
#[derive(Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Words to resolve.
    pub words: Vec<String>,
    /// Fail if any word is not a keyword.
    pub strict: bool,
    /// Output format override.
    pub format: Option<String>,
}

/// Resolution of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    /// The word as given.
    pub word: String,
    /// Token name, if the word is a keyword.
    pub token: Option<String>,
}

/// Keyword command handler.
pub struct KeywordCommand {
    args: KeywordArgs,
    config: Config,
}

impl KeywordCommand {
    /// Resolve every word in argument order.
    pub fn resolve(&self) -> Vec<KeywordMatch> {
        self.args
            .words
            .iter()
            .map(|word| KeywordMatch {
                word: word.clone(),
                token: resolve_keyword(word).map(|token| format!("{:?}", token)),
            })
            .collect()
    }

    fn check_strict(&self, matches: &[KeywordMatch]) -> Result<()> {
        if !self.args.strict {
            return Ok(());
        }
        let misses: Vec<&str> = matches
            .iter()
            .filter(|m| m.token.is_none())
            .map(|m| m.word.as_str())
            .collect();
        if misses.is_empty() {
            return Ok(());
        }
        Err(LstError::Validation(format!(
            "{} {}",
            error_messages::NOT_KEYWORDS,
            misses.join(", ")
        )))
    }
}

impl Command for KeywordCommand {
    type Args = KeywordArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let matches = self.resolve();

        tracing::debug!(
            words = matches.len(),
            keywords = matches.iter().filter(|m| m.token.is_some()).count(),
            "resolved keywords"
        );

        match format {
            OutputFormat::Json => write_json(out, &matches)?,
            OutputFormat::Text => {
                for m in &matches {
                    writeln!(out, "{}\t{}", m.word, m.token.as_deref().unwrap_or("-"))?;
                }
            }
        }

        self.check_strict(&matches)
    }

    fn name() -> &'static str {
        "keyword"
    }

    fn description() -> &'static str {
        "Resolve words against the keyword table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(words: &[&str], strict: bool) -> KeywordCommand {
        let args = KeywordArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            strict,
            format: None,
        };
        KeywordCommand::new(args, Config::default())
    }

    #[test]
    fn test_keyword_command_name() {
        assert_eq!(KeywordCommand::name(), "keyword");
        assert!(!KeywordCommand::description().is_empty());
    }

    #[test]
    fn test_resolve_mixed_words() {
        let matches = command(&["fun", "funny", "While", "while"], false).resolve();
        let tokens: Vec<Option<&str>> = matches.iter().map(|m| m.token.as_deref()).collect();
        assert_eq!(tokens, vec![Some("KwFun"), None, None, Some("KwWhile")]);
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        command(&["if", "x"], false).execute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "if\tKwIf\nx\t-\n");
    }

    #[test]
    fn test_strict_rejects_non_keywords() {
        let mut out = Vec::new();
        let err = command(&["if", "x", "y"], true)
            .execute(&mut out)
            .unwrap_err();
        assert!(matches!(err, LstError::Validation(_)));
        assert!(err.to_string().contains("x, y"));
    }

    #[test]
    fn test_strict_accepts_keywords() {
        let mut out = Vec::new();
        assert!(command(&["return", "void"], true).execute(&mut out).is_ok());
    }

    #[test]
    fn test_json_output() {
        let args = KeywordArgs {
            words: vec!["number".to_string(), "num".to_string()],
            strict: false,
            format: Some("json".to_string()),
        };
        let mut out = Vec::new();
        KeywordCommand::new(args, Config::default())
            .execute(&mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["token"], "KwNumber");
        assert!(value[1]["token"].is_null());
    }
}
