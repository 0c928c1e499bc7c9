//! lst CLI - Inspect the LightScript reserved-token vocabulary.
//!
//! This is the main entry point for the lst CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    Command, ConfigArgs, ConfigCommand, KeywordArgs, KeywordCommand, ScanArgs, ScanCommand,
    TableArgs, TableCommand,
};
use config::Config;
use error::{LstError, Result};

/// lst - Inspect LightScript reserved tokens
///
/// lst lists the operator and keyword tables, scans operators out of text by
/// longest match, and resolves words against the keyword table.
#[derive(Parser, Debug)]
#[command(name = "lst")]
#[command(author = "LightScript Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect LightScript reserved tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lst CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the reserved-token tables
    ///
    /// Operators are listed in the order the scanner searches them,
    /// keywords in declaration order.
    Table(TableCli),

    /// Scan operators from text
    ///
    /// Repeatedly takes the longest operator at the front of the text and
    /// reports what is left when no operator matches.
    Scan(ScanCli),

    /// Resolve words as keywords
    Keyword(KeywordCli),

    /// Show or write the effective configuration
    ///
    /// Prints the configuration as lst.toml content, or writes it to the
    /// given path.
    Config(ConfigCli),
}

/// Arguments for the table subcommand.
#[derive(Parser, Debug)]
struct TableCli {
    /// Table to list (operators, keywords, all)
    #[arg(short, long)]
    kind: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCli {
    /// Text to scan
    text: String,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Stop at whitespace instead of skipping it
    #[arg(long)]
    no_skip_whitespace: bool,
}

/// Arguments for the keyword subcommand.
#[derive(Parser, Debug)]
struct KeywordCli {
    /// Words to resolve
    #[arg(required = true)]
    words: Vec<String>,

    /// Fail if any word is not a keyword
    #[arg(short, long)]
    strict: bool,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCli {
    /// Write the configuration to this file
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the lst CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays parseable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LstError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Table(args) => dispatch::<TableCommand>(
            TableArgs {
                kind: args.kind,
                format: args.format,
            },
            config,
        ),
        Commands::Scan(args) => dispatch::<ScanCommand>(
            ScanArgs {
                text: args.text,
                format: args.format,
                skip_whitespace: args.no_skip_whitespace.then_some(false),
            },
            config,
        ),
        Commands::Keyword(args) => dispatch::<KeywordCommand>(
            KeywordArgs {
                words: args.words,
                strict: args.strict,
                format: args.format,
            },
            config,
        ),
        Commands::Config(args) => dispatch::<ConfigCommand>(
            ConfigArgs {
                write: args.write,
                force: args.force,
            },
            config,
        ),
    }
}

/// Build a command and run it against stdout.
fn dispatch<C: Command>(args: C::Args, config: Config) -> Result<()> {
    tracing::debug!(command = C::name(), "{}", C::description());
    let command = C::new(args, config);
    command.execute(&mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_table() {
        let cli = Cli::parse_from(["lst", "table"]);
        assert!(matches!(cli.command, Commands::Table(_)));
    }

    #[test]
    fn test_cli_parse_table_with_kind_and_format() {
        let cli = Cli::parse_from(["lst", "table", "--kind", "keywords", "-F", "json"]);
        if let Commands::Table(args) = cli.command {
            assert_eq!(args.kind, Some("keywords".to_string()));
            assert_eq!(args.format, Some("json".to_string()));
        } else {
            panic!("Expected Table command");
        }
    }

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["lst", "scan", "<<= x"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.text, "<<= x");
            assert!(!args.no_skip_whitespace);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_no_skip_whitespace() {
        let cli = Cli::parse_from(["lst", "scan", "+ +", "--no-skip-whitespace"]);
        if let Commands::Scan(args) = cli.command {
            assert!(args.no_skip_whitespace);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_keyword() {
        let cli = Cli::parse_from(["lst", "keyword", "if", "else", "--strict"]);
        if let Commands::Keyword(args) = cli.command {
            assert_eq!(args.words, vec!["if".to_string(), "else".to_string()]);
            assert!(args.strict);
        } else {
            panic!("Expected Keyword command");
        }
    }

    #[test]
    fn test_cli_keyword_requires_words() {
        assert!(Cli::try_parse_from(["lst", "keyword"]).is_err());
    }

    #[test]
    fn test_cli_parse_config_write() {
        let cli = Cli::parse_from(["lst", "config", "--write", "out/lst.toml", "--force"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.write, Some(PathBuf::from("out/lst.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lst",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/lst.toml",
            "table",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lst.toml")));
    }

    #[test]
    fn test_cli_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["lst", "scan", "+", "--verbose"]);
        assert!(cli.verbose);
    }
}
