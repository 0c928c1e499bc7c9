//! Config command implementation.
//!
//! Prints the effective configuration as `lst.toml` content, or writes it to
//! a file so it can be edited.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{LstError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
    config: Config,
}

impl Command for ConfigCommand {
    type Args = ConfigArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let Some(ref path) = self.args.write else {
            out.write_all(self.config.to_toml_string()?.as_bytes())?;
            return Ok(());
        };

        if path.exists() && !self.args.force {
            return Err(LstError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        self.config.save_to_path(path)?;
        tracing::info!(path = %path.display(), "wrote configuration");
        writeln!(out, "wrote {}", path.display())?;
        Ok(())
    }

    fn name() -> &'static str {
        "config"
    }

    fn description() -> &'static str {
        "Show or write the effective configuration"
    }
}
