//! Command trait for the lst CLI.
//!
//! Every subcommand is a value built from its arguments and the loaded
//! configuration, then executed against an output sink.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all lst commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance from its arguments and configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;

    /// Get a short description of the command.
    fn description() -> &'static str;
}
