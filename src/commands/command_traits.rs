//! Command and factory traits for the `flowsteal` binary
//!
//! Each CLI mode (batch download, local extraction, grid check) is one
//! `Command`; the factory picks the mode from the parsed flags.

use crate::utils::logger::Logger;
use crate::errors::FlowResult;

/// One CLI mode, configured from the command line and run once
pub trait Command {
    /// Run the mode to completion
    ///
    /// # Returns
    /// `Ok(())` if every grid was produced or checked, otherwise the first
    /// error (the binary exits with status 1)
    fn execute(&self) -> FlowResult<()>;
}

/// Selects and builds the command matching the parsed flags
pub trait CommandFactory<'a> {
    /// Build the command for these flags
    ///
    /// # Arguments
    /// * `args` - Parsed `flowsteal` flags
    /// * `logger` - File logger the command records its grids to
    ///
    /// # Returns
    /// The boxed command, or a configuration error from resolving the flags
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> FlowResult<Box<dyn Command + 'a>>;
}
