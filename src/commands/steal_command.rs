//! Batch download command
//!
//! Downloads every solution image in the configured index range and
//! writes one grid file per image.

use clap::ArgMatches;
use log::info;

use crate::api::FlowStealer;
use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::config::StealConfig;
use crate::errors::{FlowError, FlowResult};
use crate::utils::logger::Logger;

/// Command running the fetch, extract and save loop
pub struct StealCommand<'a> {
    /// Batch settings after applying CLI overrides
    config: StealConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> StealCommand<'a> {
    /// Create a new steal command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new StealCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FlowResult<Self> {
        let config = resolve_config(args)?;
        info!("Batch configuration: {:?}", config);
        Ok(StealCommand { config, logger })
    }
}

impl<'a> Command for StealCommand<'a> {
    fn execute(&self) -> FlowResult<()> {
        let stealer = FlowStealer::new(self.config.clone()).with_progress(true);
        let report = stealer.run()?;

        for path in &report.saved {
            self.logger.log(&format!("saved {}", path.display()))?;
        }
        for (index, message) in &report.failures {
            self.logger.log(&format!("failed {}: {}", index, message))?;
        }

        println!("Saved {} grid files to {}", report.saved.len(), self.config.output_dir.display());
        if !report.is_success() {
            return Err(FlowError::GenericError(format!(
                "{} of {} images failed",
                report.failures.len(),
                self.config.image_count()
            )));
        }
        Ok(())
    }
}
