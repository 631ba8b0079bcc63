//! Local image extraction command
//!
//! Extracts the letter grid from an image file on disk, without any
//! network access.

use std::fs;
use std::path::Path;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::errors::{FlowError, FlowResult};
use crate::fetch::decode_image;
use crate::grid::{CenteredSquareLayout, GridExtractor, GridShape};
use crate::utils::logger::Logger;
use crate::utils::write_utils;

/// Command extracting one grid from a local image
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Path to the output grid file, stdout if missing
    output_file: Option<String>,
    /// Rows and columns to sample
    shape: GridShape,
    /// Horizontal border around the board in pixels
    margin: u32,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FlowResult<Self> {
        let input_file = args.get_one::<String>("extract")
            .ok_or_else(|| FlowError::GenericError("Missing input image".to_string()))?
            .clone();
        info!("Input image: {}", input_file);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        let config = resolve_config(args)?;

        Ok(ExtractCommand {
            input_file,
            output_file,
            shape: config.shape,
            margin: config.margin,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> FlowResult<()> {
        let bytes = fs::read(&self.input_file)?;
        let image = decode_image(&bytes)?;

        let extractor = GridExtractor::new(Box::new(CenteredSquareLayout::new(self.margin)));
        let grid = extractor.extract(&image, self.shape)?;
        let text = grid.render();

        self.logger.log_grid(&format!("Grid from {}:", self.input_file), &text)?;

        match &self.output_file {
            Some(path) => {
                write_utils::write_text_file(Path::new(path), &text)?;
                info!("Wrote {}", path);
            }
            None => println!("{}", text),
        }
        Ok(())
    }
}
