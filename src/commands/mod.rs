//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod steal_command;
pub mod extract_command;
pub mod check_command;

pub use command_traits::{Command, CommandFactory};
pub use steal_command::StealCommand;
pub use extract_command::ExtractCommand;
pub use check_command::CheckCommand;

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;
use crate::config::StealConfig;
use crate::errors::{FlowError, FlowResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct FlowstealCommandFactory;

impl FlowstealCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FlowstealCommandFactory
    }
}

impl Default for FlowstealCommandFactory {
    fn default() -> Self {
        FlowstealCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for FlowstealCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> FlowResult<Box<dyn Command + 'a>> {
        if args.contains_id("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.contains_id("check") {
            Ok(Box::new(CheckCommand::new(args, logger)?))
        } else {
            // Default to the batch download
            Ok(Box::new(StealCommand::new(args, logger)?))
        }
    }
}

/// Build the run configuration from the config file and CLI overrides
///
/// Flags win over file values, file values win over built-in defaults.
pub fn resolve_config(args: &ArgMatches) -> FlowResult<StealConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading configuration from {}", path);
            StealConfig::from_file(path)?
        }
        None => StealConfig::default(),
    };

    if let Some(shape) = args.get_one::<String>("shape") {
        config.shape = shape.parse()?;
    }
    if let Some(url) = args.get_one::<String>("base-url") {
        config.base_url = url.clone();
    }
    if let Some(dir) = args.get_one::<String>("output-dir") {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(first) = args.get_one::<String>("first") {
        config.first_index = parse_number(first, "first")?;
    }
    if let Some(last) = args.get_one::<String>("last") {
        config.last_index = parse_number(last, "last")?;
    }
    if let Some(margin) = args.get_one::<String>("margin") {
        config.margin = parse_number(margin, "margin")?;
    }
    if args.get_flag("keep-going") {
        config.keep_going = true;
    }

    config.validate()?;
    Ok(config)
}

fn parse_number(value: &str, name: &str) -> FlowResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| FlowError::ConfigError(format!("--{} expects a non-negative integer, got '{}'", name, value)))
}
