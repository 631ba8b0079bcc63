//! Run configuration
//!
//! Settings for a batch run: where images come from, the grid shape,
//! the layout margin and where grid files go. Defaults are embedded from
//! `flowsteal.toml`; a user file only needs the keys it changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use lazy_static::lazy_static;
use crate::errors::{FlowError, FlowResult};
use crate::grid::GridShape;

lazy_static! {
    static ref DEFAULT_CONFIG: StealConfig = {
        let content = include_str!("../flowsteal.toml");
        StealConfig::builtin().merged_with(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            StealConfig::builtin()
        })
    };
}

/// Settings for stealing a batch of puzzle images
#[derive(Debug, Clone, PartialEq)]
pub struct StealConfig {
    /// URL prefix, the image index is appended to it
    pub base_url: String,
    /// Appended after the index, usually the file extension
    pub suffix: String,
    /// First image index (inclusive)
    pub first_index: u32,
    /// Last image index (inclusive)
    pub last_index: u32,
    /// Rows and columns of every puzzle in the batch
    pub shape: GridShape,
    /// Horizontal border around the board in pixels
    pub margin: u32,
    /// Directory receiving the grid files
    pub output_dir: PathBuf,
    /// Log failed images and continue instead of aborting the batch
    pub keep_going: bool,
}

impl StealConfig {
    /// Hard-wired fallback used if the embedded file cannot be parsed
    fn builtin() -> Self {
        StealConfig {
            base_url: "https://flowfreesolutions.com/solution-pictures/flow/regular/flow-regular-".to_string(),
            suffix: ".png".to_string(),
            first_index: 1,
            last_index: 30,
            shape: GridShape::default(),
            margin: crate::grid::layout::DEFAULT_MARGIN,
            output_dir: PathBuf::from("flows"),
            keep_going: false,
        }
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> FlowResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            FlowError::ConfigError(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        content.parse()
    }

    /// Overlay the keys present in a TOML document onto this configuration
    pub fn merged_with(&self, content: &str) -> FlowResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| FlowError::ConfigError(format!("failed to parse TOML: {}", e)))?;

        let mut config = self.clone();

        if let Some(source) = table(&value, "source")? {
            if let Some(url) = string_key(source, "source", "base_url")? {
                config.base_url = url;
            }
            if let Some(suffix) = string_key(source, "source", "suffix")? {
                config.suffix = suffix;
            }
            if let Some(first) = index_key(source, "source", "first_index")? {
                config.first_index = first;
            }
            if let Some(last) = index_key(source, "source", "last_index")? {
                config.last_index = last;
            }
        }

        if let Some(grid) = table(&value, "grid")? {
            if let Some(shape) = string_key(grid, "grid", "shape")? {
                config.shape = shape.parse()?;
            }
        }

        if let Some(layout) = table(&value, "layout")? {
            if let Some(margin) = index_key(layout, "layout", "margin")? {
                config.margin = margin;
            }
        }

        if let Some(output) = table(&value, "output")? {
            if let Some(dir) = string_key(output, "output", "dir")? {
                config.output_dir = PathBuf::from(dir);
            }
            if let Some(keep_going) = output.get("keep_going") {
                config.keep_going = keep_going.as_bool().ok_or_else(|| {
                    FlowError::ConfigError("output.keep_going must be a boolean".to_string())
                })?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the index range is not empty
    pub fn validate(&self) -> FlowResult<()> {
        if self.first_index > self.last_index {
            return Err(FlowError::ConfigError(format!(
                "first index {} is after last index {}",
                self.first_index, self.last_index
            )));
        }
        Ok(())
    }

    /// Number of images in the batch
    pub fn image_count(&self) -> u64 {
        u64::from(self.last_index - self.first_index) + 1
    }
}

impl FromStr for StealConfig {
    type Err = FlowError;

    /// Parse a configuration, falling back to defaults for missing keys
    fn from_str(content: &str) -> FlowResult<Self> {
        StealConfig::default().merged_with(content)
    }
}

impl Default for StealConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

fn table<'a>(value: &'a toml::Value, name: &str) -> FlowResult<Option<&'a toml::value::Table>> {
    match value.get(name) {
        None => Ok(None),
        Some(v) => v
            .as_table()
            .map(Some)
            .ok_or_else(|| FlowError::ConfigError(format!("[{}] must be a table", name))),
    }
}

fn string_key(table: &toml::value::Table, section: &str, key: &str) -> FlowResult<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| FlowError::ConfigError(format!("{}.{} must be a string", section, key))),
    }
}

fn index_key(table: &toml::value::Table, section: &str, key: &str) -> FlowResult<Option<u32>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_integer()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| FlowError::ConfigError(format!("{}.{} must be a non-negative integer", section, key))),
    }
}
