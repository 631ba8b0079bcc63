//! Grid shape definition
//!
//! A grid shape declares how many cells are sampled along each axis
//! of the puzzle image.

use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use crate::errors::{FlowError, FlowResult};

lazy_static! {
    static ref SHAPE_PATTERN: Regex = Regex::new(r"^\s*(\d+)\s*[xX]\s*(\d+)\s*$")
        .expect("shape pattern is a valid regex");
}

/// Number of rows and columns in a puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of cell rows
    pub rows: usize,
    /// Number of cell columns
    pub cols: usize,
}

impl GridShape {
    /// Create a new grid shape
    ///
    /// # Arguments
    /// * `rows` - Number of rows, at least 1
    /// * `cols` - Number of columns, at least 1
    ///
    /// # Returns
    /// The shape, or `InvalidShape` if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> FlowResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(FlowError::InvalidShape(format!(
                "{}x{} has an empty dimension", rows, cols
            )));
        }
        Ok(GridShape { rows, cols })
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape { rows: 5, cols: 5 }
    }
}

impl FromStr for GridShape {
    type Err = FlowError;

    /// Parse a shape written as `<rows>x<cols>`, e.g. `5x5` or `8X10`
    fn from_str(s: &str) -> FlowResult<Self> {
        let caps = SHAPE_PATTERN
            .captures(s)
            .ok_or_else(|| FlowError::InvalidShape(format!("expected <rows>x<cols>, got '{}'", s)))?;

        let rows = caps[1]
            .parse::<usize>()
            .map_err(|_| FlowError::InvalidShape(format!("row count out of range in '{}'", s)))?;
        let cols = caps[2]
            .parse::<usize>()
            .map_err(|_| FlowError::InvalidShape(format!("column count out of range in '{}'", s)))?;

        GridShape::new(rows, cols)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
