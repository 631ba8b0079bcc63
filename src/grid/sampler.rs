//! Cell sampling and head classification
//!
//! Reads the color at the center of every cell of a cropped grid image and
//! decides whether the cell holds a head. A head is drawn as a filled
//! disc, so the pixels a fixed distance away in each cardinal direction
//! share the center color. A path cell is a thin connector, and at least
//! one of those pixels lands on the background.

use image::RgbImage;
use log::warn;
use crate::errors::{FlowError, FlowResult};
use crate::grid::shape::GridShape;

/// RGB color of one sampled pixel
pub type Rgb = [u8; 3];

/// Color and head flag of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSample {
    /// Color at the cell center
    pub color: Rgb,
    /// Whether the neighbourhood around the center is uniformly colored
    pub head: bool,
}

/// Samples cells from an image already cropped to the grid
pub struct CellSampler<'a> {
    grid: &'a RgbImage,
    cell_size: f64,
}

impl<'a> CellSampler<'a> {
    /// Create a sampler over a cropped grid image
    ///
    /// # Arguments
    /// * `grid` - Image covering exactly the grid region
    /// * `cell_size` - Edge length of one cell in pixels
    pub fn new(grid: &'a RgbImage, cell_size: f64) -> Self {
        CellSampler { grid, cell_size }
    }

    /// Distance from the center to the four probe pixels
    pub fn head_offset(&self) -> i64 {
        (self.cell_size / 5.0).floor() as i64
    }

    /// Center pixel of the cell at (row, col), in grid coordinates
    pub fn cell_center(&self, row: usize, col: usize) -> (i64, i64) {
        let half = (self.cell_size / 2.0).floor();
        let x = (col as f64 * self.cell_size + half) as i64;
        let y = (row as f64 * self.cell_size + half) as i64;
        (x, y)
    }

    /// Sample every cell in row-major order
    pub fn sample_all(&self, shape: GridShape) -> FlowResult<Vec<CellSample>> {
        if self.head_offset() == 0 {
            warn!("Cell size {:.2}px gives a head probe offset of 0; every cell will read as a head",
                  self.cell_size);
        }

        let mut samples = Vec::with_capacity(shape.cell_count());
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                samples.push(self.sample(row, col)?);
            }
        }
        Ok(samples)
    }

    /// Sample the cell at (row, col)
    pub fn sample(&self, row: usize, col: usize) -> FlowResult<CellSample> {
        let (x, y) = self.cell_center(row, col);
        let color = self.pixel(x, y)?;
        let offset = self.head_offset();

        let probes = [(x, y + offset), (x, y - offset), (x + offset, y), (x - offset, y)];
        let mut head = true;
        for (px, py) in probes {
            if self.pixel(px, py)? != color {
                head = false;
                break;
            }
        }

        Ok(CellSample { color, head })
    }

    fn pixel(&self, x: i64, y: i64) -> FlowResult<Rgb> {
        if x < 0 || y < 0 || x >= self.grid.width() as i64 || y >= self.grid.height() as i64 {
            return Err(FlowError::PixelOutOfBounds { x, y });
        }
        Ok(self.grid.get_pixel(x as u32, y as u32).0)
    }
}
