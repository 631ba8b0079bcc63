//! Layout policies locating the puzzle grid inside an image
//!
//! A layout policy turns image dimensions and a grid shape into the
//! cell size and the crop box that holds the grid. Solution images from
//! different sources frame their boards differently, so the policy is
//! a trait and the extractor accepts any implementation.

use log::debug;
use crate::errors::{FlowError, FlowResult};
use crate::grid::region::Region;
use crate::grid::shape::GridShape;

/// Margin in pixels used by the default solution-picture source
pub const DEFAULT_MARGIN: u32 = 16;

/// Cell size and crop box computed for one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Edge length of one cell in pixels (not rounded)
    pub cell_size: f64,
    /// Region of the source image covered by the grid
    pub crop: Region,
}

/// Strategy computing where the grid sits in an image
pub trait LayoutPolicy {
    /// Compute the grid geometry for an image
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `shape` - Number of rows and columns in the grid
    ///
    /// # Returns
    /// The geometry, or `CropOutOfBounds` if the crop box is empty. The
    /// box may reach past the image edges.
    fn geometry(&self, width: u32, height: u32, shape: GridShape) -> FlowResult<GridGeometry>;

    /// Short human-readable name used in log output
    fn name(&self) -> &'static str;
}

/// Square cells in a board centered on the image, inset by a fixed margin
/// from the image width.
///
/// The cell size is derived from the width only; the board height follows
/// from the row count. Crop edges are rounded to the nearest pixel with ties
/// going to the even neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredSquareLayout {
    /// Total horizontal border in pixels (both sides together)
    pub margin: u32,
}

impl CenteredSquareLayout {
    /// Create a layout with a custom margin
    pub fn new(margin: u32) -> Self {
        CenteredSquareLayout { margin }
    }
}

impl Default for CenteredSquareLayout {
    fn default() -> Self {
        CenteredSquareLayout { margin: DEFAULT_MARGIN }
    }
}

impl LayoutPolicy for CenteredSquareLayout {
    fn geometry(&self, width: u32, height: u32, shape: GridShape) -> FlowResult<GridGeometry> {
        let radius = (width as f64 - self.margin as f64) / 2.0;
        let cell_size = radius / (shape.cols as f64 / 2.0);
        let vertical_radius = cell_size * (shape.rows as f64 / 2.0);

        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;

        let left = (center_x - radius).round_ties_even() as i64;
        let top = (center_y - vertical_radius).round_ties_even() as i64;
        let right = (center_x + radius).round_ties_even() as i64;
        let bottom = (center_y + vertical_radius).round_ties_even() as i64;

        debug!("Layout '{}': radius={}, cell_size={}, crop=({}, {}, {}, {})",
               self.name(), radius, cell_size, left, top, right, bottom);

        // Overhang past the image edges is allowed, an empty box is not
        if radius <= 0.0 || right <= left || bottom <= top {
            return Err(FlowError::CropOutOfBounds { width, height, left, top, right, bottom });
        }

        Ok(GridGeometry {
            cell_size,
            crop: Region::new(left, top, (right - left) as u32, (bottom - top) as u32),
        })
    }

    fn name(&self) -> &'static str {
        "centered-square"
    }
}
