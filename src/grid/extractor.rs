//! Grid extractor
//!
//! Turns a decoded solution image into a letter grid: locate the grid
//! with a layout policy, crop it, sample every cell, build the color
//! alphabet and emit one letter per cell, uppercase for heads.

use image::{imageops, RgbImage};
use log::{debug, info};
use crate::errors::{FlowError, FlowResult};
use crate::grid::alphabet::ColorAlphabet;
use crate::grid::layout::{CenteredSquareLayout, LayoutPolicy};
use crate::grid::letter_grid::{Cell, LetterGrid};
use crate::grid::region::Region;
use crate::grid::sampler::CellSampler;
use crate::grid::shape::GridShape;

/// Extracts letter grids from solution images
///
/// The extractor keeps no state between calls; the same image always
/// yields the same grid.
pub struct GridExtractor {
    layout: Box<dyn LayoutPolicy>,
}

impl GridExtractor {
    /// Create an extractor with a specific layout policy
    pub fn new(layout: Box<dyn LayoutPolicy>) -> Self {
        GridExtractor { layout }
    }

    /// Extract the grid from an image
    ///
    /// # Arguments
    /// * `image` - Decoded RGB image
    /// * `shape` - Number of rows and columns to sample
    ///
    /// # Returns
    /// The letter grid, or an error if the crop box is empty, a probe falls
    /// outside it, or the grid holds more than 26 colors
    pub fn extract(&self, image: &RgbImage, shape: GridShape) -> FlowResult<LetterGrid> {
        let geometry = self.layout.geometry(image.width(), image.height(), shape)?;
        let crop = geometry.crop;
        debug!("Cropping {}x{} image to {}x{} at ({}, {})",
               image.width(), image.height(), crop.width, crop.height, crop.x, crop.y);

        let grid_image = crop_padded(image, crop);

        let sampler = CellSampler::new(&grid_image, geometry.cell_size);
        let samples = sampler.sample_all(shape)?;

        let alphabet = ColorAlphabet::from_colors(samples.iter().map(|s| s.color))?;
        info!("Sampled {} cells, {} distinct colors, {} heads",
              samples.len(), alphabet.len(), samples.iter().filter(|s| s.head).count());

        let mut cells = Vec::with_capacity(samples.len());
        for sample in &samples {
            let color = alphabet.index_of(sample.color).ok_or_else(|| {
                FlowError::GenericError(format!("color {:?} missing from alphabet", sample.color))
            })?;
            cells.push(if sample.head { Cell::Head { color } } else { Cell::Path { color } });
        }

        LetterGrid::new(shape, cells)
    }
}

/// Copy a region out of an image; parts outside the image are black
fn crop_padded(image: &RgbImage, crop: Region) -> RgbImage {
    if crop.fits_within(image.width(), image.height()) {
        return imageops::crop_imm(image, crop.x as u32, crop.y as u32, crop.width, crop.height).to_image();
    }

    debug!("Crop box ({}, {})..({}, {}) overhangs the image, padding with black",
           crop.x, crop.y, crop.end_x(), crop.end_y());
    let mut canvas = RgbImage::new(crop.width, crop.height);
    imageops::overlay(&mut canvas, image, -crop.x, -crop.y);
    canvas
}

impl Default for GridExtractor {
    fn default() -> Self {
        GridExtractor::new(Box::new(CenteredSquareLayout::default()))
    }
}
