//! Puzzle grid extraction
//!
//! This module turns Flow solution images into letter grids. The layout
//! policy locates the board, the sampler reads cell colors and head
//! flags, and the alphabet maps colors to letters.

mod region;
mod shape;
pub mod layout;
pub mod sampler;
pub mod alphabet;
pub mod letter_grid;
mod extractor;

pub use region::Region;
pub use shape::GridShape;
pub use layout::{CenteredSquareLayout, GridGeometry, LayoutPolicy};
pub use sampler::{CellSample, CellSampler, Rgb};
pub use alphabet::ColorAlphabet;
pub use letter_grid::{Cell, LetterGrid};
pub use extractor::GridExtractor;
