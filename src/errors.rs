//! Custom error types for grid extraction

use std::fmt;
use std::io;

/// Errors raised while fetching, decoding or extracting puzzle grids
#[derive(Debug)]
pub enum FlowError {
    /// I/O error
    IoError(io::Error),
    /// More distinct cell colors than single letters can encode
    TooManyColors(usize),
    /// Network transfer failed
    Transfer(String),
    /// Downloaded bytes could not be decoded as an image
    Decode(image::ImageError),
    /// Computed crop box is empty (margin as wide as the image)
    CropOutOfBounds {
        width: u32,
        height: u32,
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
    },
    /// Sampling position falls outside the cropped grid
    PixelOutOfBounds { x: i64, y: i64 },
    /// Grid shape string or dimensions are invalid
    InvalidShape(String),
    /// Letter grid text could not be parsed
    InvalidGrid(String),
    /// Configuration file is malformed
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::IoError(e) => write!(f, "I/O error: {}", e),
            FlowError::TooManyColors(n) => write!(
                f,
                "More than 26 unique colors ({}), can't map to single letters",
                n
            ),
            FlowError::Transfer(msg) => write!(f, "Transfer failed: {}", msg),
            FlowError::Decode(e) => write!(f, "Image decode failed: {}", e),
            FlowError::CropOutOfBounds { width, height, left, top, right, bottom } => write!(
                f,
                "Crop box ({}, {}, {}, {}) is empty for a {}x{} image",
                left, top, right, bottom, width, height
            ),
            FlowError::PixelOutOfBounds { x, y } => {
                write!(f, "Sample position ({}, {}) is outside the grid", x, y)
            }
            FlowError::InvalidShape(msg) => write!(f, "Invalid grid shape: {}", msg),
            FlowError::InvalidGrid(msg) => write!(f, "Invalid grid: {}", msg),
            FlowError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FlowError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::IoError(e) => Some(e),
            FlowError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FlowError {
    fn from(error: io::Error) -> Self {
        FlowError::IoError(error)
    }
}

impl From<image::ImageError> for FlowError {
    fn from(error: image::ImageError) -> Self {
        FlowError::Decode(error)
    }
}

/// Result type for grid extraction operations
pub type FlowResult<T> = Result<T, FlowError>;
