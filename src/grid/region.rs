//! Region structure for the cropped grid area
//!
//! Coordinates are in pixels with (0,0) at the top-left corner
//! of the source image. A region may reach past the image edges;
//! the part outside the image reads as black when cropped.

/// Rectangular pixel region of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner, negative when left of the image
    pub x: i64,

    /// Y-coordinate of the top-left corner, negative when above the image
    pub y: i64,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Whether the region lies entirely inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.end_x() <= width as i64 && self.end_y() <= height as i64
    }
}
