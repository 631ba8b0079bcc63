//! Image decoding

use image::RgbImage;
use log::debug;
use crate::errors::FlowResult;

/// Decode encoded image bytes into an RGB buffer
///
/// The format is guessed from the content. Alpha channels and palettes
/// are dropped by the conversion to RGB8.
pub fn decode_image(bytes: &[u8]) -> FlowResult<RgbImage> {
    let decoded = image::load_from_memory(bytes)?;
    debug!("Decoded {}x{} image ({:?})", decoded.width(), decoded.height(), decoded.color());
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use image::{ImageFormat, Rgba, RgbaImage};
    use crate::errors::FlowError;

    #[test]
    fn test_decode_png_drops_alpha() {
        let source = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128]));
        let mut bytes = Cursor::new(Vec::new());
        source.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let decoded = decode_image(bytes.get_ref()).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_image(b"<html>not found</html>");

        assert!(matches!(result, Err(FlowError::Decode(_))));
    }
}
