//! Image sources
//!
//! Fetching solution images and decoding them into RGB buffers. The
//! source is a trait so the batch loop can run against local fixtures.

mod http_source;
mod decode;

pub use http_source::HttpImageSource;
pub use decode::decode_image;

use crate::errors::FlowResult;

/// Source of raw image bytes
pub trait ImageSource {
    /// Fetch the bytes stored at a URL
    ///
    /// # Arguments
    /// * `url` - Location of the image
    ///
    /// # Returns
    /// The raw (still encoded) image bytes, or a `Transfer` error
    fn fetch(&self, url: &str) -> FlowResult<Vec<u8>>;
}

/// Build the URL of the image with a given index
///
/// The index is appended to the base URL as a plain decimal number,
/// followed by the suffix.
pub fn image_url(base_url: &str, index: u32, suffix: &str) -> String {
    format!("{}{}{}", base_url, index, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("https://example.com/flow-regular-", 7, ".png"),
            "https://example.com/flow-regular-7.png"
        );
        assert_eq!(image_url("http://host/", 30, ""), "http://host/30");
    }
}
