//! Blocking HTTP image source

use std::io::Read;
use log::debug;
use crate::errors::{FlowError, FlowResult};
use crate::fetch::ImageSource;

/// Fetches images with a blocking HTTP GET
///
/// No retries are made; any transport error or non-success status is
/// reported as `Transfer`.
pub struct HttpImageSource {
    agent: ureq::Agent,
}

impl HttpImageSource {
    pub fn new() -> Self {
        HttpImageSource {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        HttpImageSource::new()
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> FlowResult<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.agent
            .get(url)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => FlowError::Transfer(format!("{} returned HTTP {}", url, code)),
                other => FlowError::Transfer(format!("{}: {}", url, other)),
            })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| FlowError::Transfer(format!("failed to read body of {}: {}", url, e)))?;

        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
