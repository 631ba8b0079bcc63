use std::path::PathBuf;
use log::{error, info, warn};
use crate::config::StealConfig;
use crate::errors::FlowResult;
use crate::fetch::{self, decode_image, HttpImageSource, ImageSource};
use crate::grid::{CenteredSquareLayout, GridExtractor, LetterGrid};
use crate::utils::progress::ProgressTracker;
use crate::utils::write_utils;

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Grid files written, in index order
    pub saved: Vec<PathBuf>,
    /// Indices that failed, with the error message
    pub failures: Vec<(u32, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main interface to the flowsteal library
///
/// Owns the configuration, the image source and the extractor, and runs
/// the fetch, extract and save steps for each image index in turn.
pub struct FlowStealer<S: ImageSource = HttpImageSource> {
    config: StealConfig,
    source: S,
    extractor: GridExtractor,
    show_progress: bool,
}

impl FlowStealer<HttpImageSource> {
    /// Create a stealer downloading over HTTP
    pub fn new(config: StealConfig) -> Self {
        FlowStealer::with_source(config, HttpImageSource::new())
    }
}

impl<S: ImageSource> FlowStealer<S> {
    /// Create a stealer reading images from a custom source
    ///
    /// # Arguments
    /// * `config` - Batch settings
    /// * `source` - Where image bytes come from
    pub fn with_source(config: StealConfig, source: S) -> Self {
        let extractor = GridExtractor::new(Box::new(CenteredSquareLayout::new(config.margin)));
        FlowStealer {
            config,
            source,
            extractor,
            show_progress: false,
        }
    }

    /// Replace the extractor, e.g. to use a different layout policy
    pub fn with_extractor(mut self, extractor: GridExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Draw a progress bar during `run`
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &StealConfig {
        &self.config
    }

    /// URL of the image with the given index
    pub fn image_url(&self, index: u32) -> String {
        fetch::image_url(&self.config.base_url, index, &self.config.suffix)
    }

    /// Path the grid of the given index is written to
    pub fn output_path(&self, index: u32) -> PathBuf {
        write_utils::grid_file_path(&self.config.output_dir, self.config.shape, index)
    }

    /// Fetch, decode and extract one image
    ///
    /// # Arguments
    /// * `index` - Image index appended to the base URL
    ///
    /// # Returns
    /// The extracted letter grid or an error
    pub fn steal_grid(&self, index: u32) -> FlowResult<LetterGrid> {
        let url = self.image_url(index);
        let bytes = self.source.fetch(&url)?;
        let image = decode_image(&bytes)?;
        self.extractor.extract(&image, self.config.shape)
    }

    /// Fetch, decode and extract one image into its text form
    pub fn steal(&self, index: u32) -> FlowResult<String> {
        Ok(self.steal_grid(index)?.render())
    }

    /// Steal one image and write its grid file
    ///
    /// # Returns
    /// Path of the written file or an error; nothing is written on error
    pub fn steal_and_save(&self, index: u32) -> FlowResult<PathBuf> {
        let text = self.steal(index)?;
        let path = self.output_path(index);
        write_utils::write_text_file(&path, &text)?;
        Ok(path)
    }

    /// Process every index from first to last, one after another
    ///
    /// The first failure aborts the batch and is returned, unless
    /// `keep_going` is set; then failures are logged and collected in the
    /// report.
    pub fn run(&self) -> FlowResult<BatchReport> {
        let total = self.config.image_count();
        let progress = if self.show_progress {
            ProgressTracker::new(total, "Stealing images")
        } else {
            ProgressTracker::hidden(total)
        };

        info!("Stealing {} {} images ({}..={}) into {}",
              total, self.config.shape, self.config.first_index, self.config.last_index,
              self.config.output_dir.display());

        let mut report = BatchReport::default();
        for index in self.config.first_index..=self.config.last_index {
            info!("Stealing image {}...", index);
            progress.set_message(&format!("image {}", index));

            match self.steal_and_save(index) {
                Ok(path) => {
                    info!("Saved {}", path.display());
                    report.saved.push(path);
                }
                Err(e) if self.config.keep_going => {
                    warn!("Image {} failed: {}", index, e);
                    report.failures.push((index, e.to_string()));
                }
                Err(e) => {
                    error!("Image {} failed, aborting batch: {}", index, e);
                    return Err(e);
                }
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Batch finished: {} saved, {} failed", report.saved.len(), report.failures.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::errors::FlowError;

    struct NoSource;

    impl ImageSource for NoSource {
        fn fetch(&self, url: &str) -> FlowResult<Vec<u8>> {
            Err(FlowError::Transfer(format!("offline: {}", url)))
        }
    }

    #[test]
    fn test_urls_and_paths() {
        let stealer = FlowStealer::with_source(StealConfig::default(), NoSource);

        assert_eq!(
            stealer.image_url(7),
            "https://flowfreesolutions.com/solution-pictures/flow/regular/flow-regular-7.png"
        );
        assert_eq!(stealer.output_path(7), Path::new("flows/5x5_7.txt"));
    }

    #[test]
    fn test_transfer_failure_aborts_batch() {
        let stealer = FlowStealer::with_source(StealConfig::default(), NoSource);

        assert!(matches!(stealer.run(), Err(FlowError::Transfer(_))));
    }
}
