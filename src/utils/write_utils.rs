//! Grid file writing utilities

use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::FlowResult;
use crate::grid::GridShape;

/// File name of a grid: `<rows>x<cols>_<index>.txt`
pub fn grid_file_name(shape: GridShape, index: u32) -> String {
    format!("{}x{}_{}.txt", shape.rows, shape.cols, index)
}

/// Full path of a grid file inside an output directory
pub fn grid_file_path(output_dir: &Path, shape: GridShape, index: u32) -> PathBuf {
    output_dir.join(grid_file_name(shape, index))
}

/// Write text to a file, creating missing parent directories
///
/// The text is written as is, without adding a trailing newline.
pub fn write_text_file(path: &Path, text: &str) -> FlowResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}
