pub mod errors;
pub mod grid;
pub mod fetch;
pub mod config;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::{BatchReport, FlowStealer};
pub use crate::config::StealConfig;
pub use crate::errors::{FlowError, FlowResult};

pub use fetch::{ImageSource, HttpImageSource, decode_image};
pub use grid::{GridExtractor, GridShape, LetterGrid, Cell, CenteredSquareLayout, LayoutPolicy};
