//! Crate-level error type and `Result` alias.
//! `MissingInput` is the one failure callers are expected to report and move
//! past; everything else is fatal for the run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    /// True for the one condition that is reported without failing the run.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}
