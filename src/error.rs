use std::path::PathBuf;

use thiserror::Error;

use crate::palette;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read image {}: {source}", .path.display())]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unknown palette {0:?} (expected one of: {expected})", expected = palette::names())]
    InvalidPalette(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Cannot write image {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
