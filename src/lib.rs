//! Turn photos into pixel art: shrink an image with a Lanczos filter, then
//! snap every pixel to the nearest color of a small fixed palette, measured
//! as the L1 distance between HSV coordinates.

mod iter_utils;

pub mod color;
pub mod error;
pub mod io;
pub mod palette;
pub mod processing;
pub mod resample;

use std::path::Path;

use image::RgbImage;
use tracing::info;

pub use color::{Color, HueDistance};
pub use error::{Error, Result};
pub use io::{load_image, save_image};
pub use palette::Palette;
pub use processing::{quantize, quantize_to, Matcher};
pub use resample::{resample, target_height, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Output width in pixels; height follows the aspect ratio.
    pub width: u32,
    pub palette: Palette,
    pub hue: HueDistance,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            width: DEFAULT_WIDTH,
            palette: Palette::default(),
            hue: HueDistance::default(),
        }
    }
}

/// Resample then quantize an in-memory image.
pub fn pixelate(img: &RgbImage, options: &Options) -> Result<RgbImage> {
    let mut out = resample(img, options.width)?;
    quantize(&mut out, &options.palette, options.hue);
    Ok(out)
}

/// Read `input`, pixelate it and write the result to `output`.
pub fn run(input: &Path, output: &Path, options: &Options) -> Result<RgbImage> {
    let img = load_image(input)?;
    let out = pixelate(&img, options)?;
    save_image(&out, output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        width = out.width(),
        height = out.height(),
        palette = options.palette.name(),
        "wrote pixel art"
    );
    Ok(out)
}
