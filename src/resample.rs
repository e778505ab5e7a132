use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 128;

/// Height that keeps the `width x height` aspect ratio at `new_width`,
/// rounded down but never below one pixel.
///
/// Fails on empty sources, a zero target width, and targets whose RGB
/// buffer could not be addressed.
pub fn target_height(width: u32, height: u32, new_width: u32) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if new_width == 0 {
        return Err(Error::InvalidDimensions { width: new_width, height });
    }
    let ratio = height as f64 / width as f64;
    let new_height = (ratio * new_width as f64).floor().max(1.0);
    if new_height > u32::MAX as f64 {
        return Err(Error::InvalidDimensions { width: new_width, height: u32::MAX });
    }
    let new_height = new_height as u32;
    let fits = (new_width as u64)
        .checked_mul(new_height as u64)
        .and_then(|n| n.checked_mul(3))
        .map_or(false, |n| n <= isize::MAX as u64);
    if !fits {
        return Err(Error::InvalidDimensions { width: new_width, height: new_height });
    }
    Ok(new_height)
}

/// Lanczos-resample to `new_width`, keeping the aspect ratio. Quantization
/// amplifies aliasing noise, hence the expensive filter.
pub fn resample(img: &RgbImage, new_width: u32) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    let new_height = target_height(width, height, new_width)?;
    debug!(width, height, new_width, new_height, "resampling");
    Ok(imageops::resize(img, new_width, new_height, FilterType::Lanczos3))
}
