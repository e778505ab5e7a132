// Nearest-palette-color quantization

use std::time::Instant;

use image::RgbImage;
use rayon::prelude::*;
use tracing::debug;

use crate::color::{hsv_distance, to_hsv, Color, Hsv, HueDistance};
use crate::iter_utils::min_by_key_partial;
use crate::palette::Palette;

// Data definitions

/// A palette with its HSV coordinates computed up front, so each pixel
/// only pays for its own conversion.
#[derive(Debug, Clone)]
pub struct Matcher {
    entries: Vec<(Color, Hsv)>,
    hue: HueDistance,
}

impl Matcher {
    pub fn new(palette: &Palette, hue: HueDistance) -> Self {
        Matcher {
            entries: palette.colors().iter().map(|&c| (c, to_hsv(c))).collect(),
            hue,
        }
    }

    /// Closest palette entry and its distance. The first entry wins ties.
    pub fn nearest_with_distance(&self, color: Color) -> Option<(Color, f64)> {
        let target = to_hsv(color);
        min_by_key_partial(self.entries.iter(), |e| hsv_distance(target, e.1, self.hue))
            .map(|(e, dist)| (e.0, dist))
    }

    pub fn nearest(&self, color: Color) -> Color {
        // Palettes are never empty; fall back to the input otherwise
        self.nearest_with_distance(color).map_or(color, |m| m.0)
    }
}

// Whole images

/// Replace every pixel of `img` with its nearest color from `palette`.
/// Rows are processed in parallel.
pub fn quantize(img: &mut RgbImage, palette: &Palette, hue: HueDistance) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let started = Instant::now();
    let matcher = Matcher::new(palette, hue);
    let row_len = width as usize * 3;

    img.par_chunks_mut(row_len).for_each(|row| {
        for px in row.chunks_exact_mut(3) {
            let nearest = matcher.nearest([px[0], px[1], px[2]]);
            px.copy_from_slice(&nearest);
        }
    });

    debug!(
        width,
        height,
        palette = palette.name(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "quantized"
    );
}

/// Like [`quantize`], but leaves `img` untouched and returns a new image.
pub fn quantize_to(img: &RgbImage, palette: &Palette, hue: HueDistance) -> RgbImage {
    let mut out = img.clone();
    quantize(&mut out, palette, hue);
    out
}
