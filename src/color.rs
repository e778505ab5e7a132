//! HSV conversion and the palette distance metric.

/// An RGB triple.
pub type Color = [u8; 3];

/// Channels are divided by this, not by 255, so full intensity maps to
/// 255/256 and never reaches 1.0. Changing it shifts every distance.
const CHANNEL_SCALE: f64 = 256.0;

/// Hue, saturation and value, each in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// How the hue component contributes to [`distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueDistance {
    /// Plain `|h1 - h2|`. Hues 0.01 and 0.99 are 0.98 apart.
    #[default]
    Linear,
    /// Shortest way around the hue circle, at most 0.5.
    Circular,
}

pub fn to_hsv(color: Color) -> Hsv {
    let [r, g, b] = color.map(|c| c as f64 / CHANNEL_SCALE);
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if minc == maxc {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let range = maxc - minc;
    let s = range / maxc;
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv { h: (h / 6.0).rem_euclid(1.0), s, v }
}

/// L1 distance between two already-converted colors.
pub fn hsv_distance(a: Hsv, b: Hsv, hue: HueDistance) -> f64 {
    let dh = (a.h - b.h).abs();
    let dh = match hue {
        HueDistance::Linear => dh,
        HueDistance::Circular => dh.min(1.0 - dh),
    };
    dh + (a.s - b.s).abs() + (a.v - b.v).abs()
}

/// Manhattan distance in HSV space. Deliberately not squared.
pub fn distance(a: Color, b: Color, hue: HueDistance) -> f64 {
    hsv_distance(to_hsv(a), to_hsv(b), hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_black_is_zero() {
        assert_eq!(to_hsv([0, 0, 0]), Hsv { h: 0.0, s: 0.0, v: 0.0 });
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let hsv = to_hsv([128, 128, 128]);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 0.5);
    }

    #[test]
    fn test_white_value_stays_below_one() {
        assert_eq!(to_hsv([255, 255, 255]).v, 255.0 / 256.0);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // red dominant, blue above green: raw hue is negative
        let hsv = to_hsv([255, 0, 77]);
        assert_close(hsv.h, 0.949673202614379);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 0.99609375);
    }

    #[test]
    fn test_hue_sectors() {
        assert_close(to_hsv([255, 155, 0]).h, 0.10130718954248367);
        assert_close(to_hsv([0, 255, 0]).h, 1.0 / 3.0);
        assert_close(to_hsv([0, 0, 255]).h, 2.0 / 3.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for c in [[0, 0, 0], [255, 0, 77], [12, 200, 99]] {
            assert_eq!(distance(c, c, HueDistance::Linear), 0.0);
            assert_eq!(distance(c, c, HueDistance::Circular), 0.0);
        }
    }

    #[test]
    fn test_distance_is_not_squared() {
        // only value differs, by exactly 0.25
        assert_eq!(distance([128, 128, 128], [64, 64, 64], HueDistance::Linear), 0.25);
    }

    #[test]
    fn test_linear_hue_does_not_wrap() {
        let a = Hsv { h: 0.01, s: 0.5, v: 0.5 };
        let b = Hsv { h: 0.99, s: 0.5, v: 0.5 };
        assert_close(hsv_distance(a, b, HueDistance::Linear), 0.98);
        assert_close(hsv_distance(a, b, HueDistance::Circular), 0.02);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [10, 200, 30];
        let b = [255, 119, 168];
        assert_eq!(
            distance(a, b, HueDistance::Linear),
            distance(b, a, HueDistance::Linear)
        );
    }
}
