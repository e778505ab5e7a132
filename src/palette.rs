//! Built-in palettes, looked up by name.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::Error;

/// A named, ordered, non-empty set of colors. Earlier entries win ties
/// during nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    colors: &'static [Color],
}

pub static PICO_8: Palette = Palette {
    name: "pico-8",
    colors: &[
        [  0,   0,   0], // black
        [ 32,  51, 123], // dark blue
        [126,  37,  83], // dark purple
        [  0, 144,  61], // dark green
        [171,  82,  54], // brown
        [ 52,  54,  53], // dark gray
        [194, 195, 199], // light gray
        [255, 241, 232], // white
        [255,   0,  77], // red
        [255, 155,   0], // orange
        [255, 231,  39], // yellow
        [  0, 226,  50], // green
        [ 41, 173, 255], // blue
        [132, 112, 169], // indigo
        [255, 119, 168], // pink
        [255, 214, 197], // peach
    ],
};

// Color wheel palette from https://forums.tigsource.com/index.php?topic=25396.0
pub static NEON: Palette = Palette {
    name: "neon",
    colors: &[
        [255, 255, 255],
        [  0,   0,   0],
        [255, 194, 219],
        [188, 255, 153],
        [  0, 255,  65],
        [255,   0, 188],
        [255,   0, 124],
        [255,   0,  60],
        [255,   0,   0],
        [255,  64,   0],
        [255, 128,   0],
        [255, 192,   0],
        [254, 255,   0],
        [190, 255,   0],
        [126, 255,   0],
        [ 63, 255,   0],
        [  0, 255,   1],
    ],
};

pub static GAMEBOY: Palette = Palette {
    name: "gameboy",
    colors: &[
        [ 15,  56,  15],
        [ 48,  98,  48],
        [139, 172,  15],
        [155, 188,  15],
    ],
};

static ALL: [&Palette; 3] = [&PICO_8, &NEON, &GAMEBOY];

impl Palette {
    /// Every built-in palette, in a stable order.
    pub fn all() -> impl Iterator<Item = &'static Palette> {
        ALL.iter().copied()
    }

    pub fn by_name(name: &str) -> Result<&'static Palette, Error> {
        Self::all()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::InvalidPalette(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        NEON
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).map(|p| *p)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Comma-separated names of the built-in palettes, for messages.
pub fn names() -> String {
    Palette::all().map(|p| p.name).collect::<Vec<_>>().join(", ")
}
