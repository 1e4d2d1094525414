//! Maps a numeric rating to the glyphs shown on screen.
use std::fmt;

use crate::models::rating::MAX_STARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Filled,
    Half,
    Empty,
}

impl StarGlyph {
    pub fn symbol(self) -> char {
        match self {
            StarGlyph::Filled => '★',
            StarGlyph::Half => '⯨',
            StarGlyph::Empty => '☆',
        }
    }
}

impl fmt::Display for StarGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether unused positions are shown as empty stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarPadding {
    /// Always five glyphs; used for a single review's rating.
    Pad,
    /// Only filled and half glyphs; used for the average.
    None,
}

/// Renders `value` as at most five glyphs. Out-of-range input is clamped
/// to `0..=5` and NaN renders as zero.
pub fn render_stars(value: f64, padding: StarPadding) -> Vec<StarGlyph> {
    let max = f64::from(MAX_STARS);
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };

    let filled = value.floor() as usize;
    let mut glyphs = vec![StarGlyph::Filled; filled];
    if filled < usize::from(MAX_STARS) && value - value.floor() >= 0.5 {
        glyphs.push(StarGlyph::Half);
    }
    if padding == StarPadding::Pad {
        glyphs.resize(usize::from(MAX_STARS), StarGlyph::Empty);
    }
    glyphs
}

pub fn stars_to_string(glyphs: &[StarGlyph]) -> String {
    glyphs.iter().map(|glyph| glyph.symbol()).collect()
}
