//! Luminance to glyph mapping.
use image::{Rgb, Rgba};

use crate::target::Cell;

/// Glyphs ordered from visually sparsest to densest.
pub const GLYPH_RAMP: &[u8; 92] =
    b" `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Ramp positions per unit of 8-bit luminance.
pub const DENSITY_FACTOR: f64 = GLYPH_RAMP.len() as f64 / 255.0;

/// Maps a 16-bit channel onto 0..=255 (equivalent to dividing by 257).
pub const CHANNEL_SCALE: f64 = 255.0 / 65535.0;

#[inline]
pub fn scale_channel(channel: u16) -> f64 {
    channel as f64 * CHANNEL_SCALE
}

/// Weighted magnitude of an already 8-bit-scaled color.
///
/// The weights are applied inside the squares, so pure white lands at about
/// 170.5 rather than 255. Kept as is: existing renderings depend on it.
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    ((0.299 * r).powi(2) + (0.587 * g).powi(2) + (0.114 * b).powi(2)).sqrt()
}

/// Position in [`GLYPH_RAMP`] for a luminance value, clamped to the ramp.
pub fn ramp_index(luminance: f64) -> usize {
    let idx = (luminance * DENSITY_FACTOR).round().max(0.0) as usize;
    idx.min(GLYPH_RAMP.len() - 1)
}

pub fn glyph_for(luminance: f64) -> char {
    GLYPH_RAMP[ramp_index(luminance)] as char
}

/// Glyph and 8-bit foreground color for one resized, alpha-premultiplied pixel.
///
/// Alpha is ignored here; see [`crate::scale::premultiply_alpha`].
pub fn map_pixel(px: Rgba<u16>) -> Cell {
    let [r, g, b, _] = px.0;
    let r = scale_channel(r);
    let g = scale_channel(g);
    let b = scale_channel(b);
    Cell::new(glyph_for(luminance(r, g, b)), Rgb([r as u8, g as u8, b as u8]))
}
