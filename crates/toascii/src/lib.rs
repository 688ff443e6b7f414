//! toascii: raster images as truecolor ANSI text.
//! Decodes GIF/JPEG/PNG, resamples onto a character grid and emits one
//! colored glyph per pixel, picked from a luminance ramp.

pub mod ansi;
pub mod convert;
mod error;
pub mod glyph;
pub mod scale;
mod target;

pub use ansi::{create_color, Color, EscapeSequence, RESET};
pub use convert::{convert, convert_image, convert_reader, render_to, ConvertConfig};
pub use error::{ConvertError, ParseInterpolationError, Result};
pub use glyph::GLYPH_RAMP;
pub use scale::{
    premultiply_alpha, resize, Bilinear, Interpolation, NearestNeighbor, Rgba16Image, Scaler,
};
pub use target::{AnsiRenderer, Cell, RenderTarget};

// Test utilities
pub mod test_support;
