//! Resampling of decoded images onto the output character grid.
//!
//! Interpolation is pluggable through [`Scaler`]. The crate ships a center-sampling
//! [`NearestNeighbor`], a [`Bilinear`] blend, and forwards every
//! [`FilterType`] kernel of the `image` crate.
use std::{fmt, str::FromStr};

use image::{imageops, imageops::FilterType, ImageBuffer, Rgba};

use crate::error::ParseInterpolationError;

/// Working pixel format: straight-alpha RGBA with 16 bits per channel.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// An interpolation strategy.
///
/// `scale` must fill every pixel of `dst` by sampling `src`; the destination
/// size is fixed by the caller. No aspect ratio is preserved.
pub trait Scaler: fmt::Debug + Send + Sync {
    fn scale(&self, dst: &mut Rgba16Image, src: &Rgba16Image);
}

/// Picks the source pixel whose center lies nearest the destination pixel center.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NearestNeighbor;

impl Scaler for NearestNeighbor {
    fn scale(&self, dst: &mut Rgba16Image, src: &Rgba16Image) {
        let (sw, sh) = (src.width() as u64, src.height() as u64);
        if sw == 0 || sh == 0 {
            return;
        }
        let (dw2, dh2) = (2 * dst.width() as u64, 2 * dst.height() as u64);
        for (dx, dy, px) in dst.enumerate_pixels_mut() {
            let sx = (2 * dx as u64 + 1) * sw / dw2;
            let sy = (2 * dy as u64 + 1) * sh / dh2;
            *px = *src.get_pixel(sx as u32, sy as u32);
        }
    }
}

/// Center-aligned bilinear blend of the four surrounding source pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilinear;

impl Bilinear {
    /// Source coordinate for destination index `d`, plus the neighbour and weight.
    fn sample_axis(d: u32, src_len: u32, dst_len: u32) -> (u32, u32, f64) {
        let f = (d as f64 + 0.5) * src_len as f64 / dst_len as f64 - 0.5;
        let f = f.clamp(0.0, (src_len - 1) as f64);
        let lo = f.floor() as u32;
        let hi = (lo + 1).min(src_len - 1);
        (lo, hi, f - lo as f64)
    }
}

impl Scaler for Bilinear {
    fn scale(&self, dst: &mut Rgba16Image, src: &Rgba16Image) {
        let (sw, sh) = src.dimensions();
        if sw == 0 || sh == 0 {
            return;
        }
        let (dw, dh) = dst.dimensions();
        for (dx, dy, px) in dst.enumerate_pixels_mut() {
            let (x0, x1, tx) = Self::sample_axis(dx, sw, dw);
            let (y0, y1, ty) = Self::sample_axis(dy, sh, dh);
            let p00 = src.get_pixel(x0, y0);
            let p10 = src.get_pixel(x1, y0);
            let p01 = src.get_pixel(x0, y1);
            let p11 = src.get_pixel(x1, y1);
            for c in 0..4 {
                let top = p00[c] as f64 * (1.0 - tx) + p10[c] as f64 * tx;
                let bottom = p01[c] as f64 * (1.0 - tx) + p11[c] as f64 * tx;
                let v = top * (1.0 - ty) + bottom * ty;
                px[c] = v.round().clamp(0.0, u16::MAX as f64) as u16;
            }
        }
    }
}

impl Scaler for FilterType {
    fn scale(&self, dst: &mut Rgba16Image, src: &Rgba16Image) {
        if src.width() == 0 || src.height() == 0 {
            return;
        }
        *dst = imageops::resize(src, dst.width(), dst.height(), *self);
    }
}

/// Named built-in strategies, for configuration surfaces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Interpolation {
    #[default]
    Nearest,
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl Interpolation {
    pub const ALL: [Interpolation; 4] = [
        Interpolation::Nearest,
        Interpolation::Bilinear,
        Interpolation::CatmullRom,
        Interpolation::Lanczos3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Bilinear => "bilinear",
            Interpolation::CatmullRom => "catmull-rom",
            Interpolation::Lanczos3 => "lanczos3",
        }
    }
}

impl Scaler for Interpolation {
    fn scale(&self, dst: &mut Rgba16Image, src: &Rgba16Image) {
        match self {
            Interpolation::Nearest => NearestNeighbor.scale(dst, src),
            Interpolation::Bilinear => Bilinear.scale(dst, src),
            Interpolation::CatmullRom => FilterType::CatmullRom.scale(dst, src),
            Interpolation::Lanczos3 => FilterType::Lanczos3.scale(dst, src),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = ParseInterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Interpolation::ALL
            .into_iter()
            .find(|i| i.name() == lower)
            .ok_or_else(|| ParseInterpolationError(s.to_string()))
    }
}

/// Composite every pixel over black, in place. Alpha is kept.
///
/// Interpolating premultiplied values stops the color of fully transparent
/// pixels from bleeding into visible neighbours.
pub fn premultiply_alpha(img: &mut Rgba16Image) {
    for px in img.pixels_mut() {
        let a = px[3] as u32;
        for c in 0..3 {
            px[c] = (px[c] as u32 * a / 0xFFFF) as u16;
        }
    }
}

/// Allocate a transparent `width` x `height` grid and let `scaler` fill it.
pub fn resize(src: &Rgba16Image, width: u32, height: u32, scaler: &dyn Scaler) -> Rgba16Image {
    let mut dst = Rgba16Image::new(width, height);
    scaler.scale(&mut dst, src);
    dst
}
