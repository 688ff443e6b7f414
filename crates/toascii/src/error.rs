use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid output size {width}x{height}: width and height must be positive")]
    InvalidConfig { width: u32, height: u32 },
    #[error("output grid {width}x{height} is too large to allocate")]
    GridTooLarge { width: u32, height: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render target error: {0}")]
    Target(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interpolation '{0}' (expected nearest, bilinear, catmull-rom or lanczos3)")]
pub struct ParseInterpolationError(pub String);
