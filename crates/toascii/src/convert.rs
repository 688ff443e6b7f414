//! Image bytes to ANSI text: decode, resize, map every pixel, assemble.
use std::{fmt, io::Read, sync::Arc};

use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::{
    error::{ConvertError, Result},
    glyph::map_pixel,
    scale::{premultiply_alpha, resize, NearestNeighbor, Scaler},
    target::{AnsiRenderer, RenderTarget},
};

/// Output grid size and interpolation strategy.
///
/// Without a scaler, [`NearestNeighbor`] is used.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub output_width: u32,
    pub output_height: u32,
    pub scaler: Option<Arc<dyn Scaler>>,
}

impl ConvertConfig {
    pub fn new(output_width: u32, output_height: u32) -> Self {
        Self {
            output_width,
            output_height,
            scaler: None,
        }
    }

    pub fn with_scaler<S: Scaler + 'static>(mut self, scaler: S) -> Self {
        self.scaler = Some(Arc::new(scaler));
        self
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_deref().unwrap_or(&NearestNeighbor)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.output_width, self.output_height);
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidConfig { width, height });
        }
        // four u16 channels per pixel must be addressable
        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .is_some();
        if !fits {
            return Err(ConvertError::GridTooLarge { width, height });
        }
        Ok(())
    }
}

/// Convert encoded GIF, JPEG or PNG bytes. The format is sniffed from the content.
pub fn convert(bytes: &[u8], config: &ConvertConfig) -> Result<String> {
    config.validate()?;
    let img = image::load_from_memory(bytes)?;
    convert_image(&img, config)
}

pub fn convert_reader<R: Read>(mut reader: R, config: &ConvertConfig) -> Result<String> {
    config.validate()?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let img = image::load_from_memory(&buf)?;
    convert_image(&img, config)
}

pub fn convert_image(img: &DynamicImage, config: &ConvertConfig) -> Result<String> {
    let mut target = AnsiRenderer::new();
    render_to(img, config, &mut target)?;
    Ok(target.into_string())
}

/// Resize `img` to the configured grid and feed the cells to `target`,
/// rows top to bottom, columns left to right.
pub fn render_to<T>(img: &DynamicImage, config: &ConvertConfig, target: &mut T) -> Result<()>
where
    T: RenderTarget,
    T::Error: fmt::Display,
{
    config.validate()?;
    let (width, height) = (config.output_width, config.output_height);
    let (src_w, src_h) = img.dimensions();
    debug!(
        "resizing {src_w}x{src_h} to {width}x{height} with {:?}",
        config.scaler()
    );

    let mut src = img.to_rgba16();
    premultiply_alpha(&mut src);
    let grid = resize(&src, width, height, config.scaler());
    target.size_hint(width, height);
    for row in grid.rows() {
        for px in row {
            target
                .draw(map_pixel(*px))
                .map_err(|e| ConvertError::Target(e.to_string()))?;
        }
        target
            .next_line()
            .map_err(|e| ConvertError::Target(e.to_string()))?;
    }
    Ok(())
}
