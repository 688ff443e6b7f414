//! Test support utilities for toascii.
//!
//! Helpers for inspecting rendered cells and for synthesizing encoded images.
//! Not part of the stable API.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::{target::Cell, ConvertError, RenderTarget};

/// Captures rendered output as rows of cells.
#[derive(Default)]
pub struct BufferTarget {
    pub lines: Vec<Vec<Cell>>,
    cur_line: usize,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyphs only, one string per row.
    pub fn glyph_rows(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| l.iter().map(|c| c.ch).collect())
            .collect()
    }
}

impl RenderTarget for BufferTarget {
    type Error = ConvertError;

    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error> {
        while self.cur_line >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        self.lines[self.cur_line].push(cell);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur_line += 1;
        Ok(())
    }
}

/// Encode `img` as PNG in memory.
pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding into memory");
    bytes.into_inner()
}

/// Remove every `ESC[...m` directive, leaving glyphs and newlines.
pub fn strip_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1B' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
