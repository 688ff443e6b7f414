use std::fmt::Write;

use image::Rgb;

use crate::ansi::truecolor_foreground;

/// One output character: a glyph painted in a 24-bit foreground color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb<u8>,
}

impl Cell {
    pub fn new(ch: char, fg: Rgb<u8>) -> Self {
        Self { ch, fg }
    }
}

/// Sink for rendered cells, fed row-major.
pub trait RenderTarget {
    type Error;
    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error>;
    /// Called after the last cell of every row, including the final one.
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
    fn size_hint(&mut self, _width: u32, _height: u32) {}
}

/// Builds the terminal text: a truecolor prefix before each glyph, `\n` after each row.
///
/// No reset is written at the end; callers printing to a live terminal
/// append [`crate::ansi::RESET`] themselves.
#[derive(Default)]
pub struct AnsiRenderer {
    out: String,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl RenderTarget for AnsiRenderer {
    type Error = std::fmt::Error;

    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error> {
        let [r, g, b] = cell.fg.0;
        write!(self.out, "{}{}", truecolor_foreground(r, g, b), cell.ch)
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.out.push('\n');
        Ok(())
    }

    fn size_hint(&mut self, width: u32, height: u32) {
        // "\x1B[38;2;255;255;255m" plus the glyph
        let per_row = (width as usize).saturating_mul(20).saturating_add(1);
        // only a hint: an impossible reservation is skipped
        let _ = self.out.try_reserve(per_row.saturating_mul(height as usize));
    }
}
