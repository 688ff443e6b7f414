//! SGR escape sequences: the `ESC[p1;p2;...m` styling directives.
use once_cell::sync::Lazy;
use std::fmt;

/// A rendered SGR directive such as `\x1B[38;2;10;20;30m`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EscapeSequence(String);

impl EscapeSequence {
    /// Join `params` with `;`, wrapped in the control sequence introducer and `m`.
    ///
    /// An empty parameter list yields `\x1B[m`, which terminals read as a reset.
    pub fn build(params: &[i32]) -> Self {
        let mut out = String::with_capacity(3 + params.len() * 4);
        out.push_str("\x1B[");
        for (i, p) in params.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(&p.to_string());
        }
        out.push('m');
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EscapeSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EscapeSequence> for String {
    fn from(seq: EscapeSequence) -> Self {
        seq.0
    }
}

/// Resets every attribute (`\x1B[0m`).
pub static RESET: Lazy<EscapeSequence> = Lazy::new(|| EscapeSequence::build(&[0]));

pub const BOLD: i32 = 1;
pub const FAINT: i32 = 2; // Not widely supported
pub const ITALIC: i32 = 3; // Not widely supported
pub const UNDERLINE: i32 = 4;
pub const SLOW_BLINK: i32 = 5;
pub const FAST_BLINK: i32 = 6; // Not widely supported
pub const REVERSE_VIDEO: i32 = 7;
pub const CONCEAL: i32 = 8; // Not widely supported
pub const STRIKETHROUGH: i32 = 9; // Not widely supported
pub const DEFAULT_FONT: i32 = 10;
pub const ALT_FONT1: i32 = 11;
pub const ALT_FONT2: i32 = 12;
pub const ALT_FONT3: i32 = 13;
pub const ALT_FONT4: i32 = 14;
pub const ALT_FONT5: i32 = 15;
pub const ALT_FONT6: i32 = 16;
pub const ALT_FONT7: i32 = 17;
pub const ALT_FONT8: i32 = 18;
pub const ALT_FONT9: i32 = 19;
pub const FRAKTUR: i32 = 20; // Almost never supported
pub const DOUBLE_UNDERLINE: i32 = 21;
/// Same code as [`DOUBLE_UNDERLINE`]; terminals disagree on which one they honor.
pub const BOLD_OFF: i32 = 21;
pub const NORMAL_INTENSITY: i32 = 22;
pub const NO_ITALIC_FRAKTUR: i32 = 23;
pub const UNDERLINE_OFF: i32 = 24;
pub const BLINK_OFF: i32 = 25;
pub const INVERSE_OFF: i32 = 27;
pub const REVEAL: i32 = 28;
pub const STRIKETHROUGH_OFF: i32 = 29;
pub const FRAMED: i32 = 51;
pub const ENCIRCLED: i32 = 52;
pub const OVERLINED: i32 = 53;
pub const NO_FRAME_ENCIRCLE: i32 = 54;
pub const NO_OVERLINED: i32 = 55;

const BACKGROUND_OFFSET: i32 = 10;
const BRIGHT_OFFSET: i32 = 60;

/// The eight base terminal colors plus the terminal default, as foreground codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    Default = 39,
}

impl Color {
    pub const BASE: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Foreground/background pair. Backgrounds sit 10 above the foreground code,
/// bright variants another 60 above that.
pub fn create_color(
    text: Color,
    background: Color,
    bright_text: bool,
    bright_background: bool,
) -> EscapeSequence {
    let mut fg = text.code();
    let mut bg = background.code() + BACKGROUND_OFFSET;
    if bright_text {
        fg += BRIGHT_OFFSET;
    }
    if bright_background {
        bg += BRIGHT_OFFSET;
    }
    EscapeSequence::build(&[fg, bg])
}

/// 24-bit foreground color, `\x1B[38;2;R;G;Bm`.
pub fn truecolor_foreground(r: u8, g: u8, b: u8) -> EscapeSequence {
    EscapeSequence::build(&[38, 2, r as i32, g as i32, b as i32])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_reset() {
        assert_eq!(EscapeSequence::build(&[0]).as_str(), "\x1B[0m");
        assert_eq!(*RESET, EscapeSequence::build(&[0]));
    }

    #[test]
    fn build_truecolor() {
        assert_eq!(
            EscapeSequence::build(&[38, 2, 10, 20, 30]).as_str(),
            "\x1B[38;2;10;20;30m"
        );
        assert_eq!(truecolor_foreground(10, 20, 30).as_str(), "\x1B[38;2;10;20;30m");
    }

    #[test]
    fn build_empty() {
        assert_eq!(EscapeSequence::build(&[]).as_str(), "\x1B[m");
    }

    #[test]
    fn color_pairs() {
        assert_eq!(
            create_color(Color::Red, Color::Black, false, false).as_str(),
            "\x1B[31;40m"
        );
        assert_eq!(
            create_color(Color::Red, Color::Blue, true, false).as_str(),
            "\x1B[91;44m"
        );
        assert_eq!(
            create_color(Color::White, Color::Cyan, false, true).as_str(),
            "\x1B[37;106m"
        );
        assert_eq!(
            create_color(Color::Default, Color::Default, false, false).as_str(),
            "\x1B[39;49m"
        );
    }

    #[test]
    fn display_matches_text() {
        let seq = EscapeSequence::build(&[BOLD, UNDERLINE]);
        assert_eq!(seq.to_string(), "\x1B[1;4m");
        assert_eq!(String::from(seq), "\x1B[1;4m");
    }
}
