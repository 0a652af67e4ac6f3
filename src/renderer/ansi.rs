//! ANSI escape sequences for terminal control.
//!
//! Two layers live here:
//! - Free functions that write fixed control sequences (cursor, screen,
//!   alternate buffer, reset) into any [`Write`].
//! - [`AnsiRenderer`], bound to a [`ColorMode`], which turns a [`Style`]
//!   into one SGR sequence and down-samples colors to the tier.

use std::io::{self, Write};

use crate::style::Style;
use crate::terminal::ColorMode;
use crate::types::{Attr, Color};

// =============================================================================
// Constants
// =============================================================================

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Cursor and screen
// =============================================================================

/// Move cursor to absolute position (0-indexed in, 1-indexed on the wire).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y as u32 + 1, x as u32 + 1)
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

/// Clear the viewport and home the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2J\x1b[H")
}

/// Enter alternate screen buffer.
#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit alternate screen buffer.
#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

/// Begin synchronized output (terminal buffers until [`end_sync`]).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End synchronized output.
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(RESET.as_bytes())
}

/// Write `CSI params m`. Empty params write nothing.
#[inline]
pub fn sgr<W: Write>(w: &mut W, params: &str) -> io::Result<()> {
    if params.is_empty() {
        return Ok(());
    }
    write!(w, "{CSI}{params}m")
}

// =============================================================================
// Palette reduction
// =============================================================================

/// The xterm defaults for the 16 ANSI colors, in code order 30-37 then 90-97.
const ANSI16_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Closest 256-color palette index.
///
/// Near-grays map onto the grayscale ramp (232-255, with 16 for black and
/// 231 for white); everything else goes through the 6×6×6 cube.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (r as i32, g as i32, b as i32);

    if (ri - gi).abs() < 10 && (gi - bi).abs() < 10 && (bi - ri).abs() < 10 {
        if r < 8 {
            return 16;
        }
        if r > 247 {
            return 231;
        }
        return 232 + (r - 8) / 10;
    }

    let level = |c: i32| (c * 6 / 256) as u8;
    16 + 36 * level(ri) + 6 * level(gi) + level(bi)
}

/// Closest 16-color foreground code (`30-37`, `90-97`) by squared RGB distance.
///
/// Add 10 for the background code.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let distance = |(pr, pg, pb): (u8, u8, u8)| {
        let dr = r as i32 - pr as i32;
        let dg = g as i32 - pg as i32;
        let db = b as i32 - pb as i32;
        dr * dr + dg * dg + db * db
    };

    let index = ANSI16_PALETTE
        .iter()
        .enumerate()
        .min_by_key(|&(_, &rgb)| distance(rgb))
        .map(|(i, _)| i as u8)
        .unwrap_or(0);

    if index < 8 { 30 + index } else { 90 + index - 8 }
}

// =============================================================================
// AnsiRenderer
// =============================================================================

/// Style to SGR translator for one color tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnsiRenderer {
    pub color_mode: ColorMode,
}

impl AnsiRenderer {
    pub const fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    /// Full `CSI … m` sequence for `style`, or `""` if nothing is set.
    pub fn render_style(&self, style: &Style) -> String {
        let params = self.sgr_params(style);
        if params.is_empty() {
            return params;
        }
        format!("{CSI}{params}m")
    }

    /// Write the style's SGR sequence (if any).
    pub fn write_style<W: Write>(&self, w: &mut W, style: &Style) -> io::Result<()> {
        sgr(w, &self.sgr_params(style))
    }

    /// Inner body of the SGR sequence: attributes, then foreground, then
    /// background, joined by `;`.
    pub fn sgr_params(&self, style: &Style) -> String {
        const ATTR_CODES: [(Attr, &str); 7] = [
            (Attr::BOLD, "1"),
            (Attr::DIM, "2"),
            (Attr::ITALIC, "3"),
            (Attr::UNDERLINE, "4"),
            (Attr::BLINK, "5"),
            (Attr::REVERSE, "7"),
            (Attr::STRIKETHROUGH, "9"),
        ];

        let mut codes: Vec<String> = ATTR_CODES
            .iter()
            .filter(|(flag, _)| style.attrs.contains(*flag))
            .map(|(_, code)| (*code).to_string())
            .collect();

        if let Some(code) = style.foreground.and_then(|c| self.color_params(c, true)) {
            codes.push(code);
        }
        if let Some(code) = style.background.and_then(|c| self.color_params(c, false)) {
            codes.push(code);
        }

        codes.join(";")
    }

    /// Color parameters for the bound tier, or `None` in [`ColorMode::None`].
    pub fn color_params(&self, color: Color, foreground: bool) -> Option<String> {
        let (r, g, b) = color.to_rgb8();
        let prefix = if foreground { 38 } else { 48 };

        match self.color_mode {
            ColorMode::None => None,
            ColorMode::Ansi16 => {
                let code = rgb_to_ansi16(r, g, b);
                let code = if foreground { code } else { code + 10 };
                Some(code.to_string())
            }
            ColorMode::Ansi256 => Some(format!("{prefix};5;{}", rgb_to_ansi256(r, g, b))),
            ColorMode::TrueColor => Some(format!("{prefix};2;{r};{g};{b}")),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor_to() {
        assert_eq!(to_string(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(to_string(|w| cursor_to(w, 5, 10)), "\x1b[11;6H");
    }

    #[test]
    fn test_screen_control() {
        assert_eq!(to_string(clear_screen), "\x1b[2J\x1b[H");
        assert_eq!(to_string(cursor_hide), "\x1b[?25l");
        assert_eq!(to_string(cursor_show), "\x1b[?25h");
        assert_eq!(to_string(enter_alt_screen), "\x1b[?1049h");
        assert_eq!(to_string(exit_alt_screen), "\x1b[?1049l");
        assert_eq!(to_string(reset), "\x1b[0m");
        assert_eq!(to_string(|w| sgr(w, "")), "");
    }

    #[test]
    fn test_attribute_order() {
        let r = AnsiRenderer::new(ColorMode::TrueColor);
        let style = Style::new()
            .with_strikethrough(true)
            .with_bold(true)
            .with_reverse(true)
            .with_italic(true);
        assert_eq!(r.render_style(&style), "\x1b[1;3;7;9m");
    }

    #[test]
    fn test_truecolor() {
        let r = AnsiRenderer::new(ColorMode::TrueColor);
        let style = Style::new()
            .with_bold(true)
            .with_foreground(Color::rgb(255, 128, 64))
            .with_background(Color::rgb(0, 128, 255));
        assert_eq!(r.sgr_params(&style), "1;38;2;255;128;64;48;2;0;128;255");
    }

    #[test]
    fn test_256() {
        let r = AnsiRenderer::new(ColorMode::Ansi256);
        assert_eq!(r.color_params(Color::red(), true).as_deref(), Some("38;5;196"));
        assert_eq!(r.color_params(Color::blue(), false).as_deref(), Some("48;5;21"));
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
        assert_eq!(rgb_to_ansi256(8, 8, 8), 232);
        assert_eq!(rgb_to_ansi256(247, 247, 247), 255);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
        assert_eq!(rgb_to_ansi256(100, 150, 200), 16 + 36 * 2 + 6 * 3 + 4);
    }

    #[test]
    fn test_rgb_to_ansi16() {
        assert_eq!(rgb_to_ansi16(0, 0, 0), 30);
        assert_eq!(rgb_to_ansi16(200, 10, 10), 31);
        assert_eq!(rgb_to_ansi16(255, 0, 0), 91);
        assert_eq!(rgb_to_ansi16(255, 255, 255), 97);
        assert_eq!(rgb_to_ansi16(128, 128, 128), 90);
        assert_eq!(rgb_to_ansi16(0, 0, 230), 34);
    }

    #[test]
    fn test_16_background_offset() {
        let r = AnsiRenderer::new(ColorMode::Ansi16);
        assert_eq!(r.color_params(Color::red(), true).as_deref(), Some("91"));
        assert_eq!(r.color_params(Color::red(), false).as_deref(), Some("101"));
    }

    #[test]
    fn test_none_mode_keeps_attributes_only() {
        let r = AnsiRenderer::new(ColorMode::None);
        let style = Style::new()
            .with_underline(true)
            .with_foreground(Color::red())
            .with_background(Color::blue());
        assert_eq!(r.render_style(&style), "\x1b[4m");

        let plain = Style::new().with_foreground(Color::red());
        assert_eq!(r.render_style(&plain), "");
    }

    #[test]
    fn test_empty_style() {
        let r = AnsiRenderer::new(ColorMode::TrueColor);
        assert_eq!(r.render_style(&Style::default()), "");
    }
}
