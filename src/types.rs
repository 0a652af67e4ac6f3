//! Core types for spark-screen.
//!
//! These are the plain values that flow from the layout tree into the screen
//! buffer: colors, text attributes, alignment/wrap/overflow modes and the
//! parent-relative rectangles the layout collaborator hands us.

use crate::error::ConfigError;

// =============================================================================
// Color
// =============================================================================

/// An opaque RGB color with channels in `[0, 1]`.
///
/// This is the boundary type of the color collaborator: whatever produced
/// the color (hex string, oklch, a theme preset) the renderer only ever
/// reads the three channels. Alpha is implicitly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    /// Create a color from float channels. Values are clamped to `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Create a color from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create from a packed `0xRRGGBB` integer.
    ///
    /// ```
    /// use spark_screen::types::Color;
    ///
    /// assert_eq!(Color::from_rgb_int(0x282a36), Color::rgb(40, 42, 54));
    /// ```
    pub fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub fn green() -> Self {
        Self::rgb(0, 255, 0)
    }

    pub fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    /// Red channel in `[0, 1]`.
    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    /// Green channel in `[0, 1]`.
    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    /// Blue channel in `[0, 1]`.
    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Scale the channels to 8-bit values (rounded).
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// The alpha byte of the 8-digit form is accepted and dropped.
    /// Returns None for invalid format.
    ///
    /// ```
    /// use spark_screen::types::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
    /// assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
    /// assert_eq!(Color::from_hex("0000ff"), Some(Color::rgb(0, 0, 255)));
    /// assert!(Color::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 | 8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                if bytes.len() == 8 {
                    hex_byte(bytes, 6)?;
                }
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse a color from a hex string, `rgb(r, g, b)` or a basic name.
    ///
    /// ```
    /// use spark_screen::types::Color;
    ///
    /// assert_eq!(Color::parse("rgb(10, 20, 30)"), Some(Color::rgb(10, 20, 30)));
    /// assert_eq!(Color::parse("Blue"), Some(Color::blue()));
    /// assert!(Color::parse("chartreuse-ish").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        let lower = input.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut channels = args.split(',').map(|part| part.trim().parse::<u8>());
            let r = channels.next()?.ok()?;
            let g = channels.next()?.ok()?;
            let b = channels.next()?.ok()?;
            if channels.next().is_some() {
                return None;
            }
            return Some(Self::rgb(r, g, b));
        }

        match lower.as_str() {
            "black" => Some(Self::black()),
            "white" => Some(Self::white()),
            "red" => Some(Self::red()),
            "green" => Some(Self::green()),
            "blue" => Some(Self::blue()),
            "yellow" => Some(Self::rgb(255, 255, 0)),
            "cyan" => Some(Self::rgb(0, 255, 255)),
            "magenta" => Some(Self::rgb(255, 0, 255)),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            _ => Self::from_hex(&lower),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

// =============================================================================
// Text layout modes
// =============================================================================

/// Horizontal alignment of each painted line inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch inter-word gaps so every line but the last fills the width.
    Justify,
}

/// Line production strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextWrap {
    /// Split on `\n` only.
    #[default]
    None,
    /// Greedy word wrap.
    Normal,
    /// Lines equalized in length.
    Balanced,
    /// Knuth-Plass total fit.
    Pretty,
}

/// What to do with a line wider than its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextOverflow {
    #[default]
    Clip,
    EllipsisEnd,
    EllipsisStart,
    EllipsisMiddle,
}

// =============================================================================
// Rect - parent-relative geometry from the layout step
// =============================================================================

/// A rectangle in character cells, relative to the parent node.
///
/// Layout engines produce floats; [`Rect::cells`] truncates them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Integer cell geometry `(x, y, width, height)`, truncated toward zero.
    #[inline]
    pub fn cells(&self) -> (i32, i32, i32, i32) {
        (
            self.x as i32,
            self.y as i32,
            self.width as i32,
            self.height as i32,
        )
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x as f32, y as f32, width as f32, height as f32)
    }
}

// =============================================================================
// Tests
// =============================================================================
