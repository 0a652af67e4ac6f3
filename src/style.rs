//! Style records and box-drawing border sets.
//!
//! A [`Style`] is a plain value: two styles are equal iff every field is
//! equal. Screens share styles between cells as `Arc<Style>`.

use crate::types::{Attr, Color, TextAlign, TextOverflow, TextWrap};

// =============================================================================
// Border Sets
// =============================================================================

/// The six characters used to draw a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    /// ┌ ─ ┐ │ └ ┘
    pub const NORMAL: Self = Self::new('┌', '┐', '└', '┘', '─', '│');
    /// ╭ ─ ╮ │ ╰ ╯
    pub const ROUNDED: Self = Self::new('╭', '╮', '╰', '╯', '─', '│');
    /// ╔ ═ ╗ ║ ╚ ╝
    pub const DOUBLE: Self = Self::new('╔', '╗', '╚', '╝', '═', '║');
    /// ┏ ━ ┓ ┃ ┗ ┛
    pub const THICK: Self = Self::new('┏', '┓', '┗', '┛', '━', '┃');
    /// + - + | + +
    pub const ASCII: Self = Self::new('+', '+', '+', '+', '-', '|');
    /// ┌ ┄ ┐ ┆ └ ┘
    pub const DASHED: Self = Self::new('┌', '┐', '└', '┘', '┄', '┆');

    pub const fn new(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Which sides of a box get drawn, and with which characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub chars: BorderSet,
}

impl Border {
    /// All four sides enabled.
    pub const fn all(chars: BorderSet) -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
            chars,
        }
    }

    /// Pick individual sides.
    pub const fn sides(top: bool, right: bool, bottom: bool, left: bool, chars: BorderSet) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            chars,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Visual attributes of a node. Sizing belongs to the layout engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub attrs: Attr,
    pub border: Option<Border>,
    pub text_align: TextAlign,
    pub text_wrap: TextWrap,
    pub text_overflow: TextOverflow,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Enable a border on all four sides.
    pub fn with_border(mut self, chars: BorderSet) -> Self {
        self.border = Some(Border::all(chars));
        self
    }

    pub fn with_border_sides(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    pub fn with_bold(self, bold: bool) -> Self {
        self.toggle(Attr::BOLD, bold)
    }

    pub fn with_italic(self, italic: bool) -> Self {
        self.toggle(Attr::ITALIC, italic)
    }

    pub fn with_underline(self, underline: bool) -> Self {
        self.toggle(Attr::UNDERLINE, underline)
    }

    pub fn with_strikethrough(self, strikethrough: bool) -> Self {
        self.toggle(Attr::STRIKETHROUGH, strikethrough)
    }

    pub fn with_dim(self, dim: bool) -> Self {
        self.toggle(Attr::DIM, dim)
    }

    pub fn with_blink(self, blink: bool) -> Self {
        self.toggle(Attr::BLINK, blink)
    }

    pub fn with_reverse(self, reverse: bool) -> Self {
        self.toggle(Attr::REVERSE, reverse)
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_text_wrap(mut self, wrap: TextWrap) -> Self {
        self.text_wrap = wrap;
        self
    }

    pub fn with_text_overflow(mut self, overflow: TextOverflow) -> Self {
        self.text_overflow = overflow;
        self
    }

    fn toggle(mut self, flag: Attr, on: bool) -> Self {
        self.attrs.set(flag, on);
        self
    }

    /// Style for background fills: only the background survives.
    pub(crate) fn background_only(&self) -> Self {
        Self {
            background: self.background,
            ..Self::default()
        }
    }

    /// Style for border cells: the border color, or else the foreground.
    /// Border cells sit on the terminal's default background.
    pub(crate) fn border_only(&self) -> Self {
        Self {
            foreground: self.border_color.or(self.foreground),
            ..Self::default()
        }
    }
}
