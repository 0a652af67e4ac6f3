//! Screen buffer: a 2D grid of styled cells.
//!
//! The screen is what should be displayed on the terminal. Painters write
//! into it cell by cell; serialization turns it into one ANSI byte stream.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Signed writes**: painters work in `i32` so rectangles may hang off
//!   any edge; out-of-range writes are dropped.
//! - **Wide graphemes**: the leading cell holds the cluster, the trailing
//!   cell holds a space with the same style.
//! - **Shared styles**: cells hold `Arc<Style>`; a painted rectangle shares
//!   one allocation.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use smol_str::SmolStr;

use crate::config::ScreenConfig;
use crate::framebuffer::{self, StyledNode};
use crate::style::Style;
use crate::terminal::{Capabilities, ColorMode};

use super::ansi::{self, AnsiRenderer};
use super::output::{OutputBuffer, StyleRunWriter};

// =============================================================================
// Cell
// =============================================================================

/// One character position: a grapheme cluster and an optional style.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: SmolStr,
    pub style: Option<Arc<Style>>,
}

impl Cell {
    /// A space with no style.
    pub fn blank() -> Self {
        Self {
            content: SmolStr::new_inline(" "),
            style: None,
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.style.is_none() && self.content == " "
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

// =============================================================================
// Screen
// =============================================================================

/// A 2D buffer of terminal cells bound to a color tier.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    renderer: AnsiRenderer,
}

impl Screen {
    /// Create a screen whose color tier comes from [`Capabilities::detect`].
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_color_mode(width, height, Capabilities::detect().color_mode)
    }

    /// Create a screen with an explicit color tier.
    pub fn with_color_mode(width: u16, height: u16, color_mode: ColorMode) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width as usize * height as usize],
            renderer: AnsiRenderer::new(color_mode),
        }
    }

    /// Create a screen from a configuration record.
    ///
    /// A missing color mode is detected from the environment.
    pub fn with_config(config: &ScreenConfig) -> Self {
        let color_mode = config
            .color_mode
            .unwrap_or_else(|| Capabilities::detect().color_mode);
        Self::with_color_mode(config.width, config.height, color_mode)
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.renderer.color_mode
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.renderer = AnsiRenderer::new(color_mode);
    }

    /// Flat index for signed coordinates, or `None` outside the grid.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// One row of cells.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to a blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Resize the buffer. Contents are discarded unless the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::blank(); width as usize * height as usize];
    }

    /// Write one cell. Out-of-bounds writes are silently discarded.
    pub fn set_cell(&mut self, x: i32, y: i32, content: &str, style: Option<&Arc<Style>>) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.content = SmolStr::new(content);
            cell.style = style.cloned();
        }
    }

    /// Clear, then paint the tree rooted at `root` from the origin.
    pub fn render(&mut self, root: &StyledNode) {
        self.clear();
        framebuffer::paint(self, root);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize: home the cursor, write rows separated by `\n` with style
    /// transitions only at run boundaries, finish with a reset.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut runs = StyleRunWriter::new(self.renderer);
        ansi::cursor_to(w, 0, 0)?;

        for y in 0..self.height {
            if y > 0 {
                w.write_all(b"\n")?;
            }
            if let Some(row) = self.row(y) {
                for cell in row {
                    runs.write_cell(w, cell.style.as_ref(), &cell.content)?;
                }
            }
        }

        runs.finish(w)
    }

    /// The serialized frame as a string.
    pub fn to_ansi(&self) -> String {
        let mut out = OutputBuffer::with_capacity(self.cells.len() * 2 + 16);
        // Writes into memory cannot fail.
        let _ = self.write_to(&mut out);
        out.into_string()
    }

    /// Row `y` without escape sequences.
    pub fn row_text(&self, y: u16) -> Option<String> {
        self.row(y)
            .map(|row| row.iter().map(|cell| cell.content.as_str()).collect())
    }

    /// The whole grid without escape sequences, rows joined by `\n`.
    pub fn plain_text(&self) -> String {
        (0..self.height)
            .filter_map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

// =============================================================================
// Tests
// =============================================================================
