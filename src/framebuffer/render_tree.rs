//! Styled tree rendering into a Screen.
//!
//! # Coordinate System
//!
//! Node rectangles are relative to the parent's rectangle. The walk carries
//! the parent's absolute origin down the tree:
//!
//! ```text
//! screen_position = parent_screen + rect_position
//! ```
//!
//! Positions can be negative or past the screen edge. We use i32 throughout
//! and let [`Screen::set_cell`] drop anything outside the grid.
//!
//! # Traversal Order
//!
//! DFS in document order: background → border → content → children.

use std::sync::Arc;

use crate::renderer::Screen;
use crate::style::{Border, Style};

use super::node::StyledNode;
use super::text::paint_text;

// =============================================================================
// Entry Point
// =============================================================================

/// Paint `root` and its subtree onto `screen` starting from origin `(0, 0)`.
///
/// The screen is not cleared first; [`Screen::render`] does that.
pub fn paint(screen: &mut Screen, root: &StyledNode) {
    paint_node(screen, root, 0, 0);
}

/// Paint a node and its children with the parent's absolute origin.
fn paint_node(screen: &mut Screen, node: &StyledNode, parent_x: i32, parent_y: i32) {
    let (rel_x, rel_y, w, h) = node.rect.cells();
    let x = parent_x.saturating_add(rel_x);
    let y = parent_y.saturating_add(rel_y);

    if let Some(style) = &node.style {
        if style.background.is_some() {
            paint_background(screen, x, y, w, h, &Arc::new(style.background_only()));
        }
        if let Some(border) = &style.border {
            paint_border(screen, x, y, w, h, border, &Arc::new(style.border_only()));
        }
    }

    if !node.content.is_empty() {
        if node.has_border() {
            let (ix, iy) = (x.saturating_add(1), y.saturating_add(1));
            let (iw, ih) = (w.saturating_sub(2), h.saturating_sub(2));
            paint_text(screen, ix, iy, iw, ih, &node.content, node.style.as_ref());
        } else {
            paint_text(screen, x, y, w, h, &node.content, node.style.as_ref());
        }
    }

    for child in &node.children {
        paint_node(screen, child, x, y);
    }
}

/// Visible span of `[start, start + len)` within `[0, limit)`.
#[inline]
fn clip_span(start: i32, len: i32, limit: u16) -> std::ops::Range<i32> {
    start.max(0)..start.saturating_add(len).min(limit as i32)
}

// =============================================================================
// Background
// =============================================================================

/// Fill the rectangle with spaces carrying a background-only style.
fn paint_background(screen: &mut Screen, x: i32, y: i32, w: i32, h: i32, style: &Arc<Style>) {
    for row in clip_span(y, h, screen.height()) {
        for col in clip_span(x, w, screen.width()) {
            screen.set_cell(col, row, " ", Some(style));
        }
    }
}

// =============================================================================
// Border
// =============================================================================

/// Draw box characters on the rectangle's edges.
///
/// A corner is drawn only when both sides meeting there are enabled. The
/// horizontal runs cover the columns between the corners, the vertical runs
/// the rows between them. A rectangle with no area gets no border.
fn paint_border(
    screen: &mut Screen,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    border: &Border,
    style: &Arc<Style>,
) {
    if w <= 0 || h <= 0 {
        return;
    }

    let chars = &border.chars;
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    let (inner_x, inner_y) = (x.saturating_add(1), y.saturating_add(1));
    let mut buf = [0u8; 4];

    let mut put = |screen: &mut Screen, col: i32, row: i32, c: char| {
        screen.set_cell(col, row, c.encode_utf8(&mut buf), Some(style));
    };

    if border.top {
        if border.left {
            put(screen, x, y, chars.top_left);
        }
        for col in clip_span(inner_x, w - 2, screen.width()) {
            put(screen, col, y, chars.horizontal);
        }
        if border.right {
            put(screen, right, y, chars.top_right);
        }
    }

    if border.bottom {
        if border.left {
            put(screen, x, bottom, chars.bottom_left);
        }
        for col in clip_span(inner_x, w - 2, screen.width()) {
            put(screen, col, bottom, chars.horizontal);
        }
        if border.right {
            put(screen, right, bottom, chars.bottom_right);
        }
    }

    for row in clip_span(inner_y, h - 2, screen.height()) {
        if border.left {
            put(screen, x, row, chars.vertical);
        }
        if border.right {
            put(screen, right, row, chars.vertical);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
