//! Grapheme-safe elision with a marker.
//!
//! Each function returns the input unchanged when it already fits in
//! `max_width` cells. Otherwise graphemes are dropped from the end, the
//! start or the middle and `marker` (usually `"…"`) marks the cut. The
//! result, marker included, never exceeds `max_width`.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, string_width};

/// Drop graphemes from the end: `"hello world"` → `"hello…"`.
pub fn elide_end_with(text: &str, max_width: usize, marker: &str) -> String {
    let Some(budget) = budget(text, max_width, marker) else {
        return fit_unmarked(text, max_width, marker);
    };
    let mut out = take_front(text, budget);
    out.push_str(marker);
    out
}

/// Drop graphemes from the start: `"hello world"` → `"…world"`.
pub fn elide_start_with(text: &str, max_width: usize, marker: &str) -> String {
    let Some(budget) = budget(text, max_width, marker) else {
        return fit_unmarked(text, max_width, marker);
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(marker);
    out.push_str(&take_back(text, budget));
    out
}

/// Drop graphemes from the middle: `"hello world"` → `"hel…rld"`.
///
/// An odd budget gives the extra cell to the head.
pub fn elide_with(text: &str, max_width: usize, marker: &str) -> String {
    let Some(budget) = budget(text, max_width, marker) else {
        return fit_unmarked(text, max_width, marker);
    };
    let head = take_front(text, budget - budget / 2);
    let tail = take_back(text, budget / 2);

    let mut out = String::with_capacity(head.len() + marker.len() + tail.len());
    out.push_str(&head);
    out.push_str(marker);
    out.push_str(&tail);
    out
}

/// Width left for text once the marker is placed, or `None` when the text
/// fits as is or the marker leaves no room.
fn budget(text: &str, max_width: usize, marker: &str) -> Option<usize> {
    if string_width(text) <= max_width {
        return None;
    }
    max_width.checked_sub(string_width(marker)).filter(|&b| b > 0)
}

/// Result for the cases `budget` rejects.
fn fit_unmarked(text: &str, max_width: usize, marker: &str) -> String {
    if string_width(text) <= max_width {
        text.to_string()
    } else {
        // The marker alone fills the space; show as much of it as fits.
        take_front(marker, max_width)
    }
}

fn take_front(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let gw = grapheme_width(g);
        if used + gw > max_width {
            break;
        }
        out.push_str(g);
        used += gw;
    }
    out
}

fn take_back(text: &str, max_width: usize) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;
    for g in text.graphemes(true).rev() {
        let gw = grapheme_width(g);
        if used + gw > max_width {
            break;
        }
        kept.push(g);
        used += gw;
    }
    kept.into_iter().rev().collect()
}
