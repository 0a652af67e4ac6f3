//! Display width of characters, grapheme clusters and strings.
//!
//! Widths follow UAX #11 via `unicode-width` (wide and fullwidth = 2,
//! combining and default-ignorable = 0, control = 0, everything else = 1).
//! Emoji sequences that form a single grapheme (ZWJ families, skin tones,
//! flags, keycaps, VS16 presentation) always count as one wide cluster.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

/// Extended grapheme clusters (UAX #29) of `s`.
#[inline]
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Display width of a single codepoint: 0, 1 or 2.
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of one grapheme cluster.
///
/// - `e\u{301}` → 1 (base width, combining mark adds nothing)
/// - `👨‍👩‍👧` → 2 (ZWJ sequence)
/// - `🇺🇸` → 2 (regional indicator pair)
/// - `👍🏽` → 2 (skin tone modifier)
/// - `1\u{FE0F}\u{20E3}` → 2 (keycap)
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    let emoji_sequence = chars.any(|c| {
        matches!(c as u32,
            0x200D              // zero-width joiner
            | 0xFE0F            // emoji presentation selector
            | 0x1F3FB..=0x1F3FF // skin tone modifiers
            | 0x20E3            // enclosing keycap
        )
    });
    if emoji_sequence {
        return 2;
    }

    char_width(first)
}

/// Display width of a string in cells. Escape sequences count as zero.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Pure ASCII without escapes: printable bytes are one cell each.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}
