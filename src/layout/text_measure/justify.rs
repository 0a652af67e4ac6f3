//! Full justification of a single line.

use unicode_segmentation::UnicodeSegmentation;

use super::width::string_width;

/// Where extra space is inserted when justifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyMode {
    /// Widen the gaps between words.
    #[default]
    InterWord,
    /// Spread space between every pair of graphemes.
    InterCharacter,
}

/// Stretch `line` to exactly `width` cells.
///
/// Leftover cells that don't divide evenly go to the leftmost gaps. A line
/// that is already `width` wide (or wider), or that has no gap to stretch,
/// is returned unchanged.
///
/// ```
/// use spark_screen::layout::{justify_text, JustifyMode};
///
/// assert_eq!(justify_text("a b c", 8, JustifyMode::InterWord), "a   b  c");
/// assert_eq!(justify_text("abc", 5, JustifyMode::InterCharacter), "a b c");
/// ```
pub fn justify_text(line: &str, width: usize, mode: JustifyMode) -> String {
    if string_width(line) >= width {
        return line.to_string();
    }

    match mode {
        JustifyMode::InterWord => {
            let words: Vec<&str> = line.split(' ').filter(|w| !w.is_empty()).collect();
            spread(&words, width).unwrap_or_else(|| line.to_string())
        }
        JustifyMode::InterCharacter => {
            let clusters: Vec<&str> = line.graphemes(true).filter(|g| *g != " ").collect();
            spread(&clusters, width).unwrap_or_else(|| line.to_string())
        }
    }
}

/// Join `pieces` with gaps sized so the result is `width` cells wide.
fn spread(pieces: &[&str], width: usize) -> Option<String> {
    let gaps = pieces.len().checked_sub(1).filter(|&g| g > 0)?;
    let used: usize = pieces.iter().map(|p| string_width(p)).sum();
    let free = width.checked_sub(used)?;
    if free < gaps {
        return None;
    }

    let base = free / gaps;
    let extra = free % gaps;

    let mut out = String::with_capacity(width + pieces.iter().map(|p| p.len()).sum::<usize>());
    for (i, piece) in pieces.iter().enumerate() {
        out.push_str(piece);
        if i < gaps {
            let n = base + usize::from(i < extra);
            out.extend(std::iter::repeat_n(' ', n));
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inter_word_fills_width() {
        let out = justify_text("the quick fox", 17, JustifyMode::InterWord);
        assert_eq!(out, "the   quick   fox");
        assert_eq!(string_width(&out), 17);
    }

    #[test]
    fn inter_word_extra_space_goes_left() {
        assert_eq!(justify_text("a b c d", 11, JustifyMode::InterWord), "a   b  c  d");
    }

    #[test]
    fn single_word_unchanged() {
        assert_eq!(justify_text("word", 10, JustifyMode::InterWord), "word");
    }

    #[test]
    fn already_full_unchanged() {
        assert_eq!(justify_text("ab cd", 5, JustifyMode::InterWord), "ab cd");
        assert_eq!(justify_text("ab cd", 3, JustifyMode::InterWord), "ab cd");
    }

    #[test]
    fn inter_character() {
        assert_eq!(justify_text("abcd", 7, JustifyMode::InterCharacter), "a b c d");
        assert_eq!(justify_text("你好", 5, JustifyMode::InterCharacter), "你 好");
    }
}
