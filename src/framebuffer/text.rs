//! Text painting inside a rectangle.
//!
//! Lines are produced per the style's wrap mode, elided per its overflow
//! mode, justified or aligned, then written one grapheme cluster at a time.
//! Nothing is ever written outside `(x, y, w, h)`.

use std::sync::Arc;

use crate::layout::{
    JustifyMode, WrapOptions, elide_end_with, elide_start_with, elide_with, grapheme_width,
    graphemes, justify_text, string_width, wrap, wrap_balanced, wrap_knuth_plass,
};
use crate::renderer::Screen;
use crate::style::Style;
use crate::types::{TextAlign, TextOverflow, TextWrap};

/// Marker used by every ellipsis mode.
pub const ELLIPSIS: &str = "…";

/// Knuth-Plass tolerance for [`TextWrap::Pretty`].
const PRETTY_TOLERANCE: f64 = 1.0;

/// Paint `content` into the rectangle `(x, y, w, h)`.
pub(crate) fn paint_text(
    screen: &mut Screen,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    content: &str,
    style: Option<&Arc<Style>>,
) {
    if content.is_empty() || w <= 0 || h <= 0 {
        return;
    }

    let (align, wrap_mode, overflow) = style.map_or_else(
        || (TextAlign::default(), TextWrap::default(), TextOverflow::default()),
        |s| (s.text_align, s.text_wrap, s.text_overflow),
    );

    let width = w as usize;
    let lines = layout_lines(content, width, wrap_mode);
    let last = lines.len().saturating_sub(1);
    let right_edge = x.saturating_add(w).min(screen.width() as i32);

    for (i, line) in lines.into_iter().enumerate() {
        if i as i32 >= h {
            break;
        }
        let row = y.saturating_add(i as i32);
        if row < 0 || row >= screen.height() as i32 {
            continue;
        }

        let mut line = line;
        let mut line_width = string_width(&line);

        if line_width > width {
            line = match overflow {
                TextOverflow::Clip => line,
                TextOverflow::EllipsisEnd => elide_end_with(&line, width, ELLIPSIS),
                TextOverflow::EllipsisStart => elide_start_with(&line, width, ELLIPSIS),
                TextOverflow::EllipsisMiddle => elide_with(&line, width, ELLIPSIS),
            };
            line_width = string_width(&line);
        }

        if align == TextAlign::Justify && i != last && line_width < width && line.contains(' ') {
            line = justify_text(&line, width, JustifyMode::InterWord);
            line_width = string_width(&line);
        }

        // Overflowing lines start at the left edge whatever the alignment.
        let slack = (width as i32 - line_width as i32).max(0);
        let mut col = match align {
            TextAlign::Left | TextAlign::Justify => x,
            TextAlign::Center => x.saturating_add(slack / 2),
            TextAlign::Right => x.saturating_add(slack),
        };

        for cluster in graphemes(&line) {
            let gw = grapheme_width(cluster) as i32;
            if col.saturating_add(gw) > right_edge {
                break;
            }
            if gw == 0 {
                continue;
            }
            screen.set_cell(col, row, cluster, style);
            if gw == 2 {
                screen.set_cell(col + 1, row, " ", style);
            }
            col = col.saturating_add(gw);
        }
    }
}

/// Split `content` into display lines for the wrap mode.
///
/// `None` splits on `\n` only. The wrapping modes wrap each `\n`-separated
/// paragraph on its own; an empty paragraph stays a blank line.
fn layout_lines(content: &str, width: usize, mode: TextWrap) -> Vec<String> {
    if mode == TextWrap::None {
        return content.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let wrapped = match mode {
            TextWrap::Balanced => wrap_balanced(paragraph, width),
            TextWrap::Pretty => wrap_knuth_plass(paragraph, width, PRETTY_TOLERANCE),
            TextWrap::Normal | TextWrap::None => wrap(paragraph, WrapOptions::new(width)),
        };
        lines.extend(wrapped.into_iter().map(|l| l.content));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ColorMode;
    use pretty_assertions::assert_eq;

    fn paint(w: u16, h: u16, rect: (i32, i32, i32, i32), content: &str, style: Style) -> Screen {
        let mut screen = Screen::with_color_mode(w, h, ColorMode::TrueColor);
        let (x, y, rw, rh) = rect;
        paint_text(&mut screen, x, y, rw, rh, content, Some(&Arc::new(style)));
        screen
    }

    #[test]
    fn test_newlines_split_and_height_limits() {
        let s = paint(5, 2, (0, 0, 5, 2), "a\nb\nc", Style::new());
        assert_eq!(s.plain_text(), "a    \nb    ");
    }

    #[test]
    fn test_clip_at_rect_edge() {
        let s = paint(10, 1, (0, 0, 4, 1), "abcdefg", Style::new());
        assert_eq!(s.row_text(0).unwrap(), "abcd      ");
    }

    #[test]
    fn test_right_align() {
        let s = paint(6, 1, (0, 0, 6, 1), "ab", Style::new().with_text_align(TextAlign::Right));
        assert_eq!(s.row_text(0).unwrap(), "    ab");
    }

    #[test]
    fn test_center_truncates_toward_left() {
        let s = paint(6, 1, (0, 0, 5, 1), "ab", Style::new().with_text_align(TextAlign::Center));
        assert_eq!(s.row_text(0).unwrap(), " ab   ");
    }

    #[test]
    fn test_overflowing_centered_line_stays_inside() {
        let centered = Style::new().with_text_align(TextAlign::Center);
        let s = paint(8, 1, (2, 0, 4, 1), "abcdefgh", centered);
        assert_eq!(s.row_text(0).unwrap(), "  abcd  ");
    }

    #[test]
    fn test_ellipsis_modes() {
        let text = "hello world";
        let elided = |w, overflow| {
            let style = Style::new().with_text_overflow(overflow);
            let s = paint(w, 1, (0, 0, w as i32, 1), text, style);
            s.row_text(0).unwrap()
        };
        assert_eq!(elided(6, TextOverflow::EllipsisEnd), "hello…");
        assert_eq!(elided(6, TextOverflow::EllipsisStart), "…world");
        assert_eq!(elided(7, TextOverflow::EllipsisMiddle), "hel…rld");
    }

    #[test]
    fn test_normal_wrap_keeps_blank_paragraphs() {
        let s = paint(
            5,
            4,
            (0, 0, 5, 4),
            "aa bb cc\n\ndd",
            Style::new().with_text_wrap(TextWrap::Normal),
        );
        assert_eq!(s.plain_text(), "aa bb\ncc   \n     \ndd   ");
    }

    #[test]
    fn test_justify_all_but_last_line() {
        let s = paint(
            9,
            2,
            (0, 0, 9, 2),
            "aa bb cc dd",
            Style::new()
                .with_text_wrap(TextWrap::Normal)
                .with_text_align(TextAlign::Justify),
        );
        assert_eq!(s.plain_text(), "aa  bb cc\ndd       ");
    }

    #[test]
    fn test_wide_cluster_gets_styled_trailer() {
        let s = paint(6, 1, (0, 0, 6, 1), "a你b", Style::new().with_bold(true));
        assert_eq!(s.get(1, 0).unwrap().content, "你");
        let trailer = s.get(2, 0).unwrap();
        assert_eq!(trailer.content, " ");
        assert_eq!(trailer.style, s.get(1, 0).unwrap().style);
        assert_eq!(s.get(3, 0).unwrap().content, "b");
    }

    #[test]
    fn test_wide_cluster_never_straddles_edge() {
        let s = paint(3, 1, (0, 0, 3, 1), "ab你", Style::new());
        assert_eq!(s.row_text(0).unwrap(), "ab ");
        assert!(s.get(2, 0).unwrap().style.is_none());

        let s = paint(3, 1, (0, 0, 10, 1), "ab你", Style::new());
        assert_eq!(s.row_text(0).unwrap(), "ab ");
    }

    #[test]
    fn test_zero_width_clusters_are_skipped() {
        let s = paint(4, 1, (0, 0, 4, 1), "\u{0301}ab", Style::new());
        assert_eq!(s.row_text(0).unwrap(), "ab  ");
    }

    #[test]
    fn test_rect_edges_near_i32_max() {
        let right = Style::new().with_text_align(TextAlign::Right);
        let s = paint(4, 1, (2, 0, i32::MAX, 1), "ab", Style::new());
        assert_eq!(s.row_text(0).unwrap(), "  ab");
        let s = paint(4, 1, (i32::MAX - 1, 0, 3, 1), "abc", right);
        assert!(s.cells().iter().all(|c| c.is_blank()));
        let s = paint(4, 2, (0, i32::MAX, 4, 2), "a\nb", Style::new());
        assert!(s.cells().iter().all(|c| c.is_blank()));
    }

    #[test]
    fn test_stray_escape_before_multibyte_char() {
        let s = paint(4, 1, (0, 0, 4, 1), "a\x1bé", Style::new());
        assert_eq!(s.get(0, 0).unwrap().content, "a");
    }

    #[test]
    fn test_empty_rect_writes_nothing() {
        let s = paint(4, 2, (0, 0, 0, 2), "abc", Style::new());
        assert!(s.cells().iter().all(|c| c.is_blank()));
        let s = paint(4, 2, (0, 0, 4, -1), "abc", Style::new());
        assert!(s.cells().iter().all(|c| c.is_blank()));
    }
}
