//! End-to-end rendering scenarios: tree in, cells and ANSI bytes out.

use pretty_assertions::assert_eq;
use spark_screen::terminal::{
    Capabilities, PixelGeometry, QueryTransport, TermEnv, TerminalDimensions, probe_pixel_geometry,
};
use spark_screen::{
    BorderSet, Color, ColorMode, Screen, Style, StyledNode, TextAlign, TextOverflow, TextWrap,
};
use std::io;
use std::time::Duration;

fn blank_row(width: usize) -> String {
    " ".repeat(width)
}

#[test]
fn plain_text() {
    let mut screen = Screen::with_color_mode(20, 3, ColorMode::TrueColor);
    screen.render(&StyledNode::new((0, 0, 20, 3)).with_content("Hello"));

    assert_eq!(screen.row_text(0).unwrap(), format!("Hello{}", blank_row(15)));
    assert_eq!(screen.row_text(1).unwrap(), blank_row(20));
    assert_eq!(screen.row_text(2).unwrap(), blank_row(20));

    let out = screen.to_ansi();
    assert!(out.starts_with("\x1b[1;1H"));
    assert!(out.contains("Hello"));
    assert!(!out.contains("38;"));
    assert!(!out.contains("48;"));
    assert!(out.ends_with("\x1b[0m"));
    assert_eq!(out.matches("\x1b[0m").count(), 1);
}

#[test]
fn center_alignment() {
    let mut screen = Screen::with_color_mode(20, 3, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 20, 3))
            .with_style(Style::new().with_text_align(TextAlign::Center))
            .with_content("Hi"),
    );

    assert_eq!(screen.row_text(0).unwrap(), format!("{}Hi{}", blank_row(9), blank_row(9)));
    assert_eq!(screen.get(9, 0).unwrap().content, "H");
    assert_eq!(screen.get(10, 0).unwrap().content, "i");
    assert_eq!(screen.row_text(1).unwrap(), blank_row(20));
}

#[test]
fn ellipsis_end() {
    let mut screen = Screen::with_color_mode(10, 3, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 10, 3))
            .with_style(
                Style::new()
                    .with_text_wrap(TextWrap::None)
                    .with_text_overflow(TextOverflow::EllipsisEnd),
            )
            .with_content("This is a very long line"),
    );

    let first = screen.row_text(0).unwrap();
    assert!(first.ends_with('…'), "{first:?}");
    assert_eq!(first, "This is a…");
    assert_eq!(screen.row_text(1).unwrap(), blank_row(10));
    assert_eq!(screen.row_text(2).unwrap(), blank_row(10));
}

#[test]
fn bordered_box() {
    let mut screen = Screen::with_color_mode(10, 5, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 10, 5))
            .with_style(Style::new().with_border(BorderSet::NORMAL))
            .with_content("Test"),
    );

    assert_eq!(
        screen.plain_text(),
        [
            "┌────────┐",
            "│Test    │",
            "│        │",
            "│        │",
            "└────────┘",
        ]
        .join("\n")
    );
}

#[test]
fn wide_character() {
    let style = Style::new().with_foreground(Color::green());
    let mut screen = Screen::with_color_mode(20, 5, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 20, 5))
            .with_style(style)
            .with_content("Hi 👋"),
    );

    let cell = |x| screen.get(x, 0).unwrap();
    assert_eq!(cell(0).content, "H");
    assert_eq!(cell(1).content, "i");
    assert_eq!(cell(2).content, " ");
    assert_eq!(cell(3).content, "👋");
    assert_eq!(cell(4).content, " ");
    assert_eq!(cell(4).style, cell(3).style);
    assert!(cell(3).style.is_some());
    for x in 5..20 {
        assert!(cell(x).is_blank(), "column {x}");
    }
}

#[test]
fn parent_child_offset() {
    let mut screen = Screen::with_color_mode(20, 6, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((5, 2, 10, 3))
            .with_child(StyledNode::new((1, 1, 3, 1)).with_content("X")),
    );

    assert_eq!(screen.get(6, 3).unwrap().content, "X");
    let written = screen.cells().iter().filter(|c| !c.is_blank()).count();
    assert_eq!(written, 1);
}

#[test]
fn zero_size_parent_still_offsets_children() {
    let mut screen = Screen::with_color_mode(6, 4, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((2, 1, 0, 0)).with_child(StyledNode::new((1, 1, 1, 1)).with_content("X")),
    );

    assert_eq!(screen.get(3, 2).unwrap().content, "X");
    let written = screen.cells().iter().filter(|c| !c.is_blank()).count();
    assert_eq!(written, 1);
}

#[test]
fn stray_escape_in_content_is_painted_safely() {
    let mut screen = Screen::with_color_mode(4, 1, ColorMode::TrueColor);
    screen.render(&StyledNode::new((0, 0, 4, 1)).with_content("a\x1bé"));
    assert_eq!(screen.get(0, 0).unwrap().content, "a");
    assert!(screen.to_ansi().ends_with("\x1b[0m"));
}

#[test]
fn set_cell_outside_grid_is_dropped() {
    let mut screen = Screen::with_color_mode(4, 3, ColorMode::TrueColor);
    let before = screen.plain_text();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3)] {
        screen.set_cell(x, y, "#", None);
    }
    assert_eq!(screen.plain_text(), before);
}

#[test]
fn offscreen_node_writes_nothing() {
    let mut screen = Screen::with_color_mode(5, 5, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 5, 5)).with_child(
            StyledNode::new((50, 50, 4, 4))
                .with_style(
                    Style::new()
                        .with_background(Color::red())
                        .with_border(BorderSet::THICK),
                )
                .with_content("gone"),
        ),
    );
    assert!(screen.cells().iter().all(|c| c.is_blank()));
}

#[test]
fn dumb_terminal_gets_no_color() {
    let caps = Capabilities::from_env(&TermEnv::default().with_term("dumb"), true);
    assert_eq!(caps.color_mode, ColorMode::None);

    let mut screen = Screen::with_color_mode(6, 1, caps.color_mode);
    screen.render(
        &StyledNode::new((0, 0, 6, 1))
            .with_style(
                Style::new()
                    .with_foreground(Color::red())
                    .with_background(Color::blue())
                    .with_bold(true),
            )
            .with_content("dumb"),
    );

    let out = screen.to_ansi();
    assert!(!out.contains("38;"));
    assert!(!out.contains("48;"));
    assert!(!out.contains("\x1b[3"));
    assert!(!out.contains("\x1b[4"));
    assert!(out.contains("\x1b[1m"));
}

#[test]
fn color_tiers_change_only_color_codes() {
    let node = StyledNode::new((0, 0, 3, 1))
        .with_style(Style::new().with_foreground(Color::rgb(255, 0, 0)))
        .with_content("red");

    let render = |mode| {
        let mut screen = Screen::with_color_mode(3, 1, mode);
        screen.render(&node);
        screen.to_ansi()
    };

    assert!(render(ColorMode::TrueColor).contains("\x1b[38;2;255;0;0m"));
    assert!(render(ColorMode::Ansi256).contains("\x1b[38;5;196m"));
    assert!(render(ColorMode::Ansi16).contains("\x1b[91m"));
    let plain = render(ColorMode::None);
    assert!(!plain.contains("38;") && !plain.contains("\x1b[91m"));
    assert!(plain.contains("red"));
}

#[test]
fn serialization_is_deterministic_and_render_idempotent() {
    let tree = StyledNode::new((0, 0, 12, 4))
        .with_style(
            Style::new()
                .with_background(Color::from_rgb_int(0x2e3440))
                .with_border(BorderSet::ROUNDED),
        )
        .with_content("twice")
        .with_child(StyledNode::new((2, 2, 6, 1)).with_content("child"));

    let mut a = Screen::with_color_mode(12, 4, ColorMode::Ansi256);
    a.render(&tree);
    let first = a.to_ansi();
    a.clear();
    a.render(&tree);
    a.render(&tree);
    assert_eq!(a.to_ansi(), first);

    let mut b = Screen::with_color_mode(12, 4, ColorMode::Ansi256);
    b.render(&tree);
    assert_eq!(b.to_ansi(), first);
}

#[test]
fn resize_twice_is_a_noop() {
    let mut screen = Screen::with_color_mode(4, 2, ColorMode::None);
    screen.render(&StyledNode::new((0, 0, 4, 2)).with_content("abcd"));
    screen.resize(6, 3);
    let after_first = screen.plain_text();
    screen.resize(6, 3);
    assert_eq!(screen.plain_text(), after_first);
}

#[test]
fn unstyled_tree_without_content_is_blank() {
    let mut screen = Screen::with_color_mode(5, 3, ColorMode::TrueColor);
    screen.render(
        &StyledNode::new((0, 0, 5, 3))
            .with_child(StyledNode::new((1, 1, 2, 1)))
            .with_child(StyledNode::new((0, 0, 5, 3))),
    );
    assert!(screen.cells().iter().all(|c| c.is_blank()));
}

struct SilentTerminal;

impl QueryTransport for SilentTerminal {
    fn send(&mut self, _query: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        std::thread::sleep(timeout.min(Duration::from_millis(5)));
        Ok(None)
    }
}

#[test]
fn silent_terminal_falls_back_to_estimate() {
    let probed: Result<PixelGeometry, _> = probe_pixel_geometry(&mut SilentTerminal);
    let dims = TerminalDimensions::from_probe(80, 24, probed);
    assert!(!dims.has_pixel_support);
    assert_eq!((dims.cell_width, dims.cell_height), (9.0, 18.0));
    assert_eq!((dims.pixel_width, dims.pixel_height), (720, 432));
}
