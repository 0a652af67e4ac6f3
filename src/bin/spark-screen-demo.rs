//! spark-screen demo
//!
//! Lays out a small themed dashboard with taffy and renders it once. On a
//! terminal the frame is shown on the alternate screen until Enter is
//! pressed; otherwise the ANSI frame is printed to stdout.
//!
//! ```text
//! spark-screen-demo [--theme NAME] [--color MODE] [--size COLSxROWS] [--probe]
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use spark_screen::layout::{NodeContent, compute_layout, styled_tree_from_taffy};
use spark_screen::style::BorderSet;
use spark_screen::terminal::{self, ColorMode, TerminalDimensions, TerminalSession};
use spark_screen::theme::{DesignTokens, ThemeName};
use spark_screen::types::{TextAlign, TextOverflow, TextWrap};
use spark_screen::{Screen, ScreenConfig};

use crossterm::tty::IsTty;
use taffy::prelude::{Dimension, FlexDirection, length, percent};
use taffy::{NodeId, Size, TaffyResult, TaffyTree};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str =
    "usage: spark-screen-demo [--theme NAME] [--color MODE] [--size COLSxROWS] [--probe]";

const BODY: &str = "The screen buffer holds one grapheme cluster per cell. Wide \
                    glyphs such as 你好 take two cells, and every rectangle is \
                    clipped to the grid.";

struct Args {
    theme: ThemeName,
    color_mode: Option<ColorMode>,
    size: Option<(u16, u16)>,
    probe: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        theme: ThemeName::Default,
        color_mode: None,
        size: None,
        probe: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" => {
                let name = iter.next().ok_or("--theme needs a value")?;
                args.theme = ThemeName::from_name(&name);
            }
            "--color" => {
                let mode = iter.next().ok_or("--color needs a value")?;
                args.color_mode = Some(mode.parse().map_err(|e| format!("{e}"))?);
            }
            "--size" => {
                let size = iter.next().ok_or("--size needs a value")?;
                let (cols, rows) = size
                    .split_once('x')
                    .ok_or_else(|| format!("bad size {size:?}, expected COLSxROWS"))?;
                let cols = cols.parse().map_err(|_| format!("bad column count {cols:?}"))?;
                let rows = rows.parse().map_err(|_| format!("bad row count {rows:?}"))?;
                args.size = Some((cols, rows));
            }
            "--probe" => args.probe = true,
            "-h" | "--help" => {
                return Err(USAGE.to_string());
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> io::Result<()> {
    let is_tty = io::stdout().is_tty();
    let (cols, rows) = match args.size {
        Some(size) => size,
        None if is_tty => terminal::terminal_size()?,
        None => (60, 16),
    };

    if args.probe {
        println!("{}", TerminalDimensions::query(cols, rows));
        return Ok(());
    }

    let mut config = ScreenConfig::new(cols, rows).with_theme(args.theme);
    if let Some(mode) = args.color_mode {
        config = config.with_color_mode(mode);
    }
    let tokens = config.effective_tokens();

    let mut screen = Screen::with_config(&config);
    let root = build_dashboard(&tokens, cols, rows).map_err(io::Error::other)?;
    screen.render(&root);

    tracing::info!(
        theme = %args.theme,
        color_mode = %screen.color_mode(),
        cols,
        rows,
        "rendered dashboard"
    );

    if !is_tty {
        println!("{screen}");
        return Ok(());
    }

    let mut session = TerminalSession::enter()?;
    session.present(&screen)?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    session.restore()
}

/// Header, two side-by-side panels and a footer.
fn build_dashboard(
    tokens: &DesignTokens,
    cols: u16,
    rows: u16,
) -> TaffyResult<spark_screen::StyledNode> {
    let mut tree: TaffyTree<NodeContent> = TaffyTree::new();

    let header = tree.new_leaf_with_context(
        taffy::Style {
            size: Size {
                width: percent(1.0),
                height: length(1.0),
            },
            ..Default::default()
        },
        NodeContent::text(format!("spark-screen · {}", tokens.name))
            .with_style(tokens.accent_style().with_text_align(TextAlign::Center)),
    )?;

    let left = panel(
        &mut tree,
        tokens,
        BorderSet::ROUNDED,
        BODY,
        TextWrap::Pretty,
        TextAlign::Justify,
    )?;
    let right = panel(
        &mut tree,
        tokens,
        BorderSet::DOUBLE,
        "success\nwarning\nerror\nan entry far too long to fit in this panel",
        TextWrap::None,
        TextAlign::Left,
    )?;
    let body = tree.new_with_children(
        taffy::Style {
            flex_direction: FlexDirection::Row,
            flex_grow: 1.0,
            gap: Size {
                width: length(1.0),
                height: length(0.0),
            },
            ..Default::default()
        },
        &[left, right],
    )?;

    let footer = tree.new_leaf_with_context(
        taffy::Style {
            size: Size {
                width: percent(1.0),
                height: length(1.0),
            },
            ..Default::default()
        },
        NodeContent::text("press enter to quit").with_style(
            tokens
                .muted_style()
                .with_text_align(TextAlign::Right)
                .with_text_overflow(TextOverflow::EllipsisStart),
        ),
    )?;

    let root = tree.new_with_children(
        taffy::Style {
            flex_direction: FlexDirection::Column,
            size: Size {
                width: Dimension::Length(cols as f32),
                height: Dimension::Length(rows as f32),
            },
            ..Default::default()
        },
        &[header, body, footer],
    )?;
    tree.set_node_context(root, Some(NodeContent::styled(tokens.text_style())))?;

    compute_layout(&mut tree, root, cols, rows)?;
    styled_tree_from_taffy(&tree, root)
}

fn panel(
    tree: &mut TaffyTree<NodeContent>,
    tokens: &DesignTokens,
    chars: BorderSet,
    text: &str,
    wrap: TextWrap,
    align: TextAlign,
) -> TaffyResult<NodeId> {
    let style = tokens
        .panel_style(chars)
        .with_text_wrap(wrap)
        .with_text_align(align)
        .with_text_overflow(TextOverflow::EllipsisEnd);

    tree.new_leaf_with_context(
        taffy::Style {
            flex_grow: 1.0,
            flex_basis: length(0.0),
            ..Default::default()
        },
        NodeContent::text(text).with_style(style),
    )
}
