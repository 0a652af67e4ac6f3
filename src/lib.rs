//! # spark-screen
//!
//! Cell-grid screen buffer and ANSI renderer for laid-out terminal UI trees.
//!
//! ## Architecture
//!
//! A layout engine hands us a tree of rectangles. We paint it into a grid of
//! styled cells and serialize the grid into one ANSI byte stream:
//!
//! ```text
//! TaffyTree → StyledNode tree → Screen (cells) → ANSI string → terminal
//! ```
//!
//! Painting is total. Rectangles may be partly or fully off-screen and every
//! write outside the grid is silently dropped.
//!
//! ## Example
//!
//! ```rust
//! use spark_screen::{BorderSet, ColorMode, Screen, Style, StyledNode};
//!
//! let mut screen = Screen::with_color_mode(7, 3, ColorMode::None);
//! let root = StyledNode::new((0, 0, 7, 3))
//!     .with_style(Style::new().with_border(BorderSet::ROUNDED))
//!     .with_content("hi");
//! screen.render(&root);
//!
//! assert_eq!(screen.plain_text(), "╭─────╮\n│hi   │\n╰─────╯");
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Color, text attributes, alignment modes, rectangles
//! - [`style`] - Style records and border character sets
//! - [`layout`] - Text measurement and the taffy adapter
//! - [`framebuffer`] - Styled node tree and painters
//! - [`renderer`] - Screen buffer and ANSI emission
//! - [`terminal`] - Capability detection, pixel probe, session
//! - [`theme`] - Design tokens

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod types;

pub use types::*;

pub use config::ScreenConfig;
pub use error::{ConfigError, ProbeError};
pub use framebuffer::{ELLIPSIS, StyledNode};
pub use layout::{NodeContent, compute_layout, string_width, styled_tree_from_taffy};
pub use renderer::{AnsiRenderer, Cell, OutputBuffer, Screen};
pub use style::{Border, BorderSet, Style};
pub use terminal::{Capabilities, ColorMode, TermEnv, TerminalDimensions, TerminalSession};
pub use theme::{DesignTokens, ThemeName};
