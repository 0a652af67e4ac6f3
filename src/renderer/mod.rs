//! Terminal renderer - the cell grid and its byte-stream output.
//!
//! The renderer knows only about cells. Painters in [`crate::framebuffer`]
//! fill a [`Screen`]; the screen serializes itself into cursor, SGR and
//! text bytes for the color tier it was built with.

pub mod ansi;
pub mod buffer;
pub mod output;

pub use ansi::{AnsiRenderer, rgb_to_ansi16, rgb_to_ansi256};
pub use buffer::{Cell, Screen};
pub use output::{OutputBuffer, StyleRunWriter};
