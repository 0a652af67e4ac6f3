//! Unicode-aware text measurement for terminal cells.
//!
//! Everything the painter needs to know about a string lives here:
//!
//! - **Segmentation**: extended grapheme clusters (UAX #29), never split
//! - **Width**: terminal cell width per cluster, emoji sequences counted as 2
//! - **ANSI stripping**: escape sequences occupy no cells
//! - **Wrapping**: greedy, balanced and Knuth-Plass line breaking
//! - **Elision**: end, start and middle truncation with a marker
//! - **Justification**: inter-word or inter-character
//!
//! Built on `unicode-segmentation`, `unicode-width` and `textwrap`.

mod ansi;
mod elide;
mod justify;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use elide::{elide_end_with, elide_start_with, elide_with};
pub use justify::{JustifyMode, justify_text};
pub use width::{char_width, grapheme_width, graphemes, string_width};
pub use wrap::{WrapOptions, WrappedLine, wrap, wrap_balanced, wrap_knuth_plass};
