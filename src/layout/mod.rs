//! Layout collaborators: text measurement and the Taffy adapter.
//!
//! The painter never computes box geometry. It reads rectangles that the
//! layout engine already produced, and asks [`text_measure`] how wide
//! strings are and where lines break.

pub mod text_measure;
mod taffy_bridge;

pub use taffy_bridge::{NodeContent, compute_layout, styled_tree_from_taffy};
pub use text_measure::*;
