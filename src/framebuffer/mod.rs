//! Painting a styled node tree into a [`Screen`](crate::renderer::Screen).
//!
//! # Pipeline Position
//!
//! ```text
//! layout engine → StyledNode tree (parent-relative rects)
//!                         │
//!                         ▼
//!                   THIS MODULE
//!        (background → border → text → children)
//!                         │
//!                         ▼
//!                 Screen (2D cell grid)
//!                         │
//!                         ▼
//!          serializer (style runs → ANSI → terminal)
//! ```

mod node;
mod render_tree;
mod text;

pub use node::StyledNode;
pub use render_tree::paint;
pub use text::ELLIPSIS;
