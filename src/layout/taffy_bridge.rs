//! Taffy Bridge - hands computed layouts to the painter.
//!
//! Taffy owns the box model. Each leaf or container carries a [`NodeContent`]
//! context (the visual style and text blob); once layout is computed the
//! tree is copied into a [`StyledNode`] tree whose rectangles are the
//! parent-relative locations Taffy reports.

use std::sync::Arc;

use taffy::{AvailableSpace, NodeId, Size, TaffyResult, TaffyTree};

use crate::framebuffer::StyledNode;
use crate::style::Style;
use crate::types::{Rect, TextWrap};

use super::text_measure::{WrapOptions, string_width, wrap};

// =============================================================================
// NODE CONTEXT
// =============================================================================

/// Per-node payload stored as Taffy node context.
#[derive(Debug, Clone, Default)]
pub struct NodeContent {
    pub style: Option<Arc<Style>>,
    pub content: String,
}

impl NodeContent {
    /// A text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            style: None,
            content: content.into(),
        }
    }

    /// A styled container without text.
    pub fn styled(style: Style) -> Self {
        Self {
            style: Some(Arc::new(style)),
            content: String::new(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    fn wraps(&self) -> bool {
        self.style
            .as_ref()
            .is_some_and(|s| s.text_wrap != TextWrap::None)
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Intrinsic size of a node's text for Taffy.
///
/// Width is the widest source line. Height is the number of lines the
/// painter will produce: one per `\n`-separated line, or the greedy wrap
/// count at the available width when the node's style wraps.
fn measure_content(
    content: &NodeContent,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if content.content.is_empty() {
        return Size::ZERO;
    }

    let text_width = content
        .content
        .split('\n')
        .map(string_width)
        .max()
        .unwrap_or(0);

    let avail_width = known_dimensions.width.map(|w| w as usize).unwrap_or(
        match available_space.width {
            AvailableSpace::Definite(w) => w as usize,
            AvailableSpace::MinContent => text_width,
            AvailableSpace::MaxContent => usize::MAX,
        },
    );

    let lines = if content.wraps() {
        content
            .content
            .split('\n')
            .map(|para| wrap(para, WrapOptions::new(avail_width.max(1))).len())
            .sum()
    } else {
        content.content.split('\n').count()
    };

    Size {
        width: known_dimensions
            .width
            .unwrap_or(text_width.min(avail_width) as f32),
        height: known_dimensions.height.unwrap_or(lines as f32),
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Run Taffy layout over `tree` with text measurement for content nodes.
pub fn compute_layout(
    tree: &mut TaffyTree<NodeContent>,
    root: NodeId,
    width: u16,
    height: u16,
) -> TaffyResult<()> {
    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::Definite(height as f32),
    };

    tree.compute_layout_with_measure(
        root,
        available,
        |known_dimensions, available_space, _node_id, context, _style| match context {
            Some(content) => measure_content(content, known_dimensions, available_space),
            None => Size::ZERO,
        },
    )
}

/// Copy a computed Taffy tree into a [`StyledNode`] tree rooted at `root`.
///
/// Taffy locations are already relative to the parent, so they become the
/// node rectangles unchanged. Nodes without context get no style and no
/// content.
pub fn styled_tree_from_taffy(
    tree: &TaffyTree<NodeContent>,
    root: NodeId,
) -> TaffyResult<StyledNode> {
    let layout = tree.layout(root)?;
    let rect = Rect::new(
        layout.location.x,
        layout.location.y,
        layout.size.width,
        layout.size.height,
    );

    let mut node = StyledNode::new(rect);
    if let Some(ctx) = tree.get_node_context(root) {
        node.style = ctx.style.clone();
        node.content = ctx.content.clone();
    }

    for child in tree.children(root)? {
        node.children.push(styled_tree_from_taffy(tree, child)?);
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taffy::prelude::{Dimension, FlexDirection, length};
    use taffy::Style as LayoutStyle;

    fn fixed(width: f32, height: f32) -> LayoutStyle {
        LayoutStyle {
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_locations_stay_parent_relative() {
        let mut tree: TaffyTree<NodeContent> = TaffyTree::new();

        let child = tree
            .new_leaf_with_context(fixed(3.0, 1.0), NodeContent::text("X"))
            .unwrap();
        let mut parent_style = fixed(10.0, 3.0);
        parent_style.padding = taffy::Rect {
            left: length(1.0),
            right: length(0.0),
            top: length(1.0),
            bottom: length(0.0),
        };
        let parent = tree.new_with_children(parent_style, &[child]).unwrap();
        let mut root_style = fixed(20.0, 6.0);
        root_style.padding = taffy::Rect {
            left: length(5.0),
            right: length(0.0),
            top: length(2.0),
            bottom: length(0.0),
        };
        let root = tree.new_with_children(root_style, &[parent]).unwrap();

        compute_layout(&mut tree, root, 20, 6).unwrap();
        let styled = styled_tree_from_taffy(&tree, root).unwrap();

        let parent_node = &styled.children[0];
        assert_eq!(parent_node.rect.cells(), (5, 2, 10, 3));
        let child_node = &parent_node.children[0];
        assert_eq!(child_node.rect.cells(), (1, 1, 3, 1));
        assert_eq!(child_node.content, "X");
    }

    #[test]
    fn test_text_leaf_measures_content() {
        let mut tree: TaffyTree<NodeContent> = TaffyTree::new();
        let text = tree
            .new_leaf_with_context(LayoutStyle::default(), NodeContent::text("Hello\n你好"))
            .unwrap();
        let root = tree
            .new_with_children(
                LayoutStyle {
                    flex_direction: FlexDirection::Column,
                    ..fixed(20.0, 5.0)
                },
                &[text],
            )
            .unwrap();

        compute_layout(&mut tree, root, 20, 5).unwrap();
        let layout = tree.layout(text).unwrap();
        assert_eq!(layout.size.height, 2.0);
    }

    #[test]
    fn test_style_is_carried() {
        let mut tree: TaffyTree<NodeContent> = TaffyTree::new();
        let style = Style::new().with_bold(true);
        let root = tree
            .new_leaf_with_context(
                fixed(4.0, 1.0),
                NodeContent::text("hi").with_style(style.clone()),
            )
            .unwrap();

        compute_layout(&mut tree, root, 4, 1).unwrap();
        let styled = styled_tree_from_taffy(&tree, root).unwrap();
        assert_eq!(styled.style.as_deref(), Some(&style));
        assert!(styled.children.is_empty());
    }

    #[test]
    fn test_wrapping_style_measures_wrapped_height() {
        let content = NodeContent::text("aaa bbb ccc")
            .with_style(Style::new().with_text_wrap(TextWrap::Normal));
        let size = measure_content(
            &content,
            Size {
                width: Some(4.0),
                height: None,
            },
            Size {
                width: AvailableSpace::Definite(4.0),
                height: AvailableSpace::MaxContent,
            },
        );
        assert_eq!(size.height, 3.0);
        assert_eq!(size.width, 4.0);
    }
}
