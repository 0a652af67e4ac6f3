//! The styled node tree the painter walks.

use std::sync::Arc;

use crate::style::Style;
use crate::types::Rect;

/// A laid-out node: a parent-relative rectangle, an optional style, a text
/// blob and ordered children. Document order is paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledNode {
    pub rect: Rect,
    pub style: Option<Arc<Style>>,
    pub content: String,
    pub children: Vec<StyledNode>,
}

impl StyledNode {
    pub fn new(rect: impl Into<Rect>) -> Self {
        Self {
            rect: rect.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    /// Use an already shared style.
    pub fn with_shared_style(mut self, style: Arc<Style>) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_child(mut self, child: StyledNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = StyledNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn add_child(&mut self, child: StyledNode) {
        self.children.push(child);
    }

    /// Whether the node's style draws a border.
    pub fn has_border(&self) -> bool {
        self.style.as_ref().is_some_and(|s| s.border.is_some())
    }
}
