//! Per-child layout input.

use weft_core::{ChildId, Margin, Rect, Size};

/// Attributes of one child widget, read during a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildDescriptor {
    /// Stable identity of the widget.
    pub id: ChildId,
    /// Current size. For auto-sized children this is the size before the
    /// preferred-size query; the wrap test and the row advance use it.
    pub size: Size,
    /// Margin around the widget. The flow algorithm consumes `right` and
    /// `bottom`.
    pub margin: Margin,
    /// Invisible children are skipped entirely: no placement, no effect on
    /// row accumulation.
    pub visible: bool,
    /// If true the engine queries the host for a preferred size given the
    /// container's display size and records it in the placement.
    pub auto_size: bool,
}

impl ChildDescriptor {
    /// Create a visible, fixed-size child with no margin.
    pub fn new(id: ChildId, size: Size) -> Self {
        Self {
            id,
            size,
            margin: Margin::default(),
            visible: true,
            auto_size: false,
        }
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Mark the child as auto-sized.
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }
}

/// Snapshot of a container handed to one layout pass.
#[derive(Debug, Clone, Default)]
pub struct ContainerContext {
    /// The padding-adjusted display rectangle. Its origin is where the first
    /// row starts; its width is the row width available before wrapping; its
    /// full size is what auto-size queries receive as available space.
    pub display: Rect,
    /// Children in the order they were added to the container.
    pub children: Vec<ChildDescriptor>,
}

impl ContainerContext {
    /// Create a context for a display rectangle with no children.
    pub fn new(display: Rect) -> Self {
        Self {
            display,
            children: Vec::new(),
        }
    }

    /// Set the children.
    pub fn with_children(mut self, children: Vec<ChildDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Whether the identity is a direct child of this container.
    pub fn contains(&self, id: ChildId) -> bool {
        self.children.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let child = ChildDescriptor::new(ChildId(1), Size::new(50.0, 20.0));
        assert!(child.visible);
        assert!(!child.auto_size);
        assert_eq!(child.margin, Margin::default());
    }

    #[test]
    fn test_descriptor_builders() {
        let child = ChildDescriptor::new(ChildId(1), Size::new(50.0, 20.0))
            .with_margin(Margin::uniform(3.0))
            .with_visible(false)
            .with_auto_size(true);
        assert!(!child.visible);
        assert!(child.auto_size);
        assert!((child.margin.right - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_context_contains() {
        let ctx = ContainerContext::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_children(vec![
            ChildDescriptor::new(ChildId(1), Size::new(10.0, 10.0)),
            ChildDescriptor::new(ChildId(2), Size::new(10.0, 10.0)),
        ]);
        assert!(ctx.contains(ChildId(1)));
        assert!(!ctx.contains(ChildId(3)));
    }
}
