//! Per-container facade over the engine.

use weft_core::{ChildId, LayoutError};

use crate::breaks::FlowBreakMap;
use crate::child::ContainerContext;
use crate::engine::{layout, LayoutHost, LayoutPass};
use crate::settings::{FlowDirection, LayoutSettings};

/// Layout-side state for one flow container.
///
/// Owns the container's settings and flow-break flags and hands both to the
/// engine on each pass. The host container keeps one of these for its
/// lifetime and calls [`FlowPanel::layout`] from its invalidation path;
/// everything else here is the surface its configuration and property-grid
/// systems talk to.
#[derive(Debug, Clone, Default)]
pub struct FlowPanel {
    settings: LayoutSettings,
    breaks: FlowBreakMap,
}

impl FlowPanel {
    /// Create a panel with default settings and no flow breaks.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flow direction.
    pub fn direction(&self) -> FlowDirection {
        self.settings.direction
    }

    /// Set the flow direction.
    pub fn set_direction(&mut self, direction: FlowDirection) {
        self.settings.direction = direction;
    }

    /// Whether rows wrap at the display width.
    pub fn wrap_contents(&self) -> bool {
        self.settings.wrap_contents
    }

    /// Set whether rows wrap at the display width.
    pub fn set_wrap_contents(&mut self, wrap: bool) {
        self.settings.wrap_contents = wrap;
    }

    /// The flow-break flag for a child, false when never set.
    pub fn flow_break(&self, id: ChildId) -> bool {
        self.breaks.get(id)
    }

    /// Set the flow-break flag for a child.
    pub fn set_flow_break(&mut self, id: ChildId, value: bool) {
        self.breaks.set(id, value);
    }

    /// Extender predicate: the flow-break property attaches only to direct
    /// children of this container.
    pub fn can_extend(&self, ctx: &ContainerContext, id: ChildId) -> bool {
        ctx.contains(id)
    }

    /// Run a layout pass with this panel's settings and break flags.
    pub fn layout(
        &self,
        ctx: &ContainerContext,
        host: &dyn LayoutHost,
    ) -> Result<LayoutPass, LayoutError> {
        layout(ctx, &self.settings, &self.breaks, host)
    }

    /// The current settings.
    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// The current flow-break flags.
    pub fn breaks(&self) -> &FlowBreakMap {
        &self.breaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::ChildDescriptor;
    use weft_core::{Point, Rect, Size};

    struct FixedHost;

    impl LayoutHost for FixedHost {
        fn preferred_size(&self, _child: ChildId, _available: Size) -> Size {
            panic!("no child should be auto-sized in this test");
        }
    }

    #[test]
    fn test_setting_round_trips() {
        let mut panel = FlowPanel::new();
        assert_eq!(panel.direction(), FlowDirection::LeftToRight);
        assert!(panel.wrap_contents());

        panel.set_direction(FlowDirection::RightToLeft);
        panel.set_wrap_contents(false);
        assert_eq!(panel.direction(), FlowDirection::RightToLeft);
        assert!(!panel.wrap_contents());
    }

    #[test]
    fn test_flow_break_delegation() {
        let mut panel = FlowPanel::new();
        assert!(!panel.flow_break(ChildId(5)));

        panel.set_flow_break(ChildId(5), true);
        assert!(panel.flow_break(ChildId(5)));
        assert!(panel.breaks().get(ChildId(5)));
    }

    #[test]
    fn test_can_extend_requires_direct_child() {
        let panel = FlowPanel::new();
        let ctx = ContainerContext::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_children(vec![ChildDescriptor::new(ChildId(1), Size::new(10.0, 10.0))]);

        assert!(panel.can_extend(&ctx, ChildId(1)));
        assert!(!panel.can_extend(&ctx, ChildId(2)));
    }

    #[test]
    fn test_layout_uses_owned_state() {
        let mut panel = FlowPanel::new();
        panel.set_flow_break(ChildId(2), true);

        let ctx = ContainerContext::new(Rect::new(0.0, 0.0, 300.0, 100.0)).with_children(vec![
            ChildDescriptor::new(ChildId(1), Size::new(50.0, 20.0)),
            ChildDescriptor::new(ChildId(2), Size::new(50.0, 20.0)),
        ]);
        let pass = panel.layout(&ctx, &FixedHost).unwrap();

        assert_eq!(pass.get(ChildId(2)).unwrap().position, Point::new(0.0, 20.0));
    }

    #[test]
    fn test_layout_rejects_unsupported_direction() {
        let mut panel = FlowPanel::new();
        panel.set_direction(FlowDirection::TopToBottom);

        let ctx = ContainerContext::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(panel.layout(&ctx, &FixedHost).is_err());
    }
}
