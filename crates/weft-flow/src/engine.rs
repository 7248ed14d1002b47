//! The flow layout pass.

use indexmap::IndexMap;
use weft_core::{ChildId, LayoutError, Point, Size};

use crate::breaks::FlowBreakMap;
use crate::child::ContainerContext;
use crate::settings::{FlowDirection, LayoutSettings};

/// Host-toolkit callbacks the engine needs during a pass.
pub trait LayoutHost {
    /// Preferred size for an auto-sized child given the available size.
    fn preferred_size(&self, child: ChildId, available: Size) -> Size;

    /// Whether a child takes part in flow layout at all.
    ///
    /// Toolkit-internal children (an overlay scrollbar, say) return false
    /// here and are skipped exactly like invisible children.
    fn is_participating(&self, _child: ChildId) -> bool {
        true
    }
}

/// Position (and, for auto-sized children, size) assigned to one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner assigned to the child.
    pub position: Point,
    /// New size, present exactly when the child was auto-sized this pass.
    pub size: Option<Size>,
}

/// Result of one layout pass.
#[derive(Debug, Clone)]
pub struct LayoutPass {
    /// One placement per visible, participating child, in container order.
    pub placements: IndexMap<ChildId, Placement>,
    /// Whether the host should run layout on the container's own parent.
    /// Fixed policy: always true.
    pub reflow_parent: bool,
}

impl LayoutPass {
    /// Placement for a child, if it received one this pass.
    pub fn get(&self, id: ChildId) -> Option<&Placement> {
        self.placements.get(&id)
    }
}

/// Position every visible child of the container.
///
/// Children are walked in container order with a running row cursor. A child
/// starts a new row when its flow-break flag is set, or when wrapping is
/// enabled and placing it would overflow the display width; the row advance
/// is the wrapping child's own height plus its bottom margin. Auto-sized
/// children are positioned first and then given their preferred size; the
/// cursor advances past the updated width plus the right margin.
///
/// The pass reads `settings` and `breaks` but never mutates them. It is a
/// pure function of its inputs: the same snapshot, settings, and flags yield
/// the same placements. A zero or negative display width is not an error;
/// every child simply wraps onto its own row.
pub fn layout(
    ctx: &ContainerContext,
    settings: &LayoutSettings,
    breaks: &FlowBreakMap,
    host: &dyn LayoutHost,
) -> Result<LayoutPass, LayoutError> {
    if settings.direction != FlowDirection::LeftToRight {
        return Err(LayoutError::UnsupportedDirection {
            direction: settings.direction.to_string(),
        });
    }

    let origin = ctx.display.origin();
    let mut cursor = origin;
    let mut placements = IndexMap::with_capacity(ctx.children.len());

    for child in &ctx.children {
        if !child.visible || !host.is_participating(child.id) {
            continue;
        }

        // A flow break overrides the wrapping policy; the width test only
        // runs when wrapping is enabled.
        let forced = breaks.get(child.id);
        let overflows =
            settings.wrap_contents && cursor.x + child.size.width > ctx.display.width;
        if forced || overflows {
            cursor.x = origin.x;
            cursor.y += child.size.height + child.margin.bottom;
        }

        let position = cursor;

        let mut width = child.size.width;
        let mut size = None;
        if child.auto_size {
            let preferred = host.preferred_size(child.id, ctx.display.size());
            width = preferred.width;
            size = Some(preferred);
        }

        placements.insert(child.id, Placement { position, size });
        cursor.x += width + child.margin.right;
    }

    Ok(LayoutPass {
        placements,
        reflow_parent: true,
    })
}
