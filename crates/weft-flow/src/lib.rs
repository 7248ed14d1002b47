//! Wrapping flow layout for container widgets.
//!
//! Children are positioned left to right in the order they were added to
//! their container, wrapping to a new row when the accumulated row width
//! would exceed the container's display width. Individual children can force
//! a row break, opt out via visibility, or ask to be auto-sized from the
//! host's preferred-size query.
//!
//! # Architecture
//!
//! 1. **Engine**: [`layout`] maps a container snapshot to per-child placements
//! 2. **Flow breaks**: [`FlowBreakMap`] holds per-child forced row starts,
//!    living outside any single pass
//! 3. **Panel facade**: [`FlowPanel`] owns one container's settings and
//!    break flags and exposes the host-facing property surface
//!
//! # Example
//!
//! ```ignore
//! use weft_flow::{layout, ContainerContext, FlowBreakMap, LayoutSettings};
//!
//! let ctx = ContainerContext::new(display).with_children(children);
//! let pass = layout(&ctx, &LayoutSettings::default(), &breaks, &host)?;
//!
//! for (id, placement) in &pass.placements {
//!     println!("{:?}: {:?}", id, placement.position);
//! }
//! ```

mod breaks;
mod child;
mod engine;
mod metadata;
mod panel;
mod settings;

pub use breaks::FlowBreakMap;
pub use child::{ChildDescriptor, ContainerContext};
pub use engine::{layout, LayoutHost, LayoutPass, Placement};
pub use metadata::{
    extender_properties, settings_properties, PropertyMeta, FLOW_BREAK, FLOW_DIRECTION,
    WRAP_CONTENTS,
};
pub use panel::FlowPanel;
pub use settings::{FlowDirection, LayoutSettings};
