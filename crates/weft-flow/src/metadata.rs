//! Design-time property metadata.
//!
//! Plain records describing the properties a host's settings UI shows for a
//! flow container. The engine never reads these; they exist so a property
//! grid can render names, defaults, and localization flags without knowing
//! anything about the layout crate's types.

/// Metadata for one property exposed to the host's property grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMeta {
    /// Name the configuration system stores the property under.
    pub name: &'static str,
    /// Name shown in the property grid.
    pub display_name: &'static str,
    /// Default value, rendered the way the grid renders values.
    pub default_value: &'static str,
    /// Whether the property participates in localization.
    pub localizable: bool,
}

/// The container-level flow direction setting.
pub const FLOW_DIRECTION: PropertyMeta = PropertyMeta {
    name: "flow_direction",
    display_name: "FlowDirection",
    default_value: "LeftToRight",
    localizable: true,
};

/// The container-level wrapping setting.
pub const WRAP_CONTENTS: PropertyMeta = PropertyMeta {
    name: "wrap_contents",
    display_name: "WrapContents",
    default_value: "true",
    localizable: true,
};

/// The per-child flow-break extender property.
pub const FLOW_BREAK: PropertyMeta = PropertyMeta {
    name: "flow_break",
    display_name: "FlowBreak",
    default_value: "false",
    localizable: false,
};

/// Properties the container itself exposes.
pub fn settings_properties() -> [PropertyMeta; 2] {
    [FLOW_DIRECTION, WRAP_CONTENTS]
}

/// Properties attached to each direct child of the container.
pub fn extender_properties() -> [PropertyMeta; 1] {
    [FLOW_BREAK]
}
