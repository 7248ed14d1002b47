//! Widget identity.

/// Opaque, stable identity for a child widget.
///
/// The layout engine never owns or inspects widgets; it refers to them only
/// through this token. Hosts mint one per widget and keep it stable for the
/// widget's lifetime, since flow-break flags and layout placements are keyed
/// by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildId(pub u64);

impl From<u64> for ChildId {
    fn from(raw: u64) -> Self {
        ChildId(raw)
    }
}
