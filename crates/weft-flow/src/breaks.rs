//! Per-child forced row breaks.

use std::collections::HashMap;

use weft_core::ChildId;

/// Flow-break flags keyed by child identity.
///
/// A set flag forces the child to start a new row regardless of the
/// remaining row width. The map lives outside any single layout pass: flags
/// persist across passes and container resizes, and change only through
/// explicit [`FlowBreakMap::set`] calls. Lookup for an identity that was
/// never set yields false.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowBreakMap {
    flags: HashMap<ChildId, bool>,
}

impl FlowBreakMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored flag for the identity, or false when absent.
    pub fn get(&self, id: ChildId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Upsert the flag for the identity, overwriting any prior value.
    pub fn set(&mut self, id: ChildId, value: bool) {
        self.flags.insert(id, value);
    }

    /// Number of identities with a stored flag (set to either value).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no identity has a stored flag.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
