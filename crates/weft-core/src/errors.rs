//! Error types for the Weft layout engine.

use thiserror::Error;

/// Errors during layout computation.
///
/// The flow algorithm is total over well-formed input; the only failure is
/// asking for a flow direction the engine does not implement.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Flow direction {direction} is not implemented")]
    UnsupportedDirection { direction: String },
}
