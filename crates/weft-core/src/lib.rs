//! Core types for the Weft layout engine.
//!
//! This crate holds the vocabulary shared by every layout crate:
//!
//! - Pixel geometry (`Point`, `Size`, `Rect`, `Margin`)
//! - The opaque widget identity token (`ChildId`)
//! - The error taxonomy (`LayoutError`)
//!
//! Everything here is host-toolkit agnostic: the types describe positions,
//! extents, and identities, never widgets themselves.

mod errors;
mod geometry;
mod id;

pub use errors::LayoutError;
pub use geometry::{Margin, Point, Rect, Size};
pub use id::ChildId;
