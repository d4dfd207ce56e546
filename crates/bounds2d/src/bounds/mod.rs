//! Bounding volume types for 2D scene-graph objects
//!
//! The central type is [`BoundingInfo2D`], a pair of independent
//! approximations (circle + axis-aligned rectangle) that propagates through
//! affine transforms and composes by union.

mod bounding_info;
mod error;
mod size;

pub use bounding_info::BoundingInfo2D;
pub use error::BoundsError;
pub use size::Size2;
