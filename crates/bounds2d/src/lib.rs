//! # bounds2d
//!
//! Combined bounding-circle/bounding-rectangle volumes for 2D scene graphs.
//!
//! A [`BoundingInfo2D`](bounds::BoundingInfo2D) carries two independent
//! approximations of the same object: a bounding circle (a radius about the
//! local origin) and an axis-aligned bounding rectangle (a half-extent about
//! the local origin). Scene-graph renderers use it to cull, hit-test, and
//! lay out 2D objects without walking per-vertex geometry.
//!
//! ## Features
//!
//! - **Transform propagation**: push a bound through a 2D affine matrix
//! - **Union composition**: merge child bounds into a parent bound
//! - **Zero-allocation hot paths**: every operation has a `_to_ref` twin
//!   that writes into a caller-owned result instead of allocating
//!
//! ## Quick Start
//!
//! ```rust
//! use bounds2d::prelude::*;
//!
//! let quad = BoundingInfo2D::from_size(4.0, 2.0);
//!
//! // Push through the node's world matrix, reusing one result per frame.
//! let world = Mat3::new_translation(&Vec2::new(10.0, 0.0));
//! let mut world_bounds = BoundingInfo2D::new();
//! quad.transform_to_ref(&world, &mut world_bounds);
//!
//! // Fold sibling bounds into the parent.
//! let parent = world_bounds.union(&BoundingInfo2D::from_radius(3.0));
//! assert!(parent.radius >= 3.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod bounds;

pub use bounds::{BoundingInfo2D, BoundsError, Size2};

/// Commonly used types, re-exported for convenient glob import.
pub mod prelude {
    pub use crate::{
        bounds::{BoundingInfo2D, BoundsError, Size2},
        foundation::math::{Mat3, Mat3Ext, Point2, Vec2, EPSILON},
    };
}
