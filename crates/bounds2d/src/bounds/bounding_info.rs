//! Combined circle/rectangle bounding volume
//!
//! A [`BoundingInfo2D`] holds two independent approximations of the same
//! object: a bounding circle (radius about the local origin) and an
//! axis-aligned bounding rectangle (half-extent about the local origin).
//! Neither bound is required to contain the other; each follows its own
//! transform rule and consumers pick whichever test is cheaper.
//!
//! Every operation comes in two forms: an allocating one returning a fresh
//! instance, and a `_to_ref` one writing into a caller-owned result. The
//! `_to_ref` forms never touch the heap, so a renderer can reuse a single
//! result instance across every node it refreshes per frame.

use crate::bounds::{BoundsError, Size2};
use crate::foundation::math::{Mat3, Mat3Ext, Point2, Vec2, EPSILON};
use log::trace;

/// Bounding circle + bounding rectangle approximation for a 2D object.
///
/// Both bounds are centered at the object's local origin. A freshly
/// constructed instance is the degenerate bound at the origin: zero radius
/// and zero extent. Zero is the identity for [`union`](Self::union), so
/// degenerate bounds fold away harmlessly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingInfo2D {
    /// Radius of the bounding circle centered at the local origin
    pub radius: f32,

    /// Half-extent of the bounding rectangle centered at the local origin
    pub extent: Size2,
}

impl BoundingInfo2D {
    /// Create the degenerate bound: zero radius, zero extent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bound for a rectangle of the given full dimensions.
    ///
    /// The extent is half the size; the radius reaches the rectangle's
    /// corners.
    pub fn from_size(width: f32, height: f32) -> Self {
        let mut result = Self::new();
        Self::from_size_to_ref(width, height, &mut result);
        result
    }

    /// Write the bound for a rectangle of the given full dimensions into
    /// `result`
    pub fn from_size_to_ref(width: f32, height: f32, result: &mut Self) {
        result.extent.width = width * 0.5;
        result.extent.height = height * 0.5;
        result.radius = result.extent.half_diagonal();
    }

    /// Create a bound for a circle of the given radius.
    ///
    /// The extent is the square snugly enclosing the circle.
    pub fn from_radius(radius: f32) -> Self {
        let mut result = Self::new();
        Self::from_radius_to_ref(radius, &mut result);
        result
    }

    /// Write the bound for a circle of the given radius into `result`
    pub fn from_radius_to_ref(radius: f32, result: &mut Self) {
        result.radius = radius;
        result.extent.width = radius;
        result.extent.height = radius;
    }

    /// Create a bound enclosing a set of points expressed in local space.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyPointSet`] when `points` is empty.
    pub fn from_points(points: &[Point2]) -> Result<Self, BoundsError> {
        let mut result = Self::new();
        Self::from_points_to_ref(points, &mut result)?;
        Ok(result)
    }

    /// Write the bound enclosing a set of local-space points into `result`.
    ///
    /// The extent is the componentwise maximum of `|x|` and `|y|` over the
    /// points; the radius is the largest point distance from the origin.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyPointSet`] when `points` is empty.
    pub fn from_points_to_ref(points: &[Point2], result: &mut Self) -> Result<(), BoundsError> {
        if points.is_empty() {
            return Err(BoundsError::EmptyPointSet);
        }
        trace!("computing bounds from {} points", points.len());

        let mut max_w = 0.0f32;
        let mut max_h = 0.0f32;
        let mut max_dist_sq = 0.0f32;
        for point in points {
            max_w = max_w.max(point.x.abs());
            max_h = max_h.max(point.y.abs());
            max_dist_sq = max_dist_sq.max(point.x * point.x + point.y * point.y);
        }
        result.extent.width = max_w;
        result.extent.height = max_h;
        result.radius = max_dist_sq.sqrt();
        Ok(())
    }

    /// Return this bound pushed through a 2D affine matrix.
    ///
    /// Allocating form of [`transform_to_ref`](Self::transform_to_ref).
    pub fn transform(&self, matrix: &Mat3) -> Self {
        let mut result = Self::new();
        self.transform_to_ref(matrix, &mut result);
        result
    }

    /// Push this bound through a 2D affine matrix, writing into `result`.
    ///
    /// `self` is untouched. Both bounds are approximations, not exact
    /// Minkowski-correct envelopes:
    ///
    /// - The radius follows the matrix's translation direction: with no
    ///   meaningful translation it scales by the larger per-axis scale
    ///   factor, otherwise the circle's farthest point along the
    ///   translation direction is scaled per-axis and its distance becomes
    ///   the new radius.
    /// - The extent takes the componentwise `|x|`/`|y|` maximum of the four
    ///   transformed corners as the new half-extent, without discounting
    ///   the matrix's translation.
    ///
    /// Degenerate matrices yield `NaN`/`Infinity` results; nothing is
    /// validated or trapped. Never allocates.
    pub fn transform_to_ref(&self, matrix: &Mat3, result: &mut Self) {
        let (scale_x, scale_y) = matrix.signed_scale();

        let translation = matrix.translation_part();
        let trans_length = translation.norm();

        if trans_length < EPSILON {
            // No offset to orient against: grow by the larger axis scale.
            result.radius = self.radius * scale_x.max(scale_y);
        } else {
            // Farthest point of the circle along the translation direction,
            // scaled per-axis rather than through the full matrix.
            let reach = trans_length + self.radius;
            let direction = translation / trans_length;
            let farthest = Vec2::new(direction.x * reach * scale_x, direction.y * reach * scale_y);
            result.radius = farthest.norm();
        }

        let w = self.extent.width;
        let h = self.extent.height;
        let corners = [
            Point2::new(w, h),
            Point2::new(w, -h),
            Point2::new(-w, -h),
            Point2::new(-w, h),
        ];

        let mut max_w = 0.0f32;
        let mut max_h = 0.0f32;
        for corner in &corners {
            let p = matrix.transform_point(corner);
            max_w = max_w.max(p.x.abs());
            max_h = max_h.max(p.y.abs());
        }

        // The corner transform above already applied the matrix's scale;
        // the multiply below applies it a second time. Longstanding
        // observable behavior that callers calibrate against - keep it.
        result.extent.width = max_w * scale_x;
        result.extent.height = max_h * scale_y;
    }

    /// Return the union of this bound with another.
    ///
    /// Allocating form of [`union_to_ref`](Self::union_to_ref).
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new();
        self.union_to_ref(other, &mut result);
        result
    }

    /// Write the union of this bound with `other` into `result`.
    ///
    /// Componentwise maximum of radius, half-width, and half-height. The
    /// rectangle union is conservative only when both rectangles share the
    /// same local origin and axis orientation; that assumption is the
    /// caller's to uphold and is not validated. Never allocates.
    pub fn union_to_ref(&self, other: &Self, result: &mut Self) {
        result.radius = self.radius.max(other.radius);
        result.extent.width = self.extent.width.max(other.extent.width);
        result.extent.height = self.extent.height.max(other.extent.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-6;

    fn bounds(radius: f32, width: f32, height: f32) -> BoundingInfo2D {
        BoundingInfo2D {
            radius,
            extent: Size2::new(width, height),
        }
    }

    #[test]
    fn test_new_is_degenerate() {
        let info = BoundingInfo2D::new();
        assert_eq!(info.radius, 0.0);
        assert_eq!(info.extent, Size2::zero());
    }

    #[test]
    fn test_clone_has_independent_storage() {
        let original = bounds(2.0, 1.0, 1.5);
        let mut copy = original.clone();
        copy.extent.width = 99.0;
        copy.radius = 99.0;

        assert_relative_eq!(original.extent.width, 1.0, epsilon = EPS);
        assert_relative_eq!(original.radius, 2.0, epsilon = EPS);
        assert_relative_eq!(copy.extent.width, 99.0, epsilon = EPS);
    }

    #[test]
    fn test_identity_transform_preserves_bounds() {
        let info = bounds(1.0, 1.0, 1.0);
        let out = info.transform(&Mat3::identity());

        assert_relative_eq!(out.radius, 1.0, epsilon = EPS);
        assert_relative_eq!(out.extent.width, 1.0, epsilon = EPS);
        assert_relative_eq!(out.extent.height, 1.0, epsilon = EPS);
    }

    #[test]
    fn test_uniform_scale_scales_radius_once() {
        let info = bounds(3.0, 1.0, 1.0);
        let out = info.transform(&Mat3::scaling(2.0, 2.0));
        assert_relative_eq!(out.radius, 6.0, epsilon = EPS);
    }

    #[test]
    fn test_uniform_scale_applies_to_extent_twice() {
        // The extent picks up scale through the corner transform and again
        // in the final per-axis multiply.
        let info = bounds(1.0, 3.0, 5.0);
        let out = info.transform(&Mat3::scaling(2.0, 2.0));

        assert_relative_eq!(out.extent.width, 3.0 * 2.0 * 2.0, epsilon = EPS);
        assert_relative_eq!(out.extent.height, 5.0 * 2.0 * 2.0, epsilon = EPS);
    }

    #[test]
    fn test_translation_extends_radius() {
        let info = bounds(2.0, 1.0, 1.0);
        let out = info.transform(&Mat3::translation(10.0, 0.0));
        assert_relative_eq!(out.radius, 12.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_swaps_extent_axes() {
        let info = bounds(0.0, 2.0, 5.0);
        let out = info.transform(&Mat3::rotation(FRAC_PI_2));

        assert_relative_eq!(out.extent.width, 5.0, epsilon = 1e-5);
        assert_relative_eq!(out.extent.height, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_to_ref_leaves_source_untouched() {
        let info = bounds(2.0, 1.0, 1.0);
        let mut out = BoundingInfo2D::new();
        info.transform_to_ref(&Mat3::scaling(4.0, 4.0), &mut out);

        assert_relative_eq!(info.radius, 2.0, epsilon = EPS);
        assert_relative_eq!(out.radius, 8.0, epsilon = EPS);
    }

    #[test]
    fn test_union_takes_componentwise_maxima() {
        let a = bounds(2.0, 1.0, 1.0);
        let b = bounds(5.0, 0.0, 3.0);
        let merged = a.union(&b);

        assert_relative_eq!(merged.radius, 5.0, epsilon = EPS);
        assert_relative_eq!(merged.extent.width, 1.0, epsilon = EPS);
        assert_relative_eq!(merged.extent.height, 3.0, epsilon = EPS);
    }

    #[test]
    fn test_union_is_commutative_and_idempotent() {
        let a = bounds(2.0, 1.0, 4.0);
        let b = bounds(5.0, 3.0, 0.5);

        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn test_union_with_degenerate_is_identity() {
        let a = bounds(2.0, 1.0, 4.0);
        assert_eq!(a.union(&BoundingInfo2D::new()), a);
    }

    #[test]
    fn test_from_size() {
        let info = BoundingInfo2D::from_size(6.0, 8.0);

        assert_relative_eq!(info.extent.width, 3.0, epsilon = EPS);
        assert_relative_eq!(info.extent.height, 4.0, epsilon = EPS);
        assert_relative_eq!(info.radius, 5.0, epsilon = EPS);
    }

    #[test]
    fn test_from_radius() {
        let info = BoundingInfo2D::from_radius(2.5);

        assert_relative_eq!(info.radius, 2.5, epsilon = EPS);
        assert_relative_eq!(info.extent.width, 2.5, epsilon = EPS);
        assert_relative_eq!(info.extent.height, 2.5, epsilon = EPS);
    }

    #[test]
    fn test_from_points() {
        let points = [
            Point2::new(3.0, 4.0),
            Point2::new(-1.0, 2.0),
            Point2::new(0.5, -6.0),
        ];
        let info = BoundingInfo2D::from_points(&points).unwrap();

        assert_relative_eq!(info.extent.width, 3.0, epsilon = EPS);
        assert_relative_eq!(info.extent.height, 6.0, epsilon = EPS);
        // (0.5, -6.0) is the farthest point from the origin.
        assert_relative_eq!(info.radius, (0.25f32 + 36.0).sqrt(), epsilon = EPS);
    }

    #[test]
    fn test_from_points_rejects_empty_set() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(
            BoundingInfo2D::from_points(&[]),
            Err(BoundsError::EmptyPointSet)
        );
    }

    #[test]
    fn test_scale_then_translate_radius() {
        // Translation (10, 0) with uniform scale 2 and radius 1: the reach
        // vector (10 + 1, 0) is scaled per-axis to (22, 0).
        let info = bounds(1.0, 1.0, 1.0);
        let m = Mat3::translation(10.0, 0.0) * Mat3::scaling(2.0, 2.0);
        let out = info.transform(&m);
        assert_relative_eq!(out.radius, 22.0, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_matrix_propagates_non_finite_values() {
        let info = bounds(1.0, 1.0, 1.0);
        let mut m = Mat3::identity();
        m.m11 = f32::INFINITY;
        let out = info.transform(&m);
        assert!(!out.extent.width.is_finite());
    }
}
