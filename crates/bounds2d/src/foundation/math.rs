//! Math utilities and types
//!
//! Provides the fundamental 2D math types for scene-graph bounding
//! computation. Matrices are homogeneous 3x3 in nalgebra's column-vector
//! convention: the linear (rotation/scale/shear) part occupies the top-left
//! 2x2 block and the translation lives in the third column.

pub use nalgebra::{Matrix3, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 homogeneous matrix type for 2D affine transforms
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Zero threshold for floating-point comparisons.
///
/// Used as the "treat this translation as zero" cutoff when transforming
/// bounding volumes.
pub const EPSILON: f32 = 1e-6;

/// Extension trait for [`Mat3`] with 2D affine convenience methods
pub trait Mat3Ext {
    /// Create a counter-clockwise rotation matrix (angle in radians)
    fn rotation(angle: f32) -> Mat3;

    /// Create a translation matrix
    fn translation(x: f32, y: f32) -> Mat3;

    /// Create a non-uniform scaling matrix
    fn scaling(sx: f32, sy: f32) -> Mat3;

    /// Extract signed per-axis scale factors from the matrix basis.
    ///
    /// The magnitude of each factor is the Euclidean norm of the
    /// corresponding basis column (including its homogeneous cell). The
    /// sign is negative only when the product of that column's cells is
    /// strictly negative: a mirrored axis flips the sign, while a pure
    /// rotation zeroes the product and counts as positive.
    fn signed_scale(&self) -> (f32, f32);

    /// Extract the translation component
    fn translation_part(&self) -> Vec2;
}

impl Mat3Ext for Mat3 {
    fn rotation(angle: f32) -> Mat3 {
        Mat3::new_rotation(angle)
    }

    fn translation(x: f32, y: f32) -> Mat3 {
        Mat3::new_translation(&Vec2::new(x, y))
    }

    fn scaling(sx: f32, sy: f32) -> Mat3 {
        Mat3::new_nonuniform_scaling(&Vec2::new(sx, sy))
    }

    fn signed_scale(&self) -> (f32, f32) {
        let scale_x = axis_sign(self.m11 * self.m21 * self.m31)
            * (self.m11 * self.m11 + self.m21 * self.m21 + self.m31 * self.m31).sqrt();
        let scale_y = axis_sign(self.m12 * self.m22 * self.m32)
            * (self.m12 * self.m12 + self.m22 * self.m22 + self.m32 * self.m32).sqrt();
        (scale_x, scale_y)
    }

    fn translation_part(&self) -> Vec2 {
        Vec2::new(self.m13, self.m23)
    }
}

// Negative only on a strictly negative product; +/-0.0 keeps the axis
// positive so identity and axis-aligned matrices decompose to +1.
fn axis_sign(product: f32) -> f32 {
    if product < 0.0 {
        -1.0
    } else {
        1.0
    }
}
