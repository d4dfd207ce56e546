//! Half-extent size type

/// Half-extent of an axis-aligned rectangle centered at the local origin.
///
/// Both components are half-dimensions: a `Size2 { width: w, height: h }`
/// describes the rectangle with corners at `(±w, ±h)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size2 {
    /// Half-width (distance from the origin to the right edge)
    pub width: f32,

    /// Half-height (distance from the origin to the top edge)
    pub height: f32,
}

impl Size2 {
    /// Create a new half-extent
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The zero extent (a degenerate rectangle at the origin)
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Full width of the described rectangle
    pub fn full_width(&self) -> f32 {
        self.width * 2.0
    }

    /// Full height of the described rectangle
    pub fn full_height(&self) -> f32 {
        self.height * 2.0
    }

    /// Length of the half-diagonal, from the origin to a corner
    pub fn half_diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Size2::zero(), Size2::default());
    }

    #[test]
    fn test_full_dimensions_double_the_extent() {
        let size = Size2::new(1.5, 4.0);
        assert_relative_eq!(size.full_width(), 3.0, epsilon = EPSILON);
        assert_relative_eq!(size.full_height(), 8.0, epsilon = EPSILON);
    }

    #[test]
    fn test_half_diagonal() {
        let size = Size2::new(3.0, 4.0);
        assert_relative_eq!(size.half_diagonal(), 5.0, epsilon = EPSILON);
    }
}
