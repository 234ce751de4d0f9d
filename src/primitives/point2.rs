//! 2D point type.

use num_traits::Float;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point `magnitude` away from `self` in direction `angle` (radians).
    #[inline]
    pub fn polar_offset(self, angle: F, magnitude: F) -> Self {
        Self {
            x: self.x + magnitude * angle.cos(),
            y: self.y + magnitude * angle.sin(),
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Point2<F>> for (F, F) {
    #[inline]
    fn from(p: Point2<F>) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_polar_offset() {
        let p: Point2<f64> = Point2::new(2.0, 3.0);

        let right = p.polar_offset(0.0, 1.5);
        assert_relative_eq!(right.x, 3.5, epsilon = 1e-12);
        assert_relative_eq!(right.y, 3.0, epsilon = 1e-12);

        let up = p.polar_offset(FRAC_PI_2, 2.0);
        assert_relative_eq!(up.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 5.0, epsilon = 1e-12);

        let left = p.polar_offset(PI, 1.0);
        assert_relative_eq!(left.distance(p), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point2<f64> = (1.5, -2.0).into();
        assert_eq!(p, Point2::new(1.5, -2.0));

        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (1.5, -2.0));
    }

    #[test]
    fn test_default_is_origin() {
        let p: Point2<f32> = Point2::default();
        assert_eq!(p, Point2::origin());
    }
}
