//! Point-in-polygon testing.

use crate::primitives::Point2;
use num_traits::Float;

/// Tests if a point is inside a polygon using even-odd ray casting.
///
/// The polygon is implicitly closed and may be convex, concave or
/// self-intersecting. Points exactly on the boundary may return either
/// `true` or `false`. Fewer than three vertices never contain anything.
///
/// # Example
///
/// ```
/// use stipple::{polygon_contains, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
/// assert!(polygon_contains(&square, Point2::new(1.0, 2.0)));
/// assert!(!polygon_contains(&square, Point2::new(5.0, 2.0)));
/// ```
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut prev = vertices[n - 1];
    for &curr in vertices {
        // Only edges straddling the horizontal through `point` can cross the ray
        if (curr.y > point.y) != (prev.y > point.y) {
            let crossing_x = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        prev = curr;
    }

    inside
}
