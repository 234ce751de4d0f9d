//! Ramer-Douglas-Peucker polyline simplification.
//!
//! Points are discarded when they lie within the tolerance of the chord
//! between their retained neighbours. Segments awaiting a check live on an
//! explicit stack, so very long inputs never deepen the call stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::error::{Result, StippleError};
use crate::primitives::Point2;
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns the retained points in input order. The first and last points are
/// always kept. An interior point is kept when its perpendicular distance to
/// the current chord is the segment maximum and is at least
/// `min_tolerated_dist`. Inputs of two or fewer points are returned as-is.
///
/// `min_tolerated_dist` is in input units. Something between `1e-4` and
/// `1e-2` times the width of the data is usually a good start.
///
/// # Errors
///
/// Returns [`StippleError::InvalidParameter`] if `min_tolerated_dist` is
/// negative or NaN.
///
/// # Example
///
/// ```
/// use stipple::{simplify, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.001), // Near the chord, removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 10.0),  // Far from the chord, kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = simplify(&points, 0.01).unwrap();
/// assert_eq!(
///     simplified,
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(2.0, 0.0),
///         Point2::new(3.0, 10.0),
///         Point2::new(4.0, 0.0),
///     ]
/// );
/// ```
pub fn simplify<F: Float>(
    points: &[Point2<F>],
    min_tolerated_dist: F,
) -> Result<Vec<Point2<F>>> {
    let indices = simplify_indices(points, min_tolerated_dist)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// Useful when the points carry associated data (timestamps, pressure)
/// that must follow the simplification.
///
/// # Errors
///
/// Same conditions as [`simplify`].
pub fn simplify_indices<F: Float>(
    points: &[Point2<F>],
    min_tolerated_dist: F,
) -> Result<Vec<usize>> {
    if min_tolerated_dist.is_nan() || min_tolerated_dist < F::zero() {
        return Err(StippleError::invalid(
            "min_tolerated_dist",
            "must be a non-negative distance",
        ));
    }

    let n = points.len();
    if n <= 2 {
        return Ok((0..n).collect());
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end - start <= 1 {
            continue;
        }

        let (line_start, line_end) = (points[start], points[end]);
        let mut max_dist = F::neg_infinity();
        let mut max_idx = start + 1;

        // Strict comparison keeps the earliest of equal maxima
        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = perpendicular_distance(line_start, line_end, p);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist >= min_tolerated_dist {
            keep[max_idx] = true;
            stack.push((start, max_idx));
            stack.push((max_idx, end));
        }
    }

    let indices: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect();

    log::trace!(
        "rdp: kept {} of {} points at tolerance {:?}",
        indices.len(),
        n,
        min_tolerated_dist.to_f64()
    );

    Ok(indices)
}

/// Distance from `p` to the infinite line through `line_start` and `line_end`.
///
/// Returns zero when the two line points coincide.
pub fn perpendicular_distance<F: Float>(
    line_start: Point2<F>,
    line_end: Point2<F>,
    p: Point2<F>,
) -> F {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    let denom = (dy * dy + dx * dx).sqrt();
    if denom == F::zero() {
        return F::zero();
    }

    let numerator =
        (dy * p.x - dx * p.y + line_end.x * line_start.y - line_end.y * line_start.x).abs();
    numerator / denom
}
