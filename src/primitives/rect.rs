//! Axis-aligned sampling rectangle.

use super::Point2;
use num_traits::Float;

/// A half-open rectangle `[left, right) × [top, bottom)`.
///
/// The y axis grows downwards, as in image space: `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<F> {
    pub left: F,
    pub right: F,
    pub top: F,
    pub bottom: F,
}

impl<F: Float> Rect<F> {
    /// Creates a rectangle from its four bounds.
    #[inline]
    pub fn new(left: F, right: F, top: F, bottom: F) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates the rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn from_size(width: F, height: F) -> Self {
        Self::new(F::zero(), width, F::zero(), height)
    }

    #[inline]
    pub fn width(&self) -> F {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> F {
        self.bottom - self.top
    }

    /// Returns `true` if every bound is finite and both extents are positive.
    pub fn is_valid(&self) -> bool {
        let finite = self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite();
        finite && self.right > self.left && self.bottom > self.top
    }

    /// Tests containment: inclusive on left/top, exclusive on right/bottom.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// Pulls a point that rounded onto or past the right/bottom edge back
    /// inside the half-open rectangle. Points already inside are unchanged.
    pub fn clamp_inside(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            below_bound(p.x, self.left, self.right),
            below_bound(p.y, self.top, self.bottom),
        )
    }
}

/// Steps `v` strictly below the exclusive `hi`, never below `lo`.
fn below_bound<F: Float>(v: F, lo: F, hi: F) -> F {
    if v < hi {
        return v.max(lo);
    }
    let stepped = hi - hi.abs().max(F::one()) * F::epsilon();
    if stepped >= lo {
        stepped
    } else {
        lo
    }
}
