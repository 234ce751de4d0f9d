//! Poisson disc sampling.
//!
//! Generates blue noise point distributions where no two points are closer
//! than a specified margin, using Bridson's fast algorithm over a background
//! grid.
//!
//! The frontier is a stack: the most recently accepted point is expanded
//! first, which grows the fill depth-first. A single expansion pass keeps
//! running for its whole attempt budget and may accept several neighbours.

use super::grid::CellGrid;
use super::random::RandomSource;
use crate::error::{Result, StippleError};
use crate::primitives::{Point2, Rect};
use num_traits::Float;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Attempts per active point used by [`poisson_disc`] (Bridson's `k`).
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Seed used by [`poisson_disc`].
pub const DEFAULT_SEED: u64 = 0x5EED_B1E5;

/// Generates a Poisson disc sample with [`DEFAULT_SEED`].
///
/// # Example
///
/// ```
/// use stipple::sampling::poisson_disc;
/// use stipple::Rect;
///
/// let points = poisson_disc(1.0, Rect::from_size(10.0, 10.0), 30).unwrap();
///
/// for i in 0..points.len() {
///     for j in (i + 1)..points.len() {
///         assert!(points[i].distance(points[j]) >= 1.0 - 1e-9);
///     }
/// }
/// ```
pub fn poisson_disc<F: Float>(
    margin: F,
    bounds: Rect<F>,
    max_attempts: usize,
) -> Result<Vec<Point2<F>>> {
    poisson_disc_with_seed(margin, bounds, max_attempts, DEFAULT_SEED)
}

/// Generates a Poisson disc sample driven by a `Pcg64` seeded with `seed`.
///
/// The same seed and parameters always give the same points in the same order.
pub fn poisson_disc_with_seed<F: Float>(
    margin: F,
    bounds: Rect<F>,
    max_attempts: usize,
    seed: u64,
) -> Result<Vec<Point2<F>>> {
    let sampler = DiscSampler::from_rect(margin, bounds)?;
    let mut rng = Pcg64::seed_from_u64(seed);
    Ok(sampler.generate(max_attempts, &mut rng))
}

/// A Poisson disc sampler over a fixed rectangle.
///
/// Construction validates the parameters and derives the grid geometry.
/// [`generate`](Self::generate) takes `&self`, so one sampler can serve any
/// number of runs with different random sources.
#[derive(Debug, Clone)]
pub struct DiscSampler<F> {
    margin: F,
    bounds: Rect<F>,
    cell_width: F,
    rows: usize,
    cols: usize,
}

impl<F: Float> DiscSampler<F> {
    /// Creates a sampler for `[left_x, right_x) × [top_y, bot_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`StippleError::InvalidParameter`] if `margin` is not a
    /// positive finite number, or if the rectangle is empty, inverted or has
    /// non-finite bounds.
    pub fn new(margin: F, left_x: F, right_x: F, top_y: F, bot_y: F) -> Result<Self> {
        Self::from_rect(margin, Rect::new(left_x, right_x, top_y, bot_y))
    }

    /// Creates a sampler over `bounds`. See [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new).
    pub fn from_rect(margin: F, bounds: Rect<F>) -> Result<Self> {
        if !(margin > F::zero()) || !margin.is_finite() {
            return Err(StippleError::invalid(
                "margin",
                "must be a positive finite distance",
            ));
        }
        if !bounds.is_valid() {
            return Err(StippleError::invalid(
                "bounds",
                "rectangle must be finite with right > left and bottom > top",
            ));
        }

        // Cell diagonal equals the margin, so one point per cell at most
        let cell_width = margin / F::from(std::f64::consts::SQRT_2).unwrap_or_else(F::one);
        let rows = CellGrid::cells_along(bounds.height(), cell_width);
        let cols = CellGrid::cells_along(bounds.width(), cell_width);

        Ok(Self {
            margin,
            bounds,
            cell_width,
            rows,
            cols,
        })
    }

    #[inline]
    pub fn margin(&self) -> F {
        self.margin
    }

    #[inline]
    pub fn bounds(&self) -> Rect<F> {
        self.bounds
    }

    #[inline]
    pub fn cell_width(&self) -> F {
        self.cell_width
    }

    /// Grid dimensions as `(rows, cols)`.
    #[inline]
    pub fn grid_dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Fills the rectangle with points at least `margin` apart.
    ///
    /// Draws two values for the seed point (x, then y) and two per attempt
    /// (angle, then magnitude in `[margin, 2·margin)`). With
    /// `max_attempts == 0` only the seed point is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_pcg::Pcg64;
    /// use stipple::DiscSampler;
    ///
    /// let sampler = DiscSampler::new(1.0, 0.0, 10.0, 0.0, 10.0).unwrap();
    /// let mut rng = Pcg64::seed_from_u64(42);
    /// let points = sampler.generate(30, &mut rng);
    /// assert!(points.len() > 20);
    /// ```
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        max_attempts: usize,
        rng: &mut R,
    ) -> Vec<Point2<F>> {
        let mut grid = CellGrid::new(self.bounds, self.cell_width, self.rows, self.cols);
        let mut points: Vec<Point2<F>> = Vec::new();
        let mut active: Vec<usize> = Vec::new();
        let mut passes = 0usize;

        // `left + u·width` can round onto the excluded edge for u close to 1
        let seed = self.bounds.clamp_inside(Point2::new(
            self.bounds.left + self.draw(rng) * self.bounds.width(),
            self.bounds.top + self.draw(rng) * self.bounds.height(),
        ));
        grid.insert(seed, 0);
        points.push(seed);
        active.push(0);

        let two_pi = F::from(std::f64::consts::TAU).unwrap_or_else(F::zero);

        while let Some(current) = active.pop() {
            passes += 1;
            let center = points[current];
            let mut found_new_point = false;

            for _ in 0..max_attempts {
                let theta = self.draw(rng) * two_pi;
                let magnitude = self.margin + self.draw(rng) * self.margin;
                let candidate = center.polar_offset(theta, magnitude);

                if !self.bounds.contains(candidate) {
                    continue;
                }
                if self.collides(&grid, &points, candidate, current) {
                    continue;
                }

                let idx = points.len();
                grid.insert(candidate, idx);
                points.push(candidate);
                active.push(idx);
                found_new_point = true;
            }

            if found_new_point {
                active.push(current);
            }
        }

        log::debug!(
            "poisson disc: {} points on a {}x{} grid after {} passes",
            points.len(),
            self.rows,
            self.cols,
            passes
        );

        points
    }

    /// Returns `true` if a stored point other than `center_idx` lies within
    /// `margin` of `candidate`.
    fn collides(
        &self,
        grid: &CellGrid<F>,
        points: &[Point2<F>],
        candidate: Point2<F>,
        center_idx: usize,
    ) -> bool {
        let span = grid.span_around(candidate, self.margin);
        let margin_sq = self.margin * self.margin;

        grid.occupants(span)
            .filter(|&idx| idx != center_idx)
            .any(|idx| points[idx].distance_squared(candidate) < margin_sq)
    }

    /// Next uniform value converted to `F`, kept below one after rounding.
    #[inline]
    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> F {
        let u = F::from(rng.next_unit()).unwrap_or_else(F::zero);
        if u >= F::one() {
            F::one() - F::epsilon()
        } else {
            u
        }
    }
}
