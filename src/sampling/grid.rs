//! Background acceleration grid for Poisson disc sampling.
//!
//! The grid covers the sampling rectangle with square cells of width
//! `margin / sqrt(2)`. A cell's diagonal is then exactly `margin`, so two
//! accepted points can never share a cell and each slot holds at most one
//! point index.

use crate::primitives::{Point2, Rect};
use num_traits::Float;

/// Inclusive range of rows and columns touched by a neighbourhood query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellSpan {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

/// A fixed-size row-major grid of optional point indices.
#[derive(Debug, Clone)]
pub(crate) struct CellGrid<F> {
    origin: Point2<F>,
    cell_width: F,
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl<F: Float> CellGrid<F> {
    /// Creates an empty grid covering `bounds`.
    pub fn new(bounds: Rect<F>, cell_width: F, rows: usize, cols: usize) -> Self {
        Self {
            origin: Point2::new(bounds.left, bounds.top),
            cell_width,
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of cells needed to cover `extent`, never less than one.
    pub fn cells_along(extent: F, cell_width: F) -> usize {
        (extent / cell_width).ceil().to_usize().unwrap_or(1).max(1)
    }

    /// Returns the `(row, col)` of the cell containing `p`.
    ///
    /// Coordinates are truncated toward zero and clamped to the grid, so a
    /// point rounding onto the far edge still lands in the last cell.
    pub fn cell_of(&self, p: Point2<F>) -> (usize, usize) {
        let row = self.axis_index(p.y - self.origin.y, self.rows);
        let col = self.axis_index(p.x - self.origin.x, self.cols);
        (row, col)
    }

    /// Cells overlapping the square of half-width `radius` centred on `p`.
    pub fn span_around(&self, p: Point2<F>, radius: F) -> CellSpan {
        CellSpan {
            min_row: self.axis_index(p.y - radius - self.origin.y, self.rows),
            max_row: self.axis_index(p.y + radius - self.origin.y, self.rows),
            min_col: self.axis_index(p.x - radius - self.origin.x, self.cols),
            max_col: self.axis_index(p.x + radius - self.origin.x, self.cols),
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied().flatten()
    }

    /// Stores point index `idx` in the cell containing `p`.
    pub fn insert(&mut self, p: Point2<F>, idx: usize) {
        let (row, col) = self.cell_of(p);
        if let Some(slot) = self.cells.get_mut(row * self.cols + col) {
            *slot = Some(idx);
        }
    }

    /// Iterates over the point indices stored in `span`, row by row.
    pub fn occupants(&self, span: CellSpan) -> impl Iterator<Item = usize> + '_ {
        (span.min_row..=span.max_row).flat_map(move |row| {
            (span.min_col..=span.max_col).filter_map(move |col| self.get(row, col))
        })
    }

    fn axis_index(&self, offset: F, len: usize) -> usize {
        let cell = (offset / self.cell_width).trunc();
        if cell <= F::zero() {
            return 0;
        }
        cell.to_usize()
            .unwrap_or(usize::MAX)
            .min(len.saturating_sub(1))
    }
}
