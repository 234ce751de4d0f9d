//! Polygon predicates.

mod contains;

pub use contains::polygon_contains;
