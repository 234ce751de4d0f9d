//! Floating-point geometric primitives shared by every algorithm.

mod point2;
mod rect;

pub use point2::Point2;
pub use rect::Rect;
