//! Polyline simplification.

mod rdp;

pub use rdp::{perpendicular_distance, simplify, simplify_indices};
