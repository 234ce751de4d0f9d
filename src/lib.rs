//! stipple - Geometric building blocks for generative art
//!
//! Two spatial algorithms sit at the core of this crate:
//!
//! - [`DiscSampler`] fills a rectangle with blue noise: points no closer than
//!   a minimum margin, grown depth-first with Bridson's algorithm.
//! - [`simplify`] thins a dense polyline with Ramer-Douglas-Peucker while
//!   keeping every dropped point within a tolerance of its chord.
//!
//! [`polygon_contains`] rounds things out with an even-odd containment test,
//! handy for masking sampled points to a shape.
//!
//! Everything is single-threaded and deterministic for a given random source.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//! use stipple::{polygon_contains, simplify, DiscSampler, Point2};
//!
//! let sampler = DiscSampler::new(0.5, 0.0, 10.0, 0.0, 10.0).unwrap();
//! let points = sampler.generate(30, &mut Pcg64::seed_from_u64(1));
//!
//! let triangle = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(5.0, 9.0),
//! ];
//! let masked: Vec<_> = points
//!     .into_iter()
//!     .filter(|&p| polygon_contains(&triangle, p))
//!     .collect();
//! assert!(!masked.is_empty());
//!
//! let path: Vec<_> = (0..100)
//!     .map(|i| Point2::new(i as f64 * 0.1, (i as f64 * 0.1).sin()))
//!     .collect();
//! let thinned = simplify(&path, 0.01).unwrap();
//! assert!(thinned.len() < path.len());
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod sampling;
pub mod simplify;

pub use error::{Result, StippleError};
pub use polygon::polygon_contains;
pub use primitives::{Point2, Rect};
pub use sampling::{poisson_disc, poisson_disc_with_seed, DiscSampler, RandomSource};
pub use simplify::{simplify, simplify_indices};
