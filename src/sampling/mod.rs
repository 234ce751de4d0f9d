//! Blue-noise point sampling.

mod grid;
mod poisson;
mod random;

pub use poisson::{
    poisson_disc, poisson_disc_with_seed, DiscSampler, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED,
};
pub use random::RandomSource;
