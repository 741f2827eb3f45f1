//! # Statistical Cultures
//!
//! Samplers producing synthetic [`Election`]s under standard
//! population models:
//!
//! - **p-IC** (impartial culture): every approval i.i.d. Bernoulli(p).
//! - **Resampling**: voters perturb a shared base ballot, with a
//!   correlation coefficient controlling how much they keep.
//! - **Disjoint groups**: the electorate splits into blocs, each with
//!   its own favorite candidate per issue.
//! - **Hamming noise**: wraps any base culture and flips each entry
//!   with a fixed probability.
//!
//! Every sampler takes an optional seed for reproducibility; the same
//! configuration with the same seed yields the same election. The core
//! analysis accepts any election satisfying the tensor invariants
//! regardless of which sampler produced it.

mod config;
mod disjoint;
mod error;
mod impartial;
mod noise;
mod resampling;

pub use config::CultureConfig;
pub use disjoint::{sample_disjoint, DisjointConfig};
pub use error::{CultureError, Result};
pub use impartial::{sample_impartial, ImpartialConfig};
pub use noise::add_hamming_noise;
pub use resampling::{sample_resampling, ResamplingConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG for a sampler run: seeded deterministically when a seed is
/// given, from OS entropy otherwise.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Rejects a probability outside `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CultureError::InvalidProbability { name, value })
    }
}
