//! Tagged culture configuration.
//!
//! Orchestration names cultures through [`CultureConfig`], a tagged
//! enum over the individual sampler configurations, mirroring the
//! rule-descriptor pattern: no stringly-typed sampler lookup inside
//! the core.

use std::fmt;

use mav_election::Election;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{add_hamming_noise, sample_disjoint, sample_impartial, sample_resampling};
use crate::{DisjointConfig, ImpartialConfig, ResamplingConfig};

/// SplitMix64 step. Fans one sweep seed out into distinct per-stage
/// streams: the base culture and the noise pass must never draw from
/// the same RNG sequence, or the flips become correlated with the
/// entries they perturb (at `noise_prob == p` a shared stream flips
/// every set entry and the sample collapses to all zeros).
fn split_seed(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// One fully-specified population model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "culture", rename_all = "kebab-case")]
pub enum CultureConfig {
    /// p-impartial culture.
    Impartial(ImpartialConfig),
    /// Resampling around a shared base ballot.
    Resampling(ResamplingConfig),
    /// Disjoint bloc groups.
    Disjoint(DisjointConfig),
    /// Any base culture with Hamming noise applied on top.
    Noisy {
        /// The base culture to perturb.
        base: Box<CultureConfig>,
        /// Per-entry flip probability.
        noise_prob: f64,
        /// Seed for the noise pass; entropy-seeded when absent.
        seed: Option<u64>,
    },
}

impl CultureConfig {
    /// Samples one election from this model.
    pub fn sample(&self) -> Result<Election> {
        match self {
            Self::Impartial(cfg) => sample_impartial(cfg),
            Self::Resampling(cfg) => sample_resampling(cfg),
            Self::Disjoint(cfg) => sample_disjoint(cfg),
            Self::Noisy {
                base,
                noise_prob,
                seed,
            } => {
                let elec = base.sample()?;
                add_hamming_noise(&elec, *noise_prob, *seed)
            }
        }
    }

    /// Returns this configuration with every seed replaced, for
    /// sweeping one model across a range of seeds.
    #[must_use]
    pub fn with_seed(&self, seed: u64) -> Self {
        let mut cfg = self.clone();
        match &mut cfg {
            Self::Impartial(c) => c.seed = Some(seed),
            Self::Resampling(c) => c.seed = Some(seed),
            Self::Disjoint(c) => c.seed = Some(seed),
            Self::Noisy {
                base, seed: noise, ..
            } => {
                // Separate streams for the noise pass and the base, and
                // a further split for each nesting level.
                *noise = Some(split_seed(seed));
                *base = Box::new(base.with_seed(split_seed(split_seed(seed))));
            }
        }
        cfg
    }

    /// Culture identifiers understood by the CLI, for help output.
    pub fn identifiers() -> &'static [&'static str] {
        &["p-ic", "resampling", "disjoint"]
    }
}

impl fmt::Display for CultureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Impartial(_) => write!(f, "p-ic"),
            Self::Resampling(_) => write!(f, "resampling"),
            Self::Disjoint(_) => write!(f, "disjoint"),
            Self::Noisy { base, .. } => write!(f, "noisy-{base}"),
        }
    }
}
