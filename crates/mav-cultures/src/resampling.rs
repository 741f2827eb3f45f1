//! The resampling culture: correlated perturbations of a base ballot.

use mav_election::Election;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{check_probability, rng_from};

/// Configuration for the resampling sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResamplingConfig {
    /// Number of voters.
    pub n_voters: usize,
    /// Candidate count per issue.
    pub candidates_per_issue: Vec<usize>,
    /// Approval probability for the base ballot and for resampled
    /// entries.
    pub p: f64,
    /// Correlation coefficient: the probability a voter keeps a base
    /// entry instead of resampling it.
    pub phi: f64,
    /// Seed for reproducibility; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl ResamplingConfig {
    /// Resampling with the conventional p = phi = 0.5.
    pub fn new(n_voters: usize, candidates_per_issue: Vec<usize>) -> Self {
        Self {
            n_voters,
            candidates_per_issue,
            p: 0.5,
            phi: 0.5,
            seed: None,
        }
    }
}

/// Samples an election where one base ballot is drawn per issue
/// (Bernoulli(p) per candidate) and each voter independently keeps
/// each base entry with probability phi, resampling Bernoulli(p)
/// otherwise.
///
/// At phi = 1 every voter casts the base ballot; at phi = 0 this
/// degenerates to p-IC.
pub fn sample_resampling(cfg: &ResamplingConfig) -> Result<Election> {
    check_probability("p", cfg.p)?;
    check_probability("phi", cfg.phi)?;
    let mut rng = rng_from(cfg.seed);

    // Base ballot, one slot per (issue, candidate).
    let base: Vec<Vec<bool>> = cfg
        .candidates_per_issue
        .iter()
        .map(|&m| (0..m).map(|_| rng.gen_bool(cfg.p)).collect())
        .collect();

    let elec = Election::from_fn(cfg.n_voters, cfg.candidates_per_issue.clone(), |_, i, c| {
        if rng.gen_bool(cfg.phi) {
            base[i][c]
        } else {
            rng.gen_bool(cfg.p)
        }
    })?;
    Ok(elec)
}
