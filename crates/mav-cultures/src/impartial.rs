//! The p-impartial culture: fully independent approvals.

use mav_election::Election;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{check_probability, rng_from};

/// Configuration for the p-IC sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpartialConfig {
    /// Number of voters.
    pub n_voters: usize,
    /// Candidate count per issue.
    pub candidates_per_issue: Vec<usize>,
    /// Approval probability for every entry.
    pub p: f64,
    /// Seed for reproducibility; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl ImpartialConfig {
    /// p-IC with the conventional p = 0.5.
    pub fn new(n_voters: usize, candidates_per_issue: Vec<usize>) -> Self {
        Self {
            n_voters,
            candidates_per_issue,
            p: 0.5,
            seed: None,
        }
    }
}

/// Samples an election where every (voter, issue, candidate) approval
/// is an independent Bernoulli(p) draw.
pub fn sample_impartial(cfg: &ImpartialConfig) -> Result<Election> {
    check_probability("p", cfg.p)?;
    let mut rng = rng_from(cfg.seed);
    let elec = Election::from_fn(cfg.n_voters, cfg.candidates_per_issue.clone(), |_, _, _| {
        rng.gen_bool(cfg.p)
    })?;
    Ok(elec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_matches_config() {
        let cfg = ImpartialConfig {
            seed: Some(7),
            ..ImpartialConfig::new(6, vec![2, 3, 2])
        };
        let elec = sample_impartial(&cfg).unwrap();
        assert_eq!(elec.n_voters(), 6);
        assert_eq!(elec.candidates_per_issue(), &[2, 3, 2]);
    }

    #[test]
    fn test_seed_reproducibility() {
        let cfg = ImpartialConfig {
            seed: Some(42),
            ..ImpartialConfig::new(8, vec![2, 2])
        };
        assert_eq!(sample_impartial(&cfg).unwrap(), sample_impartial(&cfg).unwrap());
    }

    #[test]
    fn test_extreme_probabilities() {
        let all = ImpartialConfig {
            p: 1.0,
            seed: Some(0),
            ..ImpartialConfig::new(3, vec![2])
        };
        let elec = sample_impartial(&all).unwrap();
        assert_eq!(elec.approval_count(0, 0), 3);
        assert_eq!(elec.approval_count(0, 1), 3);

        let none = ImpartialConfig { p: 0.0, ..all };
        let elec = sample_impartial(&none).unwrap();
        assert_eq!(elec.approval_count(0, 0), 0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let cfg = ImpartialConfig {
            p: 1.5,
            ..ImpartialConfig::new(3, vec![2])
        };
        assert!(sample_impartial(&cfg).is_err());
    }
}
