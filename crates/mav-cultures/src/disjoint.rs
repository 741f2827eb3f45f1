//! The disjoint-groups culture: bloc voting with per-group favorites.

use mav_election::Election;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CultureError, Result};
use crate::{check_probability, rng_from};

/// Configuration for the disjoint-groups sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisjointConfig {
    /// Number of voters.
    pub n_voters: usize,
    /// Candidate count per issue.
    pub candidates_per_issue: Vec<usize>,
    /// Number of equal-size groups. Leftover voters beyond
    /// `n_groups * (n_voters / n_groups)` approve nothing.
    pub n_groups: usize,
    /// Probability a group member approves the group favorite.
    pub p: f64,
    /// Seed for reproducibility; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl DisjointConfig {
    /// Disjoint culture with the conventional p = 0.5.
    pub fn new(n_voters: usize, candidates_per_issue: Vec<usize>, n_groups: usize) -> Self {
        Self {
            n_voters,
            candidates_per_issue,
            n_groups,
            p: 0.5,
            seed: None,
        }
    }
}

/// Samples an election where the electorate splits into disjoint
/// groups; on each issue every group draws one favorite candidate
/// uniformly, and each member approves that favorite with
/// probability p (and nothing else).
pub fn sample_disjoint(cfg: &DisjointConfig) -> Result<Election> {
    check_probability("p", cfg.p)?;
    if cfg.n_groups == 0 {
        return Err(CultureError::NoGroups);
    }
    // Favorite drawing below needs a nonempty candidate range; surface
    // the shape error before touching the RNG.
    if let Some(issue) = cfg.candidates_per_issue.iter().position(|&m| m == 0) {
        return Err(mav_election::ElectionError::EmptyIssue { issue }.into());
    }
    let mut rng = rng_from(cfg.seed);
    let group_size = cfg.n_voters / cfg.n_groups;

    // One favorite per (issue, group), drawn up front.
    let favorites: Vec<Vec<usize>> = cfg
        .candidates_per_issue
        .iter()
        .map(|&m| (0..cfg.n_groups).map(|_| rng.gen_range(0..m)).collect())
        .collect();

    let elec = Election::from_fn(cfg.n_voters, cfg.candidates_per_issue.clone(), |v, i, c| {
        if group_size == 0 {
            return false;
        }
        let group = v / group_size;
        group < cfg.n_groups && favorites[i][group] == c && rng.gen_bool(cfg.p)
    })?;
    Ok(elec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_only_approve_group_favorite() {
        let cfg = DisjointConfig {
            p: 1.0,
            seed: Some(5),
            ..DisjointConfig::new(6, vec![3, 3], 2)
        };
        let elec = sample_disjoint(&cfg).unwrap();
        // With p = 1 every voter approves exactly one candidate per
        // issue, and voters in the same group approve the same one.
        for i in 0..elec.n_issues() {
            for v in 0..6 {
                let approved: Vec<usize> = (0..elec.candidates_on(i))
                    .filter(|&c| elec.approves(v, i, c))
                    .collect();
                assert_eq!(approved.len(), 1);
            }
            for g in 0..2 {
                let first = g * 3;
                for v in first..first + 3 {
                    for c in 0..elec.candidates_on(i) {
                        assert_eq!(elec.approves(v, i, c), elec.approves(first, i, c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_leftover_voters_approve_nothing() {
        // 7 voters, 3 groups: group size 2, voter 6 is leftover.
        let cfg = DisjointConfig {
            p: 1.0,
            seed: Some(9),
            ..DisjointConfig::new(7, vec![2], 3)
        };
        let elec = sample_disjoint(&cfg).unwrap();
        assert!(!elec.approves(6, 0, 0));
        assert!(!elec.approves(6, 0, 1));
    }

    #[test]
    fn test_rejects_zero_groups() {
        let cfg = DisjointConfig::new(4, vec![2], 0);
        assert!(matches!(sample_disjoint(&cfg), Err(CultureError::NoGroups)));
    }

    #[test]
    fn test_seed_reproducibility() {
        let cfg = DisjointConfig {
            seed: Some(13),
            ..DisjointConfig::new(8, vec![2, 3], 4)
        };
        assert_eq!(sample_disjoint(&cfg).unwrap(), sample_disjoint(&cfg).unwrap());
    }
}
