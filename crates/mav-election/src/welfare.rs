//! Welfare metrics over an election/outcome pair.
//!
//! Reporting metrics only: no voting rule and no part of the detector
//! consumes these. Utility of a voter is the number of issues whose
//! realized winner the voter approved.

use serde::{Deserialize, Serialize};

use crate::election::Election;
use crate::outcome::Outcome;

/// Utility of a single voter under an outcome: the number of issues
/// where the voter approves the realized winner.
pub fn voter_utility(elec: &Election, outcome: &Outcome, voter: usize) -> usize {
    outcome
        .winners()
        .iter()
        .enumerate()
        .filter(|&(issue, &winner)| elec.approves(voter, issue, winner))
        .count()
}

/// Aggregate welfare of an outcome under three classic objectives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelfareSummary {
    /// Sum of all voters' utilities.
    pub utilitarian: f64,
    /// Minimum utility across voters.
    pub egalitarian: f64,
    /// n-th root of the product of (1 + utility) across voters. The +1
    /// offset keeps the product nonzero when a voter approves nothing
    /// that was selected.
    pub nash: f64,
}

impl WelfareSummary {
    /// Computes all three metrics. Every metric is 0.0 for the
    /// degenerate zero-voter election.
    pub fn compute(elec: &Election, outcome: &Outcome) -> Self {
        let n = elec.n_voters();
        if n == 0 {
            return Self {
                utilitarian: 0.0,
                egalitarian: 0.0,
                nash: 0.0,
            };
        }
        let utilities: Vec<usize> = (0..n).map(|v| voter_utility(elec, outcome, v)).collect();
        let utilitarian = utilities.iter().sum::<usize>() as f64;
        let egalitarian = utilities.iter().copied().min().unwrap_or(0) as f64;
        let product: f64 = utilities.iter().map(|&u| (1 + u) as f64).product();
        let nash = product.powf(1.0 / n as f64);
        Self {
            utilitarian,
            egalitarian,
            nash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_issue_election() -> Election {
        // 3 voters, 2 issues, 2 candidates each.
        // Voter 0 approves candidate 0 on both issues, voter 1 only on
        // issue 0, voter 2 approves nothing that wins below.
        Election::new(
            3,
            vec![2, 2],
            vec![
                1, 0, 1, 0, // voter 0
                1, 0, 0, 1, // voter 1
                0, 1, 0, 1, // voter 2
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_voter_utility_counts_approved_winners() {
        let elec = two_issue_election();
        let out = Outcome::new(vec![0, 0]);
        assert_eq!(voter_utility(&elec, &out, 0), 2);
        assert_eq!(voter_utility(&elec, &out, 1), 1);
        assert_eq!(voter_utility(&elec, &out, 2), 0);
    }

    #[test]
    fn test_welfare_summary() {
        let elec = two_issue_election();
        let out = Outcome::new(vec![0, 0]);
        let w = WelfareSummary::compute(&elec, &out);
        assert_eq!(w.utilitarian, 3.0);
        assert_eq!(w.egalitarian, 0.0);
        // (1+2)(1+1)(1+0) = 6, cube root of 6
        assert!((w.nash - 6.0_f64.powf(1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_welfare_zero_voters() {
        let elec = Election::new(0, vec![2], vec![]).unwrap();
        let w = WelfareSummary::compute(&elec, &Outcome::new(vec![0]));
        assert_eq!(w.utilitarian, 0.0);
        assert_eq!(w.egalitarian, 0.0);
        assert_eq!(w.nash, 0.0);
    }
}
