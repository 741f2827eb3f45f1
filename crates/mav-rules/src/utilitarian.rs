//! Sequential utilitarian rule.

use mav_election::{Election, Outcome};

use crate::argmax_first;

/// Sequential utilitarian: on each issue, the winner is the candidate
/// with the maximum number of approving voters, lowest index on ties.
///
/// Infallible: the election invariants guarantee at least one
/// candidate per issue, and the rule takes no parameters.
pub fn sequential_utilitarian(elec: &Election) -> Outcome {
    let winners = (0..elec.n_issues())
        .map(|issue| {
            let scores: Vec<f64> = (0..elec.candidates_on(issue))
                .map(|c| elec.approval_count(issue, c) as f64)
                .collect();
            argmax_first(&scores)
        })
        .collect();
    Outcome::new(winners)
}
