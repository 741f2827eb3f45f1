//! Parametric OWA family: ordered weighted averages over sorted
//! per-voter satisfaction.
//!
//! The weight vector α has `n - x` leading ones followed by the
//! geometric tail `1/(kn), 1/(kn)^2, ...` (k = issues, n = voters).
//! Dotting α with the ascending-sorted satisfaction vector yields the
//! candidate's score: at `x = 0` this is plain utilitarian, and at
//! `x = n - 1` the huge weight gap gives strict priority to the
//! worst-off voter (the leximin limit).

use mav_election::{Election, Outcome};

use crate::argmax_first;
use crate::error::{Result, RuleError};

/// Builds the nonincreasing OWA weight vector α of length `n_voters`:
/// `n_voters - x` ones, then the geometric tail `(kn)^-1 .. (kn)^-x`.
///
/// # Errors
///
/// Rejects `x` outside `[0, n_voters - 1]`.
pub fn owa_weights(n_voters: usize, n_issues: usize, x: usize) -> Result<Vec<f64>> {
    let max = n_voters.saturating_sub(1);
    if x > max {
        return Err(RuleError::OwaOutOfRange { x, max });
    }
    let mut alpha = vec![1.0; n_voters];
    let base = (n_issues * n_voters) as f64;
    for (t, weight) in alpha.iter_mut().skip(n_voters - x).enumerate() {
        *weight = base.powi(-(t as i32 + 1));
    }
    Ok(alpha)
}

/// Per-voter satisfaction over a decided winner prefix: the number of
/// decided issues whose winner the voter approved.
fn satisfaction(elec: &Election, winners: &[usize]) -> Vec<usize> {
    (0..elec.n_voters())
        .map(|voter| {
            winners
                .iter()
                .enumerate()
                .filter(|&(issue, &w)| elec.approves(voter, issue, w))
                .count()
        })
        .collect()
}

/// OWA score of a satisfaction vector: sort ascending, dot with α.
fn owa_score(mut sat: Vec<usize>, alpha: &[f64]) -> f64 {
    sat.sort_unstable();
    sat.iter()
        .zip(alpha)
        .map(|(&s, &a)| s as f64 * a)
        .sum()
}

/// Sequential α-OWA rule with parameter `x ∈ [0, n_voters - 1]`.
///
/// Per issue, each candidate is scored on the hypothetical committee
/// "decided winners so far plus this candidate": satisfaction is
/// recomputed from that full winner sequence, sorted, and dotted with
/// α. The maximizing candidate wins, lowest index on ties.
pub fn owa_rule(elec: &Election, x: usize) -> Result<Outcome> {
    let alpha = owa_weights(elec.n_voters(), elec.n_issues(), x)?;

    let mut winners: Vec<usize> = Vec::with_capacity(elec.n_issues());
    for issue in 0..elec.n_issues() {
        let mut scores = vec![0.0; elec.candidates_on(issue)];
        for (candidate, score) in scores.iter_mut().enumerate() {
            let mut tentative = winners.clone();
            tentative.push(candidate);
            *score = owa_score(satisfaction(elec, &tentative), &alpha);
        }
        winners.push(argmax_first(&scores));
    }

    Ok(Outcome::new(winners))
}

/// Convenience case `x = n_voters - 1`: the leximin limit of the
/// family, giving strict priority to the minimum satisfaction.
pub fn leximin_owa(elec: &Election) -> Result<Outcome> {
    owa_rule(elec, elec.n_voters().saturating_sub(1))
}

/// Convenience case `x = 0`: all-ones weights, utilitarian selection.
pub fn utilitarian_owa(elec: &Election) -> Result<Outcome> {
    owa_rule(elec, 0)
}
