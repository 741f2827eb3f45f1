//! Sequential Thiele family, parameterized by a decay exponent.
//!
//! Each voter carries a support count: the number of already-decided
//! issues whose winner they approved. A voter's marginal contribution
//! to a candidate decays with that count, so voters who already got
//! their way weigh less on later issues. The decay exponent
//! interpolates between utilitarian (0), proportional approval voting
//! (1), and Chamberlin–Courant-like behavior (large exponents, where
//! only a voter's first represented issue counts).

use mav_election::{Election, Outcome};

use crate::argmax_first;
use crate::error::{Result, RuleError};

/// Builds the Thiele weight vector `w[i]` of the given length:
/// all ones at `decay = 0`, otherwise `1 / (i + 1)^decay`.
///
/// # Errors
///
/// Rejects a decay exponent that is negative, NaN, or infinite.
pub fn thiele_weights(decay: f64, len: usize) -> Result<Vec<f64>> {
    if !decay.is_finite() || decay < 0.0 {
        return Err(RuleError::InvalidDecay { decay });
    }
    if decay == 0.0 {
        Ok(vec![1.0; len])
    } else {
        Ok((0..len).map(|i| ((i + 1) as f64).powf(-decay)).collect())
    }
}

/// Sequential Thiele rule with the given decay exponent.
///
/// Per issue, each candidate's score is the sum over approving voters
/// of `w[min(support, W-1)]`; the maximizing candidate wins (lowest
/// index on ties) and the support count of every voter who approved
/// the winner increases by one.
pub fn sequential_thiele(elec: &Election, decay: f64) -> Result<Outcome> {
    // Support is bounded by the number of issues, so W = n_issues.
    let weights = thiele_weights(decay, elec.n_issues())?;
    let clamp = weights.len() - 1;

    let mut support = vec![0usize; elec.n_voters()];
    let mut winners = Vec::with_capacity(elec.n_issues());

    for issue in 0..elec.n_issues() {
        let mut scores = vec![0.0; elec.candidates_on(issue)];
        for voter in 0..elec.n_voters() {
            let marginal = weights[support[voter].min(clamp)];
            for (candidate, score) in scores.iter_mut().enumerate() {
                if elec.approves(voter, issue, candidate) {
                    *score += marginal;
                }
            }
        }
        let chosen = argmax_first(&scores);
        for (voter, count) in support.iter_mut().enumerate() {
            if elec.approves(voter, issue, chosen) {
                *count += 1;
            }
        }
        winners.push(chosen);
    }

    Ok(Outcome::new(winners))
}

/// Sequential proportional approval voting: Thiele with harmonic
/// weights (decay 1).
pub fn sequential_pav(elec: &Election) -> Result<Outcome> {
    sequential_thiele(elec, 1.0)
}

/// Chamberlin–Courant approximation: Thiele with a large decay, so
/// only a voter's first represented issue contributes meaningfully.
pub fn sequential_cc(elec: &Election) -> Result<Outcome> {
    sequential_thiele(elec, 1000.0)
}
