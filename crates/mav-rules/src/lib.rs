//! # Sequential Voting Rules
//!
//! The voting-rule family evaluated by the free-riding analysis: pure,
//! deterministic functions from an [`Election`] to an [`Outcome`].
//!
//! ## Semantics
//!
//! Every rule here selects winners issue by issue, in issue order,
//! never revisiting an earlier decision. This greedy sequential
//! structure is part of each rule's definition, not an approximation;
//! the manipulation analysis depends on it. Ties are always broken
//! toward the lowest candidate index.
//!
//! ## Rules
//!
//! | Rule | Parameter | Notes |
//! |------|-----------|-------|
//! | [`sequential_utilitarian`] | none | max approval count per issue |
//! | [`sequential_thiele`] | decay ≥ 0 | 0 = utilitarian, 1 = PAV, large = CC |
//! | [`owa_rule`] | x ∈ [0, n−1] | 0 = utilitarian, n−1 = leximin limit |
//!
//! Parameterized rules reject out-of-range parameters at call time;
//! nothing is ever partially computed.

mod descriptor;
mod error;
mod owa;
mod thiele;
mod utilitarian;

pub use descriptor::{RuleDescriptor, RuleFn};
pub use error::{Result, RuleError};
pub use owa::{leximin_owa, owa_rule, owa_weights, utilitarian_owa};
pub use thiele::{sequential_cc, sequential_pav, sequential_thiele, thiele_weights};
pub use utilitarian::sequential_utilitarian;

/// First index achieving the maximum score, scanning in ascending
/// index order with a strict-greater comparison. This is the shared
/// lowest-index tie-break for every rule in the family.
pub(crate) fn argmax_first(scores: &[f64]) -> usize {
    let mut best = 0;
    for (candidate, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = candidate;
        }
    }
    best
}
