//! Election outcomes: one winning candidate per issue.

use serde::{Deserialize, Serialize};

use crate::election::Election;

/// The outcome of a multi-issue election.
///
/// Holds one chosen candidate index per issue. Equality is value
/// equality over the winner sequence, which is how the detector
/// decides whether a manipulation changed the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    winners: Vec<usize>,
}

impl Outcome {
    /// Creates an outcome from a winner sequence.
    pub fn new(winners: Vec<usize>) -> Self {
        Self { winners }
    }

    /// The winner sequence, one candidate index per issue.
    #[inline]
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// The winning candidate on a single issue.
    #[inline]
    pub fn winner(&self, issue: usize) -> usize {
        self.winners[issue]
    }

    /// Number of decided issues.
    #[inline]
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    /// True when no issues are decided.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Whether this outcome is well-formed for the given election:
    /// one winner per issue, each a valid candidate index.
    pub fn is_valid_for(&self, elec: &Election) -> bool {
        self.winners.len() == elec.n_issues()
            && self
                .winners
                .iter()
                .enumerate()
                .all(|(issue, &w)| w < elec.candidates_on(issue))
    }
}

impl From<Vec<usize>> for Outcome {
    fn from(winners: Vec<usize>) -> Self {
        Self::new(winners)
    }
}
