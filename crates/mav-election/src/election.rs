//! The binary approval tensor.
//!
//! ## Layout
//!
//! The tensor is stored voter-major in a flat `Vec<u8>`: one row per
//! voter, each row holding every issue's candidate slots back to back.
//! `issue_offsets[i]` gives the start of issue `i` within a row, so
//! entry (v, i, c) lives at `v * slots_per_voter + issue_offsets[i] + c`.
//! This supports differing candidate counts per issue without padding.
//!
//! ## Invariants
//!
//! - At least one issue; every issue has at least one candidate.
//! - Every entry is 0 or 1.
//! - Instances are immutable after construction. Any modification goes
//!   through a copying constructor such as [`Election::with_withdrawal`].

use serde::{Deserialize, Serialize};

use crate::error::{ElectionError, Result};

/// A multi-issue approval election.
///
/// `approves(v, i, c)` is true when voter `v` approves candidate `c`
/// on issue `i`. Zero voters is a legal, degenerate election; zero
/// issues or an issue with zero candidates is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    n_voters: usize,
    candidates_per_issue: Vec<usize>,
    issue_offsets: Vec<usize>,
    slots_per_voter: usize,
    approvals: Vec<u8>,
}

impl Election {
    /// Builds an election from a flat approval buffer.
    ///
    /// The buffer is voter-major: all of voter 0's slots (issue 0's
    /// candidates, then issue 1's, ...), then voter 1's, and so on.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if there are no issues, an issue
    /// has no candidates, the buffer length is wrong, or any entry is
    /// outside {0, 1}.
    pub fn new(
        n_voters: usize,
        candidates_per_issue: Vec<usize>,
        approvals: Vec<u8>,
    ) -> Result<Self> {
        if candidates_per_issue.is_empty() {
            return Err(ElectionError::NoIssues);
        }
        let mut issue_offsets = Vec::with_capacity(candidates_per_issue.len());
        let mut slots = 0usize;
        for (issue, &m) in candidates_per_issue.iter().enumerate() {
            if m == 0 {
                return Err(ElectionError::EmptyIssue { issue });
            }
            issue_offsets.push(slots);
            slots += m;
        }
        let expected = n_voters * slots;
        if approvals.len() != expected {
            return Err(ElectionError::ShapeMismatch {
                expected,
                actual: approvals.len(),
            });
        }
        if let Some((index, &value)) = approvals.iter().enumerate().find(|(_, &a)| a > 1) {
            return Err(ElectionError::NonBinaryEntry { index, value });
        }
        Ok(Self {
            n_voters,
            candidates_per_issue,
            issue_offsets,
            slots_per_voter: slots,
            approvals,
        })
    }

    /// Builds an election by evaluating a predicate at every
    /// (voter, issue, candidate) coordinate, voter-major order.
    ///
    /// Convenient for culture samplers and tests.
    pub fn from_fn<F>(
        n_voters: usize,
        candidates_per_issue: Vec<usize>,
        mut approve: F,
    ) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> bool,
    {
        let slots: usize = candidates_per_issue.iter().sum();
        let mut approvals = Vec::with_capacity(n_voters * slots);
        for v in 0..n_voters {
            for (i, &m) in candidates_per_issue.iter().enumerate() {
                for c in 0..m {
                    approvals.push(u8::from(approve(v, i, c)));
                }
            }
        }
        Self::new(n_voters, candidates_per_issue, approvals)
    }

    /// Number of voters.
    #[inline]
    pub fn n_voters(&self) -> usize {
        self.n_voters
    }

    /// Number of issues.
    #[inline]
    pub fn n_issues(&self) -> usize {
        self.candidates_per_issue.len()
    }

    /// Candidate count on a single issue.
    #[inline]
    pub fn candidates_on(&self, issue: usize) -> usize {
        self.candidates_per_issue[issue]
    }

    /// Per-issue candidate counts.
    #[inline]
    pub fn candidates_per_issue(&self) -> &[usize] {
        &self.candidates_per_issue
    }

    #[inline]
    fn index(&self, voter: usize, issue: usize, candidate: usize) -> usize {
        debug_assert!(voter < self.n_voters);
        debug_assert!(candidate < self.candidates_per_issue[issue]);
        voter * self.slots_per_voter + self.issue_offsets[issue] + candidate
    }

    /// Whether `voter` approves `candidate` on `issue`.
    #[inline]
    pub fn approves(&self, voter: usize, issue: usize, candidate: usize) -> bool {
        self.approvals[self.index(voter, issue, candidate)] == 1
    }

    /// Approval flags for one (issue, candidate) pair, over all voters.
    pub fn approvals_for(
        &self,
        issue: usize,
        candidate: usize,
    ) -> impl Iterator<Item = bool> + '_ {
        (0..self.n_voters).map(move |v| self.approves(v, issue, candidate))
    }

    /// Number of voters approving `candidate` on `issue`.
    pub fn approval_count(&self, issue: usize, candidate: usize) -> usize {
        self.approvals_for(issue, candidate).filter(|&a| a).count()
    }

    /// Returns a fresh election identical to this one except that
    /// `voter`'s approval of `candidate` on `issue` is withdrawn.
    ///
    /// All other entries, including the voter's other approvals, are
    /// untouched. The receiver is never mutated.
    #[must_use]
    pub fn with_withdrawal(&self, voter: usize, issue: usize, candidate: usize) -> Self {
        let mut manipulated = self.clone();
        let index = manipulated.index(voter, issue, candidate);
        manipulated.approvals[index] = 0;
        manipulated
    }
}
