//! The probe loop: enumerate, withdraw, re-run, classify.

use std::cmp::Ordering;

use mav_election::{voter_utility, Election, Outcome};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Raw counters from one detection run.
///
/// `possible = successes + harms + ties` always holds; the derived
/// rates live in [`crate::RiskSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Full probe space: voters x issues.
    pub trials: u64,
    /// Probes where the voter approved the baseline winner.
    pub eligible: u64,
    /// Eligible probes where the withdrawal did not flip the winner.
    pub possible: u64,
    /// Possible probes where the voter's utility strictly increased.
    pub successes: u64,
    /// Possible probes where the voter's utility strictly decreased.
    pub harms: u64,
    /// Possible probes with no utility change.
    pub ties: u64,
}

impl DetectionResult {
    /// Combines two partial counts. Used to merge per-worker partial
    /// sums from the parallel probe loop.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            eligible: self.eligible + other.eligible,
            possible: self.possible + other.possible,
            successes: self.successes + other.successes,
            harms: self.harms + other.harms,
            ties: self.ties + other.ties,
        }
    }
}

/// Probes every (voter, issue) pair of `elec` for a single-approval
/// free-riding manipulation under `rule`.
///
/// The baseline outcome is computed once and shared read-only across
/// probes; each probe withdraws one approval on a private copy of the
/// election, re-runs the rule, and classifies the effect. Probes are
/// independent, so the loop runs on the rayon thread pool with
/// per-worker partial counters merged at the end.
///
/// # Errors
///
/// Propagates the rule's own configuration errors (e.g. an OWA
/// parameter out of range for this electorate).
pub fn detect_free_riding<R>(elec: &Election, rule: R) -> Result<DetectionResult>
where
    R: Fn(&Election) -> mav_rules::Result<Outcome> + Sync,
{
    let baseline = rule(elec)?;
    detect_free_riding_with_baseline(elec, rule, &baseline)
}

/// Variant of [`detect_free_riding`] for callers that already hold the
/// truthful outcome, skipping one rule application. `baseline` must be
/// `rule`'s outcome on the unmodified `elec`.
pub fn detect_free_riding_with_baseline<R>(
    elec: &Election,
    rule: R,
    baseline: &Outcome,
) -> Result<DetectionResult>
where
    R: Fn(&Election) -> mav_rules::Result<Outcome> + Sync,
{
    let n_voters = elec.n_voters();
    let n_issues = elec.n_issues();

    let result = (0..n_voters * n_issues)
        .into_par_iter()
        .map(|probe| {
            let voter = probe / n_issues;
            let issue = probe % n_issues;
            probe_withdrawal(elec, &rule, baseline, voter, issue)
        })
        .try_reduce(DetectionResult::default, |a, b| Ok(a.merge(b)))?;

    debug!(
        trials = result.trials,
        eligible = result.eligible,
        possible = result.possible,
        successes = result.successes,
        harms = result.harms,
        "detection run complete"
    );
    Ok(result)
}

/// Classifies one (voter, issue) probe.
fn probe_withdrawal<R>(
    elec: &Election,
    rule: &R,
    baseline: &Outcome,
    voter: usize,
    issue: usize,
) -> Result<DetectionResult>
where
    R: Fn(&Election) -> mav_rules::Result<Outcome> + Sync,
{
    let mut counts = DetectionResult {
        trials: 1,
        ..DetectionResult::default()
    };

    let winner = baseline.winner(issue);
    if !elec.approves(voter, issue, winner) {
        return Ok(counts);
    }
    counts.eligible = 1;

    let manipulated = elec.with_withdrawal(voter, issue, winner);
    let outcome = rule(&manipulated)?;
    if outcome.winner(issue) != winner {
        // The voter was pivotal: withdrawing changed the result, which
        // is not free-riding.
        return Ok(counts);
    }
    counts.possible = 1;

    // Utility is always measured against the voter's original,
    // truthful ballot, for both the baseline and manipulated outcomes.
    let before = voter_utility(elec, baseline, voter);
    let after = voter_utility(elec, &outcome, voter);
    match after.cmp(&before) {
        Ordering::Greater => counts.successes = 1,
        Ordering::Less => counts.harms = 1,
        Ordering::Equal => counts.ties = 1,
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mav_rules::{sequential_utilitarian, RuleDescriptor};

    fn utilitarian(elec: &Election) -> mav_rules::Result<Outcome> {
        Ok(sequential_utilitarian(elec))
    }

    fn assert_counter_ordering(res: &DetectionResult) {
        assert!(res.successes + res.harms <= res.possible);
        assert_eq!(res.successes + res.harms + res.ties, res.possible);
        assert!(res.possible <= res.eligible);
        assert!(res.eligible <= res.trials);
    }

    #[test]
    fn test_unanimous_election_has_no_successes_or_harms() {
        // 4 voters, 2 issues, 2 candidates, everyone approves only
        // candidate 0. Withdrawing one approval leaves 3 vs 0, so no
        // probe is pivotal, and every voter still gets their winner.
        let elec = Election::from_fn(4, vec![2, 2], |_, _, c| c == 0).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res.trials, 8);
        assert_eq!(res.eligible, 8);
        assert_eq!(res.possible, 8);
        assert_eq!(res.successes, 0);
        assert_eq!(res.harms, 0);
        assert_eq!(res.ties, 8);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_single_candidate_is_always_possible_never_harmful() {
        // One issue, one candidate: the lone candidate always wins, so
        // every eligible withdrawal is non-pivotal and utility never
        // moves.
        let elec = Election::from_fn(3, vec![1], |_, _, _| true).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res.trials, 3);
        assert_eq!(res.eligible, 3);
        assert_eq!(res.possible, 3);
        assert_eq!(res.successes, 0);
        assert_eq!(res.harms, 0);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_non_approvers_are_not_eligible() {
        // Voter 2 approves candidate 1, which loses 2 vs 1, so voter
        // 2's probe is a trial but not eligible.
        let elec = Election::new(3, vec![2], vec![1, 0, 1, 0, 0, 1]).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res.trials, 3);
        assert_eq!(res.eligible, 2);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_pivotal_withdrawal_is_not_possible() {
        // Candidates tie 1 vs 1 and the tie-break gives candidate 0.
        // Voter 0 withdrawing leaves 0 vs 1, flipping the winner to
        // candidate 1: eligible, but pivotal, so not possible.
        let elec = Election::new(2, vec![2], vec![1, 0, 0, 1]).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res.trials, 2);
        // Voter 0 approved the winner; voter 1 did not.
        assert_eq!(res.eligible, 1);
        // Voter 0 was pivotal.
        assert_eq!(res.possible, 0);
        assert_eq!(res.successes, 0);
        assert_eq!(res.harms, 0);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_detects_free_riding_success_under_pav() {
        // Sequential PAV. Voter 0 approves the winner of issue 0 along
        // with voters 1 and 2, so their approval is not pivotal there.
        // On issue 1, voter 0 competes with a bloc whose weight
        // depends on issue 0's support counts: by free-riding on
        // issue 0, voter 0 keeps full weight and swings issue 1.
        let elec = Election::new(
            3,
            vec![2, 2],
            vec![
                1, 0, 1, 0, // voter 0: c0 on issue 0, c0 on issue 1
                1, 0, 0, 1, // voter 1: c0 on issue 0, c1 on issue 1
                1, 0, 0, 1, // voter 2: c0 on issue 0, c1 on issue 1
            ],
        )
        .unwrap();
        let rule = RuleDescriptor::Thiele { decay: 1.0 }.resolve();
        // Baseline: issue 0 -> c0 (3 approvals). Issue 1: all three
        // voters have support 1, weight 1/2 each: c0 scores 1/2, c1
        // scores 1, so c1 wins and voter 0 ends with utility 1.
        // If voter 0 withdraws from issue 0's winner: c0 still wins
        // 2 vs 0. On issue 1 voter 0 now has support 0 and full
        // weight: c0 scores 1, c1 scores 1/2 + 1/2 = 1, tie-break
        // picks c0. Voter 0's truthful utility rises from 1 to 2.
        let res = detect_free_riding(&elec, rule).unwrap();
        assert_eq!(res.trials, 6);
        assert!(res.successes >= 1);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_precomputed_baseline_matches_full_run() {
        let elec = Election::from_fn(5, vec![2, 3], |v, i, c| (v + i + c) % 2 == 0).unwrap();
        let baseline = sequential_utilitarian(&elec);
        let full = detect_free_riding(&elec, utilitarian).unwrap();
        let reused = detect_free_riding_with_baseline(&elec, utilitarian, &baseline).unwrap();
        assert_eq!(reused, full);
    }

    #[test]
    fn test_trials_cover_full_probe_space() {
        let elec = Election::from_fn(5, vec![2, 3, 2], |v, i, c| (v + i + c) % 2 == 0).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res.trials, 5 * 3);
        assert_counter_ordering(&res);
    }

    #[test]
    fn test_zero_voters_yields_zero_counters() {
        let elec = Election::new(0, vec![2, 2], vec![]).unwrap();
        let res = detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(res, DetectionResult::default());
    }

    #[test]
    fn test_input_election_is_untouched() {
        let elec = Election::from_fn(3, vec![2, 2], |_, _, c| c == 0).unwrap();
        let copy = elec.clone();
        detect_free_riding(&elec, utilitarian).unwrap();
        assert_eq!(elec, copy);
    }

    #[test]
    fn test_counters_serialize_flat() {
        let res = DetectionResult {
            trials: 4,
            eligible: 2,
            possible: 1,
            successes: 1,
            harms: 0,
            ties: 0,
        };
        let value = serde_json::to_value(res).unwrap();
        assert_eq!(value["trials"], 4);
        assert_eq!(value["successes"], 1);
    }

    #[test]
    fn test_merge_is_associative_and_componentwise() {
        let a = DetectionResult {
            trials: 4,
            eligible: 3,
            possible: 2,
            successes: 1,
            harms: 0,
            ties: 1,
        };
        let b = DetectionResult {
            trials: 2,
            eligible: 2,
            possible: 2,
            successes: 0,
            harms: 1,
            ties: 1,
        };
        let c = DetectionResult {
            trials: 1,
            ..DetectionResult::default()
        };
        assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        assert_eq!(a.merge(b).trials, 6);
        assert_eq!(a.merge(b).harms, 1);
    }
}
