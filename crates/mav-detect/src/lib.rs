//! # Free-Riding Detector
//!
//! Probes an election for free-riding manipulations: a single voter
//! withdrawing their approval of an issue's current winner, hoping it
//! wins anyway while their overall utility improves.
//!
//! ## Probe classification
//!
//! Every (voter, issue) pair is one trial. A trial is:
//!
//! - **eligible** when the voter approved the baseline winner on that
//!   issue (otherwise there is nothing to withdraw);
//! - **possible** when, after the withdrawal, the issue's winner is
//!   unchanged (the voter was not pivotal; a pivotal withdrawal
//!   changes the result, which is a different phenomenon);
//! - a **success** / **harm** / **tie** depending on whether the
//!   voter's utility, measured on their original truthful ballot,
//!   strictly rose, strictly fell, or stayed put.
//!
//! ## Invariants
//!
//! `successes + harms + ties = possible <= eligible <= trials`, and
//! `trials = n_voters * n_issues` exactly. The input election is never
//! mutated; every probe works on a private copy.

mod detector;
mod error;
mod risk;

pub use detector::{detect_free_riding, detect_free_riding_with_baseline, DetectionResult};
pub use error::{DetectError, Result};
pub use risk::{evaluate_risk, RiskSummary};
