//! Risk aggregation: normalized rates over raw detection counters.

use mav_election::{Election, Outcome};
use serde::{Deserialize, Serialize};

use crate::detector::{detect_free_riding, DetectionResult};
use crate::error::Result;

/// Normalized manipulation-risk rates for one election/rule pair.
///
/// Every rate is 0.0 when its denominator is zero; degenerate inputs
/// are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// `successes / trials`.
    pub success_rate: f64,
    /// `harms / trials`.
    pub harm_rate: f64,
    /// `harms / possible`: the fraction of eligible, non-pivotal
    /// manipulations that backfire. This denominator is authoritative.
    pub risk: f64,
}

impl RiskSummary {
    /// Derives the rates from raw counters.
    pub fn from_counts(counts: &DetectionResult) -> Self {
        Self {
            success_rate: rate(counts.successes, counts.trials),
            harm_rate: rate(counts.harms, counts.trials),
            risk: rate(counts.harms, counts.possible),
        }
    }
}

fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Runs the detector and aggregates its counters into rates.
pub fn evaluate_risk<R>(elec: &Election, rule: R) -> Result<(DetectionResult, RiskSummary)>
where
    R: Fn(&Election) -> mav_rules::Result<Outcome> + Sync,
{
    let counts = detect_free_riding(elec, rule)?;
    let rates = RiskSummary::from_counts(&counts);
    Ok((counts, rates))
}
