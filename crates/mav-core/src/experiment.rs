//! Experiment runner: single runs, seed sweeps, and mean summaries.
//!
//! Each run samples an election, applies one rule, and reports welfare
//! alongside the free-riding counters and rates as a flat row. Runs in
//! a sweep are independent, so the sweep executes on the rayon thread
//! pool.

use mav_detect::{detect_free_riding_with_baseline, DetectionResult, RiskSummary};
use mav_election::{Election, WelfareSummary};
use mav_rules::RuleDescriptor;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BatchConfig;
use crate::error::Result;

/// Full report for one election under one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    /// Winner per issue.
    pub winners: Vec<usize>,
    /// Welfare of the truthful outcome.
    pub welfare: WelfareSummary,
    /// Raw detection counters.
    pub counts: DetectionResult,
    /// Normalized risk rates.
    pub rates: RiskSummary,
}

/// One flat row of a seed sweep, suitable for tabular serialization:
/// every field is a label or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Seed that produced the election.
    pub seed: u64,
    /// Culture label.
    pub culture: String,
    /// Rule label.
    pub rule: String,
    /// Welfare metrics.
    #[serde(flatten)]
    pub welfare: WelfareSummary,
    /// Detection counters.
    #[serde(flatten)]
    pub counts: DetectionResult,
    /// Risk rates.
    #[serde(flatten)]
    pub rates: RiskSummary,
}

/// Applies one rule to one election and reports outcome, welfare,
/// counters, and rates.
pub fn run_single(elec: &Election, rule: &RuleDescriptor) -> Result<RuleReport> {
    let outcome = rule.apply(elec)?;
    let welfare = WelfareSummary::compute(elec, &outcome);
    let counts = detect_free_riding_with_baseline(elec, |e| rule.apply(e), &outcome)?;
    let rates = RiskSummary::from_counts(&counts);
    Ok(RuleReport {
        winners: outcome.winners().to_vec(),
        welfare,
        counts,
        rates,
    })
}

/// Sweeps one culture/rule pair across seeds `0..cfg.seeds`, one
/// record per seed. Elections are independent, so seeds run in
/// parallel; records come back in seed order.
pub fn run_batch(cfg: &BatchConfig) -> Result<Vec<RunRecord>> {
    let culture_label = cfg.culture.to_string();
    let rule_label = cfg.rule.to_string();
    info!(
        culture = %culture_label,
        rule = %rule_label,
        seeds = cfg.seeds,
        "running batch"
    );

    (0..cfg.seeds)
        .into_par_iter()
        .map(|seed| {
            let elec = cfg.culture.with_seed(seed).sample()?;
            let report = run_single(&elec, &cfg.rule)?;
            Ok(RunRecord {
                seed,
                culture: culture_label.clone(),
                rule: rule_label.clone(),
                welfare: report.welfare,
                counts: report.counts,
                rates: report.rates,
            })
        })
        .collect()
}

/// Mean of every numeric column across a sweep's records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of records summarized.
    pub runs: u64,
    /// Mean utilitarian welfare.
    pub utilitarian: f64,
    /// Mean egalitarian welfare.
    pub egalitarian: f64,
    /// Mean Nash welfare.
    pub nash: f64,
    /// Mean success rate.
    pub success_rate: f64,
    /// Mean harm rate.
    pub harm_rate: f64,
    /// Mean risk.
    pub risk: f64,
}

impl BatchSummary {
    /// Averages a sweep's records; `None` for an empty sweep.
    pub fn from_records(records: &[RunRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f64;
        let mean = |f: &dyn Fn(&RunRecord) -> f64| records.iter().map(f).sum::<f64>() / n;
        Some(Self {
            runs: records.len() as u64,
            utilitarian: mean(&|r| r.welfare.utilitarian),
            egalitarian: mean(&|r| r.welfare.egalitarian),
            nash: mean(&|r| r.welfare.nash),
            success_rate: mean(&|r| r.rates.success_rate),
            harm_rate: mean(&|r| r.rates.harm_rate),
            risk: mean(&|r| r.rates.risk),
        })
    }
}
