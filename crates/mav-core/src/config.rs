//! Batch experiment configuration.

use mav_cultures::CultureConfig;
use mav_rules::RuleDescriptor;
use serde::{Deserialize, Serialize};

/// One batch: a culture and a rule swept across a seed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// The population model; its own seed field is overridden per run.
    pub culture: CultureConfig,
    /// The rule under analysis.
    pub rule: RuleDescriptor,
    /// Number of seeds to sweep: runs use seeds `0..seeds`.
    pub seeds: u64,
}
