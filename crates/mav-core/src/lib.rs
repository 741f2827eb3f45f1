//! # MAV Core
//!
//! Unified facade for the multi-issue approval voting free-riding
//! analysis. Ties the component crates together and runs experiments.
//!
//! ## Architecture
//!
//! ```text
//! culture sampler ──> Election ──> rule ──> Outcome
//!                        │                    │
//!                        │          ┌─────────┴─────────┐
//!                        └────────> │ welfare  detector │
//!                                   └───────────┬───────┘
//!                                               ▼
//!                                         risk rates ──> rows
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mav_core::{CultureConfig, ImpartialConfig, RuleDescriptor};
//! use mav_core::experiment::run_single;
//!
//! let culture = CultureConfig::Impartial(ImpartialConfig::new(10, vec![2, 2]));
//! let elec = culture.with_seed(0).sample().unwrap();
//! let report = run_single(&elec, &RuleDescriptor::Utilitarian).unwrap();
//! assert_eq!(report.winners.len(), 2);
//! ```
//!
//! The core performs no file I/O: reports and records are flat,
//! serde-serializable values for the caller to tabulate.

mod config;
mod error;
pub mod experiment;

pub use config::BatchConfig;
pub use error::{MavError, Result};

// Re-export component types for convenience.
pub use mav_cultures::{
    CultureConfig, CultureError, DisjointConfig, ImpartialConfig, ResamplingConfig,
};
pub use mav_detect::{DetectionResult, RiskSummary};
pub use mav_election::{Election, Outcome, WelfareSummary};
pub use mav_rules::{RuleDescriptor, RuleError};

#[cfg(test)]
mod tests;
