//! # Multi-Issue Election Model
//!
//! Core data types for multi-issue approval elections: the binary
//! approval tensor ([`Election`]), per-issue winner sequences
//! ([`Outcome`]), and welfare metrics ([`WelfareSummary`]).
//!
//! ## Design
//!
//! An election is a three-dimensional tensor indexed by
//! (voter, issue, candidate) with entries in {0, 1}. Candidate counts
//! may differ per issue, so the tensor is stored as a flat buffer with
//! a computed stride rather than a fixed cube.
//!
//! Elections are immutable after construction. Modeling a manipulation
//! produces a fresh [`Election`] via [`Election::with_withdrawal`];
//! baseline and manipulated elections never alias.

mod election;
mod error;
mod outcome;
mod welfare;

pub use election::Election;
pub use error::{ElectionError, Result};
pub use outcome::Outcome;
pub use welfare::{voter_utility, WelfareSummary};
