//! Error types for election construction.

use thiserror::Error;

/// Result type alias for election operations.
pub type Result<T> = std::result::Result<T, ElectionError>;

/// Errors raised when constructing a malformed election.
///
/// These are configuration errors in the taxonomy of the analysis
/// pipeline: they fail fast at construction time, never mid-computation.
#[derive(Debug, Error)]
pub enum ElectionError {
    /// The election declares no issues at all.
    #[error("election must declare at least one issue")]
    NoIssues,

    /// An issue was declared with zero candidates.
    #[error("issue {issue} declares zero candidates; every issue needs at least one")]
    EmptyIssue {
        /// Index of the offending issue.
        issue: usize,
    },

    /// The approval buffer does not match voters x candidate slots.
    #[error("approval buffer has {actual} entries, expected {expected} (voters x candidate slots)")]
    ShapeMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// An approval entry is neither 0 nor 1.
    #[error("approval entry at flat index {index} is {value}; entries must be 0 or 1")]
    NonBinaryEntry {
        /// Flat index of the offending entry.
        index: usize,
        /// The out-of-range value.
        value: u8,
    },
}
