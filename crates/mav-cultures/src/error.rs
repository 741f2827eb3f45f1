//! Error types for culture configuration.

use thiserror::Error;

/// Result type alias for sampler operations.
pub type Result<T> = std::result::Result<T, CultureError>;

/// Configuration errors for the culture samplers.
#[derive(Debug, Error)]
pub enum CultureError {
    /// A probability parameter outside `[0, 1]`.
    #[error("probability '{name}' must be in [0, 1], got {value}")]
    InvalidProbability {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The disjoint model needs at least one group.
    #[error("disjoint culture needs at least one group")]
    NoGroups,

    /// Unrecognized culture identifier at the orchestration boundary.
    #[error("unknown culture '{name}' (expected p-ic | resampling | disjoint)")]
    UnknownCulture {
        /// The unrecognized identifier.
        name: String,
    },

    /// The sampled shape violated the election invariants.
    #[error(transparent)]
    Election(#[from] mav_election::ElectionError),
}
