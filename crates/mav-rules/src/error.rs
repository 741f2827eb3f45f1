//! Error types for voting-rule configuration.

use thiserror::Error;

/// Result type alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Configuration errors for the voting-rule family.
///
/// All variants are rejected synchronously at call time; a rule never
/// returns a partially computed outcome.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Thiele decay exponent outside its valid range.
    #[error("thiele decay exponent must be finite and >= 0, got {decay}")]
    InvalidDecay {
        /// The rejected exponent.
        decay: f64,
    },

    /// OWA parameter outside `[0, n_voters - 1]`.
    #[error("owa parameter x must be in [0, {max}], got {x}")]
    OwaOutOfRange {
        /// The rejected parameter.
        x: usize,
        /// Largest valid value for this electorate.
        max: usize,
    },

    /// Unrecognized rule identifier at the orchestration boundary.
    #[error("unknown rule '{name}' (expected utilitarian | pav | cc | thiele:<decay> | owa:<x> | leximin)")]
    UnknownRule {
        /// The unrecognized identifier.
        name: String,
    },

    /// A rule identifier carried a malformed parameter.
    #[error("invalid parameter in rule '{input}': {detail}")]
    BadParameter {
        /// The full rule identifier as given.
        input: String,
        /// What went wrong with the parameter.
        detail: String,
    },
}
