//! Error types for detection runs.

use thiserror::Error;

/// Result type alias for detector operations.
pub type Result<T> = std::result::Result<T, DetectError>;

/// Errors that can abort a detection run.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The voting rule rejected its configuration.
    #[error(transparent)]
    Rule(#[from] mav_rules::RuleError),
}
