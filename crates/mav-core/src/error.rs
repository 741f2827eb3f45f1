//! Error type for the facade.

use thiserror::Error;

/// Result type alias for facade operations.
pub type Result<T> = std::result::Result<T, MavError>;

/// Unified error for experiment orchestration.
///
/// Every variant is a configuration error from one of the component
/// crates; degenerate inputs never surface here.
#[derive(Debug, Error)]
pub enum MavError {
    /// Malformed election shape.
    #[error("election error: {0}")]
    Election(#[from] mav_election::ElectionError),

    /// Invalid rule parameter or identifier.
    #[error("rule error: {0}")]
    Rule(#[from] mav_rules::RuleError),

    /// Detection run aborted.
    #[error("detection error: {0}")]
    Detect(#[from] mav_detect::DetectError),

    /// Invalid culture parameter or identifier.
    #[error("culture error: {0}")]
    Culture(#[from] mav_cultures::CultureError),
}
