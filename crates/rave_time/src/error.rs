//! Error types for civil-time handling.

use thiserror::Error;

/// Errors from timestamp validation and range generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field or UTC offset is out of range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(&'static str),
    /// A timestamp range request produced no steps or had bad parameters.
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),
    /// A textual timestamp could not be parsed.
    #[error("cannot parse timestamp {0:?} (expected YYYY-MM-DD HH:MM[:SS])")]
    Parse(String),
}
