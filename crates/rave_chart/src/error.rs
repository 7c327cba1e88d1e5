//! Error type for chart computation.

use rave_ephem::EphemError;
use rave_time::TimeError;
use thiserror::Error;

/// Errors surfaced by [`compute_chart`](crate::compute_chart).
///
/// Derivation itself never fails; every variant comes from a collaborator
/// or from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemError),
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(&'static str),
    /// The configuration file could not be read or parsed.
    #[error("chart config: {0}")]
    ConfigParse(String),
}
