//! Error types for longitude providers and the design-date search.

use rave_bodygraph::Body;
use rave_time::TimeError;
use thiserror::Error;

/// Errors from ephemeris queries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// The provider does not compute this body.
    #[error("body not supported by this provider: {0}")]
    UnsupportedBody(Body),
    /// Invalid search or provider configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// A root search did not bracket or converge.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
    /// A longitude table could not be parsed.
    #[error("longitude table: {0}")]
    TableParse(String),
    /// A longitude table has no entry for this body near this date.
    #[error("no longitude for {body} at JD {jd}")]
    MissingLongitude { body: Body, jd: f64 },
    /// File I/O failure.
    #[error("i/o: {0}")]
    Io(String),
    /// Time conversion failure.
    #[error(transparent)]
    Time(#[from] TimeError),
}
