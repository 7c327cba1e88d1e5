//! Built-in low-precision ephemeris.
//!
//! Self-contained series for the Sun, Moon, planets and lunar node, good to
//! roughly an arc-minute, so charts can be computed without external data.
//! All longitudes are apparent: mean equinox of date plus nutation, and the
//! Sun also carries annual aberration. UT input is converted to TT with ΔT.

pub mod moon;
pub mod planets;
pub mod sun;

mod elements;

use rave_bodygraph::{Body, normalize_360};
use rave_time::{TimeError, jd_to_centuries, jd_ut_to_tt};

use crate::ephemeris::Ephemeris;
use crate::error::EphemError;
use crate::lunar_nodes::{NodeMode, node_deg};
use crate::nutation::nutation_longitude_deg;

/// Day zero of the Schlyter element series: 1999 Dec 31.0 TT.
pub(crate) const SCHLYTER_EPOCH_JD: f64 = 2_451_543.5;

/// Analytic longitude provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticEphemeris {
    /// Mean or true lunar node.
    pub node_mode: NodeMode,
}

impl AnalyticEphemeris {
    pub fn new(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }

    /// Apparent longitude at a TT Julian Date.
    pub fn longitude_tt(&self, body: Body, jd_tt: f64) -> Result<f64, EphemError> {
        let t = jd_to_centuries(jd_tt);
        let geometric = match body {
            Body::Sun => return Ok(sun::apparent_longitude_deg(t)),
            Body::Moon => moon::longitude_deg(jd_tt - SCHLYTER_EPOCH_JD),
            Body::NorthNode => node_deg(self.node_mode, t),
            Body::Earth | Body::SouthNode => return Err(EphemError::UnsupportedBody(body)),
            planet => planets::geocentric_longitude_deg(planet, jd_tt)
                .ok_or(EphemError::UnsupportedBody(planet))?,
        };
        Ok(normalize_360(geometric + nutation_longitude_deg(t)))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::InvalidTimestamp("julian date must be finite").into());
        }
        self.longitude_tt(body, jd_ut_to_tt(jd_ut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_bodies_rejected() {
        let e = AnalyticEphemeris::default();
        assert_eq!(
            e.longitude(Body::Earth, 2_451_545.0),
            Err(EphemError::UnsupportedBody(Body::Earth))
        );
        assert!(e.longitude(Body::SouthNode, 2_451_545.0).is_err());
    }

    #[test]
    fn non_finite_date_rejected() {
        let e = AnalyticEphemeris::default();
        assert!(matches!(
            e.longitude(Body::Sun, f64::NAN),
            Err(EphemError::Time(_))
        ));
    }

    #[test]
    fn all_queried_bodies_in_range() {
        let e = AnalyticEphemeris::default();
        for body in rave_bodygraph::ALL_BODIES.into_iter().filter(|b| b.is_queried()) {
            let lon = e.longitude(body, 2_439_907.84375).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn node_modes_differ_slightly() {
        let mean = AnalyticEphemeris::new(NodeMode::Mean);
        let truen = AnalyticEphemeris::new(NodeMode::True);
        let a = mean.longitude(Body::NorthNode, 2_451_545.0).unwrap();
        let b = truen.longitude(Body::NorthNode, 2_451_545.0).unwrap();
        let delta = normalize_360(a - b + 180.0) - 180.0;
        assert!(delta.abs() < 2.0);
    }
}
