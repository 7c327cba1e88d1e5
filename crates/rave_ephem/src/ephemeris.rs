//! The longitude-provider seam.

use rave_bodygraph::{ALL_BODIES, Body, normalize_360};
use tracing::trace;

use crate::error::EphemError;

/// Tropical geocentric ecliptic longitudes, in degrees of date.
///
/// Providers answer the 11 directly observed bodies. Earth and the South
/// Node are derived by [`body_longitude`] and may be rejected with
/// [`EphemError::UnsupportedBody`].
pub trait Ephemeris {
    /// Longitude in [0, 360) of `body` at `jd_ut` (Julian Date, UT).
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        (**self).longitude(body, jd_ut)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        (**self).longitude(body, jd_ut)
    }
}

/// Longitude of any of the 13 bodies. Earth and South Node are their
/// partner's longitude plus 180°.
pub fn body_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    jd_ut: f64,
) -> Result<f64, EphemError> {
    match body.opposite_of() {
        Some(partner) => Ok(normalize_360(ephemeris.longitude(partner, jd_ut)? + 180.0)),
        None => {
            let lon = ephemeris.longitude(body, jd_ut)?;
            trace!(body = body.name(), jd_ut, lon, "longitude");
            Ok(normalize_360(lon))
        }
    }
}

/// All 13 longitudes at one instant, in [`ALL_BODIES`] order.
///
/// Queries each of the 11 observed bodies once.
pub fn all_longitudes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
) -> Result<[f64; 13], EphemError> {
    let mut out = [0.0; 13];
    for body in ALL_BODIES.into_iter().filter(|b| b.is_queried()) {
        out[body.index()] = body_longitude(ephemeris, body, jd_ut)?;
    }
    for body in ALL_BODIES {
        if let Some(partner) = body.opposite_of() {
            out[body.index()] = normalize_360(out[partner.index()] + 180.0);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Longitude = 10 * body index + jd fraction; counts calls.
    struct Counting {
        calls: Cell<usize>,
    }

    impl Ephemeris for Counting {
        fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
            if !body.is_queried() {
                return Err(EphemError::UnsupportedBody(body));
            }
            self.calls.set(self.calls.get() + 1);
            Ok(body.index() as f64 * 10.0 + jd_ut.fract())
        }
    }

    #[test]
    fn derived_bodies_are_opposite() {
        let e = Counting { calls: Cell::new(0) };
        let sun = body_longitude(&e, Body::Sun, 0.0).unwrap();
        let earth = body_longitude(&e, Body::Earth, 0.0).unwrap();
        assert!((earth - normalize_360(sun + 180.0)).abs() < 1e-12);
        let node = body_longitude(&e, Body::NorthNode, 0.0).unwrap();
        let south = body_longitude(&e, Body::SouthNode, 0.0).unwrap();
        assert!((south - (node + 180.0)).abs() < 1e-12);
    }

    #[test]
    fn all_longitudes_queries_eleven_bodies() {
        let e = Counting { calls: Cell::new(0) };
        let lons = all_longitudes(&e, 0.5).unwrap();
        assert_eq!(e.calls.get(), 11);
        assert!((lons[Body::Pluto.index()] - 120.5).abs() < 1e-12);
        assert!((lons[Body::Earth.index()] - 180.5).abs() < 1e-12);
    }

    #[test]
    fn boxed_provider_works() {
        let e: Box<dyn Ephemeris> = Box::new(Counting { calls: Cell::new(0) });
        assert!(body_longitude(&e, Body::Moon, 0.0).is_ok());
    }
}
