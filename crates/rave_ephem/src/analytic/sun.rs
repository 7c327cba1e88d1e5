//! Solar longitude from the Meeus low-precision solar theory.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25. Accuracy about
//! 0.01° over several centuries around J2000.

use super::elements::{cos_deg, sin_deg};
use crate::nutation::nutation_longitude_deg;
use rave_bodygraph::normalize_360;

/// Constant of aberration over 1 AU, degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric geocentric Sun, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// True longitude ☉ in degrees [0, 360).
    pub true_longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub radius_au: f64,
}

/// Geometric Sun at `t` Julian centuries of TT since J2000.0.
pub fn geometric(t: f64) -> SolarCoordinates {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m);
    let true_anomaly = m + c;
    SolarCoordinates {
        true_longitude_deg: normalize_360(l0 + c),
        radius_au: 1.000001018 * (1.0 - e * e) / (1.0 + e * cos_deg(true_anomaly)),
    }
}

/// Apparent longitude: geometric plus nutation and annual aberration.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let sun = geometric(t);
    normalize_360(sun.true_longitude_deg + nutation_longitude_deg(t) - ABERRATION_DEG / sun.radius_au)
}
