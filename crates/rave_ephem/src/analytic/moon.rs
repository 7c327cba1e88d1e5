//! Lunar longitude from mean elements plus the principal perturbations.
//!
//! Elements and the 12 longitude terms follow Paul Schlyter, "How to
//! compute planetary positions". Accuracy is about 2 arc-minutes.

use rave_bodygraph::normalize_360;

use super::elements::{OrbitalElements, sin_deg, to_spherical};

/// Geocentric lunar longitude, mean equinox of date, degrees.
///
/// `d` = days from 1999 Dec 31.0 TT.
pub fn longitude_deg(d: f64) -> f64 {
    let node = 125.1228 - 0.0529538083 * d;
    let perigee = 318.0634 + 0.1643573223 * d;
    let mm = 115.3654 + 13.0649929509 * d;
    let orbit = OrbitalElements {
        node,
        inclination: 5.1454,
        perihelion: perigee,
        semi_major_axis: 60.2666,
        eccentricity: 0.054900,
        mean_anomaly: mm,
    };
    let (lon, _, _) = to_spherical(orbit.rectangular());

    let ms = 356.0470 + 0.9856002585 * d;
    let sun_mean_longitude = ms + 282.9404 + 4.70935e-5 * d;
    let moon_mean_longitude = node + perigee + mm;
    let elong = moon_mean_longitude - sun_mean_longitude;
    let f = moon_mean_longitude - node;

    let perturbation = -1.274 * sin_deg(mm - 2.0 * elong)
        + 0.658 * sin_deg(2.0 * elong)
        - 0.186 * sin_deg(ms)
        - 0.059 * sin_deg(2.0 * mm - 2.0 * elong)
        - 0.057 * sin_deg(mm - 2.0 * elong + ms)
        + 0.053 * sin_deg(mm + 2.0 * elong)
        + 0.046 * sin_deg(2.0 * elong - ms)
        + 0.041 * sin_deg(mm - ms)
        - 0.035 * sin_deg(elong)
        - 0.031 * sin_deg(mm + ms)
        - 0.015 * sin_deg(2.0 * f - 2.0 * elong)
        + 0.011 * sin_deg(mm - 4.0 * elong);

    normalize_360(lon + perturbation)
}
