//! Geocentric planet longitudes from mean orbital elements.
//!
//! Elements and perturbation terms follow Paul Schlyter, "How to compute
//! planetary positions". Pluto uses his periodic-term fit, which is
//! referred to J2000 and is precessed to the equinox of date here.
//! Accuracy is of order 1-2 arc-minutes for the inner planets and a few
//! arc-minutes for the outer ones.

use rave_bodygraph::{Body, normalize_360};

use super::elements::{OrbitalElements, cos_deg, from_spherical, sin_deg, to_spherical};
use super::sun;

/// Precession in longitude, degrees per day.
const PRECESSION_DEG_PER_DAY: f64 = 3.82394e-5;

/// Mean anomalies of Jupiter, Saturn and Uranus, degrees.
fn giant_mean_anomalies(d: f64) -> (f64, f64, f64) {
    (
        19.8950 + 0.0830853001 * d,
        316.9670 + 0.0334442282 * d,
        142.5905 + 0.011725806 * d,
    )
}

/// Elements of date for `body`, `d` days from 1999 Dec 31.0 TT.
fn elements(body: Body, d: f64) -> Option<OrbitalElements> {
    let (node, inclination, perihelion, semi_major_axis, eccentricity, mean_anomaly) = match body {
        Body::Mercury => (
            48.3313 + 3.24587e-5 * d,
            7.0047 + 5.00e-8 * d,
            29.1241 + 1.01444e-5 * d,
            0.387098,
            0.205635 + 5.59e-10 * d,
            168.6562 + 4.0923344368 * d,
        ),
        Body::Venus => (
            76.6799 + 2.46590e-5 * d,
            3.3946 + 2.75e-8 * d,
            54.8910 + 1.38374e-5 * d,
            0.723330,
            0.006773 - 1.302e-9 * d,
            48.0052 + 1.6021302244 * d,
        ),
        Body::Mars => (
            49.5574 + 2.11081e-5 * d,
            1.8497 - 1.78e-8 * d,
            286.5016 + 2.92961e-5 * d,
            1.523688,
            0.093405 + 2.516e-9 * d,
            18.6021 + 0.5240207766 * d,
        ),
        Body::Jupiter => (
            100.4542 + 2.76854e-5 * d,
            1.3030 - 1.557e-7 * d,
            273.8777 + 1.64505e-5 * d,
            5.20256,
            0.048498 + 4.469e-9 * d,
            giant_mean_anomalies(d).0,
        ),
        Body::Saturn => (
            113.6634 + 2.38980e-5 * d,
            2.4886 - 1.081e-7 * d,
            339.3939 + 2.97661e-5 * d,
            9.55475,
            0.055546 - 9.499e-9 * d,
            giant_mean_anomalies(d).1,
        ),
        Body::Uranus => (
            74.0005 + 1.3978e-5 * d,
            0.7733 + 1.9e-8 * d,
            96.6612 + 3.0565e-5 * d,
            19.18171 - 1.55e-8 * d,
            0.047318 + 7.45e-9 * d,
            giant_mean_anomalies(d).2,
        ),
        Body::Neptune => (
            131.7806 + 3.0173e-5 * d,
            1.7700 - 2.55e-7 * d,
            272.8461 - 6.027e-6 * d,
            30.05826 + 3.313e-8 * d,
            0.008606 + 2.15e-9 * d,
            260.2471 + 0.005995147 * d,
        ),
        _ => return None,
    };
    Some(OrbitalElements {
        node,
        inclination,
        perihelion,
        semi_major_axis,
        eccentricity,
        mean_anomaly,
    })
}

/// Mutual perturbations of the giant planets in heliocentric longitude, degrees.
fn longitude_perturbation(body: Body, d: f64) -> f64 {
    let (mj, ms, mu) = giant_mean_anomalies(d);
    match body {
        Body::Jupiter => {
            -0.332 * sin_deg(2.0 * mj - 5.0 * ms - 67.6)
                - 0.056 * sin_deg(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sin_deg(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sin_deg(mj - 2.0 * ms)
                + 0.022 * cos_deg(mj - ms)
                + 0.023 * sin_deg(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sin_deg(mj - 5.0 * ms - 69.0)
        }
        Body::Saturn => {
            0.812 * sin_deg(2.0 * mj - 5.0 * ms - 67.6) - 0.229 * cos_deg(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sin_deg(mj - 2.0 * ms - 3.0)
                + 0.046 * sin_deg(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sin_deg(mj - 3.0 * ms + 32.0)
        }
        Body::Uranus => {
            0.040 * sin_deg(ms - 2.0 * mu + 6.0) + 0.035 * sin_deg(ms - 3.0 * mu + 33.0)
                - 0.015 * sin_deg(mj - mu + 20.0)
        }
        _ => 0.0,
    }
}

/// Heliocentric Pluto from the periodic-term fit, equinox of date.
fn pluto_heliocentric(d: f64) -> [f64; 3] {
    let s = 50.03 + 0.033459652 * d;
    let p = 238.95 + 0.003968789 * d;
    let lon = 238.9508 + 0.00400703 * d - 19.799 * sin_deg(p) + 19.848 * cos_deg(p)
        + 0.897 * sin_deg(2.0 * p)
        - 4.956 * cos_deg(2.0 * p)
        + 0.610 * sin_deg(3.0 * p)
        + 1.211 * cos_deg(3.0 * p)
        - 0.341 * sin_deg(4.0 * p)
        - 0.190 * cos_deg(4.0 * p)
        + 0.128 * sin_deg(5.0 * p)
        - 0.034 * cos_deg(5.0 * p)
        - 0.038 * sin_deg(6.0 * p)
        + 0.031 * cos_deg(6.0 * p)
        + 0.020 * sin_deg(s - p)
        - 0.010 * cos_deg(s - p);
    let lat = -3.9082 - 5.453 * sin_deg(p) - 14.975 * cos_deg(p) + 3.527 * sin_deg(2.0 * p)
        + 1.673 * cos_deg(2.0 * p)
        - 1.051 * sin_deg(3.0 * p)
        + 0.328 * cos_deg(3.0 * p)
        + 0.179 * sin_deg(4.0 * p)
        - 0.292 * cos_deg(4.0 * p)
        + 0.019 * sin_deg(5.0 * p)
        + 0.100 * cos_deg(5.0 * p)
        - 0.031 * sin_deg(6.0 * p)
        - 0.026 * cos_deg(6.0 * p)
        + 0.011 * cos_deg(s - p);
    let r = 40.72 + 6.68 * sin_deg(p) + 6.90 * cos_deg(p) - 1.18 * sin_deg(2.0 * p)
        - 0.03 * cos_deg(2.0 * p)
        + 0.15 * sin_deg(3.0 * p)
        - 0.14 * cos_deg(3.0 * p);
    from_spherical(lon + PRECESSION_DEG_PER_DAY * d, lat, r)
}

/// Heliocentric rectangular ecliptic coordinates in AU, equinox of date.
pub fn heliocentric(body: Body, d: f64) -> Option<[f64; 3]> {
    if body == Body::Pluto {
        return Some(pluto_heliocentric(d));
    }
    let xyz = elements(body, d)?.rectangular();
    let dl = longitude_perturbation(body, d);
    if dl == 0.0 {
        return Some(xyz);
    }
    let (lon, lat, r) = to_spherical(xyz);
    Some(from_spherical(lon + dl, lat, r))
}

/// Geometric geocentric longitude of a planet, mean equinox of date, degrees.
///
/// `jd_tt` is a Julian Date in TT. Returns `None` for bodies that are not
/// planets (Sun, Moon, Earth, nodes).
pub fn geocentric_longitude_deg(body: Body, jd_tt: f64) -> Option<f64> {
    let d = jd_tt - super::SCHLYTER_EPOCH_JD;
    let [xh, yh, _] = heliocentric(body, d)?;
    let sun = sun::geometric(rave_time::jd_to_centuries(jd_tt));
    let xs = sun.radius_au * cos_deg(sun.true_longitude_deg);
    let ys = sun.radius_au * sin_deg(sun.true_longitude_deg);
    Some(normalize_360((yh + ys).atan2(xh + xs).to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_planets_have_no_elements() {
        for body in [Body::Sun, Body::Moon, Body::Earth, Body::NorthNode, Body::SouthNode] {
            assert!(geocentric_longitude_deg(body, 2_451_545.0).is_none());
        }
    }

    #[test]
    fn heliocentric_distance_within_orbit() {
        // semi-major axes in AU, within eccentricity
        for (body, a, e) in [
            (Body::Mercury, 0.387, 0.21),
            (Body::Mars, 1.524, 0.094),
            (Body::Jupiter, 5.203, 0.049),
            (Body::Neptune, 30.06, 0.01),
        ] {
            let [x, y, z] = heliocentric(body, 1000.0).unwrap();
            let r = (x * x + y * y + z * z).sqrt();
            assert!(r > a * (1.0 - e) - 0.01 && r < a * (1.0 + e) + 0.01, "{body}: r = {r}");
        }
    }

    #[test]
    fn perturbations_only_for_giants() {
        assert_eq!(longitude_perturbation(Body::Mars, 100.0), 0.0);
        assert!(longitude_perturbation(Body::Saturn, 100.0).abs() < 1.3);
    }

    #[test]
    fn pluto_distance_plausible() {
        let [x, y, z] = heliocentric(Body::Pluto, 0.0).unwrap();
        let r = (x * x + y * y + z * z).sqrt();
        assert!((29.0..50.0).contains(&r));
    }
}
