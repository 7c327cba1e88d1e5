//! Osculating orbital elements and Kepler's equation.

/// Sine of an angle in degrees.
pub(crate) fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub(crate) fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Maximum Newton iterations for Kepler's equation.
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Convergence threshold for the eccentric anomaly, degrees.
const KEPLER_TOLERANCE_DEG: f64 = 1e-9;

/// Solve M = E − e·sin E for the eccentric anomaly E. Angles in degrees.
pub(crate) fn solve_kepler(mean_anomaly_deg: f64, e: f64) -> f64 {
    let m = mean_anomaly_deg.rem_euclid(360.0);
    let mut ecc = m + (e * sin_deg(m) * (1.0 + e * cos_deg(m))).to_degrees();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let next = ecc - (ecc - (e * sin_deg(ecc)).to_degrees() - m) / (1.0 - e * cos_deg(ecc));
        let done = (next - ecc).abs() < KEPLER_TOLERANCE_DEG;
        ecc = next;
        if done {
            break;
        }
    }
    ecc
}

/// Elements referred to the ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrbitalElements {
    /// Longitude of the ascending node N, degrees.
    pub node: f64,
    /// Inclination i, degrees.
    pub inclination: f64,
    /// Argument of perihelion w, degrees.
    pub perihelion: f64,
    /// Semi-major axis a, AU (Earth radii for the Moon).
    pub semi_major_axis: f64,
    /// Eccentricity e.
    pub eccentricity: f64,
    /// Mean anomaly M, degrees.
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    /// Rectangular ecliptic coordinates of the body relative to its primary.
    pub fn rectangular(&self) -> [f64; 3] {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let ecc = solve_kepler(self.mean_anomaly, e);
        let xv = a * (cos_deg(ecc) - e);
        let yv = a * (1.0 - e * e).sqrt() * sin_deg(ecc);
        let v = yv.atan2(xv).to_degrees();
        let r = xv.hypot(yv);

        let (n, i, u) = (self.node, self.inclination, v + self.perihelion);
        [
            r * (cos_deg(n) * cos_deg(u) - sin_deg(n) * sin_deg(u) * cos_deg(i)),
            r * (sin_deg(n) * cos_deg(u) + cos_deg(n) * sin_deg(u) * cos_deg(i)),
            r * sin_deg(u) * sin_deg(i),
        ]
    }
}

/// (longitude °, latitude °, distance) of a rectangular vector.
pub(crate) fn to_spherical(xyz: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = xyz;
    let r = (x * x + y * y + z * z).sqrt();
    (y.atan2(x).to_degrees(), (z / r).asin().to_degrees(), r)
}

/// Rectangular vector from (longitude °, latitude °, distance).
pub(crate) fn from_spherical(lon: f64, lat: f64, r: f64) -> [f64; 3] {
    [
        r * cos_deg(lon) * cos_deg(lat),
        r * sin_deg(lon) * cos_deg(lat),
        r * sin_deg(lat),
    ]
}
