//! Nutation in longitude from the leading IAU 2000B lunisolar terms.
//!
//! Only Δψ is needed for apparent longitudes. The 10 largest terms of
//! IERS Conventions 2010 Table 5.3b stay within 0.1″ of the full series.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0. Polynomials from IERS
/// Conventions 2010, Table 5.2e.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // mean anomaly of the Moon
    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    // mean anomaly of the Sun
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    // mean argument of latitude of the Moon
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    // mean elongation of the Moon from the Sun
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    // mean longitude of the Moon's ascending node
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// `[nl, nl', nF, nD, nΩ, S, S']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
const LONGITUDE_TERMS: [[i64; 7]; 10] = [
    [ 0,  0, 0,  0, 1, -172064161, -174666],
    [ 0,  0, 2, -2, 2,  -13170906, -1675],
    [ 0,  0, 2,  0, 2,   -2276413,  -234],
    [ 0,  0, 0,  0, 2,    2074554,   207],
    [ 0,  1, 0,  0, 0,    1475877, -3633],
    [ 0,  1, 2, -2, 2,    -516821,  1226],
    [ 1,  0, 0,  0, 0,     711159,    73],
    [ 0,  0, 2,  0, 1,    -387298,  -367],
    [ 1,  0, 2,  0, 2,    -301461,   -36],
    [ 0, -1, 2, -2, 2,     215829,  -494],
];

/// Nutation in longitude Δψ in arcseconds.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let sum_0_1uas: f64 = LONGITUDE_TERMS
        .iter()
        .map(|row| {
            let arg: f64 = (0..5).map(|k| row[k] as f64 * args[k]).sum();
            (row[5] as f64 + row[6] as f64 * t) * arg.sin()
        })
        .sum();
    sum_0_1uas * 1e-7
}

/// Nutation in longitude Δψ in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_longitude_arcsec(t) / 3600.0
}
