//! ΔT = TT − UT estimates.
//!
//! Polynomial expressions of Espenak & Meeus (2006), as published with the
//! NASA Five Millennium Canon of Solar Eclipses. Outside −500..2150 the
//! long-term parabola of Morrison & Stephenson is used.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Mean days per Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal year of a Julian Date (close enough for ΔT interpolation).
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Evaluate a polynomial with coefficients in ascending order.
fn poly(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// ΔT in seconds for a Julian Date.
pub fn delta_t_seconds(jd: f64) -> f64 {
    let y = decimal_year(jd);
    match y {
        y if y < -500.0 => long_term(y),
        y if y < 500.0 => poly(
            y / 100.0,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        ),
        y if y < 1600.0 => poly(
            (y - 1000.0) / 100.0,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        ),
        y if y < 1700.0 => poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
        y if y < 1800.0 => poly(
            y - 1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        ),
        y if y < 1860.0 => poly(
            y - 1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        ),
        y if y < 1900.0 => poly(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        ),
        y if y < 1920.0 => poly(
            y - 1900.0,
            &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
        ),
        y if y < 1941.0 => poly(y - 1920.0, &[21.20, 0.84493, -0.076100, 0.0020936]),
        y if y < 1961.0 => poly(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
        y if y < 1986.0 => poly(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
        y if y < 2005.0 => poly(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        ),
        y if y < 2050.0 => poly(y - 2000.0, &[62.92, 0.32217, 0.005589]),
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Convert a UT Julian Date to Terrestrial Time.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn delta_t_at_j2000() {
        let dt = delta_t_seconds(J2000_JD);
        assert!((dt - 63.86).abs() < 0.1, "ΔT = {dt}");
    }

    #[test]
    fn delta_t_1968() {
        // observed value ≈ 38.3 s
        let dt = delta_t_seconds(calendar_to_jd(1968, 2, 21.0));
        assert!((dt - 38.3).abs() < 1.0, "ΔT = {dt}");
    }

    #[test]
    fn delta_t_1935() {
        // observed value ≈ 23.9 s
        let dt = delta_t_seconds(calendar_to_jd(1935, 7, 6.0));
        assert!((dt - 23.9).abs() < 1.0, "ΔT = {dt}");
    }

    #[test]
    fn delta_t_continuous_at_2050() {
        let before = delta_t_seconds(calendar_to_jd(2049, 12, 31.0));
        let after = delta_t_seconds(calendar_to_jd(2050, 1, 2.0));
        assert!((before - after).abs() < 1.0);
    }

    #[test]
    fn tt_is_later_than_ut_in_modern_era() {
        let tt = jd_ut_to_tt(J2000_JD);
        assert!(tt > J2000_JD);
        assert!((tt - J2000_JD) * SECONDS_PER_DAY < 70.0);
    }
}
