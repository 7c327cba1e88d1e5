//! Design-moment search.
//!
//! Finds the instant before birth at which the Sun stood a fixed arc
//! (88° by default) behind its birth longitude. Coarse backward scan plus
//! bisection on f(t) = normalize(sun(t) − target), wrapped to [-180, 180)
//! so the zero crossing is the target longitude.

use rave_bodygraph::{Body, normalize_360, normalize_pm180};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ephemeris::Ephemeris;
use crate::error::EphemError;

/// Configuration for [`design_julian_date`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSearchConfig {
    /// Solar arc between design and birth, degrees.
    pub arc_deg: f64,
    /// Coarse scan step in days.
    pub step_size_days: f64,
    /// How far back from birth to scan, days.
    pub max_scan_days: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Bisection stops once the bracket is narrower than this, days.
    pub convergence_days: f64,
}

impl Default for DesignSearchConfig {
    fn default() -> Self {
        Self {
            arc_deg: 88.0,
            step_size_days: 1.0,
            max_scan_days: 120.0,
            max_iterations: 60,
            convergence_days: 1e-7,
        }
    }
}

impl DesignSearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.arc_deg.is_finite() || self.arc_deg <= 0.0 || self.arc_deg >= 180.0 {
            return Err("arc_deg must be in (0, 180)");
        }
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days < self.step_size_days {
            return Err("max_scan_days must be at least step_size_days");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

/// Sign change that is a real zero crossing and not the ±180 wrap.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Julian Date (UT) at which the Sun was `config.arc_deg` behind its
/// longitude at `birth_jd_ut`.
pub fn design_julian_date<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth_jd_ut: f64,
    config: &DesignSearchConfig,
) -> Result<f64, EphemError> {
    config.validate().map_err(EphemError::InvalidConfig)?;

    let birth_sun = ephemeris.longitude(Body::Sun, birth_jd_ut)?;
    let target = normalize_360(birth_sun - config.arc_deg);
    let separation = |jd: f64| -> Result<f64, EphemError> {
        Ok(normalize_pm180(ephemeris.longitude(Body::Sun, jd)? - target))
    };
    debug!(birth_jd_ut, birth_sun, target, "design search");

    let max_steps = (config.max_scan_days / config.step_size_days).ceil() as usize;
    let mut t_prev = birth_jd_ut;
    let mut f_prev = separation(t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev - config.step_size_days;
        let f_curr = separation(t_curr)?;
        if f_curr == 0.0 {
            return Ok(t_curr);
        }
        if is_genuine_crossing(f_prev, f_curr) {
            return bisect(&separation, t_curr, f_curr, t_prev, config);
        }
        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(EphemError::NoConvergence(
        "solar arc not reached within max_scan_days",
    ))
}

/// Refine a bracketed crossing, `t_a < t_b`.
fn bisect<F>(
    separation: &F,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &DesignSearchConfig,
) -> Result<f64, EphemError>
where
    F: Fn(f64) -> Result<f64, EphemError>,
{
    let mut iterations = 0;
    while iterations < config.max_iterations && (t_b - t_a).abs() >= config.convergence_days {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = separation(t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        iterations += 1;
    }
    let jd = 0.5 * (t_a + t_b);
    debug!(jd, iterations, bracket_days = t_b - t_a, "design search converged");
    Ok(jd)
}
