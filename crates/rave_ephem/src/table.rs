//! Precomputed longitude tables.
//!
//! A [`TableEphemeris`] answers queries from (julian date, body) samples,
//! typically loaded from TOML:
//!
//! ```toml
//! tolerance_days = 1e-6
//! interpolate = true
//!
//! [[epoch]]
//! jd = 2439907.84375
//! [epoch.longitudes]
//! Sun = 331.7702
//! Moon = 14.25
//! ```
//!
//! A query within `tolerance_days` of a sample returns it directly. Otherwise,
//! when interpolation is on, the two nearest samples bracketing the date are
//! joined linearly along the shorter arc.

use std::collections::BTreeMap;
use std::path::Path;

use rave_bodygraph::{Body, normalize_360, normalize_pm180};
use serde::Deserialize;
use tracing::debug;

use crate::ephemeris::Ephemeris;
use crate::error::EphemError;

const DEFAULT_TOLERANCE_DAYS: f64 = 1e-6;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    tolerance_days: Option<f64>,
    interpolate: Option<bool>,
    #[serde(default)]
    epoch: Vec<EpochFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EpochFile {
    jd: f64,
    #[serde(default)]
    longitudes: BTreeMap<String, f64>,
}

/// Longitude provider backed by sampled values.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEphemeris {
    /// Per body, samples sorted by julian date.
    samples: [Vec<(f64, f64)>; 13],
    tolerance_days: f64,
    interpolate: bool,
}

impl Default for TableEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEphemeris {
    /// Empty table, exact lookup only.
    pub fn new() -> Self {
        Self {
            samples: Default::default(),
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            interpolate: false,
        }
    }

    pub fn with_tolerance(mut self, tolerance_days: f64) -> Self {
        self.tolerance_days = tolerance_days;
        self
    }

    pub fn with_interpolation(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    pub fn tolerance_days(&self) -> f64 {
        self.tolerance_days
    }

    pub fn interpolates(&self) -> bool {
        self.interpolate
    }

    /// Number of stored (jd, body) samples.
    pub fn len(&self) -> usize {
        self.samples.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a sample, replacing any existing one at the same date.
    pub fn insert(&mut self, jd: f64, body: Body, longitude: f64) {
        let series = &mut self.samples[body.index()];
        let lon = normalize_360(longitude);
        match series.binary_search_by(|(t, _)| t.total_cmp(&jd)) {
            Ok(i) => series[i].1 = lon,
            Err(i) => series.insert(i, (jd, lon)),
        }
    }

    /// Store all 13 longitudes of one instant, in [`rave_bodygraph::ALL_BODIES`] order.
    pub fn insert_all(&mut self, jd: f64, longitudes: &[f64; 13]) {
        for body in rave_bodygraph::ALL_BODIES {
            self.insert(jd, body, longitudes[body.index()]);
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, EphemError> {
        let file: TableFile =
            toml::from_str(source).map_err(|e| EphemError::TableParse(e.to_string()))?;

        let mut table = Self::new();
        if let Some(tol) = file.tolerance_days {
            if !tol.is_finite() || tol < 0.0 {
                return Err(EphemError::InvalidConfig("tolerance_days must be >= 0"));
            }
            table.tolerance_days = tol;
        }
        table.interpolate = file.interpolate.unwrap_or(false);

        for epoch in file.epoch {
            if !epoch.jd.is_finite() {
                return Err(EphemError::TableParse(format!("non-finite jd {}", epoch.jd)));
            }
            for (name, lon) in epoch.longitudes {
                let body: Body = name
                    .parse()
                    .map_err(|e: rave_bodygraph::UnknownBody| EphemError::TableParse(e.to_string()))?;
                if !lon.is_finite() {
                    return Err(EphemError::TableParse(format!(
                        "non-finite longitude for {name} at JD {}",
                        epoch.jd
                    )));
                }
                table.insert(epoch.jd, body, lon);
            }
        }
        debug!(samples = table.len(), interpolate = table.interpolate, "loaded longitude table");
        Ok(table)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EphemError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| EphemError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    fn lookup(&self, body: Body, jd: f64) -> Option<f64> {
        let series = &self.samples[body.index()];
        let i = series.partition_point(|(t, _)| *t < jd);

        // nearest neighbour on either side
        let nearest = [i.checked_sub(1), Some(i)]
            .into_iter()
            .flatten()
            .filter_map(|k| series.get(k))
            .min_by(|a, b| (a.0 - jd).abs().total_cmp(&(b.0 - jd).abs()))?;
        if (nearest.0 - jd).abs() <= self.tolerance_days {
            return Some(nearest.1);
        }

        if !self.interpolate || i == 0 || i >= series.len() {
            return None;
        }
        let (t0, l0) = series[i - 1];
        let (t1, l1) = series[i];
        let frac = (jd - t0) / (t1 - t0);
        Some(normalize_360(l0 + frac * normalize_pm180(l1 - l0)))
    }
}

impl Ephemeris for TableEphemeris {
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        self.lookup(body, jd_ut)
            .ok_or(EphemError::MissingLongitude { body, jd: jd_ut })
    }
}
