//! Lunar north node longitude, mean or true.
//!
//! Mean node: the fifth Delaunay argument Ω. True node: Ω plus the five
//! largest short-period terms of Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 47.

use rave_bodygraph::normalize_360;
use serde::{Deserialize, Serialize};

use crate::nutation::fundamental_arguments;

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean plus short-period corrections.
    #[default]
    True,
}

pub const ALL_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// Mean ascending node, degrees [0, 360), mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// Short-period correction true − mean, in degrees.
pub fn true_node_correction_deg(t: f64) -> f64 {
    let [l, lp, f, d, _] = fundamental_arguments(t);
    -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * lp.sin() + 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (l - f)).sin()
}

/// True ascending node, degrees [0, 360), mean equinox of date.
pub fn true_node_deg(t: f64) -> f64 {
    normalize_360(mean_node_deg(t) + true_node_correction_deg(t))
}

/// Ascending node for the given mode.
pub fn node_deg(mode: NodeMode, t: f64) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}
