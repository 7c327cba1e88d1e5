//! Longitude → gate / line / color / tone / base.
//!
//! The wheel starts 58° before 0° longitude. Each gate spans 5.625° and is
//! subdivided into 6 lines, each line into 6 colors, each color into 6
//! tones and each tone into 5 bases.

use crate::body::{Body, Polarity};
use crate::tables::{WHEEL_OFFSET_DEG, gate_at_position};
use crate::util::normalize_360;

const LINES_PER_CIRCLE: f64 = 64.0 * 6.0;
const COLORS_PER_CIRCLE: f64 = LINES_PER_CIRCLE * 6.0;
const TONES_PER_CIRCLE: f64 = COLORS_PER_CIRCLE * 6.0;
const BASES_PER_CIRCLE: f64 = TONES_PER_CIRCLE * 5.0;

/// Discrete wheel coordinates of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GatePosition {
    /// Gate number (1..=64).
    pub gate: u8,
    /// Line (1..=6).
    pub line: u8,
    /// Color (1..=6).
    pub color: u8,
    /// Tone (1..=6).
    pub tone: u8,
    /// Base (1..=5).
    pub base: u8,
}

/// floor(f * n) mod m + 1, with f in [0, 1).
fn subdivision(f: f64, n: f64, m: u64) -> u8 {
    ((f * n).floor() as u64 % m + 1) as u8
}

/// Map an ecliptic longitude in degrees to wheel coordinates.
///
/// Any finite longitude is accepted; it is reduced mod 360 first.
pub fn map_longitude(longitude_deg: f64) -> GatePosition {
    let angle = normalize_360(longitude_deg + WHEEL_OFFSET_DEG);
    let f = angle / 360.0;
    let position = ((f * 64.0).floor() as usize).min(63);
    GatePosition {
        gate: gate_at_position(position),
        line: subdivision(f, LINES_PER_CIRCLE, 6),
        color: subdivision(f, COLORS_PER_CIRCLE, 6),
        tone: subdivision(f, TONES_PER_CIRCLE, 6),
        base: subdivision(f, BASES_PER_CIRCLE, 5),
    }
}

/// One body's gate activation for one polarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateActivation {
    pub body: Body,
    pub polarity: Polarity,
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    pub gate: u8,
    pub line: u8,
    pub color: u8,
    pub tone: u8,
    pub base: u8,
}

impl GateActivation {
    pub fn position(&self) -> GatePosition {
        GatePosition {
            gate: self.gate,
            line: self.line,
            color: self.color,
            tone: self.tone,
            base: self.base,
        }
    }
}

/// Build the activation of `body` at `longitude_deg`.
///
/// The longitude must already be the body's own (Earth and South Node
/// already opposed to Sun and North Node).
pub fn activate(body: Body, polarity: Polarity, longitude_deg: f64) -> GateActivation {
    let p = map_longitude(longitude_deg);
    GateActivation {
        body,
        polarity,
        longitude: normalize_360(longitude_deg),
        gate: p.gate,
        line: p.line,
        color: p.color,
        tone: p.tone,
        base: p.base,
    }
}
