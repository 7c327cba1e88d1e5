//! The serializable chart record.

use rave_bodygraph::{Channel, Features, GateActivation, gate_center};
use serde::Serialize;

/// Top-level keys of a serialized [`ChartResult`], in output order.
pub const AVAILABLE_FEATURES: [&str; 17] = [
    "birth_date",
    "design_date",
    "energy_type",
    "strategy",
    "authority",
    "authority_name",
    "profile",
    "incarnation_cross",
    "cross_type",
    "defined_centers",
    "undefined_centers",
    "split",
    "variables",
    "active_gates",
    "active_channels",
    "personality_gates",
    "design_gates",
];

/// One body's placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateEntry {
    pub gate: u8,
    pub line: u8,
    pub body: &'static str,
    /// Center code of the gate.
    pub center: &'static str,
}

impl From<&GateActivation> for GateEntry {
    fn from(a: &GateActivation) -> Self {
        Self {
            gate: a.gate,
            line: a.line,
            body: a.body.name(),
            center: gate_center(a.gate).map_or("", |c| c.code()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEntry {
    /// `"a/b"` in table orientation.
    pub channel: String,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<&'static str>,
}

impl From<&Channel> for ChannelEntry {
    fn from(c: &Channel) -> Self {
        Self {
            channel: c.label(),
            name: c.name,
            description: c.description,
            circuit: c.circuit.map(|c| c.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableArrows {
    pub right_up: &'static str,
    pub right_down: &'static str,
    pub left_up: &'static str,
    pub left_down: &'static str,
}

/// A complete chart.
///
/// The typed [`Features`] and both Julian Dates travel alongside the
/// string fields and are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub birth_date: String,
    pub design_date: String,
    pub energy_type: &'static str,
    pub strategy: &'static str,
    pub authority: &'static str,
    pub authority_name: &'static str,
    pub profile: String,
    pub incarnation_cross: String,
    pub cross_type: &'static str,
    pub defined_centers: Vec<&'static str>,
    pub undefined_centers: Vec<&'static str>,
    pub split: usize,
    pub variables: VariableArrows,
    pub active_gates: Vec<u8>,
    pub active_channels: Vec<ChannelEntry>,
    pub personality_gates: Vec<GateEntry>,
    pub design_gates: Vec<GateEntry>,

    #[serde(skip)]
    pub birth_jd: Option<f64>,
    #[serde(skip)]
    pub design_jd: Option<f64>,
    #[serde(skip)]
    pub features: Features,
}

impl ChartResult {
    pub(crate) fn assemble(
        birth_date: String,
        design_date: String,
        personality: &[GateActivation; 13],
        design: &[GateActivation; 13],
        features: Features,
    ) -> Self {
        let bg = &features.bodygraph;
        let v = features.variables;
        Self {
            birth_date,
            design_date,
            energy_type: features.energy_type.name(),
            strategy: features.energy_type.strategy(),
            authority: features.authority.code(),
            authority_name: features.authority.label(),
            profile: features.profile.to_string(),
            incarnation_cross: features.incarnation_cross.to_string(),
            cross_type: features.incarnation_cross.cross_type.code(),
            defined_centers: bg.defined_centers().codes(),
            undefined_centers: bg.undefined_centers().codes(),
            split: features.split,
            variables: VariableArrows {
                right_up: v.right_up.name(),
                right_down: v.right_down.name(),
                left_up: v.left_up.name(),
                left_down: v.left_down.name(),
            },
            active_gates: bg.active_gates().to_vec(),
            active_channels: bg.channels().iter().map(ChannelEntry::from).collect(),
            personality_gates: personality.iter().map(GateEntry::from).collect(),
            design_gates: design.iter().map(GateEntry::from).collect(),
            birth_jd: None,
            design_jd: None,
            features,
        }
    }

    /// Channel labels, `"a/b"`.
    pub fn channel_labels(&self) -> Vec<&str> {
        self.active_channels.iter().map(|c| c.channel.as_str()).collect()
    }
}
