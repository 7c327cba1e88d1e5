//! Active channels and defined centers of a chart.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::center::{Center, CenterSet};
use crate::circuit::Circuit;
use crate::gate::GateActivation;
use crate::tables::{CHANNELS, ChannelSpec, partners, tables};

/// An active channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Gates in table orientation.
    pub gates: (u8, u8),
    /// Centers of `gates.0` and `gates.1`.
    pub centers: (Center, Center),
    pub name: &'static str,
    pub description: &'static str,
    pub circuit: Option<Circuit>,
}

impl Channel {
    fn from_spec(spec: &ChannelSpec) -> Self {
        let (a, b) = spec.gates;
        Self {
            gates: spec.gates,
            centers: spec.centers,
            name: spec.name,
            description: spec.description,
            circuit: tables().circuit(a, b),
        }
    }

    /// `"gate/partner"` in table orientation.
    pub fn label(&self) -> String {
        format!("{}/{}", self.gates.0, self.gates.1)
    }

    /// Gates as (smaller, larger).
    pub fn canonical(&self) -> (u8, u8) {
        let (a, b) = self.gates;
        (a.min(b), a.max(b))
    }

    pub fn touches(&self, center: Center) -> bool {
        self.centers.0 == center || self.centers.1 == center
    }

    /// Whether this channel has one end in `a` and the other in `b`.
    pub fn joins(&self, a: Center, b: Center) -> bool {
        self.centers == (a, b) || self.centers == (b, a)
    }

    /// The center at the far end from `center`, if the channel touches it.
    pub fn other_end(&self, center: Center) -> Option<Center> {
        if self.centers.0 == center {
            Some(self.centers.1)
        } else if self.centers.1 == center {
            Some(self.centers.0)
        } else {
            None
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.gates.0, self.gates.1, self.name)
    }
}

/// The channel/center graph assembled from a set of activated gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bodygraph {
    channels: Vec<Channel>,
    defined: CenterSet,
    active_gates: Vec<u8>,
}

impl Bodygraph {
    /// Build from gate activations of either polarity.
    ///
    /// A channel is active when both of its gates appear anywhere among the
    /// activations. Channels come out once each, in table order.
    pub fn build(activations: &[GateActivation]) -> Self {
        Self::from_gates(activations.iter().map(|a| a.gate))
    }

    /// Build from bare gate numbers. Numbers outside 1..=64 are ignored.
    pub fn from_gates<I: IntoIterator<Item = u8>>(gates: I) -> Self {
        let mut present = [false; 65];
        for g in gates {
            if (1..=64).contains(&g) {
                present[g as usize] = true;
            }
        }

        let t = tables();
        let mut found = BTreeSet::new();
        for g in (1..=64u8).filter(|&g| present[g as usize]) {
            for &p in partners(g) {
                if present[p as usize] {
                    if let Some(idx) = t.channel_index(g, p) {
                        found.insert(idx);
                    }
                }
            }
        }

        let channels: Vec<Channel> = found
            .into_iter()
            .map(|i| Channel::from_spec(&CHANNELS[i]))
            .collect();
        let defined = channels
            .iter()
            .flat_map(|c| [c.centers.0, c.centers.1])
            .collect();
        let active_gates = (1..=64u8).filter(|&g| present[g as usize]).collect();

        Self {
            channels,
            defined,
            active_gates,
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn defined_centers(&self) -> CenterSet {
        self.defined
    }

    pub fn undefined_centers(&self) -> CenterSet {
        self.defined.complement()
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.defined.contains(center)
    }

    /// Distinct activated gates, ascending.
    pub fn active_gates(&self) -> &[u8] {
        &self.active_gates
    }

    /// Defined centers minus active channels, floored at zero.
    ///
    /// An Euler-characteristic estimate of the number of disconnected
    /// definition groups, not a component count.
    pub fn split(&self) -> usize {
        self.defined.len().saturating_sub(self.channels.len())
    }
}
