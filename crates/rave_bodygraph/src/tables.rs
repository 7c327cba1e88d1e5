//! Static knowledge base: gate wheel, channel adjacency, meanings,
//! circuits, cross types, strategies and authority labels.
//!
//! Channel data is written once in a single orientation below. The
//! doubly-oriented lookup maps are expanded from it on first use and
//! shared read-only for the life of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::authority::Authority;
use crate::center::Center;
use crate::circuit::Circuit;
use crate::energy_type::EnergyType;
use crate::profile::CrossType;
use crate::util::normalize_360;

/// Offset of the gate wheel from 0° ecliptic longitude.
pub const WHEEL_OFFSET_DEG: f64 = 58.0;

/// Arc of one gate (360 / 64).
pub const GATE_ARC_DEG: f64 = 5.625;

/// Gates in wheel order; position 0 starts at 302° (= -58°).
pub const GATE_ORDER: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, 27, 24, 2, 23, 8, 20, 16, 35,
    45, 12, 15, 52, 39, 53, 62, 56, 31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50,
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// One canonical channel record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    /// Gates in table orientation; `gates.0` sits in `centers.0`.
    pub gates: (u8, u8),
    pub centers: (Center, Center),
    pub name: &'static str,
    pub description: &'static str,
}

const fn ch(
    a: u8,
    b: u8,
    ca: Center,
    cb: Center,
    name: &'static str,
    description: &'static str,
) -> ChannelSpec {
    ChannelSpec {
        gates: (a, b),
        centers: (ca, cb),
        name,
        description,
    }
}

use Center::{Ajna as AA, G as GC, Head as HD, Heart as HT, Root as RT, Sacral as SL};
use Center::{SolarPlexus as SP, Spleen as SN, Throat as TT};

/// The 36 channels.
pub const CHANNELS: [ChannelSpec; 36] = [
    ch(64, 47, HD, AA, "Abstraction", "D. of mental activity and clarity"),
    ch(61, 24, HD, AA, "Awereness", "D. of a thinker"),
    ch(63, 4, HD, AA, "Logic", "D. of mental muse? mixed with doubt"),
    ch(17, 62, AA, TT, "Acceptance", "D. of an organizational being"),
    ch(43, 23, AA, TT, "Structuring", "D. of individuality"),
    ch(11, 56, AA, TT, "Curiosity", "D. of a searcher"),
    ch(16, 48, TT, SN, "The Wave Length", "D. of a talent"),
    ch(20, 57, TT, SN, "The Brain Wave", "D. of penetrating awareness"),
    ch(20, 34, TT, SL, "Charisma", "D. where thoughts must become deeds"),
    ch(20, 10, TT, GC, "Awakening", "D. of commitment to higher principles"),
    ch(31, 7, TT, GC, "The Alpha", "For 'good' or 'bad', a d. of leadership"),
    ch(8, 1, TT, GC, "Inspiration", "The creative role model"),
    ch(33, 13, TT, GC, "The Prodigal", "The d. of witness"),
    ch(45, 21, TT, HT, "Money", "A d. of a materialist"),
    ch(35, 36, TT, SP, "Transitoriness", "A d. of a 'Jack of all Trades'"),
    ch(12, 22, TT, SP, "Openness", "A d, of a social being"),
    ch(32, 54, SN, RT, "Transformation", "D. of being driven"),
    ch(28, 38, SN, RT, "Struggle", "D. of stubbornness "),
    ch(57, 34, SN, SL, "Power", "A d. of an archetype"),
    ch(50, 27, SN, SL, "Preservation", "A. d. of custodianship"),
    ch(18, 58, SN, RT, "Judgment", "D. of insatiability"),
    ch(10, 34, GC, SL, "Exploration", "A d. of following one's convictions"),
    ch(15, 5, GC, SL, "Rythm", "A d. of being in the flow"),
    ch(2, 14, GC, SL, "The Beat", "A d. of being the keeper of keys"),
    ch(46, 29, GC, SL, "Discovery", "A d. of succeding where others fail"),
    ch(10, 57, GC, SN, "Perfected Form", "A d. of survival"),
    ch(25, 51, GC, HT, "Initiation", "A d. of needing to be first"),
    ch(59, 6, SL, SP, "Mating", "A d. focused on reproduction"),
    ch(42, 53, SL, RT, "Maturation", "A d. of balanced developement,cyclic"),
    ch(3, 60, SL, RT, "Mutation", "Energy which fluctuates and initiates, pulse"),
    ch(9, 52, SL, RT, "Concentration", "A d. of determination, focused"),
    ch(26, 44, HT, SN, "Surrender", "A d. of a transmitter"),
    ch(40, 37, HT, SP, "Community", "A d. of being part, seeking a whole"),
    ch(49, 19, SP, RT, "Synthesis", "A d. of being sensitive"),
    ch(55, 39, SP, RT, "Emoting", "A d. of moodiness"),
    ch(30, 41, SP, RT, "Recognition", "A d. of focused energy"),
];

/// Channel gate pairs per circuit.
const CIRCUITS: [(Circuit, &[(u8, u8)]); 7] = [
    (
        Circuit::Knowledge,
        &[
            (24, 61),
            (23, 43),
            (1, 8),
            (2, 14),
            (3, 60),
            (39, 55),
            (12, 22),
            (28, 38),
            (20, 57),
        ],
    ),
    (Circuit::Centre, &[(10, 34), (25, 51)]),
    (
        Circuit::Realize,
        &[(4, 63), (17, 62), (7, 31), (5, 15), (9, 52), (18, 58), (16, 48)],
    ),
    (
        Circuit::Sense,
        &[(47, 64), (11, 56), (13, 33), (29, 46), (42, 53), (30, 41), (35, 36)],
    ),
    (Circuit::Ego, &[(32, 54), (26, 44), (19, 49), (37, 40), (21, 45)]),
    (Circuit::Protect, &[(6, 59), (27, 50)]),
    (Circuit::Integration, &[(10, 20), (20, 34), (34, 57), (10, 57)]),
];

/// (personality line, design line) → cross type, one orientation.
const CROSS_TYPES: [((u8, u8), CrossType); 12] = [
    ((1, 3), CrossType::RightAngle),
    ((1, 4), CrossType::RightAngle),
    ((2, 4), CrossType::RightAngle),
    ((2, 5), CrossType::RightAngle),
    ((3, 5), CrossType::RightAngle),
    ((3, 6), CrossType::RightAngle),
    ((4, 6), CrossType::RightAngle),
    ((4, 1), CrossType::Juxtaposition),
    ((5, 1), CrossType::LeftAngle),
    ((5, 2), CrossType::LeftAngle),
    ((6, 2), CrossType::LeftAngle),
    ((6, 3), CrossType::LeftAngle),
];

/// The expanded lookup structure.
#[derive(Debug)]
pub struct Tables {
    /// (a, b) and (b, a) → index into [`CHANNELS`].
    channel_index: HashMap<(u8, u8), usize>,
    /// Gate → partner gates, in table order. Index 0 unused.
    partners: Vec<Vec<u8>>,
    /// Gate → center. Index 0 unused.
    gate_center: [Option<Center>; 65],
    /// Gate → wheel position.
    gate_position: [Option<usize>; 65],
    /// (a, b) and (b, a) → circuit.
    circuits: HashMap<(u8, u8), Circuit>,
    cross_types: HashMap<(u8, u8), CrossType>,
}

impl Tables {
    fn build() -> Self {
        let mut channel_index = HashMap::with_capacity(CHANNELS.len() * 2);
        let mut partners = vec![Vec::new(); 65];
        let mut gate_center = [None; 65];
        for (i, spec) in CHANNELS.iter().enumerate() {
            let (a, b) = spec.gates;
            channel_index.insert((a, b), i);
            channel_index.insert((b, a), i);
            partners[a as usize].push(b);
            partners[b as usize].push(a);
            gate_center[a as usize] = Some(spec.centers.0);
            gate_center[b as usize] = Some(spec.centers.1);
        }

        let mut gate_position = [None; 65];
        for (pos, &gate) in GATE_ORDER.iter().enumerate() {
            gate_position[gate as usize] = Some(pos);
        }

        let mut circuits = HashMap::with_capacity(CHANNELS.len() * 2);
        for (circuit, pairs) in CIRCUITS {
            for &(a, b) in pairs {
                circuits.insert((a, b), circuit);
                circuits.insert((b, a), circuit);
            }
        }

        Self {
            channel_index,
            partners,
            gate_center,
            gate_position,
            circuits,
            cross_types: CROSS_TYPES.into_iter().collect(),
        }
    }

    pub fn channel(&self, a: u8, b: u8) -> Option<&'static ChannelSpec> {
        self.channel_index.get(&(a, b)).map(|&i| &CHANNELS[i])
    }

    /// Index of the channel in [`CHANNELS`].
    pub fn channel_index(&self, a: u8, b: u8) -> Option<usize> {
        self.channel_index.get(&(a, b)).copied()
    }

    pub fn partners(&self, gate: u8) -> &[u8] {
        self.partners
            .get(gate as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn gate_center(&self, gate: u8) -> Option<Center> {
        self.gate_center.get(gate as usize).copied().flatten()
    }

    pub fn gate_position(&self, gate: u8) -> Option<usize> {
        self.gate_position.get(gate as usize).copied().flatten()
    }

    pub fn circuit(&self, a: u8, b: u8) -> Option<Circuit> {
        self.circuits.get(&(a, b)).copied()
    }

    /// Forward lookup, then the reversed pair, then `Unknown`.
    pub fn cross_type(&self, a: u8, b: u8) -> CrossType {
        self.cross_types
            .get(&(a, b))
            .or_else(|| self.cross_types.get(&(b, a)))
            .copied()
            .unwrap_or(CrossType::Unknown)
    }

    /// Whether the ordered pair is itself a table entry.
    pub fn has_cross_entry(&self, a: u8, b: u8) -> bool {
        self.cross_types.contains_key(&(a, b))
    }
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// The process-wide tables, built on first call.
pub fn tables() -> &'static Tables {
    &TABLES
}

/// Gate at wheel position `i` (taken modulo 64).
pub fn gate_at_position(i: usize) -> u8 {
    GATE_ORDER[i % 64]
}

/// Wheel position of a gate, `None` outside 1..=64.
pub fn gate_position(gate: u8) -> Option<usize> {
    tables().gate_position(gate)
}

/// Ecliptic longitude span `[start, end)` of a gate. `end` may be smaller
/// than `start` for the gate that straddles 0°.
pub fn gate_longitude_span(gate: u8) -> Option<(f64, f64)> {
    let pos = gate_position(gate)?;
    let start = normalize_360(pos as f64 * GATE_ARC_DEG - WHEEL_OFFSET_DEG);
    Some((start, normalize_360(start + GATE_ARC_DEG)))
}

pub fn channel(a: u8, b: u8) -> Option<&'static ChannelSpec> {
    tables().channel(a, b)
}

/// Centers joined by a channel, in the orientation asked for.
pub fn channel_centers(a: u8, b: u8) -> Option<(Center, Center)> {
    let spec = channel(a, b)?;
    if spec.gates.0 == a {
        Some(spec.centers)
    } else {
        Some((spec.centers.1, spec.centers.0))
    }
}

/// (name, description) of a channel.
pub fn channel_meaning(a: u8, b: u8) -> Option<(&'static str, &'static str)> {
    channel(a, b).map(|s| (s.name, s.description))
}

/// Gates that form a channel with `gate`.
pub fn partners(gate: u8) -> &'static [u8] {
    tables().partners(gate)
}

pub fn gate_center(gate: u8) -> Option<Center> {
    tables().gate_center(gate)
}

pub fn circuit(a: u8, b: u8) -> Option<Circuit> {
    tables().circuit(a, b)
}

pub fn cross_type(personality_line: u8, design_line: u8) -> CrossType {
    tables().cross_type(personality_line, design_line)
}

pub const fn strategy(energy_type: EnergyType) -> &'static str {
    match energy_type {
        EnergyType::Generator => "Wait to respond",
        EnergyType::ManifestingGenerator => "Wait to respond, then inform",
        EnergyType::Projector => "Wait for invitation",
        EnergyType::Manifestor => "Inform before action",
        EnergyType::Reflector => "Wait 28 days for clarity",
    }
}

/// Label for an authority code (`"SP"`, `"HT_GC"`, `"lunar"`, ...).
pub fn authority_label(code: &str) -> Option<&'static str> {
    Authority::from_code(code).map(Authority::label)
}
