//! Channel circuits and their groupings.

use std::fmt::{Display, Formatter};

/// The circuit a channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Circuit {
    Knowledge,
    Centre,
    Realize,
    Sense,
    Ego,
    Protect,
    Integration,
}

/// Higher-level circuit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitGroup {
    Individual,
    Collective,
    Tribal,
    Integration,
}

pub const ALL_CIRCUITS: [Circuit; 7] = [
    Circuit::Knowledge,
    Circuit::Centre,
    Circuit::Realize,
    Circuit::Sense,
    Circuit::Ego,
    Circuit::Protect,
    Circuit::Integration,
];

impl Circuit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Knowledge => "Knowledge",
            Self::Centre => "Centre",
            Self::Realize => "Realize",
            Self::Sense => "Sense",
            Self::Ego => "Ego",
            Self::Protect => "Protect",
            Self::Integration => "Integration",
        }
    }

    pub const fn group(self) -> CircuitGroup {
        match self {
            Self::Knowledge | Self::Centre => CircuitGroup::Individual,
            Self::Realize | Self::Sense => CircuitGroup::Collective,
            Self::Ego | Self::Protect => CircuitGroup::Tribal,
            Self::Integration => CircuitGroup::Integration,
        }
    }
}

impl CircuitGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Collective => "Collective",
            Self::Tribal => "Tribal",
            Self::Integration => "Integration",
        }
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for CircuitGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
