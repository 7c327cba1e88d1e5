//! Profile and incarnation cross.

use std::fmt::{Display, Formatter};

use crate::gate::GateActivation;
use crate::tables::tables;

/// Cross family determined by the profile lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossType {
    /// `RAC`
    RightAngle,
    /// `LAC`
    LeftAngle,
    /// `JXP`
    Juxtaposition,
    Unknown,
}

impl CrossType {
    pub const fn code(self) -> &'static str {
        match self {
            Self::RightAngle => "RAC",
            Self::LeftAngle => "LAC",
            Self::Juxtaposition => "JXP",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for CrossType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// (personality Sun line, design Sun line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
}

impl Profile {
    pub const fn new(personality_line: u8, design_line: u8) -> Self {
        Self {
            personality_line,
            design_line,
        }
    }

    /// Profile from the two Sun activations.
    pub fn from_suns(personality_sun: &GateActivation, design_sun: &GateActivation) -> Self {
        Self::new(personality_sun.line, design_sun.line)
    }

    pub fn cross_type(&self) -> CrossType {
        tables().cross_type(self.personality_line, self.design_line)
    }

    /// Line pair in display order: as-is when it is a cross-table entry,
    /// reversed otherwise.
    pub fn display_pair(&self) -> (u8, u8) {
        let (p, d) = (self.personality_line, self.design_line);
        if tables().has_cross_entry(p, d) {
            (p, d)
        } else {
            (d, p)
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.display_pair();
        write!(f, "{a}/{b}")
    }
}

/// Sun/Earth gates of both polarities plus the cross type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncarnationCross {
    pub personality_sun: u8,
    pub personality_earth: u8,
    pub design_sun: u8,
    pub design_earth: u8,
    pub cross_type: CrossType,
}

impl IncarnationCross {
    pub fn new(
        personality_sun: &GateActivation,
        personality_earth: &GateActivation,
        design_sun: &GateActivation,
        design_earth: &GateActivation,
    ) -> Self {
        let profile = Profile::from_suns(personality_sun, design_sun);
        Self {
            personality_sun: personality_sun.gate,
            personality_earth: personality_earth.gate,
            design_sun: design_sun.gate,
            design_earth: design_earth.gate,
            cross_type: profile.cross_type(),
        }
    }
}

/// `"pSun/pEarth-dSun/dEarth-TYPE"`.
impl Display for IncarnationCross {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}-{}/{}-{}",
            self.personality_sun,
            self.personality_earth,
            self.design_sun,
            self.design_earth,
            self.cross_type
        )
    }
}
