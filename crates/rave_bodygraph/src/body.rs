//! The 13 activation points of a chart and the two polarities.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A point whose longitude produces one gate activation per polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 13 bodies in activation order (0 = Sun, 12 = Pluto).
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Earth,
    Body::Moon,
    Body::NorthNode,
    Body::SouthNode,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Display name as used in chart listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::NorthNode => "North_Node",
            Self::SouthNode => "South_Node",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based position in [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// For Earth and South Node, the body they oppose. `None` for the
    /// 11 bodies whose longitude is queried directly.
    pub const fn opposite_of(self) -> Option<Body> {
        match self {
            Self::Earth => Some(Self::Sun),
            Self::SouthNode => Some(Self::NorthNode),
            _ => None,
        }
    }

    /// Whether the longitude comes straight from an ephemeris.
    pub const fn is_queried(self) -> bool {
        self.opposite_of().is_none()
    }

    pub const fn all() -> &'static [Body; 13] {
        &ALL_BODIES
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized body name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBody(pub String);

impl Display for UnknownBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown body: {}", self.0)
    }
}

impl std::error::Error for UnknownBody {}

/// Accepts the display name, case-insensitively, with `_`, `-` or space
/// separators (`"north node"`, `"North_Node"`, `"NorthNode"`).
impl FromStr for Body {
    type Err = UnknownBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let body = match key.as_str() {
            "sun" => Self::Sun,
            "earth" => Self::Earth,
            "moon" => Self::Moon,
            "northnode" | "truenode" | "rahu" => Self::NorthNode,
            "southnode" | "ketu" => Self::SouthNode,
            "mercury" => Self::Mercury,
            "venus" => Self::Venus,
            "mars" => Self::Mars,
            "jupiter" => Self::Jupiter,
            "saturn" => Self::Saturn,
            "uranus" => Self::Uranus,
            "neptune" => Self::Neptune,
            "pluto" => Self::Pluto,
            _ => return Err(UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

/// Which of the two chart moments an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    /// Conscious side, computed at the birth moment.
    Personality,
    /// Unconscious side, computed at the design moment.
    Design,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Design => "design",
        }
    }

    /// Short label used in activation listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Personality => "prs",
            Self::Design => "des",
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
