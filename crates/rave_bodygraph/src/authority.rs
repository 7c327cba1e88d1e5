//! Inner authority classification.

use std::fmt::{Display, Formatter};

use crate::bodygraph::{Bodygraph, Channel};
use crate::center::{Center, CenterSet};
use crate::connectivity::connected;

/// Decision-making authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    /// `SP`
    Emotional,
    /// `SL`
    Sacral,
    /// `SN`
    Splenic,
    /// `HT`
    EgoManifested,
    /// `GC`
    SelfProjected,
    /// `HT_GC`
    EgoProjected,
    /// `lunar`
    Lunar,
    /// `outer_auth`
    NoInner,
    /// `unknown`, for a definition no rule covers.
    Unknown,
}

pub const ALL_AUTHORITIES: [Authority; 9] = [
    Authority::Emotional,
    Authority::Sacral,
    Authority::Splenic,
    Authority::EgoManifested,
    Authority::SelfProjected,
    Authority::EgoProjected,
    Authority::Lunar,
    Authority::NoInner,
    Authority::Unknown,
];

impl Authority {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Emotional => "SP",
            Self::Sacral => "SL",
            Self::Splenic => "SN",
            Self::EgoManifested => "HT",
            Self::SelfProjected => "GC",
            Self::EgoProjected => "HT_GC",
            Self::Lunar => "lunar",
            Self::NoInner => "outer_auth",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional Authority",
            Self::Sacral => "Sacral Authority",
            Self::Splenic => "Splenic Authority",
            Self::EgoManifested => "Ego-Manifested Authority",
            Self::SelfProjected => "Self-Projected Authority",
            Self::EgoProjected => "Ego-Projected Authority",
            Self::Lunar => "Lunar Authority",
            Self::NoInner => "No Inner Authority",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Authority> {
        ALL_AUTHORITIES.into_iter().find(|a| a.code() == code)
    }

    /// Classify a bodygraph. First matching rule wins.
    pub fn determine(bodygraph: &Bodygraph) -> Self {
        determine_from(bodygraph.defined_centers(), bodygraph.channels())
    }
}

/// Rule chain over an arbitrary (centers, channels) pair.
///
/// `Unknown` is unreachable for sets produced by [`Bodygraph::build`].
pub(crate) fn determine_from(defined: CenterSet, channels: &[Channel]) -> Authority {
    use Center::*;

    if defined.contains(SolarPlexus) {
        Authority::Emotional
    } else if defined.contains(Sacral) {
        Authority::Sacral
    } else if defined.contains(Spleen) {
        Authority::Splenic
    } else if connected(channels, &[Heart, Throat]) {
        Authority::EgoManifested
    } else if connected(channels, &[G, Throat]) {
        Authority::SelfProjected
    } else if defined.contains(G) && defined.contains(Heart) {
        Authority::EgoProjected
    } else if defined.is_empty() {
        Authority::Lunar
    } else if defined.contains(Head) || defined.contains(Ajna) || defined.contains(Throat) {
        Authority::NoInner
    } else {
        Authority::Unknown
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
