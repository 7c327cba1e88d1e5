//! The nine energy centers and a compact set type over them.

use std::fmt::{Display, Formatter};

/// One of the nine centers of the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    SolarPlexus,
    Spleen,
    Sacral,
    Root,
}

/// All nine centers, top of the bodygraph to bottom.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::SolarPlexus,
    Center::Spleen,
    Center::Sacral,
    Center::Root,
];

impl Center {
    /// Two-letter code (`HD`, `AA`, `TT`, ...).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Head => "HD",
            Self::Ajna => "AA",
            Self::Throat => "TT",
            Self::G => "GC",
            Self::Heart => "HT",
            Self::SolarPlexus => "SP",
            Self::Spleen => "SN",
            Self::Sacral => "SL",
            Self::Root => "RT",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::SolarPlexus => "Solar Plexus",
            Self::Spleen => "Spleen",
            Self::Sacral => "Sacral",
            Self::Root => "Root",
        }
    }

    /// 0-based index in [`ALL_CENTERS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a center by its two-letter code.
    pub fn from_code(code: &str) -> Option<Center> {
        ALL_CENTERS.into_iter().find(|c| c.code() == code)
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl Display for Center {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A set of centers stored as a 9-bit mask. Iterates in [`ALL_CENTERS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CenterSet(u16);

impl CenterSet {
    const FULL: u16 = (1 << 9) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    pub fn insert(&mut self, center: Center) {
        self.0 |= center.bit();
    }

    pub const fn contains(self, center: Center) -> bool {
        self.0 & center.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Centers not in this set.
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Center> {
        ALL_CENTERS.into_iter().filter(move |c| self.contains(*c))
    }

    /// Two-letter codes of the members, in center order.
    pub fn codes(self) -> Vec<&'static str> {
        self.iter().map(Center::code).collect()
    }
}

impl FromIterator<Center> for CenterSet {
    fn from_iter<I: IntoIterator<Item = Center>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Display for CenterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.codes().join(", "))
    }
}
