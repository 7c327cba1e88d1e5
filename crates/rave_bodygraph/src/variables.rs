//! The four variable arrows.

use std::fmt::{Display, Formatter};

use crate::gate::GateActivation;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Left,
    Right,
}

impl Arrow {
    /// Tones 1-3 point left, 4-6 right.
    pub const fn from_tone(tone: u8) -> Self {
        if tone <= 3 { Self::Left } else { Self::Right }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Display for Arrow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variables {
    /// Personality Sun tone.
    pub right_up: Arrow,
    /// Personality North Node tone.
    pub right_down: Arrow,
    /// Design Sun tone.
    pub left_up: Arrow,
    /// Design North Node tone.
    pub left_down: Arrow,
}

impl Variables {
    pub fn new(
        personality_sun: &GateActivation,
        personality_node: &GateActivation,
        design_sun: &GateActivation,
        design_node: &GateActivation,
    ) -> Self {
        Self {
            right_up: Arrow::from_tone(personality_sun.tone),
            right_down: Arrow::from_tone(personality_node.tone),
            left_up: Arrow::from_tone(design_sun.tone),
            left_down: Arrow::from_tone(design_node.tone),
        }
    }

    /// (label, arrow) in `right_up, right_down, left_up, left_down` order.
    pub fn entries(&self) -> [(&'static str, Arrow); 4] {
        [
            ("right_up", self.right_up),
            ("right_down", self.right_down),
            ("left_up", self.left_up),
            ("left_down", self.left_down),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, Polarity};
    use crate::gate::activate;
    use crate::tables::gate_longitude_span;

    /// Activation in gate 41 line 1 color 1 with the given tone.
    fn with_tone(body: Body, polarity: Polarity, tone: u8) -> GateActivation {
        let (start, _) = gate_longitude_span(41).unwrap();
        let tone_arc = 360.0 / 13_824.0;
        activate(body, polarity, start + (tone as f64 - 0.5) * tone_arc)
    }

    #[test]
    fn tone_threshold() {
        assert_eq!(Arrow::from_tone(1), Arrow::Left);
        assert_eq!(Arrow::from_tone(3), Arrow::Left);
        assert_eq!(Arrow::from_tone(4), Arrow::Right);
        assert_eq!(Arrow::from_tone(6), Arrow::Right);
    }

    #[test]
    fn labels_map_to_their_bodies() {
        let ps = with_tone(Body::Sun, Polarity::Personality, 2);
        let pn = with_tone(Body::NorthNode, Polarity::Personality, 5);
        let ds = with_tone(Body::Sun, Polarity::Design, 6);
        let dn = with_tone(Body::NorthNode, Polarity::Design, 1);
        assert_eq!(ps.tone, 2);
        assert_eq!(dn.tone, 1);
        let v = Variables::new(&ps, &pn, &ds, &dn);
        assert_eq!(v.right_up, Arrow::Left);
        assert_eq!(v.right_down, Arrow::Right);
        assert_eq!(v.left_up, Arrow::Right);
        assert_eq!(v.left_down, Arrow::Left);
        assert_eq!(v.entries()[1], ("right_down", Arrow::Right));
    }
}
