//! Energy type classification.

use std::fmt::{Display, Formatter};

use crate::bodygraph::Bodygraph;
use crate::center::Center;
use crate::connectivity::connected;
use crate::tables;

/// The five energy types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyType {
    Generator,
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

pub const ALL_ENERGY_TYPES: [EnergyType; 5] = [
    EnergyType::Generator,
    EnergyType::ManifestingGenerator,
    EnergyType::Manifestor,
    EnergyType::Projector,
    EnergyType::Reflector,
];

impl EnergyType {
    /// Upper-case display name (`"MANIFESTING GENERATOR"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "GENERATOR",
            Self::ManifestingGenerator => "MANIFESTING GENERATOR",
            Self::Manifestor => "MANIFESTOR",
            Self::Projector => "PROJECTOR",
            Self::Reflector => "REFLECTOR",
        }
    }

    pub const fn strategy(self) -> &'static str {
        tables::strategy(self)
    }

    /// Classify a bodygraph. First matching rule wins.
    pub fn determine(bodygraph: &Bodygraph) -> Self {
        let defined = bodygraph.defined_centers();
        if defined.is_empty() {
            return Self::Reflector;
        }

        let channels = bodygraph.channels();
        let motor_to_throat = || {
            [Center::Heart, Center::SolarPlexus, Center::Root]
                .into_iter()
                .any(|motor| connected(channels, &[motor, Center::Throat]))
        };
        let throat = defined.contains(Center::Throat);

        if !defined.contains(Center::Sacral) {
            if throat && motor_to_throat() {
                Self::Manifestor
            } else {
                Self::Projector
            }
        } else if throat
            && (motor_to_throat() || connected(channels, &[Center::Sacral, Center::Throat]))
        {
            Self::ManifestingGenerator
        } else {
            Self::Generator
        }
    }
}

impl Display for EnergyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(gates: &[u8]) -> EnergyType {
        EnergyType::determine(&Bodygraph::from_gates(gates.iter().copied()))
    }

    #[test]
    fn empty_is_reflector() {
        assert_eq!(classify(&[]), EnergyType::Reflector);
        assert_eq!(classify(&[1, 2, 3, 4]), EnergyType::Reflector);
    }

    #[test]
    fn sacral_to_throat_is_manifesting_generator() {
        assert_eq!(classify(&[34, 20]), EnergyType::ManifestingGenerator);
    }

    #[test]
    fn sacral_without_throat_is_generator() {
        assert_eq!(classify(&[3, 60]), EnergyType::Generator);
    }

    #[test]
    fn sacral_with_unmotored_throat_is_generator() {
        // Sacral defined, Throat defined only via G
        assert_eq!(classify(&[3, 60, 1, 8]), EnergyType::Generator);
    }

    #[test]
    fn heart_to_throat_is_manifestor() {
        assert_eq!(classify(&[21, 45]), EnergyType::Manifestor);
    }

    #[test]
    fn emotional_to_throat_is_manifestor() {
        assert_eq!(classify(&[35, 36]), EnergyType::Manifestor);
    }

    #[test]
    fn throat_without_motor_is_projector() {
        assert_eq!(classify(&[1, 8]), EnergyType::Projector);
    }

    #[test]
    fn no_throat_no_sacral_is_projector() {
        assert_eq!(classify(&[64, 47]), EnergyType::Projector);
        assert_eq!(classify(&[32, 54]), EnergyType::Projector);
    }

    #[test]
    fn names_and_strategies() {
        assert_eq!(EnergyType::ManifestingGenerator.to_string(), "MANIFESTING GENERATOR");
        assert_eq!(EnergyType::Projector.strategy(), "Wait for invitation");
        for t in ALL_ENERGY_TYPES {
            assert!(!t.strategy().is_empty());
        }
    }
}
