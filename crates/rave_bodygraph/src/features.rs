//! The 26 activations of a chart and everything derived from them.

use crate::authority::Authority;
use crate::body::{ALL_BODIES, Body, Polarity};
use crate::bodygraph::Bodygraph;
use crate::energy_type::EnergyType;
use crate::gate::{GateActivation, activate};
use crate::profile::{IncarnationCross, Profile};
use crate::variables::Variables;

/// Personality and design activations, each in [`ALL_BODIES`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartActivations {
    pub personality: [GateActivation; 13],
    pub design: [GateActivation; 13],
}

impl ChartActivations {
    pub fn new(personality: [GateActivation; 13], design: [GateActivation; 13]) -> Self {
        Self {
            personality,
            design,
        }
    }

    /// Map 13 longitudes per polarity, indexed like [`ALL_BODIES`].
    ///
    /// Earth and South Node entries must already hold their own longitude.
    pub fn from_longitudes(personality: &[f64; 13], design: &[f64; 13]) -> Self {
        let map = |polarity: Polarity, lons: &[f64; 13]| -> [GateActivation; 13] {
            std::array::from_fn(|i| activate(ALL_BODIES[i], polarity, lons[i]))
        };
        Self::new(
            map(Polarity::Personality, personality),
            map(Polarity::Design, design),
        )
    }

    pub fn side(&self, polarity: Polarity) -> &[GateActivation; 13] {
        match polarity {
            Polarity::Personality => &self.personality,
            Polarity::Design => &self.design,
        }
    }

    pub fn get(&self, body: Body, polarity: Polarity) -> &GateActivation {
        &self.side(polarity)[body.index()]
    }

    /// All 26 activations, personality first.
    pub fn iter(&self) -> impl Iterator<Item = &GateActivation> {
        self.personality.iter().chain(self.design.iter())
    }

    pub fn to_vec(&self) -> Vec<GateActivation> {
        self.iter().copied().collect()
    }
}

/// Every derived chart feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub bodygraph: Bodygraph,
    pub energy_type: EnergyType,
    pub authority: Authority,
    pub profile: Profile,
    pub incarnation_cross: IncarnationCross,
    pub split: usize,
    pub variables: Variables,
}

/// Build the bodygraph and run every analysis over it.
pub fn derive(activations: &ChartActivations) -> Features {
    let bodygraph = Bodygraph::build(&activations.to_vec());
    let p = |body| activations.get(body, Polarity::Personality);
    let d = |body| activations.get(body, Polarity::Design);

    Features {
        energy_type: EnergyType::determine(&bodygraph),
        authority: Authority::determine(&bodygraph),
        profile: Profile::from_suns(p(Body::Sun), d(Body::Sun)),
        incarnation_cross: IncarnationCross::new(
            p(Body::Sun),
            p(Body::Earth),
            d(Body::Sun),
            d(Body::Earth),
        ),
        split: bodygraph.split(),
        variables: Variables::new(
            p(Body::Sun),
            p(Body::NorthNode),
            d(Body::Sun),
            d(Body::NorthNode),
        ),
        bodygraph,
    }
}
