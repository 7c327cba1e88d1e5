//! Chart orchestration.

use rave_bodygraph::{ALL_BODIES, ChartActivations, GateActivation, Polarity, activate, derive};
use rave_ephem::{
    AnalyticEphemeris, Ephemeris, all_longitudes, body_longitude, design_julian_date,
};
use rave_time::{BirthTime, CivilTime};
use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::result::ChartResult;

/// Full chart for a birth time.
///
/// Validates the timestamp, finds the design moment, maps the 13 bodies
/// of each polarity (11 provider queries each) and derives every feature.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    birth: &BirthTime,
    ephemeris: &E,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    config.validate().map_err(ChartError::InvalidConfig)?;
    let birth_jd = birth.to_jd_ut()?;
    let design_jd = design_julian_date(ephemeris, birth_jd, &config.design)?;
    debug!(birth_jd, design_jd, "chart dates");

    let personality = activations(ephemeris, Polarity::Personality, birth_jd)?;
    let design = activations(ephemeris, Polarity::Design, design_jd)?;

    let mut result = assemble(
        birth.to_string(),
        CivilTime::from_jd(design_jd).to_string(),
        ChartActivations::new(personality, design),
    );
    result.birth_jd = Some(birth_jd);
    result.design_jd = Some(design_jd);
    info!(
        birth = %result.birth_date,
        energy_type = result.energy_type,
        authority = result.authority,
        profile = %result.profile,
        "chart computed"
    );
    Ok(result)
}

/// [`compute_chart`] with the built-in provider, honouring `config.node_mode`.
pub fn compute_chart_analytic(
    birth: &BirthTime,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    compute_chart(birth, &AnalyticEphemeris::new(config.node_mode), config)
}

/// Map one polarity's 13 bodies at `jd_ut`.
pub fn activations<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    polarity: Polarity,
    jd_ut: f64,
) -> Result<[GateActivation; 13], ChartError> {
    let lons = all_longitudes(ephemeris, jd_ut)?;
    let side: [GateActivation; 13] =
        std::array::from_fn(|i| activate(ALL_BODIES[i], polarity, lons[i]));
    debug!(
        polarity = polarity.name(),
        jd_ut,
        gates = ?side.iter().map(|a| a.gate).collect::<Vec<_>>(),
        "activations"
    );
    Ok(side)
}

/// Longitude of one body, mapped.
pub fn activation<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: rave_bodygraph::Body,
    polarity: Polarity,
    jd_ut: f64,
) -> Result<GateActivation, ChartError> {
    Ok(activate(body, polarity, body_longitude(ephemeris, body, jd_ut)?))
}

/// Chart from already-mapped activations. Date fields are left empty.
pub fn chart_from_activations(
    personality: [GateActivation; 13],
    design: [GateActivation; 13],
) -> ChartResult {
    assemble(
        String::new(),
        String::new(),
        ChartActivations::new(personality, design),
    )
}

/// Chart from 13 longitudes per polarity, indexed like [`ALL_BODIES`].
pub fn chart_from_longitudes(personality: &[f64; 13], design: &[f64; 13]) -> ChartResult {
    assemble(
        String::new(),
        String::new(),
        ChartActivations::from_longitudes(personality, design),
    )
}

fn assemble(birth_date: String, design_date: String, acts: ChartActivations) -> ChartResult {
    let features = derive(&acts);
    ChartResult::assemble(
        birth_date,
        design_date,
        &acts.personality,
        &acts.design,
        features,
    )
}
