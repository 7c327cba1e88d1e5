//! Bodygraph derivation: gate mapping, channel/center graph and the
//! features computed from it.
//!
//! This crate provides:
//! - The gate wheel and channel tables, built once and shared read-only
//! - Longitude → gate/line/color/tone/base mapping
//! - Active-channel and defined-center assembly
//! - Energy type, authority, profile, incarnation cross, split and variables
//!
//! Everything here is a pure function of its inputs. Longitudes come from
//! an ephemeris provider outside this crate.

pub mod authority;
pub mod body;
pub mod bodygraph;
pub mod center;
pub mod circuit;
pub mod connectivity;
pub mod energy_type;
pub mod features;
pub mod gate;
pub mod profile;
pub mod tables;
pub mod util;
pub mod variables;

pub use authority::{ALL_AUTHORITIES, Authority};
pub use body::{ALL_BODIES, Body, Polarity, UnknownBody};
pub use bodygraph::{Bodygraph, Channel};
pub use center::{ALL_CENTERS, Center, CenterSet};
pub use circuit::{ALL_CIRCUITS, Circuit, CircuitGroup};
pub use connectivity::connected;
pub use energy_type::{ALL_ENERGY_TYPES, EnergyType};
pub use features::{ChartActivations, Features, derive};
pub use gate::{GateActivation, GatePosition, activate, map_longitude};
pub use profile::{CrossType, IncarnationCross, Profile};
pub use tables::{
    CHANNELS, ChannelSpec, GATE_ORDER, Tables, authority_label, channel, channel_centers,
    channel_meaning, circuit, cross_type, gate_at_position, gate_center, gate_longitude_span,
    gate_position, partners, strategy, tables,
};
pub use util::{normalize_360, normalize_pm180};
pub use variables::{Arrow, Variables};
