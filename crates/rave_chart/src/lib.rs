//! Chart orchestration: birth time in, complete bodygraph record out.
//!
//! This crate provides:
//! - [`compute_chart`], driving any [`rave_ephem::Ephemeris`] provider
//! - [`chart_from_activations`] / [`chart_from_longitudes`] for callers
//!   that already hold placements
//! - [`ChartConfig`], loadable from TOML
//! - [`ChartResult`], the serializable record

pub mod chart;
pub mod config;
pub mod error;
pub mod result;

pub use chart::{
    activation, activations, chart_from_activations, chart_from_longitudes, compute_chart,
    compute_chart_analytic,
};
pub use config::ChartConfig;
pub use error::ChartError;
pub use result::{AVAILABLE_FEATURES, ChannelEntry, ChartResult, GateEntry, VariableArrows};
