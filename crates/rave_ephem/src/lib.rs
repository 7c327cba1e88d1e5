//! Longitude providers and the design-date search.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait, the seam between charts and astronomy
//! - [`AnalyticEphemeris`], a self-contained low-precision provider
//! - [`TableEphemeris`], a provider over precomputed samples
//! - Nutation and lunar-node series used by the analytic provider
//! - [`design_julian_date`], the 88° solar-arc search

pub mod analytic;
pub mod design;
pub mod ephemeris;
pub mod error;
pub mod lunar_nodes;
pub mod nutation;
pub mod table;

pub use analytic::AnalyticEphemeris;
pub use design::{DesignSearchConfig, design_julian_date};
pub use ephemeris::{Ephemeris, all_longitudes, body_longitude};
pub use error::EphemError;
pub use lunar_nodes::{ALL_MODES, NodeMode, mean_node_deg, node_deg, true_node_deg};
pub use nutation::{fundamental_arguments, nutation_longitude_arcsec, nutation_longitude_deg};
pub use table::TableEphemeris;
