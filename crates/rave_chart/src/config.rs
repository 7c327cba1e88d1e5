//! Chart configuration, loadable from TOML.
//!
//! ```toml
//! node_mode = "mean"
//!
//! [design]
//! arc_deg = 88.0
//! step_size_days = 0.5
//! ```
//!
//! Every field is optional.

use std::path::Path;

use rave_ephem::{DesignSearchConfig, NodeMode};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Which lunar node the built-in provider reports.
    pub node_mode: NodeMode,
    pub design: DesignSearchConfig,
}

impl ChartConfig {
    pub fn with_node_mode(mut self, node_mode: NodeMode) -> Self {
        self.node_mode = node_mode;
        self
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.design.validate()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ChartError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ChartError::ConfigParse(e.to_string()))?;
        config.validate().map_err(ChartError::InvalidConfig)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ChartError::ConfigParse(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let c = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(c, ChartConfig::default());
        assert_eq!(c.node_mode, NodeMode::True);
        assert_eq!(c.design.arc_deg, 88.0);
    }

    #[test]
    fn partial_design_section() {
        let c = ChartConfig::from_toml_str("node_mode = \"mean\"\n[design]\nstep_size_days = 0.5\n")
            .unwrap();
        assert_eq!(c.node_mode, NodeMode::Mean);
        assert_eq!(c.design.step_size_days, 0.5);
        assert_eq!(c.design.max_iterations, 60);
    }

    #[test]
    fn invalid_values_rejected() {
        let r = ChartConfig::from_toml_str("[design]\nmax_iterations = 0\n");
        assert!(matches!(r, Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(ChartConfig::from_toml_str("arc = 3\n").is_err());
        assert!(ChartConfig::from_toml_str("node_mode = \"osculating\"\n").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            ChartConfig::from_file("/nonexistent/rave.toml"),
            Err(ChartError::ConfigParse(_))
        ));
    }

    #[test]
    fn builder_overrides_node_mode() {
        let c = ChartConfig::default().with_node_mode(NodeMode::Mean);
        assert_eq!(c.node_mode, NodeMode::Mean);
    }
}
