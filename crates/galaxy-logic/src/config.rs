//! Scenario configuration: everything about the emitted document that is not
//! part of the painted map itself.
//!
//! Every field has a default, so a config file only needs to name the fields
//! it changes.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{scenario, FALLEN_EMPIRE_SPAWN_RADIUS, HEIGHT, WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Scenario name shown in the galaxy setup screen.
    pub name: String,
    /// Sort priority among galaxy shapes.
    pub priority: u32,
    /// One `supports_shape` line per entry.
    pub shapes: Vec<String>,
    /// Canvas extent the map was painted on.
    pub width: f64,
    pub height: f64,
    pub fallen_empire_spawn_radius: f64,
    /// Variable read by the home-system tie-break modifier.
    pub leader_age_variable: String,
    /// Treat the first stars as home systems when none were painted.
    pub fallback_home_stars: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: scenario::DEFAULT_NAME.to_string(),
            priority: scenario::DEFAULT_PRIORITY,
            shapes: vec![scenario::DEFAULT_SHAPE.to_string()],
            width: WIDTH,
            height: HEIGHT,
            fallen_empire_spawn_radius: FALLEN_EMPIRE_SPAWN_RADIUS,
            leader_age_variable: scenario::DEFAULT_LEADER_AGE_VARIABLE.to_string(),
            fallback_home_stars: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scenario config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read scenario config from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScenarioConfig::default();
        assert_eq!(config.name, "Painted Galaxy");
        assert_eq!(config.priority, 10);
        assert_eq!(config.shapes, vec!["elliptical".to_string()]);
        assert_eq!(config.width, 900.0);
        assert_eq!(config.fallen_empire_spawn_radius, 50.0);
        assert!(!config.fallback_home_stars);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScenarioConfig::from_json_str(r#"{ "name": "Spiral Test", "priority": 3 }"#)
            .unwrap();
        assert_eq!(config.name, "Spiral Test");
        assert_eq!(config.priority, 3);
        assert_eq!(config.height, 900.0);
        assert_eq!(config.leader_age_variable, "painted_galaxy_leader_age");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = ScenarioConfig::from_json_str("{ name: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ScenarioConfig::load("/nonexistent/painted-galaxy.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
        assert!(err.to_string().contains("nonexistent"));
    }
}
