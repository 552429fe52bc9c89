//! The painted map: stars, hyperlanes, wormholes and home-star sets as the
//! editor exports them.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::Point;

/// A hyperlane or wormhole endpoint pair.
pub type Connection = (Point, Point);

/// Input to the compiler. Order of `stars` decides star IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalaxyMap {
    pub stars: Vec<Point>,
    pub connections: Vec<Connection>,
    pub wormholes: Vec<Connection>,
    /// Canonical keys of stars an empire may start at.
    pub potential_home_stars: HashSet<String>,
    /// Canonical keys of favoured start stars; only meaningful when also potential.
    pub preferred_home_stars: HashSet<String>,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to parse galaxy map: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read galaxy map from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GalaxyMap {
    pub fn new(stars: Vec<Point>) -> Self {
        Self {
            stars,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MapError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_connection(mut self, a: Point, b: Point) -> Self {
        self.connections.push((a, b));
        self
    }

    pub fn with_wormhole(mut self, a: Point, b: Point) -> Self {
        self.wormholes.push((a, b));
        self
    }

    pub fn with_potential_home(mut self, star: Point) -> Self {
        self.potential_home_stars.insert(star.key());
        self
    }

    /// Marks `star` preferred. Does not make it potential.
    pub fn with_preferred_home(mut self, star: Point) -> Self {
        self.preferred_home_stars.insert(star.key());
        self
    }

    pub fn is_potential_home(&self, star: Point) -> bool {
        self.potential_home_stars.contains(&star.key())
    }

    pub fn is_preferred_home(&self, star: Point) -> bool {
        self.preferred_home_stars.contains(&star.key())
    }
}
