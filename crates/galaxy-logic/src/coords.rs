//! Canvas coordinates, canonical star keys and star ID assignment.
//!
//! A star's identity is its position. Everything that refers to a star
//! (hyperlanes, wormholes, home-star sets) does so through the canonical
//! `"x,y"` key produced here, never through float equality.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position on the editor canvas. Serialized as a `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Canonical identity of this point, e.g. `"100,250.5"`.
    pub fn key(&self) -> String {
        canonical_key(*self)
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Format a number the way the editor prints it: integral values without a
/// fractional part and negative zero as `0`.
pub fn format_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    let value = value + 0.0;
    format!("{}", value)
}

/// Canonical `"x,y"` key for a point.
pub fn canonical_key(point: Point) -> String {
    format!("{},{}", format_number(point.x), format_number(point.y))
}

/// Failure to read a `"x,y"` key back into a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("star key `{0}` must have exactly two comma-separated components")]
    Arity(String),
    #[error("star key `{key}` has a non-numeric component `{component}`")]
    NotANumber { key: String, component: String },
}

/// Parse a canonical key such as `"100,200"` into a point.
pub fn parse_key(key: &str) -> Result<Point, KeyError> {
    let parts: Vec<&str> = key.split(',').collect();
    if parts.len() != 2 {
        return Err(KeyError::Arity(key.to_string()));
    }
    let parse = |component: &str| {
        component
            .trim()
            .parse::<f64>()
            .map_err(|_| KeyError::NotANumber {
                key: key.to_string(),
                component: component.to_string(),
            })
    };
    Ok(Point::new(parse(parts[0])?, parse(parts[1])?))
}

/// Translate a canvas position into the engine's galaxy coordinates:
/// recentred on the canvas midpoint with the horizontal axis inverted.
pub fn to_engine_position(point: Point, width: f64, height: f64) -> (f64, f64) {
    (-(point.x - width / 2.0), point.y - height / 2.0)
}

// ── Star index ──────────────────────────────────────────────────────────

/// Canonical key → star ID, where the ID is the position of the key's first
/// occurrence in the star sequence.
#[derive(Debug, Clone, Default)]
pub struct StarIndex {
    ids: HashMap<String, usize>,
}

impl StarIndex {
    pub fn build(stars: &[Point]) -> Self {
        let mut ids = HashMap::with_capacity(stars.len());
        for (i, star) in stars.iter().enumerate() {
            ids.entry(star.key()).or_insert(i);
        }
        Self { ids }
    }

    pub fn id(&self, point: Point) -> Option<usize> {
        self.ids.get(&point.key()).copied()
    }

    pub fn id_for_key(&self, key: &str) -> Option<usize> {
        self.ids.get(key).copied()
    }

    /// True if the star at `index` is the first occurrence of its coordinates.
    pub fn is_first_occurrence(&self, index: usize, point: Point) -> bool {
        self.id(point) == Some(index)
    }

    /// Number of distinct star coordinates.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral_without_fraction() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-350.0), "-350");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        let (x, _) = to_engine_position(Point::new(450.0, 0.0), 900.0, 900.0);
        assert_eq!(format_number(x), "0");
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(Point::new(100.0, 100.0).key(), "100,100");
        assert_eq!(Point::new(100.5, 20.0).key(), "100.5,20");
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("100,200"), Ok(Point::new(100.0, 200.0)));
        assert_eq!(parse_key(" 1.5 , 2 "), Ok(Point::new(1.5, 2.0)));
        assert!(matches!(parse_key("100"), Err(KeyError::Arity(_))));
        assert!(matches!(parse_key("1,2,3"), Err(KeyError::Arity(_))));
        assert!(matches!(
            parse_key("a,2"),
            Err(KeyError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_engine_position_inverts_x_and_recentres() {
        assert_eq!(
            to_engine_position(Point::new(100.0, 100.0), 900.0, 900.0),
            (350.0, -350.0)
        );
        assert_eq!(
            to_engine_position(Point::new(900.0, 900.0), 900.0, 900.0),
            (-450.0, 450.0)
        );
    }

    #[test]
    fn test_index_first_occurrence_wins() {
        let stars = vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(10.0, 10.0),
            Point::new(30.0, 30.0),
        ];
        let index = StarIndex::build(&stars);
        assert_eq!(index.id(Point::new(10.0, 10.0)), Some(0));
        assert_eq!(index.id(Point::new(20.0, 20.0)), Some(1));
        assert_eq!(index.id(Point::new(30.0, 30.0)), Some(3));
        assert_eq!(index.len(), 3);
        assert!(index.is_first_occurrence(0, stars[0]));
        assert!(!index.is_first_occurrence(2, stars[2]));
    }

    #[test]
    fn test_index_missing_point() {
        let index = StarIndex::build(&[Point::new(1.0, 1.0)]);
        assert_eq!(index.id(Point::new(2.0, 2.0)), None);
        assert_eq!(index.id_for_key("1,1"), Some(0));
    }

    #[test]
    fn test_point_json_is_pair() {
        let p: Point = serde_json::from_str("[100, 250.5]").unwrap();
        assert_eq!(p, Point::new(100.0, 250.5));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[100.0,250.5]");
    }
}
