//! Fallen empire spawn zones: greedy placement of empty circles next to stars.
//!
//! For every star (input order) and every direction (N, E, S, W) a candidate
//! zone is centred `radius` away from the star. The candidate is accepted when:
//! - it lies at least `radius` from every canvas edge,
//! - no star is strictly closer than `radius` to its centre,
//! - no previously accepted zone centre is strictly closer than `2 · radius`.
//!
//! Acceptance is greedy and depends on iteration order. A star may own any
//! number of zones, one per free direction. The game's world-generation
//! effects read the resulting star flags to place the fallen empires.
//!
//! Cost is O(n²) in the star count, fine for maps of a few thousand stars.

use serde::{Deserialize, Serialize};

use crate::constants::flags;
use crate::coords::Point;

/// Cardinal direction of a zone relative to its star. Canvas y grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// Search order.
    pub fn all() -> &'static [Direction] {
        &[Self::North, Self::East, Self::South, Self::West]
    }

    pub fn unit(&self) -> (f64, f64) {
        match self {
            Self::North => (0.0, -1.0),
            Self::East => (1.0, 0.0),
            Self::South => (0.0, 1.0),
            Self::West => (-1.0, 0.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    /// Star flag marking a zone in this direction.
    pub fn flag(&self) -> String {
        format!("{}_{}", flags::FALLEN_EMPIRE_SPAWN, self.name())
    }
}

/// An accepted zone: the star it hangs off and which side it is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallenEmpireSpawn {
    /// Index of the star in the input sequence.
    pub star: usize,
    pub direction: Direction,
    /// Zone centre in canvas space.
    pub origin: Point,
}

/// Canvas extent and zone radius used by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBounds {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl SpawnBounds {
    /// Zone centre for `star` in `direction`.
    pub fn origin(&self, star: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.unit();
        star.offset(dx * self.radius, dy * self.radius)
    }

    /// True if a zone centred at `origin` stays fully on the canvas.
    pub fn fits_canvas(&self, origin: Point) -> bool {
        let r = self.radius;
        origin.x >= r && origin.x <= self.width - r && origin.y >= r && origin.y <= self.height - r
    }
}

/// Run the greedy search over all stars and directions.
pub fn plan_fallen_empire_spawns(stars: &[Point], bounds: SpawnBounds) -> Vec<FallenEmpireSpawn> {
    let r_sq = bounds.radius * bounds.radius;
    let spacing_sq = 4.0 * r_sq;
    let mut spawns: Vec<FallenEmpireSpawn> = Vec::new();

    for (i, &star) in stars.iter().enumerate() {
        for &direction in Direction::all() {
            let origin = bounds.origin(star, direction);
            if !bounds.fits_canvas(origin) {
                continue;
            }
            if stars.iter().any(|s| s.distance_squared(origin) < r_sq) {
                continue;
            }
            if spawns
                .iter()
                .any(|z| z.origin.distance_squared(origin) < spacing_sq)
            {
                continue;
            }
            spawns.push(FallenEmpireSpawn {
                star: i,
                direction,
                origin,
            });
        }
    }

    log::debug!(
        "Placed {} fallen empire spawn zones around {} stars",
        spawns.len(),
        stars.len()
    );
    spawns
}

/// Star flags for the star at `index`: the generic spawn flag followed by one
/// directional flag per zone, in acceptance order. Empty if it owns no zone.
pub fn spawn_flags(spawns: &[FallenEmpireSpawn], index: usize) -> Vec<String> {
    let directions: Vec<Direction> = spawns
        .iter()
        .filter(|s| s.star == index)
        .map(|s| s.direction)
        .collect();
    if directions.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(directions.len() + 1);
    out.push(flags::FALLEN_EMPIRE_SPAWN.to_string());
    out.extend(directions.iter().map(Direction::flag));
    out
}
