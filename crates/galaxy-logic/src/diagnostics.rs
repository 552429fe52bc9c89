//! Input diagnostics for painted maps.
//!
//! The compiler never rejects input. These checks report what will come out
//! wrong so the caller can decide; nothing here changes the emitted script.

use std::collections::{HashMap, HashSet};

use crate::config::ScenarioConfig;
use crate::constants::MAX_CONNECTION_LENGTH;
use crate::coords::{parse_key, Point, StarIndex};
use crate::map::GalaxyMap;

/// A single finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

fn warning(category: &'static str, message: String) -> Diagnostic {
    Diagnostic {
        category,
        severity: Severity::Warning,
        message,
    }
}

fn error(category: &'static str, message: String) -> Diagnostic {
    Diagnostic {
        category,
        severity: Severity::Error,
        message,
    }
}

// ── A. Stars ────────────────────────────────────────────────────────────

/// Stars outside the configured canvas.
pub fn check_star_bounds(map: &GalaxyMap, config: &ScenarioConfig) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, s) in map.stars.iter().enumerate() {
        if s.x < 0.0 || s.y < 0.0 || s.x > config.width || s.y > config.height {
            out.push(warning(
                "star_bounds",
                format!(
                    "Star #{} at ({}) lies outside the {}×{} canvas",
                    i,
                    s.key(),
                    config.width,
                    config.height
                ),
            ));
        }
    }
    out
}

/// Stars sharing coordinates. They collapse into the first one's ID.
pub fn check_duplicate_stars(map: &GalaxyMap) -> Vec<Diagnostic> {
    let index = StarIndex::build(&map.stars);
    let mut out = Vec::new();
    for (i, s) in map.stars.iter().enumerate() {
        if let Some(first) = index.id(*s) {
            if first != i {
                out.push(warning(
                    "duplicate_star",
                    format!(
                        "Star #{} at ({}) duplicates star #{} and is merged into it",
                        i,
                        s.key(),
                        first
                    ),
                ));
            }
        }
    }
    out
}

// ── B. Hyperlanes ───────────────────────────────────────────────────────

/// Hyperlane endpoints that are not stars.
pub fn check_dangling_connections(map: &GalaxyMap) -> Vec<Diagnostic> {
    let index = StarIndex::build(&map.stars);
    let mut out = Vec::new();
    for (k, (a, b)) in map.connections.iter().enumerate() {
        for end in [a, b] {
            if index.id(*end).is_none() {
                out.push(error(
                    "dangling_connection",
                    format!(
                        "Hyperlane #{} references ({}) which is not a star",
                        k,
                        end.key()
                    ),
                ));
            }
        }
    }
    out
}

/// Hyperlanes longer than the editor allows.
pub fn check_connection_lengths(map: &GalaxyMap) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (k, (a, b)) in map.connections.iter().enumerate() {
        let length = a.distance(*b);
        if length > MAX_CONNECTION_LENGTH {
            out.push(warning(
                "long_connection",
                format!(
                    "Hyperlane #{} ({} → {}) is {:.1} long (max {})",
                    k,
                    a.key(),
                    b.key(),
                    length,
                    MAX_CONNECTION_LENGTH
                ),
            ));
        }
    }
    out
}

// ── C. Wormholes ────────────────────────────────────────────────────────

/// Wormhole endpoints that are not stars.
pub fn check_dangling_wormholes(map: &GalaxyMap) -> Vec<Diagnostic> {
    let index = StarIndex::build(&map.stars);
    let mut out = Vec::new();
    for (k, (a, b)) in map.wormholes.iter().enumerate() {
        for end in [a, b] {
            if index.id(*end).is_none() {
                out.push(error(
                    "dangling_wormhole",
                    format!(
                        "Wormhole pair #{} references ({}) which is not a star",
                        k,
                        end.key()
                    ),
                ));
            }
        }
    }
    out
}

/// Stars that are an endpoint of more than one wormhole pair.
pub fn check_wormhole_reuse(map: &GalaxyMap) -> Vec<Diagnostic> {
    let mut pairs_by_star: HashMap<String, Vec<usize>> = HashMap::new();
    for (k, (a, b)) in map.wormholes.iter().enumerate() {
        let mut ends: Vec<String> = vec![a.key(), b.key()];
        ends.dedup();
        for key in ends {
            pairs_by_star.entry(key).or_default().push(k);
        }
    }

    let mut reused: Vec<(String, Vec<usize>)> = pairs_by_star
        .into_iter()
        .filter(|(_, pairs)| pairs.len() > 1)
        .collect();
    reused.sort();
    reused
        .into_iter()
        .map(|(key, pairs)| {
            warning(
                "wormhole_reuse",
                format!(
                    "Star ({}) is an endpoint of {} wormhole pairs {:?}",
                    key,
                    pairs.len(),
                    pairs
                ),
            )
        })
        .collect()
}

// ── D. Home stars ───────────────────────────────────────────────────────

/// Home-star keys that match no star, and preferred keys that are not potential.
pub fn check_home_stars(map: &GalaxyMap) -> Vec<Diagnostic> {
    let keys: HashSet<String> = map.stars.iter().map(Point::key).collect();
    let mut out = Vec::new();

    let mut unknown: Vec<&String> = map
        .potential_home_stars
        .iter()
        .chain(map.preferred_home_stars.iter())
        .filter(|k| !keys.contains(*k))
        .collect();
    unknown.sort();
    unknown.dedup();
    for key in unknown {
        let message = match parse_key(key) {
            Ok(point) if keys.contains(&point.key()) => format!(
                "Home star ({}) is not written canonically; use ({})",
                key,
                point.key()
            ),
            _ => format!("Home star ({}) does not match any star", key),
        };
        out.push(warning("unknown_home_star", message));
    }

    let mut orphaned: Vec<&String> = map
        .preferred_home_stars
        .difference(&map.potential_home_stars)
        .collect();
    orphaned.sort();
    for key in orphaned {
        out.push(warning(
            "preferred_not_potential",
            format!(
                "Preferred home star ({}) is not a potential home star and is ignored",
                key
            ),
        ));
    }
    out
}

// ── Master validation ───────────────────────────────────────────────────

/// Run every check and return the combined findings.
pub fn validate_all(map: &GalaxyMap, config: &ScenarioConfig) -> Vec<Diagnostic> {
    let mut all = Vec::new();
    all.extend(check_star_bounds(map, config));
    all.extend(check_duplicate_stars(map));
    all.extend(check_dangling_connections(map));
    all.extend(check_connection_lengths(map));
    all.extend(check_dangling_wormholes(map));
    all.extend(check_wormhole_reuse(map));
    all.extend(check_home_stars(map));
    all
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}
