//! Home-system spawn planning: initializers and spawn weights.
//!
//! Every potential home system gets a rotating empire initializer and a
//! spawn weight of base 10 with exactly one modifier:
//! - preferred systems get a flat +100,
//! - all others get a +10 tie-break that only applies when the randomized
//!   leader-age variable matches the system's index modulo 10.
//!
//! The tie-break keeps the engine from always filling the lowest IDs first.
//! It is a pure function of the index, so output stays deterministic. A
//! system never carries both modifiers.

use crate::constants::home_systems::*;
use crate::map::GalaxyMap;

/// Weight modifier attached to a home system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnWeight {
    /// `base + PREFERRED_BONUS`, unconditionally.
    Preferred,
    /// `base + TIE_BREAK_BONUS` when `leader_age mod 10 == residue`.
    TieBreak { residue: usize },
}

/// Spawn directive for one home system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnDirective {
    /// 1-based `random_empire_init_0N` variant.
    pub initializer: usize,
    pub weight: SpawnWeight,
}

/// Initializer variant (1..=6) for the star at `index`.
pub fn initializer_variant(index: usize) -> usize {
    index % INITIALIZER_VARIANTS + 1
}

/// Directive for the star at `index`, or `None` if it is not a home system.
/// Preferred membership is ignored unless the star is also potential.
pub fn plan_directive(
    index: usize,
    is_potential: bool,
    is_preferred: bool,
) -> Option<SpawnDirective> {
    if !is_potential {
        return None;
    }
    let weight = if is_preferred {
        SpawnWeight::Preferred
    } else {
        SpawnWeight::TieBreak {
            residue: index % TIE_BREAK_MODULUS,
        }
    };
    Some(SpawnDirective {
        initializer: initializer_variant(index),
        weight,
    })
}

/// Number of leading stars used as home systems when none were painted.
pub fn fallback_spawn_count(star_count: usize) -> usize {
    let blocks = (star_count as f64 / FALLBACK_STARS_PER_BLOCK) * FALLBACK_SPAWNS_PER_BLOCK;
    blocks.ceil() as usize * 2
}

/// Which stars are potential home systems, per input index.
///
/// With `fallback` set and an empty potential set, the first
/// [`fallback_spawn_count`] stars are used instead.
pub fn potential_flags(map: &GalaxyMap, fallback: bool) -> Vec<bool> {
    if fallback && map.potential_home_stars.is_empty() {
        let count = fallback_spawn_count(map.stars.len());
        return (0..map.stars.len()).map(|i| i < count).collect();
    }
    map.stars
        .iter()
        .map(|star| map.is_potential_home(*star))
        .collect()
}

/// Plan a directive for every star, in input order.
pub fn plan_home_systems(map: &GalaxyMap, fallback: bool) -> Vec<Option<SpawnDirective>> {
    let potential = potential_flags(map, fallback);
    map.stars
        .iter()
        .zip(potential)
        .enumerate()
        .map(|(i, (star, is_potential))| {
            plan_directive(i, is_potential, map.is_preferred_home(*star))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;

    #[test]
    fn test_non_potential_has_no_directive() {
        assert_eq!(plan_directive(0, false, false), None);
        // preferred-only membership is ignored
        assert_eq!(plan_directive(3, false, true), None);
    }

    #[test]
    fn test_initializer_rotates_over_six() {
        let variants: Vec<usize> = (0..8).map(initializer_variant).collect();
        assert_eq!(variants, vec![1, 2, 3, 4, 5, 6, 1, 2]);
    }

    #[test]
    fn test_preferred_gets_flat_bonus_only() {
        let d = plan_directive(7, true, true).unwrap();
        assert_eq!(d.weight, SpawnWeight::Preferred);
        assert_eq!(d.initializer, 2);
    }

    #[test]
    fn test_tie_break_uses_index_residue() {
        let d = plan_directive(23, true, false).unwrap();
        assert_eq!(d.weight, SpawnWeight::TieBreak { residue: 3 });
    }

    #[test]
    fn test_modifiers_mutually_exclusive() {
        for i in 0..50 {
            for preferred in [false, true] {
                let d = plan_directive(i, true, preferred).unwrap();
                match d.weight {
                    SpawnWeight::Preferred => assert!(preferred),
                    SpawnWeight::TieBreak { .. } => assert!(!preferred),
                }
            }
        }
    }

    #[test]
    fn test_fallback_spawn_count() {
        assert_eq!(fallback_spawn_count(0), 0);
        // ceil(3 / 200 * 6) * 2
        assert_eq!(fallback_spawn_count(3), 2);
        assert_eq!(fallback_spawn_count(200), 12);
        assert_eq!(fallback_spawn_count(201), 14);
    }

    #[test]
    fn test_fallback_only_when_no_home_stars_painted() {
        let stars: Vec<Point> = (0..5).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
        let bare = GalaxyMap::new(stars.clone());
        assert_eq!(potential_flags(&bare, false), vec![false; 5]);
        assert_eq!(
            potential_flags(&bare, true),
            vec![true, true, false, false, false]
        );

        let painted = GalaxyMap::new(stars.clone()).with_potential_home(stars[4]);
        assert_eq!(
            potential_flags(&painted, true),
            vec![false, false, false, false, true]
        );
    }

    #[test]
    fn test_plan_home_systems_in_input_order() {
        let stars = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ];
        let map = GalaxyMap::new(stars.clone())
            .with_potential_home(stars[1])
            .with_potential_home(stars[2])
            .with_preferred_home(stars[2]);
        let plan = plan_home_systems(&map, false);
        assert_eq!(plan[0], None);
        assert_eq!(
            plan[1],
            Some(SpawnDirective {
                initializer: 2,
                weight: SpawnWeight::TieBreak { residue: 1 },
            })
        );
        assert_eq!(
            plan[2],
            Some(SpawnDirective {
                initializer: 3,
                weight: SpawnWeight::Preferred,
            })
        );
    }
}
