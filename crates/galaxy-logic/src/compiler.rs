//! The compile pipeline: map + config → scenario script.
//!
//! Index stars → pick size tier → plan home systems → place fallen empire
//! zones → tag wormholes → emit. Pure apart from logging; the same input
//! always yields the same bytes.

use crate::config::ScenarioConfig;
use crate::coords::{to_engine_position, StarIndex};
use crate::fallen_empires::{plan_fallen_empire_spawns, spawn_flags, SpawnBounds};
use crate::home_systems::{fallback_spawn_count, plan_home_systems, SpawnWeight};
use crate::map::GalaxyMap;
use crate::script::{emit, ScriptSections, SystemEntry};
use crate::size_tier::{AiEmpireCapacity, SizeTier};
use crate::wormholes::wormhole_flags;

/// Counts describing a compiled scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileStats {
    pub tier: SizeTier,
    pub systems: usize,
    pub hyperlanes: usize,
    pub home_systems: usize,
    pub preferred_systems: usize,
    pub fallen_empire_spawns: usize,
    pub wormhole_flags: usize,
    pub ai_empires_max: u32,
    pub ai_empires_default: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledScenario {
    pub script: String,
    pub stats: CompileStats,
}

/// Number of home-star candidates the AI capacity is derived from.
fn home_star_count(map: &GalaxyMap, config: &ScenarioConfig) -> usize {
    if config.fallback_home_stars && map.potential_home_stars.is_empty() {
        fallback_spawn_count(map.stars.len()).min(map.stars.len())
    } else {
        map.potential_home_stars.len()
    }
}

/// Compile a map into a scenario script plus summary counts.
pub fn compile(map: &GalaxyMap, config: &ScenarioConfig) -> CompiledScenario {
    let index = StarIndex::build(&map.stars);
    let tier = SizeTier::from_star_count(map.stars.len());
    let capacity = AiEmpireCapacity::from_home_star_count(home_star_count(map, config));
    let directives = plan_home_systems(map, config.fallback_home_stars);
    let spawns = plan_fallen_empire_spawns(
        &map.stars,
        SpawnBounds {
            width: config.width,
            height: config.height,
            radius: config.fallen_empire_spawn_radius,
        },
    );

    let mut systems = Vec::with_capacity(index.len());
    let mut wormhole_flag_count = 0;
    for (i, &star) in map.stars.iter().enumerate() {
        if !index.is_first_occurrence(i, star) {
            continue;
        }
        let mut flags = spawn_flags(&spawns, i);
        let wormholes = wormhole_flags(&map.wormholes, star);
        wormhole_flag_count += wormholes.len();
        flags.extend(wormholes);
        systems.push(SystemEntry {
            id: i,
            position: to_engine_position(star, config.width, config.height),
            directive: directives[i],
            flags,
        });
    }

    let hyperlanes: Vec<(Option<usize>, Option<usize>)> = map
        .connections
        .iter()
        .map(|&(a, b)| (index.id(a), index.id(b)))
        .collect();

    let home_systems = systems.iter().filter(|s| s.directive.is_some()).count();
    let preferred_systems = systems
        .iter()
        .filter(|s| matches!(s.directive, Some(d) if d.weight == SpawnWeight::Preferred))
        .count();
    let stats = CompileStats {
        tier,
        systems: systems.len(),
        hyperlanes: hyperlanes.len(),
        home_systems,
        preferred_systems,
        fallen_empire_spawns: spawns.len(),
        wormhole_flags: wormhole_flag_count,
        ai_empires_max: capacity.max,
        ai_empires_default: capacity.default,
    };

    let script = emit(&ScriptSections {
        config,
        capacity,
        tier: tier.settings(),
        systems,
        hyperlanes,
    });

    log::info!(
        "Compiled '{}': {} systems, {} hyperlanes, {} home systems ({} preferred), {} fallen empire zones, tier={}",
        config.name,
        stats.systems,
        stats.hyperlanes,
        stats.home_systems,
        stats.preferred_systems,
        stats.fallen_empire_spawns,
        tier.name()
    );

    CompiledScenario { script, stats }
}

/// Compile a map and return only the script text.
pub fn compile_script(map: &GalaxyMap, config: &ScenarioConfig) -> String {
    compile(map, config).script
}
