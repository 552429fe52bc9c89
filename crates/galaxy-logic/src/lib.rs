//! Static galaxy scenario compiler for Painted Galaxy.
//!
//! Takes a painted star map (stars, hyperlanes, wormholes, home-star sets) and
//! compiles it into the `static_galaxy_scenario` script the game's galaxy
//! generator reads. Functions take plain data and return results; there is
//! no I/O beyond the optional JSON loaders and no state between runs.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`compiler`] | Pipeline entry point and compile summary |
//! | [`config`] | Scenario name, priority, canvas and spawn settings |
//! | [`constants`] | Canvas size, spawn radius, weights, flag names |
//! | [`coords`] | Points, canonical `"x,y"` keys, star ID assignment |
//! | [`diagnostics`] | Non-blocking checks for suspicious input |
//! | [`fallen_empires`] | Greedy placement of fallen empire spawn zones |
//! | [`home_systems`] | Empire initializers and spawn weights |
//! | [`map`] | Painted map input model (editor JSON export) |
//! | [`script`] | Scenario script emission |
//! | [`size_tier`] | Size tiers, balance settings, AI empire capacity |
//! | [`wormholes`] | Wormhole endpoint flags |

pub mod compiler;
pub mod config;
pub mod constants;
pub mod coords;
pub mod diagnostics;
pub mod fallen_empires;
pub mod home_systems;
pub mod map;
pub mod script;
pub mod size_tier;
pub mod wormholes;

pub use compiler::{compile, compile_script, CompileStats, CompiledScenario};
pub use config::ScenarioConfig;
pub use coords::Point;
pub use map::GalaxyMap;
