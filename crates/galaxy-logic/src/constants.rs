//! Compiler constants: canvas geometry, spawn tuning, flag names.
//!
//! Plain constants with no engine dependency. Both the compiler and the CLI
//! harness read these.

/// Canvas width (the editor canvas and the emitted map share this extent).
pub const WIDTH: f64 = 900.0;
/// Canvas height.
pub const HEIGHT: f64 = 900.0;

/// Hyperlanes longer than half the canvas are reported by diagnostics.
pub const MAX_CONNECTION_LENGTH: f64 = WIDTH / 2.0;

/// Radius of the empty circle reserved for each fallen empire spawn zone.
pub const FALLEN_EMPIRE_SPAWN_RADIUS: f64 = 50.0;

/// Not every spawn slot is taken by an AI empire in every game, so the
/// maximum AI empire count is the home-star count divided by this.
pub const SPAWNS_PER_MAX_AI_EMPIRE: f64 = 1.5;

pub mod scenario {
    pub const DEFAULT_NAME: &str = "Painted Galaxy";
    pub const DEFAULT_PRIORITY: u32 = 10;
    pub const DEFAULT_SHAPE: &str = "elliptical";
    pub const DEFAULT_LEADER_AGE_VARIABLE: &str = "painted_galaxy_leader_age";
}

pub mod home_systems {
    /// Spawn weight every home system starts from.
    pub const BASE_WEIGHT: u32 = 10;
    /// Flat bonus carried by preferred home systems.
    pub const PREFERRED_BONUS: u32 = 100;
    /// Bonus carried by the system whose index matches the leader-age residue.
    pub const TIE_BREAK_BONUS: u32 = 10;
    /// Modulus of the leader-age tie-break.
    pub const TIE_BREAK_MODULUS: usize = 10;
    /// Number of rotating `random_empire_init_0N` initializers.
    pub const INITIALIZER_VARIANTS: usize = 6;
    /// Fallback spawn count: systems per block of `FALLBACK_STARS_PER_BLOCK`.
    pub const FALLBACK_SPAWNS_PER_BLOCK: f64 = 6.0;
    pub const FALLBACK_STARS_PER_BLOCK: f64 = 200.0;
}

pub mod flags {
    pub const FALLEN_EMPIRE_SPAWN: &str = "painted_galaxy_fe_spawn";
    pub const WORMHOLE_PREFIX: &str = "painted_galaxy_wormhole_";
}

pub mod size_thresholds {
    pub const SMALL: usize = 400;
    pub const MEDIUM: usize = 600;
    pub const LARGE: usize = 800;
    pub const HUGE: usize = 1000;
}
