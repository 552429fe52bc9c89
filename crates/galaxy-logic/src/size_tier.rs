//! Galaxy size tiers and AI empire capacity.
//!
//! The tier is picked from the star count alone and selects a fixed block of
//! game-balance settings. AI empire capacity is derived separately from the
//! number of home-star candidates.

use serde::{Deserialize, Serialize};

use crate::constants::{size_thresholds, SPAWNS_PER_MAX_AI_EMPIRE};

/// Discrete galaxy size profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SizeTier {
    /// Fewer than 400 stars.
    Tiny = 0,
    /// 400–599 stars.
    Small = 1,
    /// 600–799 stars.
    Medium = 2,
    /// 800–999 stars.
    Large = 3,
    /// 1000 stars or more.
    Huge = 4,
}

/// A `{ min = .. max = .. }` range setting with its default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSetting {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Balance settings emitted for a size tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSettings {
    pub fallen_empire_default: u32,
    pub fallen_empire_max: u32,
    pub marauder_empire_default: u32,
    pub marauder_empire_max: u32,
    pub advanced_empire_default: u32,
    pub colonizable_planet_odds: f64,
    pub primitive_odds: f64,
    pub crisis_strength: f64,
    pub extra_crisis_strength: (u32, u32),
    pub wormhole_pairs: RangeSetting,
    pub gateways: RangeSetting,
    pub hyperlanes: RangeSetting,
}

const WORMHOLE_PAIRS: RangeSetting = RangeSetting {
    min: 0.0,
    max: 5.0,
    default: 1.0,
};
const GATEWAYS: RangeSetting = RangeSetting {
    min: 0.0,
    max: 5.0,
    default: 1.0,
};
const HYPERLANES: RangeSetting = RangeSetting {
    min: 0.5,
    max: 3.0,
    default: 1.0,
};

impl SizeTier {
    pub fn all() -> &'static [SizeTier] {
        &[
            Self::Tiny,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::Huge,
        ]
    }

    pub fn from_star_count(count: usize) -> Self {
        if count < size_thresholds::SMALL {
            Self::Tiny
        } else if count < size_thresholds::MEDIUM {
            Self::Small
        } else if count < size_thresholds::LARGE {
            Self::Medium
        } else if count < size_thresholds::HUGE {
            Self::Large
        } else {
            Self::Huge
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
        }
    }

    pub fn settings(&self) -> TierSettings {
        let (fe_default, fe_max, marauder_default, marauder_max, advanced, crisis) = match self {
            Self::Tiny => (0, 1, 1, 1, 0, 0.5),
            Self::Small => (1, 2, 1, 2, 1, 0.75),
            Self::Medium => (2, 3, 2, 2, 2, 1.0),
            Self::Large => (3, 4, 2, 3, 3, 1.25),
            Self::Huge => (4, 6, 3, 3, 4, 1.5),
        };
        TierSettings {
            fallen_empire_default: fe_default,
            fallen_empire_max: fe_max,
            marauder_empire_default: marauder_default,
            marauder_empire_max: marauder_max,
            advanced_empire_default: advanced,
            colonizable_planet_odds: 1.0,
            primitive_odds: 1.0,
            crisis_strength: crisis,
            extra_crisis_strength: (10, 25),
            wormhole_pairs: WORMHOLE_PAIRS,
            gateways: GATEWAYS,
            hyperlanes: HYPERLANES,
        }
    }
}

// ── AI empire capacity ──────────────────────────────────────────────────

/// Player-facing AI empire slider limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiEmpireCapacity {
    pub max: u32,
    pub default: u32,
}

impl AiEmpireCapacity {
    pub fn from_home_star_count(home_stars: usize) -> Self {
        let max = (home_stars as f64 / SPAWNS_PER_MAX_AI_EMPIRE).round();
        let default = (max / 2.0).round();
        Self {
            max: max as u32,
            default: default as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let counts = [399, 400, 599, 600, 799, 800, 999, 1000];
        let expected = [
            SizeTier::Tiny,
            SizeTier::Small,
            SizeTier::Small,
            SizeTier::Medium,
            SizeTier::Medium,
            SizeTier::Large,
            SizeTier::Large,
            SizeTier::Huge,
        ];
        for (count, tier) in counts.iter().zip(expected.iter()) {
            assert_eq!(SizeTier::from_star_count(*count), *tier, "count {}", count);
        }
    }

    #[test]
    fn test_zero_stars_is_tiny() {
        assert_eq!(SizeTier::from_star_count(0), SizeTier::Tiny);
    }

    #[test]
    fn test_tiers_strictly_grow() {
        let tiers = SizeTier::all();
        for pair in tiers.windows(2) {
            let (a, b) = (pair[0].settings(), pair[1].settings());
            assert!(a.crisis_strength < b.crisis_strength);
            assert!(a.fallen_empire_max < b.fallen_empire_max);
            assert!(a.fallen_empire_default < b.fallen_empire_default);
        }
    }

    #[test]
    fn test_tier_settings_table() {
        let huge = SizeTier::Huge.settings();
        assert_eq!(huge.fallen_empire_default, 4);
        assert_eq!(huge.fallen_empire_max, 6);
        assert_eq!(huge.marauder_empire_max, 3);
        assert_eq!(huge.extra_crisis_strength, (10, 25));
        assert_eq!(SizeTier::Tiny.settings().crisis_strength, 0.5);
    }

    #[test]
    fn test_ai_capacity_rounding() {
        assert_eq!(
            AiEmpireCapacity::from_home_star_count(0),
            AiEmpireCapacity { max: 0, default: 0 }
        );
        // 1 / 1.5 = 0.67 → 1, 1 / 2 = 0.5 → 1
        assert_eq!(
            AiEmpireCapacity::from_home_star_count(1),
            AiEmpireCapacity { max: 1, default: 1 }
        );
        // 3 / 1.5 = 2, default 1
        assert_eq!(
            AiEmpireCapacity::from_home_star_count(3),
            AiEmpireCapacity { max: 2, default: 1 }
        );
        // 30 / 1.5 = 20, default 10
        assert_eq!(
            AiEmpireCapacity::from_home_star_count(30),
            AiEmpireCapacity { max: 20, default: 10 }
        );
        // 10 / 1.5 = 6.67 → 7, 3.5 → 4
        assert_eq!(
            AiEmpireCapacity::from_home_star_count(10),
            AiEmpireCapacity { max: 7, default: 4 }
        );
    }
}
