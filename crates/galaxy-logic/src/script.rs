//! Scenario script emission.
//!
//! Renders the planned data into the engine's `static_galaxy_scenario` block.
//! Sections are separated by a blank line and every inner line is indented
//! with one tab. Layout, key names and spacing are what the engine's parser
//! expects and must not drift.

use crate::config::ScenarioConfig;
use crate::constants::home_systems::{
    BASE_WEIGHT, PREFERRED_BONUS, TIE_BREAK_BONUS, TIE_BREAK_MODULUS,
};
use crate::coords::format_number;
use crate::home_systems::{SpawnDirective, SpawnWeight};
use crate::size_tier::{AiEmpireCapacity, RangeSetting, TierSettings};

pub const OPENING: &str = "static_galaxy_scenario = {";
pub const CLOSING: &str = "}";
const SECTION_SEPARATOR: &str = "\n\n";

/// Rendered form of an ID that does not resolve to a star.
pub const UNRESOLVED_ID: &str = "undefined";

/// One `system` line before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemEntry {
    pub id: usize,
    /// Engine-space position.
    pub position: (f64, f64),
    pub directive: Option<SpawnDirective>,
    /// Star flags set by the `effect` clause, in order.
    pub flags: Vec<String>,
}

// ── Sections ────────────────────────────────────────────────────────────

pub fn render_header(config: &ScenarioConfig) -> String {
    let mut lines = vec![
        format!("\tname = \"{}\"", config.name),
        format!("\tpriority = {}", config.priority),
    ];
    lines.extend(
        config
            .shapes
            .iter()
            .map(|shape| format!("\tsupports_shape = {}", shape)),
    );
    lines.push("\trandom_hyperlanes = no".to_string());
    lines.join("\n")
}

pub fn render_ai_capacity(capacity: AiEmpireCapacity) -> String {
    [
        format!(
            "\tnum_empires = {{ min = 0 max = {} }}\t#limits player customization",
            capacity.max
        ),
        format!("\tnum_empire_default = {}", capacity.default),
    ]
    .join("\n")
}

fn render_range(key: &str, range: RangeSetting) -> String {
    format!(
        "\t{key} = {{ min = {} max = {} }}\n\t{key}_default = {}",
        format_number(range.min),
        format_number(range.max),
        format_number(range.default),
    )
}

pub fn render_tier(settings: &TierSettings) -> String {
    let (extra_lo, extra_hi) = settings.extra_crisis_strength;
    let hyperlanes = settings.hyperlanes;
    [
        format!("\tfallen_empire_default = {}", settings.fallen_empire_default),
        format!("\tfallen_empire_max = {}", settings.fallen_empire_max),
        format!("\tmarauder_empire_default = {}", settings.marauder_empire_default),
        format!("\tmarauder_empire_max = {}", settings.marauder_empire_max),
        format!("\tadvanced_empire_default = {}", settings.advanced_empire_default),
        format!("\tcolonizable_planet_odds = {:?}", settings.colonizable_planet_odds),
        format!("\tprimitive_odds = {:?}", settings.primitive_odds),
        format!("\tcrisis_strength = {:?}", settings.crisis_strength),
        format!("\textra_crisis_strength = {{ {} {} }}", extra_lo, extra_hi),
        render_range("num_wormhole_pairs", settings.wormhole_pairs),
        render_range("num_gateways", settings.gateways),
        // irregular spacing is part of the format
        format!(
            "\tnum_hyperlanes = {{ min={} max= {} }}\n\tnum_hyperlanes_default = {}",
            format_number(hyperlanes.min),
            format_number(hyperlanes.max),
            format_number(hyperlanes.default),
        ),
    ]
    .join("\n")
}

// ── System clauses ──────────────────────────────────────────────────────

pub fn render_initializer(directive: Option<SpawnDirective>) -> String {
    match directive {
        Some(d) => format!("initializer = random_empire_init_0{}", d.initializer),
        None => String::new(),
    }
}

pub fn render_spawn_weight(directive: Option<SpawnDirective>, leader_age_variable: &str) -> String {
    let Some(d) = directive else {
        return String::new();
    };
    let modifier = match d.weight {
        SpawnWeight::Preferred => {
            format!("modifier = {{ add = {} always = yes }}", PREFERRED_BONUS)
        }
        SpawnWeight::TieBreak { residue } => format!(
            "modifier = {{ add = {} check_variable_arithmetic = {{ which = {} modulo = {} value = {} }} }}",
            TIE_BREAK_BONUS, leader_age_variable, TIE_BREAK_MODULUS, residue
        ),
    };
    format!("spawn_weight = {{ base = {} {} }}", BASE_WEIGHT, modifier)
}

pub fn render_effect(flags: &[String]) -> String {
    if flags.is_empty() {
        return String::new();
    }
    let body: Vec<String> = flags
        .iter()
        .map(|flag| format!("set_star_flag = {}", flag))
        .collect();
    format!("effect = {{ {} }}", body.join(" "))
}

/// One `system` line. Empty clauses keep their separating spaces.
pub fn render_system(entry: &SystemEntry, leader_age_variable: &str) -> String {
    let (x, y) = entry.position;
    format!(
        "\tsystem = {{ id = \"{}\" position = {{ x = {} y = {} }} {} {} {} }}",
        entry.id,
        format_number(x),
        format_number(y),
        render_initializer(entry.directive),
        render_spawn_weight(entry.directive, leader_age_variable),
        render_effect(&entry.flags),
    )
}

fn render_id(id: Option<usize>) -> String {
    id.map(|i| i.to_string())
        .unwrap_or_else(|| UNRESOLVED_ID.to_string())
}

pub fn render_hyperlane(from: Option<usize>, to: Option<usize>) -> String {
    format!(
        "\tadd_hyperlane = {{ from = \"{}\" to = \"{}\" }}",
        render_id(from),
        render_id(to)
    )
}

/// Everything the emitter needs, already planned.
#[derive(Debug, Clone)]
pub struct ScriptSections<'a> {
    pub config: &'a ScenarioConfig,
    pub capacity: AiEmpireCapacity,
    pub tier: TierSettings,
    pub systems: Vec<SystemEntry>,
    pub hyperlanes: Vec<(Option<usize>, Option<usize>)>,
}

/// Assemble the full document. No trailing newline.
pub fn emit(sections: &ScriptSections<'_>) -> String {
    let leader_age = sections.config.leader_age_variable.as_str();
    let systems: Vec<String> = sections
        .systems
        .iter()
        .map(|s| render_system(s, leader_age))
        .collect();
    let hyperlanes: Vec<String> = sections
        .hyperlanes
        .iter()
        .map(|&(from, to)| render_hyperlane(from, to))
        .collect();

    [
        OPENING.to_string(),
        render_header(sections.config),
        render_ai_capacity(sections.capacity),
        render_tier(&sections.tier),
        systems.join("\n"),
        hyperlanes.join("\n"),
        CLOSING.to_string(),
    ]
    .join(SECTION_SEPARATOR)
}
