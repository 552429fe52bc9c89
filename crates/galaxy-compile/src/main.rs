//! Painted Galaxy scenario compiler.
//!
//! Reads a map exported by the editor, reports suspicious input, and writes
//! the `static_galaxy_scenario` script.
//!
//! Usage:
//!   galaxy-compile map.json -o painted_galaxy.txt
//!   galaxy-compile map.json --config scenario.json --name "Twin Spirals"
//!   galaxy-compile map.json --check --verbose
//!   cat map.json | galaxy-compile -

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use galaxy_logic::diagnostics::{self, Diagnostic, Severity};
use galaxy_logic::{compile, GalaxyMap, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile a painted star map into a static galaxy scenario", long_about = None)]
struct Args {
    /// Map JSON exported by the editor (`-` reads stdin)
    map: PathBuf,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scenario config JSON; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the scenario name
    #[arg(long)]
    name: Option<String>,

    /// Override the scenario priority
    #[arg(long)]
    priority: Option<u32>,

    /// Use the first stars as home systems when none were painted
    #[arg(long)]
    fallback_home_stars: bool,

    /// Only run diagnostics; exit non-zero on errors
    #[arg(long)]
    check: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let map = read_map(&args.map)?;
    let config = build_config(&args)?;

    let findings = diagnostics::validate_all(&map, &config);
    report(&findings);

    if args.check {
        let errors = findings
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        println!(
            "=== RESULT: {} stars, {} errors, {} warnings ===",
            map.stars.len(),
            errors,
            findings.len() - errors
        );
        if errors > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let compiled = compile(&map, &config);
    match &args.output {
        Some(path) => {
            fs::write(path, &compiled.script)
                .with_context(|| format!("Failed to write scenario to {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(compiled.script.as_bytes())
                .context("Failed to write scenario to stdout")?;
        }
    }
    log::debug!("{:?}", compiled.stats);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn read_map(path: &Path) -> Result<GalaxyMap> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read map from stdin")?;
        return GalaxyMap::from_json_str(&json).context("Failed to parse map from stdin");
    }
    GalaxyMap::load(path).with_context(|| format!("Unable to load map {}", path.display()))
}

fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("Unable to load scenario config {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(priority) = args.priority {
        config.priority = priority;
    }
    if args.fallback_home_stars {
        config.fallback_home_stars = true;
    }
    Ok(config)
}

fn report(findings: &[Diagnostic]) {
    for d in findings {
        match d.severity {
            Severity::Error => log::error!("[{}] {}", d.category, d.message),
            Severity::Warning => log::warn!("[{}] {}", d.category, d.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_over_defaults() {
        let args = Args::parse_from([
            "galaxy-compile",
            "map.json",
            "--name",
            "Twin Spirals",
            "--priority",
            "4",
            "--fallback-home-stars",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.name, "Twin Spirals");
        assert_eq!(config.priority, 4);
        assert!(config.fallback_home_stars);
        assert_eq!(config.fallen_empire_spawn_radius, 50.0);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::parse_from(["galaxy-compile", "map.json", "--config", "/nonexistent.json"]);
        let err = build_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("nonexistent"));
    }

    #[test]
    fn test_missing_map_file_is_error() {
        assert!(read_map(Path::new("/nonexistent/map.json")).is_err());
    }
}
