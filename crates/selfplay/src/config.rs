//! Self-play settings: an optional TOML file with command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use silverpoint_core::Objective;

/// Everything a self-play run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfplayConfig {
    /// Search depth in plies for both sides
    pub depth: u8,
    pub white: Objective,
    pub black: Objective,
    /// The game stops unfinished after this many plies
    pub max_plies: u32,
    /// How often a progress dot is printed while a search runs
    pub progress_interval_ms: u64,
    /// Used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Where to write the JSON game record, if anywhere
    pub record: Option<PathBuf>,
}

impl Default for SelfplayConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            white: Objective::Best,
            black: Objective::Best,
            max_plies: 200,
            progress_interval_ms: 250,
            log_filter: "info".to_string(),
            record: None,
        }
    }
}

impl SelfplayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Replaces file values with any flags given on the command line.
    pub fn apply(&mut self, args: &CliArgs) {
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(white) = args.white {
            self.white = white;
        }
        if let Some(black) = args.black {
            self.black = black;
        }
        if let Some(max_plies) = args.max_plies {
            self.max_plies = max_plies;
        }
        if let Some(record) = &args.record {
            self.record = Some(record.clone());
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub depth: Option<u8>,
    pub white: Option<Objective>,
    pub black: Option<Objective>,
    pub max_plies: Option<u32>,
    pub record: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--help" || flag == "-h" {
                parsed.help = true;
                i += 1;
                continue;
            }

            let Some(value) = args.get(i + 1) else {
                bail!("{flag} needs a value");
            };
            match flag {
                "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
                "--depth" | "-d" => {
                    parsed.depth = Some(value.parse().with_context(|| format!("bad depth {value:?}"))?)
                }
                "--white" => parsed.white = Some(parse_objective(value)?),
                "--black" => parsed.black = Some(parse_objective(value)?),
                "--max-plies" => {
                    parsed.max_plies =
                        Some(value.parse().with_context(|| format!("bad ply limit {value:?}"))?)
                }
                "--record" | "-r" => parsed.record = Some(PathBuf::from(value)),
                _ => bail!("unknown option {flag}"),
            }
            i += 2;
        }
        Ok(parsed)
    }
}

fn parse_objective(text: &str) -> Result<Objective> {
    match text.to_lowercase().as_str() {
        "best" => Ok(Objective::Best),
        "worst" => Ok(Objective::Worst),
        other => bail!("unknown objective {other:?}, expected best or worst"),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
