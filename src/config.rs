//! Runtime configuration for the terminal binary.
//!
//! Settings come from environment variables:
//!
//! - `SNAKE_GRID_SIZE`: cells per side, 4..=64 (default 20)
//! - `SNAKE_TICK_MS`: tick interval in milliseconds, 20..=5000 (default 200)
//! - `SNAKE_SEED`: food RNG seed (default: random per launch)
//! - `SNAKE_FOOD`: `anywhere` (default) or `avoid-snake`
//! - `SNAKE_LOG_PATH`: write logs to this file (default: logging disabled)
//!
//! Unset or blank variables fall back to the default; malformed ones are errors.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::{EngineConfig, FoodPlacement};
use crate::types::{GRID_SIZE, TICK_MS};

const GRID_SIZE_RANGE: RangeInclusive<u16> = 4..=64;
const TICK_MS_RANGE: RangeInclusive<u32> = 20..=5000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let grid_size = parse_in_range(&lookup, "SNAKE_GRID_SIZE", GRID_SIZE_RANGE)?
            .unwrap_or(GRID_SIZE);
        let tick_ms =
            parse_in_range(&lookup, "SNAKE_TICK_MS", TICK_MS_RANGE)?.unwrap_or(TICK_MS);
        let seed = parse_var::<u32>(&lookup, "SNAKE_SEED")?;

        let food_placement = match non_blank(&lookup, "SNAKE_FOOD") {
            Some(s) => FoodPlacement::from_str(&s)
                .ok_or_else(|| anyhow!("SNAKE_FOOD={:?}: expected `anywhere` or `avoid-snake`", s))?,
            None => FoodPlacement::Anywhere,
        };

        let log_path = non_blank(&lookup, "SNAKE_LOG_PATH").map(PathBuf::from);

        Ok(Self {
            engine: EngineConfig::new(grid_size, tick_ms).with_food_placement(food_placement),
            seed,
            log_path,
        })
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random::<u32>)
    }
}

/// Route `log` output to `path`, filtered by `RUST_LOG` (default `info`).
///
/// The terminal belongs to the game, so without a path nothing is installed and
/// log macros stay no-ops.
pub fn init_logging(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;
    Ok(true)
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    non_blank(lookup, key)
        .map(|s| s.parse::<T>().map_err(|e| anyhow!("{}={:?}: {}", key, s, e)))
        .transpose()
}

fn parse_in_range<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    range: RangeInclusive<T>,
) -> Result<Option<T>>
where
    T: FromStr + PartialOrd + Display + Copy,
    T::Err: Display,
{
    let value = parse_var::<T>(lookup, key)?;
    if let Some(v) = value {
        if !range.contains(&v) {
            bail!(
                "{}={} is out of range ({}..={})",
                key,
                v,
                range.start(),
                range.end()
            );
        }
    }
    Ok(value)
}
