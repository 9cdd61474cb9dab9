//! Runtime configuration.
//!
//! Defaults are overridden first by `BLOCKFALL_*` environment variables, then by
//! command-line flags. Environment values that fail to parse are ignored; bad flags
//! are errors.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};
use log::LevelFilter;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FPS};

pub const MIN_BOARD_WIDTH: usize = 4;
/// Twice the tallest piece; anything shorter ends the game on the first tick.
pub const MIN_BOARD_HEIGHT: usize = 8;
pub const MAX_BOARD_SIDE: usize = 64;
pub const MAX_FPS: u32 = 60;

pub const USAGE: &str = "\
usage: blockfall [--width N] [--height N] [--fps N] [--seed N] [--log PATH] [--log-level LEVEL]

environment: BLOCKFALL_WIDTH BLOCKFALL_HEIGHT BLOCKFALL_FPS BLOCKFALL_SEED
             BLOCKFALL_LOG_PATH BLOCKFALL_LOG_LEVEL

keys: left/h/a, right/l/d move; down/space hard drop; j/s soft drop; q/esc quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fps: u32,
    /// Fixed RNG seed; the wall clock is used when unset
    pub seed: Option<u32>,
    /// Log file; no logger is installed when unset
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            fps: DEFAULT_FPS,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from `BLOCKFALL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            width: parse_var(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parse_var(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            fps: parse_var(&lookup, "BLOCKFALL_FPS").unwrap_or(defaults.fps),
            seed: parse_var(&lookup, "BLOCKFALL_SEED"),
            log_path,
            log_level: parse_var(&lookup, "BLOCKFALL_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Override with command-line flags (program name already stripped)
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .map(String::as_str)
                    .ok_or_else(|| anyhow!("config: missing value for {}", flag))
            };

            match flag {
                "--width" => self.width = parse_flag(flag, value()?)?,
                "--height" => self.height = parse_flag(flag, value()?)?,
                "--fps" => self.fps = parse_flag(flag, value()?)?,
                "--seed" => self.seed = Some(parse_flag(flag, value()?)?),
                "--log" => self.log_path = Some(PathBuf::from(value()?)),
                "--log-level" => self.log_level = parse_flag(flag, value()?)?,
                other => bail!("config: unknown argument: {}", other),
            }
            i += 2;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_SIDE).contains(&self.width) {
            bail!(
                "config: width {} outside {}..={}",
                self.width,
                MIN_BOARD_WIDTH,
                MAX_BOARD_SIDE
            );
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_SIDE).contains(&self.height) {
            bail!(
                "config: height {} outside {}..={}",
                self.height,
                MIN_BOARD_HEIGHT,
                MAX_BOARD_SIDE
            );
        }
        if !(1..=MAX_FPS).contains(&self.fps) {
            bail!("config: fps {} outside 1..={}", self.fps, MAX_FPS);
        }
        Ok(())
    }

    /// Budget for one simulation/render frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }

    /// Configured seed, or one derived from the wall clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("config: invalid {} value: {}", flag, value))
}
