//! Playback timing configuration
//!
//! Every view family animates at its own pace: arrays move quickly, graphs
//! slower so edges can be followed, and tree traversals use a fixed per-visit
//! delay followed by a linger before the highlight is cleared. Timings are
//! stored in milliseconds so configuration files stay readable.
//!
//! ```json
//! {
//!   "defaultSpeed": "medium",
//!   "array": {"slowMs": 1000, "mediumMs": 500, "fastMs": 200},
//!   "checkpointInterval": 64
//! }
//! ```
//!
//! Missing fields fall back to their defaults.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read playback configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid playback configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown playback speed: {0}")]
    UnknownSpeed(String),
}

/// User-selectable playback speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSpeed(s.to_owned()))
    }
}

/// Which kind of structure a view animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFamily {
    Array,
    Graph,
    Tree,
    List,
}

/// Delay between two steps at each speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedIntervals {
    pub slow_ms: u64,
    pub medium_ms: u64,
    pub fast_ms: u64,
}

impl SpeedIntervals {
    pub const fn new(slow_ms: u64, medium_ms: u64, fast_ms: u64) -> Self {
        Self {
            slow_ms,
            medium_ms,
            fast_ms,
        }
    }

    pub fn at(&self, speed: Speed) -> Duration {
        Duration::from_millis(match speed {
            Speed::Slow => self.slow_ms,
            Speed::Medium => self.medium_ms,
            Speed::Fast => self.fast_ms,
        })
    }
}

/// Fixed cadence that ignores the selected speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedTiming {
    /// Delay before each step
    pub step_ms: u64,
    /// Time the last step stays on screen before completion
    pub linger_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackConfig {
    pub default_speed: Speed,
    pub array: SpeedIntervals,
    pub graph: SpeedIntervals,
    pub tree: FixedTiming,
    pub list: FixedTiming,
    /// A display-state checkpoint is kept every this many steps
    pub checkpoint_interval: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_speed: Speed::Medium,
            array: SpeedIntervals::new(1000, 500, 200),
            graph: SpeedIntervals::new(1500, 1000, 500),
            tree: FixedTiming {
                step_ms: 800,
                linger_ms: 1000,
            },
            list: FixedTiming {
                step_ms: 300,
                linger_ms: 1000,
            },
            checkpoint_interval: 64,
        }
    }
}

impl PlaybackConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading playback configuration from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Delay before the next step of a `family` view at `speed`
    pub fn interval(&self, family: ViewFamily, speed: Speed) -> Duration {
        match family {
            ViewFamily::Array => self.array.at(speed),
            ViewFamily::Graph => self.graph.at(speed),
            ViewFamily::Tree => Duration::from_millis(self.tree.step_ms),
            ViewFamily::List => Duration::from_millis(self.list.step_ms),
        }
    }

    /// Time the final step stays visible before the view completes
    pub fn linger(&self, family: ViewFamily) -> Duration {
        match family {
            ViewFamily::Array | ViewFamily::Graph => Duration::ZERO,
            ViewFamily::Tree => Duration::from_millis(self.tree.linger_ms),
            ViewFamily::List => Duration::from_millis(self.list.linger_ms),
        }
    }

    fn sanitized(mut self) -> Self {
        if self.checkpoint_interval == 0 {
            debug!("Checkpoint interval 0 replaced by 1");
            self.checkpoint_interval = 1;
        }
        self
    }
}
