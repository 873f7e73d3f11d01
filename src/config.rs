//! Oven configuration parameters.
//!
//! All tunable parameters for the front panel and the countdown cadence.
//! Defaults reproduce the stock panel: 50 W power steps up to 700 W,
//! one-minute time steps, and a one-second countdown tick.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core oven configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    // --- Power selection ---
    /// Power added per press of the power button; also the first value shown.
    pub power_step_w: u32,
    /// Highest selectable power; the next press wraps to `power_step_w`.
    pub max_power_w: u32,

    // --- Time selection ---
    /// Duration added per press of the time button (seconds).
    pub time_step_secs: u32,
    /// Cap for the accumulated duration (seconds). 5999 = 99:59.
    pub max_duration_secs: u32,

    // --- Timing ---
    /// Countdown cadence period (milliseconds).
    pub tick_interval_ms: u64,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            power_step_w: 50,
            max_power_w: 700,

            time_step_secs: 60,
            max_duration_secs: 99 * 60 + 59,

            tick_interval_ms: 1000,
        }
    }
}

impl OvenConfig {
    /// Reject parameter combinations the panel cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.power_step_w == 0 {
            return Err(Error::Config("power_step_w must be non-zero"));
        }
        if self.max_power_w < self.power_step_w || self.max_power_w % self.power_step_w != 0 {
            return Err(Error::Config(
                "max_power_w must be a non-zero multiple of power_step_w",
            ));
        }
        if self.time_step_secs == 0 {
            return Err(Error::Config("time_step_secs must be non-zero"));
        }
        if self.max_duration_secs < self.time_step_secs {
            return Err(Error::Config(
                "max_duration_secs must hold at least one time step",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be non-zero"));
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading config {}", path.display()))
    }
}
