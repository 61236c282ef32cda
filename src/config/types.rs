use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::life::{Pattern, StepMode, DEFAULT_DENSITY};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// How the first generation is built and how steps are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Probability that a cell starts alive (default: 0.2).
    #[serde(default = "default_density")]
    pub density: f64,
    /// RNG seed for a reproducible board. Random per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output buffer strategy (default: clear).
    #[serde(default)]
    pub step_mode: StepMode,
    /// Start from a built-in pattern instead of a random board.
    #[serde(default)]
    pub pattern: Option<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay between ticks in milliseconds (default: 1000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            seed: None,
            step_mode: StepMode::default(),
            pattern: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl TimingConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
