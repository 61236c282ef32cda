use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::life::{Pattern, StepMode};

/// Conway's Game of Life on a 10x10 torus, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "lifeterm", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/lifeterm/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible random board
    #[arg(long, value_name = "N", conflicts_with = "pattern")]
    pub seed: Option<u64>,

    /// Probability that a cell starts alive
    #[arg(long, value_name = "P", conflicts_with = "pattern")]
    pub density: Option<f64>,

    /// Milliseconds between generations
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// How the next-generation buffer is prepared before each step
    #[arg(long, value_enum)]
    pub step_mode: Option<StepMode>,

    /// Start from a built-in pattern instead of a random board
    #[arg(long, value_enum)]
    pub pattern: Option<Pattern>,
}

impl Cli {
    /// Loads the config file and applies flag overrides on top of it.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    /// Applies flag overrides to `config` and validates the result.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(density) = self.density {
            config.simulation.density = density;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.timing.tick_interval_ms = tick_ms;
        }
        if let Some(step_mode) = self.step_mode {
            config.simulation.step_mode = step_mode;
        }
        if let Some(pattern) = self.pattern {
            config.simulation.pattern = Some(pattern);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "lifeterm",
            "--seed",
            "9",
            "--tick-ms",
            "250",
            "--step-mode",
            "legacy",
        ]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.timing.tick_interval_ms, 250);
        assert_eq!(config.simulation.step_mode, StepMode::Legacy);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["lifeterm"]);
        assert_eq!(cli.apply(Config::default()).unwrap(), Config::default());
    }

    #[test]
    fn pattern_conflicts_with_seed() {
        let result = Cli::try_parse_from(["lifeterm", "--pattern", "glider", "--seed", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_override_fails_validation() {
        let cli = Cli::parse_from(["lifeterm", "--density", "1.5"]);
        assert!(matches!(
            cli.apply(Config::default()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
