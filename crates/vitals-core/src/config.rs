//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `vitals-config.yaml` next to the
//! server binary. [`VitalsConfig`] bundles every tunable of the decay
//! mechanic so callers (tick hooks, tests) can override defaults.
//! [`ServerConfig`] mirrors the whole YAML file, including the host and
//! logging sections, and provides the loader.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Environment variable overriding [`VitalsConfig::time_between_updates_ms`].
pub const ENV_UPDATE_INTERVAL_MS: &str = "VITALS_UPDATE_INTERVAL_MS";
/// Environment variable overriding [`VitalsConfig::food_removal_rate`].
pub const ENV_FOOD_RATE: &str = "VITALS_FOOD_RATE";
/// Environment variable overriding [`VitalsConfig::water_removal_rate`].
pub const ENV_WATER_RATE: &str = "VITALS_WATER_RATE";

/// Configuration for the food / water decay mechanic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VitalsConfig {
    /// Minimum milliseconds between two accepted ticks for one player
    /// (default: 60000).
    #[serde(default = "default_time_between_updates_ms")]
    pub time_between_updates_ms: u64,

    /// Food removed per accepted tick (default: 1).
    #[serde(default = "default_food_removal_rate")]
    pub food_removal_rate: f64,

    /// Water removed per accepted tick (default: 2).
    #[serde(default = "default_water_removal_rate")]
    pub water_removal_rate: f64,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            time_between_updates_ms: default_time_between_updates_ms(),
            food_removal_rate: default_food_removal_rate(),
            water_removal_rate: default_water_removal_rate(),
        }
    }
}

impl VitalsConfig {
    /// Override values from the process environment.
    ///
    /// - `VITALS_UPDATE_INTERVAL_MS` overrides `time_between_updates_ms`
    /// - `VITALS_FOOD_RATE` overrides `food_removal_rate`
    /// - `VITALS_WATER_RATE` overrides `water_removal_rate`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Override values using an arbitrary variable lookup.
    ///
    /// Values that fail to parse are ignored with a warning and the
    /// configured value is kept.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_UPDATE_INTERVAL_MS) {
            match raw.trim().parse::<u64>() {
                Ok(val) => self.time_between_updates_ms = val,
                Err(e) => warn!(var = ENV_UPDATE_INTERVAL_MS, value = %raw, error = %e, "Ignoring override"),
            }
        }
        if let Some(raw) = lookup(ENV_FOOD_RATE) {
            match raw.trim().parse::<f64>() {
                Ok(val) => self.food_removal_rate = val,
                Err(e) => warn!(var = ENV_FOOD_RATE, value = %raw, error = %e, "Ignoring override"),
            }
        }
        if let Some(raw) = lookup(ENV_WATER_RATE) {
            match raw.trim().parse::<f64>() {
                Ok(val) => self.water_removal_rate = val,
                Err(e) => warn!(var = ENV_WATER_RATE, value = %raw, error = %e, "Ignoring override"),
            }
        }
    }

    /// Check that the values can drive the decay mechanic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero update interval or a
    /// negative / non-finite removal rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_between_updates_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "time_between_updates_ms must be at least 1".to_owned(),
            });
        }
        for (name, rate) in [
            ("food_removal_rate", self.food_removal_rate),
            ("water_removal_rate", self.water_removal_rate),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!("{name} must be a finite, non-negative number (got {rate})"),
                });
            }
        }
        Ok(())
    }
}

/// Top-level configuration file for the vitals server.
///
/// Mirrors the structure of `vitals-config.yaml`. Every section is optional
/// and falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Decay mechanic parameters.
    #[serde(default)]
    pub vitals: VitalsConfig,

    /// Host loop parameters.
    #[serde(default)]
    pub server: ServerSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment overrides are applied to the `vitals` section and the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.vitals.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vitals.validate()?;
        if self.server.tick_cadence_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "server.tick_cadence_ms must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Host loop configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Milliseconds between two player tick broadcasts (default: 5000).
    #[serde(default = "default_tick_cadence_ms")]
    pub tick_cadence_ms: u64,

    /// Stop after this many ticks; 0 runs until interrupted (default: 0).
    #[serde(default)]
    pub max_ticks: u64,

    /// Number of simulated players to connect at startup (default: 4).
    #[serde(default = "default_demo_players")]
    pub demo_players: u32,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            tick_cadence_ms: default_tick_cadence_ms(),
            max_ticks: 0,
            demo_players: default_demo_players(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

const fn default_time_between_updates_ms() -> u64 {
    60_000
}

const fn default_food_removal_rate() -> f64 {
    1.0
}

const fn default_water_removal_rate() -> f64 {
    2.0
}

const fn default_tick_cadence_ms() -> u64 {
    5_000
}

const fn default_demo_players() -> u32 {
    4
}

fn default_log_level() -> String {
    "info".to_owned()
}
