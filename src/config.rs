//! # Application Configuration
//!
//! TOML configuration for the `keystick` binary. The joystick reader itself keeps
//! its configuration only in memory; this module is how the binary decides what to
//! hand it at startup.
//!
//! ```toml
//! button_bias = "off"
//!
//! [pins]
//! x = 1
//! y = 0
//! button = 17
//!
//! [thresholds]
//! up = 625
//! down = 175
//! left = 175
//! right = 625
//!
//! [adc]
//! bus = 0
//! slave_select = 0
//! clock_hz = 1000000
//!
//! [poll]
//! interval_ms = 100
//! reports = ["direction"]
//! ```
//!
//! Every section and field is optional. Missing pins fall back one by one to the
//! platform's default wiring.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::joystick::{PinConfig, ThresholdSet};
use crate::platform::rpi::{AdcSettings, ButtonBias};

const CONFIG_DIR: &str = ".config/keystick";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Pin assignment as written in the config file
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinSection {
    pub x: Option<u8>,
    pub y: Option<u8>,
    pub button: Option<u8>,
}

impl PinSection {
    /// Fills every unset pin from `defaults`
    pub fn resolve(&self, defaults: PinConfig<u8, u8>) -> PinConfig<u8, u8> {
        PinConfig::new(
            self.x.unwrap_or(defaults.x),
            self.y.unwrap_or(defaults.y),
            self.button.unwrap_or(defaults.button),
        )
    }
}

/// What the polling loop emits on every tick
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Report {
    /// Raw X, Y and B values to telemetry
    Values,
    /// Direction name to telemetry
    Direction,
    /// Direction glyph to the LED matrix
    Indicator,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PollSettings {
    pub interval_ms: u64,
    pub reports: Vec<Report>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            reports: vec![Report::Direction],
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub button_bias: ButtonBias,
    pub pins: PinSection,
    pub thresholds: ThresholdSet,
    pub adc: AdcSettings,
    pub poll: PollSettings,
}

impl AppConfig {
    /// Default location, `~/.config/keystick/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = get_home_dir();
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path`, writing a default one first if it does not exist
    pub async fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|e| io_error(path, e))?;

        if !exists {
            info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save(path).await?;
            return Ok(config);
        }

        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))?;
        Self::from_toml(path, &content)
    }

    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| io_error(path, e))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "poll.interval_ms must be greater than zero".to_string(),
            ));
        }
        if let Some((direction, value)) = self.thresholds.out_of_range() {
            return Err(ConfigError::Invalid(format!(
                "thresholds.{} = {} is outside 0-1023",
                direction, value
            )));
        }
        let t = &self.thresholds;
        if t.down > t.up || t.left > t.right {
            // Not fatal: overlapping bands just shift which check wins
            warn!(
                "Overlapping thresholds: up={} down={} left={} right={}",
                t.up, t.down, t.left, t.right
            );
        }
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("Could not determine home directory, using current directory");
        PathBuf::from(".")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml(Path::new("empty.toml"), "").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll.reports, vec![Report::Direction]);
    }

    #[test]
    fn missing_pins_fall_back_individually() {
        let content = "[pins]\nbutton = 22\n";
        let config = AppConfig::from_toml(Path::new("pins.toml"), content).unwrap();
        let pins = config.pins.resolve(PinConfig::new(1, 0, 17));
        assert_eq!(pins, PinConfig::new(1, 0, 22));
    }

    #[test]
    fn full_file_parses() {
        let content = r#"
            button_bias = "pull_down"

            [pins]
            x = 3
            y = 4
            button = 5

            [thresholds]
            up = 700
            left = 100

            [adc]
            bus = 1
            slave_select = 2

            [poll]
            interval_ms = 20
            reports = ["values", "indicator"]
        "#;
        let config = AppConfig::from_toml(Path::new("full.toml"), content).unwrap();

        assert_eq!(config.button_bias, ButtonBias::PullDown);
        assert_eq!(config.thresholds.up, 700);
        assert_eq!(config.thresholds.down, 175);
        assert_eq!(config.thresholds.left, 100);
        assert_eq!(config.adc.bus, 1);
        assert_eq!(config.adc.clock_hz, 1_000_000);
        assert_eq!(config.poll.interval_ms, 20);
        assert_eq!(config.poll.reports, vec![Report::Values, Report::Indicator]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = AppConfig::from_toml(Path::new("bad.toml"), "[poll]\ninterval_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn threshold_beyond_adc_range_is_rejected() {
        let result = AppConfig::from_toml(Path::new("bad.toml"), "[thresholds]\nup = 2000\n");
        match result {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("thresholds.up")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn syntax_errors_carry_the_path() {
        let result = AppConfig::from_toml(Path::new("broken.toml"), "[poll");
        match result {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, Path::new("broken.toml")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_or_create_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = AppConfig::load_or_create(&path).await.unwrap();
        assert_eq!(created, AppConfig::default());
        assert!(path.exists());

        let mut changed = created.clone();
        changed.thresholds.up = 800;
        changed.save(&path).await.unwrap();

        let loaded = AppConfig::load_or_create(&path).await.unwrap();
        assert_eq!(loaded.thresholds.up, 800);
    }
}
