// config.rs - Simulation settings loaded from JSON

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::editor::DEFAULT_RANDOM_THRESHOLD;
use crate::error::{LifeError, Result};

pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// One entry of the speed selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedPreset {
    pub label: String,
    pub interval_ms: u64,
}

impl SpeedPreset {
    pub fn new(label: impl Into<String>, interval_ms: u64) -> Self {
        Self { label: label.into(), interval_ms }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

pub fn default_speed_presets() -> Vec<SpeedPreset> {
    vec![
        SpeedPreset::new("Very-Slow", 1000),
        SpeedPreset::new("Slow", 500),
        SpeedPreset::new("Medium", 250),
        SpeedPreset::new("Fast", 100),
        SpeedPreset::new("FastBoi", 50),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Delay between generations when the simulation first starts.
    pub initial_interval_ms: u64,
    /// Cells above this draw come up live in `randomize`.
    pub random_threshold: f64,
    pub speed_presets: Vec<SpeedPreset>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: DEFAULT_INTERVAL_MS,
            random_threshold: DEFAULT_RANDOM_THRESHOLD,
            speed_presets: default_speed_presets(),
        }
    }
}

impl LifeConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            interval_ms = config.initial_interval_ms,
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_interval_ms == 0 {
            return Err(LifeError::InvalidInterval(0));
        }
        if !(0.0..1.0).contains(&self.random_threshold) {
            return Err(LifeError::InvalidThreshold(self.random_threshold));
        }
        if self.speed_presets.is_empty() {
            return Err(LifeError::InvalidConfig("at least one speed preset is required".into()));
        }
        if let Some(preset) = self.speed_presets.iter().find(|p| p.interval_ms == 0) {
            return Err(LifeError::InvalidConfig(format!(
                "speed preset {:?} has a zero interval",
                preset.label
            )));
        }
        Ok(())
    }

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.initial_interval(), Duration::from_millis(100));
        let intervals: Vec<_> = config.speed_presets.iter().map(|p| p.interval_ms).collect();
        assert_eq!(intervals, vec![1000, 500, 250, 100, 50]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = LifeConfig::from_json(r#"{ "initial_interval_ms": 250 }"#).unwrap();
        assert_eq!(config.initial_interval_ms, 250);
        assert_eq!(config.random_threshold, DEFAULT_RANDOM_THRESHOLD);
        assert_eq!(config.speed_presets, default_speed_presets());
    }

    #[test]
    fn custom_presets_are_read() {
        let json = r#"{ "speed_presets": [ { "label": "Crawl", "interval_ms": 2000 } ] }"#;
        let config = LifeConfig::from_json(json).unwrap();
        assert_eq!(config.speed_presets, vec![SpeedPreset::new("Crawl", 2000)]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = LifeConfig::from_json(r#"{ "initial_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, LifeError::InvalidInterval(0)));

        let json = r#"{ "speed_presets": [ { "label": "Never", "interval_ms": 0 } ] }"#;
        assert!(matches!(LifeConfig::from_json(json), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn bad_threshold_and_empty_presets_are_rejected() {
        assert!(matches!(
            LifeConfig::from_json(r#"{ "random_threshold": 1.0 }"#),
            Err(LifeError::InvalidThreshold(_))
        ));
        assert!(matches!(
            LifeConfig::from_json(r#"{ "speed_presets": [] }"#),
            Err(LifeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(LifeConfig::from_json("{ nope"), Err(LifeError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            LifeConfig::load("/nonexistent/conway/config.json"),
            Err(LifeError::Io(_))
        ));
    }
}
