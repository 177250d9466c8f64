//! Configuration
//!
//! `ProbeConfig` is read from TOML. Every field has a default, so a document
//! only needs the keys it wants to change; missing sections and keys fall back
//! to the values in `constants`.

pub mod dynamic_value;

pub use dynamic_value::DynamicValue;

use crate::cast::CastOptions;
use crate::constants::{gesture, traversal};
use crate::error::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub traversal: TraversalConfig,
    pub cast: CastOptions,
    pub gesture: GestureSettings,
}

/// Defaults applied to ray queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    pub max_steps: u32,
    pub stop_at_first_blocker: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_steps: traversal::DEFAULT_MAX_STEPS,
            stop_at_first_blocker: true,
        }
    }
}

/// Fixed gesture thresholds as they appear in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Name carried by emitted gesture events
    pub event_name: String,
    /// Presses that make up the gesture
    pub trigger_count: u64,
    /// Max ticks between the first and last press
    pub input_window_ticks: u64,
    /// Quiet ticks after the last press before the presses are judged
    pub logging_timeout_ticks: u64,
    /// Ticks a player is ignored after a judgement
    pub cooldown_ticks: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            event_name: gesture::DEFAULT_EVENT_NAME.to_string(),
            trigger_count: gesture::DEFAULT_TRIGGER_COUNT,
            input_window_ticks: gesture::DEFAULT_INPUT_WINDOW_TICKS,
            logging_timeout_ticks: gesture::DEFAULT_LOGGING_TIMEOUT_TICKS,
            cooldown_ticks: gesture::DEFAULT_COOLDOWN_TICKS,
        }
    }
}

impl ProbeConfig {
    /// Parse a TOML document, filling gaps with defaults
    pub fn from_toml_str(source: &str) -> ProbeResult<Self> {
        let config: ProbeConfig = toml::from_str(source)?;
        log::debug!("[Config] Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ProbeError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config = toml::from_str(&source).map_err(|e: toml::de::Error| ProbeError::ConfigParse {
            source_name: path.display().to_string(),
            error: e.to_string(),
        })?;

        log::info!("[Config] Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.traversal.max_steps == 0 {
            return Err(anyhow::anyhow!("ProbeConfig: traversal.max_steps cannot be 0"));
        }

        if !(self.cast.max_distance.is_finite() && self.cast.max_distance > 0.0) {
            return Err(anyhow::anyhow!(
                "ProbeConfig: cast.max_distance must be a positive number, got {}",
                self.cast.max_distance
            ));
        }

        if self.gesture.trigger_count == 0 {
            return Err(anyhow::anyhow!("ProbeConfig: gesture.trigger_count cannot be 0"));
        }

        if self.gesture.event_name.trim().is_empty() {
            return Err(anyhow::anyhow!("ProbeConfig: gesture.event_name cannot be empty"));
        }

        log::debug!("[Config] Configuration validated successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = ProbeConfig::from_toml_str("").expect("empty toml is valid");
        assert_eq!(config, ProbeConfig::default());
        assert_eq!(config.traversal.max_steps, 4096);
        assert!(config.traversal.stop_at_first_blocker);
        assert!(!config.cast.include_passable_blocks);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_merges_over_defaults() {
        let config = ProbeConfig::from_toml_str(
            r#"
            [traversal]
            stop_at_first_blocker = false

            [gesture]
            trigger_count = 3
            event_name = "gesture:triple_jump"
            "#,
        )
        .expect("partial toml is valid");

        assert!(!config.traversal.stop_at_first_blocker);
        assert_eq!(config.traversal.max_steps, 4096);
        assert_eq!(config.gesture.trigger_count, 3);
        assert_eq!(config.gesture.event_name, "gesture:triple_jump");
        assert_eq!(config.gesture.cooldown_ticks, GestureSettings::default().cooldown_ticks);
    }

    #[test]
    fn test_malformed_document() {
        let err = ProbeConfig::from_toml_str("[traversal]\nmax_steps = \"lots\"")
            .expect_err("a string is not a step count");
        assert!(matches!(err, ProbeError::ConfigParse { .. }));
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        let mut config = ProbeConfig::default();
        config.traversal.max_steps = 0;
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.cast.max_distance = -1.0;
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.gesture.trigger_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temporary config file");
        writeln!(file, "[cast]\nmax_distance = 6.5\ninclude_passable_blocks = true")
            .expect("Failed to write temporary config file");

        let config = ProbeConfig::load(file.path()).expect("config file should load");
        assert_eq!(config.cast.max_distance, 6.5);
        assert!(config.cast.include_passable_blocks);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let err = ProbeConfig::load(dir.path().join("missing.toml"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ProbeError::Io { .. }));
    }
}
