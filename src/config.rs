use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classify::DEFAULT_TAP_THRESHOLD;

/// Tunable timing and distance settings.
///
/// Composition tables are not part of this: they are fixed at compile time.
///
/// ```rust
/// use gesture_keys::GestureConfig;
///
/// let config = GestureConfig::from_toml_str("reveal_delay_ms = 150").unwrap();
/// assert_eq!(config.reveal_delay_ms, 150);
/// assert_eq!(config.repeat_interval_ms, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Strokes at or below this length are taps.
    pub tap_threshold: f32,
    /// Hold time before the gesture surface appears.
    pub reveal_delay_ms: u64,
    /// Hold time before delete starts repeating.
    pub repeat_delay_ms: u64,
    /// Delay between repeated deletes.
    pub repeat_interval_ms: u64,
    /// Characters before the cursor handed to the translator in direct mode.
    pub translation_context_chars: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_threshold: DEFAULT_TAP_THRESHOLD,
            reveal_delay_ms: 100,
            repeat_delay_ms: 400,
            repeat_interval_ms: 50,
            translation_context_chars: 100,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("tap threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),
    #[error("repeat interval must be greater than zero")]
    ZeroInterval,
}

impl GestureConfig {
    /// Parses and validates settings; missing keys keep their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tap_threshold.is_finite() || self.tap_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.tap_threshold));
        }
        if self.repeat_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GestureConfig::from_toml_str("").unwrap();
        assert_eq!(config, GestureConfig::default());
        assert_eq!(config.tap_threshold, 30.0);
        assert_eq!(config.reveal_delay(), Duration::from_millis(100));
        assert_eq!(config.repeat_delay(), Duration::from_millis(400));
        assert_eq!(config.repeat_interval(), Duration::from_millis(50));
    }

    #[test]
    fn partial_override() {
        let toml = r#"
tap_threshold = 12.5
repeat_interval_ms = 80
"#;
        let config = GestureConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.tap_threshold, 12.5);
        assert_eq!(config.repeat_interval_ms, 80);
        assert_eq!(config.reveal_delay_ms, 100);
    }

    #[test]
    fn error_negative_threshold() {
        let err = GestureConfig::from_toml_str("tap_threshold = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(_)));
    }

    #[test]
    fn error_zero_interval() {
        let err = GestureConfig::from_toml_str("repeat_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn error_invalid_toml() {
        let err = GestureConfig::from_toml_str("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_wrong_type() {
        let err = GestureConfig::from_toml_str("reveal_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
