//! Player configuration
//!
//! ```yaml
//! binary-search-threshold: 32   # timelines longer than this use binary search
//! frame-rate: 60                # ticks per second when simulating offline
//! transpose: 0                  # initial semitone offset
//! ```
//! Every key is optional.

use serde::Deserialize;

use crate::error::SyncError;
use crate::timeline::DEFAULT_BINARY_SEARCH_THRESHOLD;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub binary_search_threshold: usize,
    pub frame_rate: f64,
    pub transpose: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            binary_search_threshold: DEFAULT_BINARY_SEARCH_THRESHOLD,
            frame_rate: 60.0,
            transpose: 0,
        }
    }
}

impl PlayerConfig {
    pub fn from_yaml(source: &str) -> Result<Self, SyncError> {
        // An empty file is a valid, all-defaults config
        if source.trim().is_empty() {
            return Ok(PlayerConfig::default());
        }

        let config: PlayerConfig =
            serde_yaml::from_str(source).map_err(|e| SyncError::MetadataError(e.to_string()))?;

        if !config.frame_rate.is_finite() || config.frame_rate <= 0.0 {
            return Err(SyncError::MetadataError(format!(
                "frame-rate must be positive, got {}",
                config.frame_rate
            )));
        }
        Ok(config)
    }

    /// Seconds between simulated frames
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::from_yaml("").unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.binary_search_threshold, 32);
        assert_eq!(config.frame_rate, 60.0);
        assert_eq!(config.transpose, 0);
    }

    #[test]
    fn test_partial_config() {
        let config = PlayerConfig::from_yaml("transpose: -3\nframe-rate: 30").unwrap();
        assert_eq!(config.transpose, -3);
        assert_eq!(config.frame_rate, 30.0);
        assert_eq!(config.binary_search_threshold, 32);
        assert!((config.frame_interval() - 1.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_frame_rate() {
        assert!(PlayerConfig::from_yaml("frame-rate: 0").is_err());
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            PlayerConfig::from_yaml("tempo: 120"),
            Err(SyncError::MetadataError(_))
        ));
    }
}
