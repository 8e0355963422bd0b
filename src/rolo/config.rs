use crate::error::{Result, RoloError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Configuration for rolo, stored next to the contact snapshot as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// How many days ahead `birthdays` looks, today included
    #[serde(default = "default_window_days")]
    pub upcoming_window_days: i64,
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoloError::Io)?;
        let config: RoloConfig =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoloError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoloError::Serialization)?;
        fs::write(config_path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    /// Get the reminder window (negative values are treated as zero)
    pub fn get_window_days(&self) -> i64 {
        self.upcoming_window_days.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.upcoming_window_days, 7);
    }

    #[test]
    fn test_negative_window_clamps_to_zero() {
        let config = RoloConfig {
            upcoming_window_days: -3,
        };
        assert_eq!(config.get_window_days(), 0);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("rolo_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = RoloConfig::load(&temp_dir).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("rolo_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = RoloConfig {
            upcoming_window_days: 30,
        };
        config.save(&temp_dir).unwrap();

        let loaded = RoloConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.upcoming_window_days, 30);

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let parsed: RoloConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.upcoming_window_days, DEFAULT_WINDOW_DAYS);
    }
}
