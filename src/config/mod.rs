use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Lot capacity of the original system; kept as the default.
fn default_capacity() -> u32 {
    100
}
fn default_rate() -> f64 {
    0.03
}
fn default_currency() -> String {
    "Rs".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding both persisted tables.
    pub data_dir: String,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_rate")]
    pub rate_per_second: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            capacity: default_capacity(),
            rate_per_second: default_rate(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("carpark")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".carpark")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("carpark.conf")
    }

    /// Path of the persisted spot table.
    pub fn spots_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("parking_spots.txt")
    }

    /// Path of the persisted history ledger.
    pub fn history_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("parking_history.txt")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Initialize configuration file and data directory.
    /// In test mode the user config file is left untouched.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let config = Config {
            data_dir: data_dir.unwrap_or_else(|| dir.to_string_lossy().to_string()),
            ..Config::default()
        };

        fs::create_dir_all(&config.data_dir)?;

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_system() {
        let cfg = Config::default();
        assert_eq!(cfg.capacity, 100);
        assert_eq!(cfg.rate_per_second, 0.03);
        assert_eq!(cfg.currency, "Rs");
    }

    #[test]
    fn table_paths_live_in_data_dir() {
        let cfg = Config {
            data_dir: "/tmp/lot".to_string(),
            ..Config::default()
        };
        assert!(cfg.spots_file().ends_with("parking_spots.txt"));
        assert!(cfg.history_file().starts_with("/tmp/lot"));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg: Config = serde_yaml::from_str("data_dir: /tmp/lot\n").unwrap();
        assert_eq!(cfg.capacity, 100);
        assert_eq!(cfg.rate_per_second, 0.03);
    }
}
