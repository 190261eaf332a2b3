use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "roster.json";
const DEFAULT_STORE_PATH: &str = "employees.json";

/// Configuration for roster, stored in roster.json next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the JSON record store file
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Decode)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Encode)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn store_path(&self) -> &str {
        &self.store_path
    }

    /// Export target: the store path with its extension swapped for `.yaml`.
    /// The default store path therefore exports to `employees.yaml`.
    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.store_path).with_extension("yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.store_path, "employees.json");
    }

    #[test]
    fn test_export_path_mirrors_store_path() {
        let config = RosterConfig::default();
        assert_eq!(config.export_path(), PathBuf::from("employees.yaml"));

        let config = RosterConfig {
            store_path: "staff/people.json".to_string(),
        };
        assert_eq!(config.export_path(), PathBuf::from("staff/people.yaml"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let config = RosterConfig {
            store_path: "team.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.store_path, "team.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RosterConfig {
            store_path: "other.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RosterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
