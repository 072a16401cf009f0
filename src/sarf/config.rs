use crate::error::{Result, SarfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for sarf, stored next to the lexicon as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SarfConfig {
    /// Seed a brand-new lexicon with the classical Arabic scheme table
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for SarfConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

impl SarfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SarfError::Io)?;
        let config: SarfConfig =
            serde_json::from_str(&content).map_err(SarfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SarfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SarfError::Serialization)?;
        fs::write(config_path, content).map_err(SarfError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SarfConfig::default();
        assert!(config.seed_defaults);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = SarfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SarfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = SarfConfig {
            seed_defaults: false,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = SarfConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.seed_defaults);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = SarfConfig {
            seed_defaults: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SarfConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
