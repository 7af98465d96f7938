//! Store configuration for folio
//!
//! Configuration is stored in `.folio/config.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::moderation::ModerationConfig;
use crate::recommend::RecommendParams;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Number of posts returned by the explore surface
pub const DEFAULT_EXPLORE_LIMIT: usize = 6;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store format version
    pub version: u32,
    /// Number of posts shown on the explore surface
    pub explore_limit: usize,
    /// Recommendation ranking parameters
    pub recommend: RecommendParams,
    /// Toxicity moderation service settings
    pub moderation: ModerationConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            explore_limit: DEFAULT_EXPLORE_LIMIT,
            recommend: RecommendParams::default(),
            moderation: ModerationConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.version, STORE_FORMAT_VERSION);
        assert_eq!(config.explore_limit, DEFAULT_EXPLORE_LIMIT);
        assert_eq!(config.recommend.tag_weight, 1.5);
        assert_eq!(config.recommend.score_threshold, 0.5);
        assert_eq!(config.recommend.limit, 4);
        assert!(config.moderation.endpoint.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = StoreConfig::default();
        config.recommend.limit = 8;
        config.moderation.endpoint = "http://127.0.0.1:5002/predict".to_string();
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "version = 1\n\n[recommend]\nlimit = 2\n").unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded.recommend.limit, 2);
        assert_eq!(loaded.recommend.tag_weight, 1.5);
        assert_eq!(loaded.explore_limit, DEFAULT_EXPLORE_LIMIT);
    }
}
