//! Configuration for treestore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::category::Categories;
use crate::{DEFAULT_META_MAX_ENTRIES, DEFAULT_TOC_MAX_ENTRIES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the store subdirectory holding all shard files
    #[serde(default = "default_tree_dir_name")]
    pub tree_dir_name: String,

    /// Maximum entries per toc shard
    #[serde(default = "default_toc_max_entries")]
    pub toc_max_entries: NonZeroUsize,

    /// Maximum entries per meta shard
    #[serde(default = "default_meta_max_entries")]
    pub meta_max_entries: NonZeroUsize,
}

fn default_tree_dir_name() -> String {
    "tree".to_string()
}

fn default_toc_max_entries() -> NonZeroUsize {
    DEFAULT_TOC_MAX_ENTRIES
}

fn default_meta_max_entries() -> NonZeroUsize {
    DEFAULT_META_MAX_ENTRIES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_dir_name: default_tree_dir_name(),
            toc_max_entries: default_toc_max_entries(),
            meta_max_entries: default_meta_max_entries(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("treestore").join("config.yml")),
            Some(PathBuf::from("treestore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Category descriptor table under this config's chunk limits
    pub fn categories(&self) -> Categories {
        Categories::new(self.toc_max_entries, self.meta_max_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tree_dir_name, "tree");
        assert_eq!(config.toc_max_entries, DEFAULT_TOC_MAX_ENTRIES);
        assert_eq!(config.meta_max_entries, DEFAULT_META_MAX_ENTRIES);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("toc_max_entries: 2\n").unwrap();
        assert_eq!(config.toc_max_entries.get(), 2);
        assert_eq!(config.tree_dir_name, "tree");
        assert_eq!(config.meta_max_entries, DEFAULT_META_MAX_ENTRIES);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(serde_yaml::from_str::<Config>("toc_max_entries: 0\n").is_err());
    }
}
