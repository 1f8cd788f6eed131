//! Configuration types for Bosun

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of candidates a freshly generated hire pool offers
pub const DEFAULT_HIRE_POOL_SIZE: usize = 6;

/// Project configuration (`bosun.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BosunConfig {
    /// Directories scanned for job content, relative to the config file
    #[serde(default = "default_content_dirs")]
    pub content_dirs: Vec<PathBuf>,

    /// Glob patterns for content files inside each directory
    #[serde(default = "default_content_patterns")]
    pub content_patterns: Vec<String>,

    /// Candidates generated per location visit
    #[serde(default = "default_hire_pool_size")]
    pub hire_pool_size: usize,

    /// Seed of the synced random domain
    #[serde(default)]
    pub synced_seed: u64,

    /// Name pools for generated candidates
    #[serde(default)]
    pub names: NamePools,
}

fn default_content_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("content")]
}

fn default_content_patterns() -> Vec<String> {
    vec!["*.yaml".to_string(), "*.yml".to_string(), "*.json".to_string()]
}

fn default_hire_pool_size() -> usize {
    DEFAULT_HIRE_POOL_SIZE
}

impl Default for BosunConfig {
    fn default() -> Self {
        Self {
            content_dirs: default_content_dirs(),
            content_patterns: default_content_patterns(),
            hire_pool_size: default_hire_pool_size(),
            synced_seed: 0,
            names: NamePools::default(),
        }
    }
}

impl BosunConfig {
    /// Load configuration from a JSON file.
    ///
    /// Relative content directories are resolved against the file's directory.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.content_dirs = config
                .content_dirs
                .into_iter()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir })
                .collect();
        }
        Ok(config)
    }
}

/// First and last names handed to synthesized candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePools {
    #[serde(default = "default_first_names")]
    pub first_names: Vec<String>,

    #[serde(default = "default_last_names")]
    pub last_names: Vec<String>,
}

fn default_first_names() -> Vec<String> {
    ["Ada", "Bram", "Cato", "Dagny", "Elif", "Finn", "Greta", "Hiro", "Ines", "Jonas"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_last_names() -> Vec<String> {
    ["Abara", "Brandt", "Castellan", "Dorn", "Ekwall", "Fisk", "Gorski", "Halloran"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for NamePools {
    fn default() -> Self {
        Self {
            first_names: default_first_names(),
            last_names: default_last_names(),
        }
    }
}
