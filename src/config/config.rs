//! Main configuration structure and implementation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{OutputConfig, RenderConfig};
use crate::{TenantManifestError, TenantManifestResult};

/// Configuration version understood by this tool
pub const CONFIG_VERSION: &str = "1.0";

/// File names looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    ".tenant-manifest.yaml",
    ".tenant-manifest.yml",
    "tenant-manifest.yaml",
    "tenant-manifest.yml",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> TenantManifestResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> TenantManifestResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> TenantManifestResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(TenantManifestError::Config(format!(
                "Unsupported configuration version: {}",
                self.version
            )));
        }

        self.output.validate()?;
        self.render.validate()?;

        Ok(())
    }

    /// Per-user configuration file, `<config dir>/tenant-manifest/config.yaml`
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::get_config_dir()
            .ok()
            .map(|dir| dir.join("config.yaml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            output: OutputConfig::default(),
            render: RenderConfig::default(),
        }
    }
}
