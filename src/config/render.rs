//! Render configuration

use serde::{Deserialize, Serialize};

use crate::{TenantManifestError, TenantManifestResult};

/// Render configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Whether to stop at the first invalid input
    #[serde(default)]
    pub fail_fast: bool,

    /// File extensions picked up when an input is a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["yaml".to_string(), "yml".to_string(), "json".to_string()]
}

impl RenderConfig {
    pub fn validate(&self) -> TenantManifestResult<()> {
        if self.extensions.is_empty() {
            return Err(TenantManifestError::Config(
                "At least one input file extension must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `extension` (without the dot) is one of the configured ones
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            extensions: default_extensions(),
        }
    }
}
