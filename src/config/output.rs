//! Output configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{TenantManifestError, TenantManifestResult};

/// What `render` writes for each configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The manifest YAML, documents separated by `---`
    #[default]
    Manifest,

    /// The full data source state as JSON
    State,
}

impl FromStr for OutputFormat {
    type Err = TenantManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manifest" => Ok(OutputFormat::Manifest),
            "state" => Ok(OutputFormat::State),
            other => Err(TenantManifestError::Config(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Manifest => write!(f, "manifest"),
            OutputFormat::State => write!(f, "state"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// File to write to instead of stdout; `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    pub fn validate(&self) -> TenantManifestResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(TenantManifestError::Config(
                    "Output path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Output path with `~` expanded
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.as_ref().map(|path| {
            let raw = path.to_string_lossy();
            PathBuf::from(shellexpand::tilde(&raw).into_owned())
        })
    }
}
