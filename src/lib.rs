//! Tenant Manifest Library
//!
//! A Terraform-style data source that renders MinIO Operator `Tenant`
//! resources (`minio.min.io/v2`) from configuration into YAML manifests,
//! together with the provider plumbing and a command line front end.

pub mod cli;
pub mod config;
pub mod datasource;
pub mod provider;
pub mod renderer;
pub mod utils;

pub use config::{Config, OutputConfig, OutputFormat, RenderConfig};
pub use datasource::{DataSource, ReadRequest, ReadResponse, TenantManifestDataSource};
pub use provider::{Provider, PROVIDER_TYPE_NAME};
pub use renderer::{ManifestRenderer, RenderReport};

pub use tenant_manifest_schema::{Diagnostic, Diagnostics, Schema};

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum TenantManifestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    #[error("{0}")]
    Diagnostics(Diagnostics),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the main application
pub type TenantManifestResult<T> = Result<T, TenantManifestError>;
