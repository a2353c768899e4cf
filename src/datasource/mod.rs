//! Data sources exposed by the provider

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tenant_manifest_schema::{Diagnostics, Schema};

use crate::{TenantManifestError, TenantManifestResult};

pub mod tenant;

#[cfg(test)]
mod tests;

pub use tenant::TenantManifestDataSource;

/// A read-only data source
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full type name under the given provider, e.g. `k8s_minio_min_io_tenant_v2_manifest`
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Schema of the configuration block
    fn schema(&self) -> Schema;

    /// Compute state from a configuration that already passed validation
    async fn read(&self, request: ReadRequest) -> ReadResponse;
}

/// Input of a read
#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// Configuration block as a JSON object
    pub config: Value,
}

impl ReadRequest {
    pub fn new(config: Value) -> Self {
        Self { config }
    }
}

/// Output of a read
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReadResponse {
    /// Resulting state, absent when the read failed
    pub state: Option<Value>,

    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// The state, or the error diagnostics that prevented it
    pub fn into_state(self) -> TenantManifestResult<Value> {
        match self.state {
            Some(state) if !self.diagnostics.has_error() => Ok(state),
            _ => Err(TenantManifestError::Diagnostics(self.diagnostics)),
        }
    }
}
