//! Provider holding the registered data sources

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tenant_manifest_schema::{validate_config, Diagnostics, Schema};
use tracing::{debug, warn};

use crate::datasource::{DataSource, ReadRequest, ReadResponse, TenantManifestDataSource};
use crate::{TenantManifestError, TenantManifestResult};

#[cfg(test)]
mod tests;

/// Type name of the provider, prefix of every data source type name
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/// Registry of data sources keyed by full type name
#[derive(Clone)]
pub struct Provider {
    data_sources: BTreeMap<String, Arc<dyn DataSource>>,
}

impl Provider {
    /// Create a provider with all built-in data sources registered
    pub fn new() -> Self {
        let mut provider = Self::empty();
        provider.register(Arc::new(TenantManifestDataSource::new()));
        provider
    }

    /// Create a provider without any data source
    pub fn empty() -> Self {
        Self {
            data_sources: BTreeMap::new(),
        }
    }

    /// Register a data source under its full type name
    pub fn register(&mut self, data_source: Arc<dyn DataSource>) {
        let name = data_source.type_name(PROVIDER_TYPE_NAME);
        debug!("Registering data source {}", name);
        self.data_sources.insert(name, data_source);
    }

    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    /// Names of all registered data sources, sorted
    pub fn data_source_names(&self) -> Vec<&str> {
        self.data_sources.keys().map(String::as_str).collect()
    }

    fn data_source(&self, name: &str) -> TenantManifestResult<&Arc<dyn DataSource>> {
        self.data_sources
            .get(name)
            .ok_or_else(|| TenantManifestError::UnknownDataSource(name.to_string()))
    }

    pub fn schema(&self, name: &str) -> TenantManifestResult<Schema> {
        Ok(self.data_source(name)?.schema())
    }

    /// Check a configuration against the data source schema
    pub fn validate_data_source_config(
        &self,
        name: &str,
        config: &Value,
    ) -> TenantManifestResult<Diagnostics> {
        let schema = self.schema(name)?;
        Ok(validate_config(&schema, config))
    }

    /// Validate the configuration, then read the data source.
    ///
    /// Validation errors are returned as diagnostics and the read is skipped.
    pub async fn read_data_source(
        &self,
        name: &str,
        config: Value,
    ) -> TenantManifestResult<ReadResponse> {
        let data_source = self.data_source(name)?;

        let diagnostics = validate_config(&data_source.schema(), &config);
        if diagnostics.has_error() {
            warn!(
                "Configuration of {} has {} error(s), skipping read",
                name,
                diagnostics.error_count()
            );
            return Ok(ReadResponse::failed(diagnostics));
        }

        let mut response = data_source.read(ReadRequest::new(config)).await;

        // Keep validation warnings in front of whatever the read reported
        let mut all = diagnostics;
        all.extend(response.diagnostics);
        response.diagnostics = all;

        Ok(response)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}
