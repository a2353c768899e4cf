//! Data source rendering MinIO `Tenant` manifests

use async_trait::async_trait;
use serde_json::Value;
use tenant_manifest_model::{SchemaObject, TenantManifest};
use tenant_manifest_schema::{conform_config, Attribute, Diagnostic, Schema};
use tracing::{debug, info};

use super::{DataSource, ReadRequest, ReadResponse};

/// Suffix appended to the provider type name
const TYPE_NAME_SUFFIX: &str = "_minio_min_io_tenant_v2_manifest";

/// Renders a `minio.min.io/v2` Tenant from configuration.
///
/// No cluster is contacted; the result is the YAML text of the manifest.
#[derive(Debug, Clone, Default)]
pub struct TenantManifestDataSource;

impl TenantManifestDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Decode, add type information and serialize the manifest
    fn render(&self, config: &Value) -> Result<(TenantManifest, String), Diagnostic> {
        let manifest: TenantManifest = serde_json::from_value(config.clone()).map_err(|e| {
            Diagnostic::error(
                "Unable to decode configuration",
                format!("The configuration could not be decoded into a Tenant: {e}"),
            )
        })?;
        let manifest = manifest.with_type_meta();

        let yaml = serde_yaml::to_string(&manifest).map_err(|e| {
            Diagnostic::error(
                "Unable to marshal resource",
                format!("The Tenant could not be serialized to YAML: {e}"),
            )
        })?;

        Ok((manifest, yaml))
    }
}

#[async_trait]
impl DataSource for TenantManifestDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}{TYPE_NAME_SUFFIX}")
    }

    fn schema(&self) -> Schema {
        let attributes = TenantManifest::attributes()
            .with(
                "id",
                Attribute::string()
                    .computed()
                    .describe("Identifier of the rendered object, `<namespace>/<name>`."),
            )
            .with(
                "yaml",
                Attribute::string()
                    .computed()
                    .describe("The generated manifest in YAML format."),
            );

        Schema::new(attributes).with_description(
            "Tenant is a Kubernetes object describing a MinIO Tenant (minio.min.io/v2).",
        )
    }

    async fn read(&self, request: ReadRequest) -> ReadResponse {
        let mut config = request.config;
        conform_config(&self.schema(), &mut config);

        let (manifest, yaml) = match self.render(&config) {
            Ok(rendered) => rendered,
            Err(diagnostic) => return ReadResponse::failed(diagnostic.into()),
        };

        let id = manifest.id();
        debug!("Rendered {} bytes of YAML for {}", yaml.len(), id);

        let mut state = config;
        if let Value::Object(fields) = &mut state {
            fields.insert("id".to_string(), Value::String(id.clone()));
            fields.insert("yaml".to_string(), Value::String(yaml));
        }

        info!("Read Tenant manifest {}", id);

        ReadResponse {
            state: Some(state),
            ..Default::default()
        }
    }
}
