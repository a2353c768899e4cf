//! Data source tests

use super::*;
use serde_json::json;
use tenant_manifest_schema::Diagnostic;

fn tenant_config() -> Value {
    json!({
        "metadata": {
            "name": "storage",
            "namespace": "minio-tenant",
            "labels": {"app": "minio", "version": 2},
        },
        "spec": {
            "image": "quay.io/minio/minio:RELEASE.2024-01-01T00-00-00Z",
            "request_auto_cert": false,
            "features": {"bucket_dns": true},
            "pools": [{
                "name": "pool-0",
                "servers": 4,
                "volumes_per_server": 4,
                "volume_claim_template": {
                    "metadata": {"name": "data"},
                    "spec": {
                        "access_modes": ["ReadWriteOnce"],
                        "resources": {"requests": {"storage": "1Ti"}},
                    },
                },
            }],
        },
    })
}

fn rendered_yaml(state: &Value) -> serde_yaml::Value {
    let yaml = state["yaml"].as_str().expect("yaml attribute");
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_type_name() {
    let data_source = TenantManifestDataSource::new();
    assert_eq!(
        data_source.type_name("k8s"),
        "k8s_minio_min_io_tenant_v2_manifest"
    );
}

#[test]
fn test_schema_declares_computed_outputs() {
    let schema = TenantManifestDataSource::new().schema();
    let attributes = &schema.attributes;

    assert!(attributes.get("id").unwrap().computed);
    assert!(attributes.get("yaml").unwrap().computed);
    assert!(attributes.get("metadata").unwrap().required);
    assert!(attributes.get("spec").unwrap().required);
}

#[tokio::test]
async fn test_read_sets_type_meta() {
    let response = TenantManifestDataSource::new()
        .read(ReadRequest::new(tenant_config()))
        .await;

    assert!(response.diagnostics.is_empty());
    let state = response.state.unwrap();
    let yaml = state["yaml"].as_str().unwrap();
    assert!(yaml.contains("apiVersion: minio.min.io/v2"));
    assert!(yaml.contains("kind: Tenant"));
    assert_eq!(state["id"], "minio-tenant/storage");
}

#[tokio::test]
async fn test_read_keeps_configuration_in_state() {
    let state = TenantManifestDataSource::new()
        .read(ReadRequest::new(tenant_config()))
        .await
        .into_state()
        .unwrap();

    assert_eq!(state["metadata"]["name"], "storage");
    assert_eq!(state["spec"]["pools"][0]["servers"], 4);
    // Numbers configured for string attributes are stored as strings
    assert_eq!(state["metadata"]["labels"]["version"], "2");
}

#[tokio::test]
async fn test_read_renders_kubernetes_names() {
    let state = TenantManifestDataSource::new()
        .read(ReadRequest::new(tenant_config()))
        .await
        .into_state()
        .unwrap();
    let manifest = rendered_yaml(&state);

    let pool = &manifest["spec"]["pools"][0];
    assert_eq!(pool["volumesPerServer"].as_i64(), Some(4));
    assert_eq!(
        pool["volumeClaimTemplate"]["spec"]["accessModes"][0].as_str(),
        Some("ReadWriteOnce")
    );
    assert_eq!(manifest["spec"]["features"]["bucketDNS"].as_bool(), Some(true));
    assert_eq!(manifest["metadata"]["labels"]["version"].as_str(), Some("2"));
    assert!(manifest["spec"].get("kes").is_none());
}

#[tokio::test]
async fn test_read_reports_undecodable_configuration() {
    let response = TenantManifestDataSource::new()
        .read(ReadRequest::new(json!({
            "metadata": {"name": "storage", "namespace": "minio-tenant"},
        })))
        .await;

    assert!(response.state.is_none());
    assert!(response.diagnostics.has_error());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.summary, "Unable to decode configuration");
}

#[test]
fn test_failed_response_into_state() {
    let diagnostic = Diagnostic::error("Unable to marshal resource", "boom");
    let response = ReadResponse::failed(diagnostic.into());
    match response.into_state() {
        Err(TenantManifestError::Diagnostics(diagnostics)) => {
            assert_eq!(diagnostics.error_count(), 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
