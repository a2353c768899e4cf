//! Provider tests

use super::*;
use rstest::rstest;
use serde_json::json;

const TENANT: &str = "k8s_minio_min_io_tenant_v2_manifest";

fn valid_config() -> Value {
    json!({
        "metadata": {"name": "storage", "namespace": "minio-tenant"},
        "spec": {
            "pools": [{
                "servers": 4,
                "volumes_per_server": 2,
                "volume_claim_template": {"metadata": {"name": "data"}},
            }],
        },
    })
}

fn error_paths(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .filter_map(|d| d.path.as_ref().map(ToString::to_string))
        .collect()
}

#[test]
fn test_registered_data_sources() {
    let provider = Provider::new();
    assert_eq!(provider.type_name(), "k8s");
    assert_eq!(provider.data_source_names(), vec![TENANT]);
    assert!(Provider::empty().data_source_names().is_empty());
}

#[test]
fn test_unknown_data_source() {
    let provider = Provider::new();
    let result = provider.schema("k8s_minio_min_io_tenant_v1_manifest");
    assert!(matches!(
        result,
        Err(TenantManifestError::UnknownDataSource(name)) if name == "k8s_minio_min_io_tenant_v1_manifest"
    ));
}

#[test]
fn test_valid_config_has_no_diagnostics() {
    let diagnostics = Provider::new()
        .validate_data_source_config(TENANT, &valid_config())
        .unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics}");
}

#[rstest]
#[case("/metadata/name", "metadata.name")]
#[case("/metadata/namespace", "metadata.namespace")]
#[case("/spec/pools", "spec.pools")]
#[tokio::test]
async fn test_missing_required_attribute_stops_read(#[case] pointer: &str, #[case] path: &str) {
    let mut config = valid_config();
    let (parent, field) = pointer.rsplit_once('/').unwrap();
    config
        .pointer_mut(parent)
        .and_then(Value::as_object_mut)
        .unwrap()
        .remove(field);

    let response = Provider::new().read_data_source(TENANT, config).await.unwrap();

    assert!(response.state.is_none());
    assert_eq!(error_paths(&response.diagnostics), vec![path.to_string()]);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.summary, "Missing required argument");
}

#[tokio::test]
async fn test_computed_attribute_cannot_be_configured() {
    let mut config = valid_config();
    config["yaml"] = json!("kind: Tenant");

    let response = Provider::new().read_data_source(TENANT, config).await.unwrap();

    assert!(response.state.is_none());
    assert_eq!(error_paths(&response.diagnostics), vec!["yaml".to_string()]);
}

#[tokio::test]
async fn test_invalid_name_is_rejected() {
    let mut config = valid_config();
    config["metadata"]["name"] = json!("Storage_Tenant");

    let response = Provider::new().read_data_source(TENANT, config).await.unwrap();

    assert!(response.state.is_none());
    assert!(response
        .diagnostics
        .iter()
        .all(|d| d.summary == "Invalid attribute value"));
    assert_eq!(
        error_paths(&response.diagnostics),
        vec!["metadata.name".to_string()]
    );
}

#[tokio::test]
async fn test_read_data_source_renders() {
    let response = Provider::new()
        .read_data_source(TENANT, valid_config())
        .await
        .unwrap();

    let state = response.into_state().unwrap();
    assert_eq!(state["id"], "minio-tenant/storage");
    assert!(state["yaml"]
        .as_str()
        .unwrap()
        .starts_with("apiVersion: minio.min.io/v2\nkind: Tenant\n"));
}

#[tokio::test]
async fn test_deprecated_attribute_warns_and_renders() {
    let mut config = valid_config();
    config["spec"]["s3"] = json!({"bucket_dns": true});

    let response = Provider::new().read_data_source(TENANT, config).await.unwrap();

    let warnings: Vec<_> = response
        .diagnostics
        .iter()
        .filter(|d| !d.is_error())
        .map(|d| d.path.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(warnings, vec!["spec.s3.bucket_dns".to_string()]);

    let state = response.into_state().unwrap();
    assert!(state["yaml"].as_str().unwrap().contains("bucketDNS: true"));
}

#[tokio::test]
async fn test_integer_outside_int64_range_fails_validation() {
    let mut config = valid_config();
    config["spec"]["pools"][0]["servers"] = json!(u64::MAX);

    let response = Provider::new().read_data_source(TENANT, config).await.unwrap();

    assert!(response.state.is_none());
    assert_eq!(
        error_paths(&response.diagnostics),
        vec!["spec.pools[0].servers".to_string()]
    );
    assert!(response
        .diagnostics
        .iter()
        .all(|d| d.summary == "Incorrect attribute value type"));
}
