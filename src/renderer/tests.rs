//! Renderer tests

use super::*;
use serde::Deserialize;
use serde_json::json;

fn document(origin: &str, name: &str) -> InputDocument {
    InputDocument {
        origin: origin.to_string(),
        config: json!({
            "metadata": {"name": name, "namespace": "minio-tenant"},
            "spec": {
                "pools": [{
                    "servers": 4,
                    "volumes_per_server": 1,
                    "volume_claim_template": {},
                }],
            },
        }),
    }
}

fn invalid_document(origin: &str) -> InputDocument {
    InputDocument {
        origin: origin.to_string(),
        config: json!({"metadata": {"name": "broken"}, "spec": {}}),
    }
}

fn renderer() -> ManifestRenderer {
    ManifestRenderer::new(Provider::new(), "k8s_minio_min_io_tenant_v2_manifest")
}

#[tokio::test]
async fn test_render_all_collects_failures() {
    let documents = vec![
        document("a.yaml", "alpha"),
        invalid_document("b.yaml"),
        document("c.yaml", "gamma"),
    ];

    let report = renderer().render_all(&documents).await.unwrap();

    assert!(!report.is_success());
    assert!(!report.stopped_early);
    assert_eq!(report.total(), 3);
    assert_eq!(report.rendered.len(), 2);
    assert_eq!(report.failures[0].origin, "b.yaml");
    // name is present, namespace and pools are missing
    assert_eq!(report.failures[0].diagnostics.error_count(), 2);
}

#[tokio::test]
async fn test_fail_fast_stops_at_first_failure() {
    let documents = vec![invalid_document("a.yaml"), document("b.yaml", "beta")];

    let report = renderer()
        .with_fail_fast(true)
        .render_all(&documents)
        .await
        .unwrap();

    assert!(report.stopped_early);
    assert!(report.rendered.is_empty());
    assert_eq!(report.failures.len(), 1);
}

#[tokio::test]
async fn test_unknown_data_source_is_an_error() {
    let renderer = ManifestRenderer::new(Provider::new(), "k8s_unknown");
    let result = renderer.render_all(&[document("a.yaml", "alpha")]).await;
    assert!(matches!(result, Err(TenantManifestError::UnknownDataSource(_))));
}

#[tokio::test]
async fn test_manifest_output_is_separated() {
    let documents = vec![document("a.yaml", "alpha"), document("b.yaml", "beta")];
    let report = renderer().render_all(&documents).await.unwrap();

    let output = report.to_output(OutputFormat::Manifest).unwrap();

    assert_eq!(output.matches(DOCUMENT_SEPARATOR).count(), 1);
    assert_eq!(output.matches("kind: Tenant").count(), 2);
    let names: Vec<String> = serde_yaml::Deserializer::from_str(&output)
        .map(|doc| {
            let value = serde_yaml::Value::deserialize(doc).unwrap();
            value["metadata"]["name"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[tokio::test]
async fn test_state_output_is_json_array() {
    let report = renderer()
        .render_all(&[document("a.yaml", "alpha")])
        .await
        .unwrap();

    let output = report.to_output(OutputFormat::State).unwrap();
    let states: Vec<Value> = serde_json::from_str(&output).unwrap();

    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["id"], "minio-tenant/alpha");
    assert!(states[0]["yaml"].is_string());
}

#[test]
fn test_empty_report_output() {
    let report = RenderReport::default();
    assert!(report.is_success());
    assert_eq!(report.to_output(OutputFormat::Manifest).unwrap(), "");
    assert_eq!(report.to_output(OutputFormat::State).unwrap(), "[]\n");
}

#[tokio::test]
async fn test_warnings_do_not_fail_rendering() {
    let mut deprecated = document("a.yaml", "alpha");
    deprecated.config["spec"]["s3"] = json!({"bucket_dns": true});

    let report = renderer().render_all(&[deprecated]).await.unwrap();

    assert!(report.is_success());
    assert!(report.rendered[0].manifest().unwrap().contains("bucketDNS: true"));
}
