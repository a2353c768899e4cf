use assert_fs::prelude::*;
use predicates::prelude::*;
use tenant_manifest::cli::CliApp;
use tenant_manifest::Config;

const TENANT_YAML: &str = r#"
metadata:
  name: storage
  namespace: minio-tenant
spec:
  image: quay.io/minio/minio:latest
  pools:
    - name: pool-0
      servers: 4
      volumes_per_server: 4
      volume_claim_template:
        metadata:
          name: data
        spec:
          access_modes: [ReadWriteOnce]
          resources:
            requests:
              storage: 1Ti
"#;

const INVALID_YAML: &str = r#"
metadata:
  name: Broken_Name
  namespace: minio-tenant
spec:
  pools: []
"#;

async fn run(args: &[&str]) -> anyhow::Result<()> {
    let matches = CliApp::app().try_get_matches_from(args)?;
    CliApp::run(&matches).await
}

fn settings(temp: &assert_fs::TempDir) -> String {
    let settings = temp.child("settings.yaml");
    settings.write_str("version: \"1.0\"\n").unwrap();
    settings.path().to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_render_writes_manifest() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("tenant.yaml");
    input.write_str(TENANT_YAML).unwrap();
    let output = temp.child("out/tenant.yaml");
    let config = settings(&temp);

    run(&[
        "tenant-manifest",
        "--config",
        &config,
        "render",
        input.path().to_str().unwrap(),
        "--output",
        output.path().to_str().unwrap(),
    ])
    .await
    .unwrap();

    output.assert(predicate::path::exists());
    output.assert(predicate::str::starts_with(
        "apiVersion: minio.min.io/v2\nkind: Tenant\n",
    ));
    output.assert(predicate::str::contains("volumesPerServer: 4"));
    let content = std::fs::read_to_string(output.path()).unwrap();
    assert!(!content.contains("---"));
}

#[tokio::test]
async fn test_render_directory_as_state() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("tenants/a.yaml").write_str(TENANT_YAML).unwrap();
    temp.child("tenants/nested/b.yml")
        .write_str(&TENANT_YAML.replace("name: storage", "name: archive"))
        .unwrap();
    temp.child("tenants/README.md").write_str("# not a config").unwrap();
    let output = temp.child("state.json");
    let config = settings(&temp);

    run(&[
        "tenant-manifest",
        "render",
        "--config",
        &config,
        "--format",
        "state",
        "-o",
        output.path().to_str().unwrap(),
        temp.child("tenants").path().to_str().unwrap(),
    ])
    .await
    .unwrap();

    output.assert(predicate::str::contains("\"id\": \"minio-tenant/storage\""));
    output.assert(predicate::str::contains("\"id\": \"minio-tenant/archive\""));

    let states: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(states.len(), 2);
}

#[tokio::test]
async fn test_render_reports_invalid_input() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("inputs/a.yaml").write_str(TENANT_YAML).unwrap();
    temp.child("inputs/b.yaml").write_str(INVALID_YAML).unwrap();
    let output = temp.child("out.yaml");
    let config = settings(&temp);

    let result = run(&[
        "tenant-manifest",
        "--config",
        &config,
        "render",
        temp.child("inputs").path().to_str().unwrap(),
        "--output",
        output.path().to_str().unwrap(),
    ])
    .await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("1 of 2"), "{error}");
    // Valid inputs are still rendered
    output.assert(predicate::str::contains("name: storage"));
}

#[tokio::test]
async fn test_validate_command() {
    let temp = assert_fs::TempDir::new().unwrap();
    let valid = temp.child("valid.yaml");
    valid.write_str(TENANT_YAML).unwrap();
    let invalid = temp.child("invalid.yaml");
    invalid.write_str(INVALID_YAML).unwrap();
    let config = settings(&temp);

    run(&[
        "tenant-manifest",
        "--config",
        &config,
        "validate",
        valid.path().to_str().unwrap(),
    ])
    .await
    .unwrap();

    let result = run(&[
        "tenant-manifest",
        "--config",
        &config,
        "validate",
        valid.path().to_str().unwrap(),
        invalid.path().to_str().unwrap(),
    ])
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_init_creates_settings() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child(".tenant-manifest.yaml");
    let path = settings.path().to_str().unwrap();

    run(&["tenant-manifest", "init", "--output", path])
        .await
        .unwrap();

    settings.assert(predicate::str::contains("version:"));
    assert_eq!(Config::from_file(settings.path()).unwrap(), Config::default());

    // Refuses to overwrite without --force
    assert!(run(&["tenant-manifest", "init", "--output", path]).await.is_err());
    run(&["tenant-manifest", "init", "--output", path, "--force"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_render_rejects_unknown_format() {
    let result = run(&["tenant-manifest", "render", "--format", "json", "tenant.yaml"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_bad_settings_file_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child("settings.yaml");
    settings.write_str("version: \"9.9\"\n").unwrap();
    let input = temp.child("tenant.yaml");
    input.write_str(TENANT_YAML).unwrap();

    let result = run(&[
        "tenant-manifest",
        "--config",
        settings.path().to_str().unwrap(),
        "validate",
        input.path().to_str().unwrap(),
    ])
    .await;

    let error = format!("{:#}", result.unwrap_err());
    assert!(error.contains("Unsupported configuration version"), "{error}");
}
