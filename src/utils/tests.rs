//! Utility tests

use super::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_parse_documents_skips_empty() {
    let content = "metadata:\n  name: a\n---\nnull\n---\nmetadata:\n  name: b\n";
    let documents = parse_documents("tenants.yaml", content).unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].origin, "tenants.yaml");
    assert_eq!(documents[0].config, json!({"metadata": {"name": "a"}}));
    assert_eq!(documents[1].origin, "tenants.yaml#3");
}

#[test]
fn test_parse_documents_accepts_json() {
    let documents = parse_documents("tenant.json", r#"{"spec": {"pools": []}}"#).unwrap();
    assert_eq!(documents[0].config, json!({"spec": {"pools": []}}));
}

#[test]
fn test_parse_documents_reports_bad_yaml() {
    let result = parse_documents("broken.yaml", "metadata: [unclosed");
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("broken.yaml"), "{message}");
}

#[test]
fn test_find_input_files_filters_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("nested")).unwrap();
    std::fs::write(root.join("b.yaml"), "").unwrap();
    std::fs::write(root.join("a.json"), "").unwrap();
    std::fs::write(root.join("nested/c.yml"), "").unwrap();
    std::fs::write(root.join("notes.txt"), "").unwrap();

    let files = find_input_files(root, &RenderConfig::default());
    let names: Vec<_> = files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.json", "b.yaml", "nested/c.yml"]);
}

#[test]
fn test_expand_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("tenant.yaml");
    std::fs::write(&file, "").unwrap();
    let dir = temp_dir.path().to_string_lossy().into_owned();

    let inputs = vec![STDIN_INPUT.to_string(), dir];
    let expanded = expand_inputs(&inputs, &RenderConfig::default()).unwrap();
    assert_eq!(expanded, vec![STDIN_INPUT.to_string(), file.to_string_lossy().into_owned()]);

    let missing = vec![temp_dir.path().join("missing.yaml").to_string_lossy().into_owned()];
    assert!(expand_inputs(&missing, &RenderConfig::default()).is_err());
}

#[test]
fn test_expand_inputs_rejects_repeated_stdin() {
    let inputs = vec![STDIN_INPUT.to_string(), STDIN_INPUT.to_string()];
    let error = expand_inputs(&inputs, &RenderConfig::default()).unwrap_err();
    assert!(error.to_string().contains("only be given once"), "{error}");
}

#[test]
fn test_ensure_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("out/manifests");
    ensure_directory(&nested).unwrap();
    assert!(nested.is_dir());

    let file = temp_dir.path().join("file");
    std::fs::write(&file, "").unwrap();
    assert!(ensure_directory(&file).is_err());
}
