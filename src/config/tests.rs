//! Configuration tests

use super::*;
use rstest::rstest;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.output.format = OutputFormat::State;
    config.output.path = Some(PathBuf::from("out/tenants.json"));
    config.render.fail_fast = true;

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_config_defaults_for_missing_sections() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.output.format, OutputFormat::Manifest);
    assert!(config.render.accepts_extension("yml"));
}

#[rstest]
#[case("version: \"2.0\"\n", "Unsupported configuration version")]
#[case("version: \"1.0\"\nrender:\n  extensions: []\n", "At least one input file extension")]
#[case("version: \"1.0\"\noutput:\n  path: \"\"\n", "Output path must not be empty")]
fn test_config_validation_errors(#[case] content: &str, #[case] expected: &str) {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), content).unwrap();

    let error = Config::from_file(temp_file.path()).unwrap_err();
    assert!(error.to_string().contains(expected), "{error}");
}

#[rstest]
#[case("manifest", OutputFormat::Manifest)]
#[case("state", OutputFormat::State)]
fn test_output_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
    assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
    assert_eq!(expected.to_string(), input);
}

#[test]
fn test_unknown_output_format() {
    assert!("json".parse::<OutputFormat>().is_err());
}

#[test]
fn test_output_path_expands_home() {
    let output = OutputConfig {
        path: Some(PathBuf::from("~/manifests/tenant.yaml")),
        ..Default::default()
    };

    let resolved = output.resolved_path().unwrap();
    assert!(!resolved.starts_with("~"));
    assert!(resolved.ends_with("manifests/tenant.yaml"));
}

#[test]
fn test_extension_matching() {
    let render = RenderConfig {
        extensions: vec![".YAML".to_string()],
        ..Default::default()
    };
    assert!(render.accepts_extension("yaml"));
    assert!(!render.accepts_extension("json"));
}
