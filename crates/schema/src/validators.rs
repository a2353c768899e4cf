//! Value validators attached to attributes

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;
use crate::path::AttributePath;

static DNS1123_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid regex"));

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid regex")
});

static QUALIFIED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("valid regex"));

const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;
const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

/// Validation rule checked against a non-null configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// String length (in characters) within `min..=max`
    LengthBetween { min: usize, max: usize },

    /// RFC 1123 subdomain, the format of most Kubernetes object names
    Dns1123Subdomain,

    /// RFC 1123 label, the format of namespace names
    Dns1123Label,

    /// RFC 3339 timestamp
    DateTime64,

    /// Kubernetes label keys and values
    LabelMap,

    /// Kubernetes annotation keys and total size
    AnnotationMap,
}

impl Validator {
    /// Run the validator, appending any failures to `diagnostics`.
    ///
    /// Values of a type the validator does not apply to are ignored; type
    /// mismatches are reported by the schema walk.
    pub fn check(&self, value: &Value, path: &AttributePath, diagnostics: &mut Diagnostics) {
        match (self, value) {
            (Validator::LengthBetween { min, max }, Value::String(s)) => {
                let length = s.chars().count();
                if length < *min || length > *max {
                    invalid(
                        diagnostics,
                        path,
                        format!("string length must be between {min} and {max}, got: {length}"),
                    );
                }
            }
            (Validator::Dns1123Subdomain, Value::String(s)) => {
                for problem in dns1123_subdomain_problems(s) {
                    invalid(diagnostics, path, format!("{s:?} {problem}"));
                }
            }
            (Validator::Dns1123Label, Value::String(s)) => {
                for problem in dns1123_label_problems(s) {
                    invalid(diagnostics, path, format!("{s:?} {problem}"));
                }
            }
            (Validator::DateTime64, Value::String(s)) => {
                if let Err(e) = DateTime::parse_from_rfc3339(s) {
                    invalid(
                        diagnostics,
                        path,
                        format!("{s:?} is not a valid RFC 3339 timestamp: {e}"),
                    );
                }
            }
            (Validator::LabelMap, Value::Object(map)) => check_labels(map, path, diagnostics),
            (Validator::AnnotationMap, Value::Object(map)) => {
                check_annotations(map, path, diagnostics)
            }
            _ => {}
        }
    }
}

fn invalid(diagnostics: &mut Diagnostics, path: &AttributePath, detail: String) {
    diagnostics.add_attribute_error(path.clone(), "Invalid attribute value", detail);
}

/// Problems with `value` as an RFC 1123 label; empty when valid
pub fn dns1123_label_problems(value: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        problems.push(format!(
            "must be no more than {DNS1123_LABEL_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        problems.push(
            "must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    problems
}

/// Problems with `value` as an RFC 1123 subdomain; empty when valid
pub fn dns1123_subdomain_problems(value: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        problems.push(format!(
            "must be no more than {DNS1123_SUBDOMAIN_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        problems.push(
            "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    problems
}

/// Problems with `value` as a qualified name (`[prefix/]name`); empty when valid
pub fn qualified_name_problems(value: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let (prefix, name) = match value.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            problems.push("prefix part must be non-empty".to_string());
        } else {
            problems.extend(
                dns1123_subdomain_problems(prefix)
                    .into_iter()
                    .map(|problem| format!("prefix part {problem}")),
            );
        }
    }

    if name.is_empty() {
        problems.push("name part must be non-empty".to_string());
    } else {
        if name.len() > QUALIFIED_NAME_MAX_LENGTH {
            problems.push(format!(
                "name part must be no more than {QUALIFIED_NAME_MAX_LENGTH} characters"
            ));
        }
        if !QUALIFIED_NAME.is_match(name) {
            problems.push(
                "name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
                    .to_string(),
            );
        }
    }
    problems
}

/// Problems with `value` as a label value; empty when valid
pub fn label_value_problems(value: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if value.is_empty() {
        return problems;
    }
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        problems.push(format!(
            "must be no more than {LABEL_VALUE_MAX_LENGTH} characters"
        ));
    }
    if !QUALIFIED_NAME.is_match(value) {
        problems.push(
            "must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    problems
}

fn check_labels(map: &Map<String, Value>, path: &AttributePath, diagnostics: &mut Diagnostics) {
    for (key, value) in map {
        let entry = path.key(key);
        for problem in qualified_name_problems(key) {
            invalid(diagnostics, &entry, format!("label key {key:?}: {problem}"));
        }
        if let Value::String(value) = value {
            for problem in label_value_problems(value) {
                invalid(diagnostics, &entry, format!("label value {value:?}: {problem}"));
            }
        }
    }
}

fn check_annotations(
    map: &Map<String, Value>,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let mut total_size = 0;
    for (key, value) in map {
        for problem in qualified_name_problems(&key.to_lowercase()) {
            invalid(
                diagnostics,
                &path.key(key),
                format!("annotation key {key:?}: {problem}"),
            );
        }
        total_size += key.len() + value.as_str().map_or(0, str::len);
    }
    if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
        invalid(
            diagnostics,
            path,
            format!(
                "annotations size {total_size} must have at most {TOTAL_ANNOTATION_SIZE_LIMIT} bytes"
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn run(validator: Validator, value: Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        validator.check(&value, &AttributePath::root().attribute("field"), &mut diagnostics);
        diagnostics
    }

    #[rstest]
    #[case("minio", true)]
    #[case("my-tenant.example.com", true)]
    #[case("a", true)]
    #[case("MinIO", false)]
    #[case("-tenant", false)]
    #[case("tenant-", false)]
    #[case("tenant..example", false)]
    #[case("", false)]
    fn test_dns1123_subdomain(#[case] value: &str, #[case] valid: bool) {
        let diagnostics = run(Validator::Dns1123Subdomain, json!(value));
        assert_eq!(!diagnostics.has_error(), valid, "{value}");
    }

    #[rstest]
    #[case("tenant-ns", true)]
    #[case("ns1", true)]
    #[case("tenant.ns", false)]
    #[case("Tenant", false)]
    fn test_dns1123_label(#[case] value: &str, #[case] valid: bool) {
        let diagnostics = run(Validator::Dns1123Label, json!(value));
        assert_eq!(!diagnostics.has_error(), valid, "{value}");
    }

    #[test]
    fn test_dns1123_label_too_long() {
        let value = "a".repeat(64);
        assert_eq!(dns1123_label_problems(&value).len(), 1);
    }

    #[rstest]
    #[case(0, 3, "", true)]
    #[case(1, 3, "", false)]
    #[case(1, 3, "abcd", false)]
    #[case(1, 3, "abc", true)]
    fn test_length_between(
        #[case] min: usize,
        #[case] max: usize,
        #[case] value: &str,
        #[case] valid: bool,
    ) {
        let diagnostics = run(Validator::LengthBetween { min, max }, json!(value));
        assert_eq!(!diagnostics.has_error(), valid);
    }

    #[rstest]
    #[case("2024-01-15T10:20:30Z", true)]
    #[case("2024-01-15T10:20:30.123+02:00", true)]
    #[case("2024-01-15", false)]
    #[case("yesterday", false)]
    fn test_date_time(#[case] value: &str, #[case] valid: bool) {
        let diagnostics = run(Validator::DateTime64, json!(value));
        assert_eq!(!diagnostics.has_error(), valid, "{value}");
    }

    #[test]
    fn test_label_map() {
        let ok = run(
            Validator::LabelMap,
            json!({"app.kubernetes.io/name": "minio", "tier": "", "v": "1.0_a-b"}),
        );
        assert!(ok.is_empty());

        let bad = run(
            Validator::LabelMap,
            json!({"Bad Key": "x", "good": "bad value!", "/missing-prefix": "x"}),
        );
        assert_eq!(bad.error_count(), 3);
        assert!(bad.iter().all(|d| d.path.is_some()));
    }

    #[test]
    fn test_annotation_map_allows_long_values() {
        let value = "x".repeat(1000);
        let diagnostics = run(
            Validator::AnnotationMap,
            json!({"min.io/description": value}),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_annotation_map_total_size() {
        let value = "x".repeat(TOTAL_ANNOTATION_SIZE_LIMIT);
        let diagnostics = run(Validator::AnnotationMap, json!({"note": value}));
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn test_validators_ignore_other_types() {
        assert!(run(Validator::Dns1123Label, json!(42)).is_empty());
        assert!(run(Validator::LabelMap, json!("not a map")).is_empty());
    }
}
