//! Configuration validation against a schema

use serde_json::Value;
use tracing::debug;

use crate::attribute::{Attribute, AttributeType, Attributes, ElementType, Schema};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::path::AttributePath;

/// Check `config` against `schema` and collect every problem found.
///
/// Missing and `null` values are equivalent. Strings accept numbers and
/// booleans, matching Terraform's implicit conversions.
pub fn validate_config(schema: &Schema, config: &Value) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    validate_block(
        &schema.attributes,
        config,
        &AttributePath::root(),
        &mut diagnostics,
    );
    debug!(
        "Validated configuration: {} diagnostic(s)",
        diagnostics.len()
    );
    diagnostics
}

fn validate_block(
    attributes: &Attributes,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let Value::Object(block) = value else {
        diagnostics.add_attribute_error(
            path.clone(),
            "Incorrect attribute value type",
            format!("object required, got {}", json_type_name(value)),
        );
        return;
    };

    for name in block.keys() {
        if !attributes.contains(name) {
            diagnostics.add_attribute_error(
                path.attribute(name),
                "Unsupported argument",
                format!("An argument named {name:?} is not expected here."),
            );
        }
    }

    for (name, attribute) in attributes.iter() {
        let attribute_path = path.attribute(name);
        match block.get(name) {
            None | Some(Value::Null) => {
                if attribute.required {
                    diagnostics.add_attribute_error(
                        attribute_path,
                        "Missing required argument",
                        format!("The argument {name:?} is required, but no definition was found."),
                    );
                }
            }
            Some(_) if attribute.is_read_only() => {
                diagnostics.add_attribute_error(
                    attribute_path,
                    "Invalid configuration for read-only attribute",
                    "Cannot set value for this attribute as the provider has marked it as read-only. Remove the configuration line setting the value.",
                );
            }
            Some(value) => validate_attribute(attribute, value, &attribute_path, diagnostics),
        }
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let type_ok = match &attribute.attribute_type {
        AttributeType::String => is_string_like(value),
        AttributeType::Int64 => value.is_i64(),
        AttributeType::Bool => value.is_boolean(),
        AttributeType::IntOrString => value.is_string() || value.is_i64(),
        AttributeType::List { element } => match value {
            Value::Array(items) => {
                let elements = items.iter().enumerate().map(|(i, v)| (path.index(i), v));
                validate_elements(*element, elements, diagnostics);
                true
            }
            _ => false,
        },
        AttributeType::Map { element } => match value {
            Value::Object(entries) => {
                let elements = entries.iter().map(|(k, v)| (path.key(k), v));
                validate_elements(*element, elements, diagnostics);
                true
            }
            _ => false,
        },
        AttributeType::SingleNested { attributes } => {
            if value.is_object() {
                validate_block(attributes, value, path, diagnostics);
            }
            value.is_object()
        }
        AttributeType::ListNested { attributes } => match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    validate_block(attributes, item, &path.index(i), diagnostics);
                }
                true
            }
            _ => false,
        },
    };

    if let Some(message) = &attribute.deprecation_message {
        diagnostics.push(
            Diagnostic::warning("Argument is deprecated", message.clone()).at(path.clone()),
        );
    }

    if !type_ok {
        diagnostics.add_attribute_error(
            path.clone(),
            "Incorrect attribute value type",
            format!(
                "{} required, got {}",
                attribute.attribute_type.type_name(),
                json_type_name(value)
            ),
        );
        return;
    }

    for validator in &attribute.validators {
        validator.check(value, path, diagnostics);
    }
}

fn validate_elements<'a>(
    element: ElementType,
    items: impl Iterator<Item = (AttributePath, &'a Value)>,
    diagnostics: &mut Diagnostics,
) {
    for (path, item) in items {
        let ok = match element {
            ElementType::String => is_string_like(item),
            ElementType::Int64 => item.is_i64(),
        };
        if !ok {
            diagnostics.add_attribute_error(
                path,
                "Incorrect attribute value type",
                format!(
                    "{} element required, got {}",
                    match element {
                        ElementType::String => "string",
                        ElementType::Int64 => "number",
                    },
                    json_type_name(item)
                ),
            );
        }
    }
}

fn is_string_like(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_i64() => "number",
        Value::Number(number) if number.is_u64() => "number outside the int64 range",
        Value::Number(_) => "fractional number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::SchemaObject;
    use crate::validators::Validator;
    use serde_json::json;

    struct Toleration;

    impl SchemaObject for Toleration {
        fn attributes() -> Attributes {
            Attributes::new()
                .with("key", Attribute::string())
                .with("toleration_seconds", Attribute::int64())
        }
    }

    fn schema() -> Schema {
        Schema::new(
            Attributes::new()
                .with("yaml", Attribute::string().computed())
                .with(
                    "metadata",
                    Attribute::object(
                        Attributes::new()
                            .with(
                                "name",
                                Attribute::string()
                                    .required()
                                    .validate(Validator::Dns1123Subdomain),
                            )
                            .with("labels", Attribute::string_map().validate(Validator::LabelMap)),
                    )
                    .required(),
                )
                .with("tolerations", Attribute::nested_list::<Toleration>())
                .with("port", Attribute::int_or_string())
                .with("args", Attribute::string_list()),
        )
    }

    #[test]
    fn test_valid_config() {
        let config = json!({
            "metadata": {"name": "tenant", "labels": {"app": "minio"}},
            "tolerations": [{"key": "dedicated", "toleration_seconds": 30}],
            "port": "http",
            "args": ["server", 9000],
            "yaml": null,
        });
        let diagnostics = validate_config(&schema(), &config);
        assert!(diagnostics.is_empty(), "{diagnostics}");
    }

    #[test]
    fn test_missing_required() {
        let diagnostics = validate_config(&schema(), &json!({"metadata": {}}));
        assert_eq!(diagnostics.error_count(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Missing required argument");
        assert_eq!(diagnostic.path.as_ref().unwrap().to_string(), "metadata.name");
    }

    #[test]
    fn test_unknown_and_read_only_attributes() {
        let config = json!({
            "metadata": {"name": "tenant"},
            "yaml": "apiVersion: v1",
            "unexpected": true,
        });
        let diagnostics = validate_config(&schema(), &config);
        let summaries: Vec<_> = diagnostics.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.contains(&"Unsupported argument"));
        assert!(summaries.contains(&"Invalid configuration for read-only attribute"));
    }

    #[test]
    fn test_type_mismatches_report_paths() {
        let config = json!({
            "metadata": {"name": "tenant"},
            "tolerations": [{"toleration_seconds": "thirty"}],
            "port": 1.5,
            "args": [["nested"]],
        });
        let diagnostics = validate_config(&schema(), &config);
        let paths: Vec<_> = diagnostics
            .iter()
            .map(|d| d.path.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["args[0]", "port", "tolerations[0].toleration_seconds"]
        );
    }

    #[test]
    fn test_validators_run_on_nested_values() {
        let config = json!({"metadata": {"name": "Not_Valid"}});
        let diagnostics = validate_config(&schema(), &config);
        assert!(diagnostics.has_error());
        assert!(diagnostics
            .iter()
            .all(|d| d.summary == "Invalid attribute value"));
    }

    #[test]
    fn test_integers_must_fit_int64() {
        struct Pool;

        impl SchemaObject for Pool {
            fn attributes() -> Attributes {
                Attributes::new()
                    .with("servers", Attribute::int64().required())
                    .with("port", Attribute::int_or_string())
            }
        }

        let schema = Schema::new(Attributes::new().with(
            "spec",
            Attribute::object(Attributes::new().with("pools", Attribute::nested_list::<Pool>())),
        ));
        let config = json!({
            "spec": {"pools": [
                {"servers": 4, "port": 9000},
                {"servers": 18446744073709551615u64, "port": 18446744073709551615u64},
            ]},
        });

        let diagnostics = validate_config(&schema, &config);
        let errors: Vec<_> = diagnostics
            .iter()
            .map(|d| (d.summary.as_str(), d.path.as_ref().unwrap().to_string()))
            .collect();
        assert_eq!(
            errors,
            vec![
                ("Incorrect attribute value type", "spec.pools[1].port".to_string()),
                ("Incorrect attribute value type", "spec.pools[1].servers".to_string()),
            ]
        );
        assert!(diagnostics
            .iter()
            .all(|d| d.detail.contains("outside the int64 range")));
    }

    #[test]
    fn test_deprecated_attribute_warns() {
        let schema = Schema::new(
            Attributes::new()
                .with(
                    "bucket_dns",
                    Attribute::bool().deprecated("Use features.bucket_dns instead."),
                )
                .with("name", Attribute::string()),
        );

        let diagnostics = validate_config(&schema, &json!({"bucket_dns": true}));
        assert!(!diagnostics.has_error());
        assert_eq!(diagnostics.len(), 1);
        let warning = diagnostics.iter().next().unwrap();
        assert_eq!(warning.summary, "Argument is deprecated");
        assert_eq!(warning.path.as_ref().unwrap().to_string(), "bucket_dns");

        let unset = validate_config(&schema, &json!({"bucket_dns": null, "name": "tenant"}));
        assert!(unset.is_empty(), "{unset}");
    }

    #[test]
    fn test_root_must_be_object() {
        let diagnostics = validate_config(&schema(), &json!([]));
        assert_eq!(diagnostics.error_count(), 1);
    }
}
