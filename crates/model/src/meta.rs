//! Object metadata, references and selectors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject, Validator};

/// Metadata of the rendered manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ManifestMetadata {
    pub name: String,

    pub namespace: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl SchemaObject for ManifestMetadata {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "name",
                Attribute::string()
                    .required()
                    .describe("Unique identifier for this object.")
                    .validate(Validator::LengthBetween { min: 1, max: 253 })
                    .validate(Validator::Dns1123Subdomain),
            )
            .with(
                "namespace",
                Attribute::string()
                    .required()
                    .describe("Namespace of this object.")
                    .validate(Validator::LengthBetween { min: 1, max: 63 })
                    .validate(Validator::Dns1123Label),
            )
            .with(
                "labels",
                Attribute::string_map()
                    .describe("Map of string keys and values used to organize and categorize objects.")
                    .validate(Validator::LabelMap),
            )
            .with(
                "annotations",
                Attribute::string_map()
                    .describe("Unstructured key value map stored with the object.")
                    .validate(Validator::AnnotationMap),
            )
    }
}

/// Metadata allowed inside embedded templates such as volume claim templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TemplateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SchemaObject for TemplateMetadata {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("annotations", Attribute::string_map())
            .with("finalizers", Attribute::string_list())
            .with("labels", Attribute::string_map())
            .with("name", Attribute::string())
            .with("namespace", Attribute::string())
    }
}

/// Reference to an object in the same namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SchemaObject for LocalObjectReference {
    fn attributes() -> Attributes {
        Attributes::new().with("name", Attribute::string())
    }
}

/// Reference to a config map or secret that may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OptionalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl SchemaObject for OptionalObjectReference {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string())
            .with("optional", Attribute::bool())
    }
}

/// Kubernetes int-or-string value, kept in the form it was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    String(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

impl SchemaObject for LabelSelector {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "match_expressions",
                Attribute::nested_list::<LabelSelectorRequirement>(),
            )
            .with("match_labels", Attribute::string_map())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LabelSelectorRequirement {
    pub key: String,

    pub operator: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl SchemaObject for LabelSelectorRequirement {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("key", Attribute::string().required())
            .with("operator", Attribute::string().required())
            .with("values", Attribute::string_list())
    }
}

/// Reference to a typed object in the same namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TypedLocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_group: Option<String>,

    pub kind: String,

    pub name: String,
}

impl SchemaObject for TypedLocalObjectReference {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("api_group", Attribute::string())
            .with("kind", Attribute::string().required())
            .with("name", Attribute::string().required())
    }
}

/// Reference to a typed object, possibly in another namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TypedObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_group: Option<String>,

    pub kind: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SchemaObject for TypedObjectReference {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("api_group", Attribute::string())
            .with("kind", Attribute::string().required())
            .with("name", Attribute::string().required())
            .with("namespace", Attribute::string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_or_string_keeps_form() {
        let int: IntOrString = serde_json::from_value(json!(9000)).unwrap();
        let name: IntOrString = serde_json::from_value(json!("http")).unwrap();
        assert_eq!(int, IntOrString::Int(9000));
        assert_eq!(name, IntOrString::String("http".to_string()));
        assert_eq!(serde_json::to_value(&int).unwrap(), json!(9000));
    }

    #[test]
    fn test_selector_renames_on_output() {
        let selector: LabelSelector = serde_json::from_value(json!({
            "match_labels": {"v1.min.io/tenant": "storage"},
            "match_expressions": [{"key": "zone", "operator": "In", "values": ["a"]}],
        }))
        .unwrap();
        let rendered = serde_json::to_value(&selector).unwrap();
        assert_eq!(rendered["matchLabels"]["v1.min.io/tenant"], "storage");
        assert_eq!(rendered["matchExpressions"][0]["operator"], "In");
    }
}
