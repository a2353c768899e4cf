//! Persistent volume claims used by pool and ephemeral volume templates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject, Validator};

use crate::container::ResourceRequirements;
use crate::meta::{LabelSelector, TemplateMetadata, TypedLocalObjectReference, TypedObjectReference};

/// Claim template carried by a pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<PersistentVolumeClaimSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PersistentVolumeClaimStatus>,
}

impl SchemaObject for PersistentVolumeClaim {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("api_version", Attribute::string())
            .with("kind", Attribute::string())
            .with("metadata", Attribute::nested::<TemplateMetadata>())
            .with("spec", Attribute::nested::<PersistentVolumeClaimSpec>())
            .with("status", Attribute::nested::<PersistentVolumeClaimStatus>())
    }
}

/// Claim template of an ephemeral volume, `spec` is mandatory here
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaimTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMetadata>,

    pub spec: PersistentVolumeClaimSpec,
}

impl SchemaObject for PersistentVolumeClaimTemplate {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("metadata", Attribute::nested::<TemplateMetadata>())
            .with(
                "spec",
                Attribute::nested::<PersistentVolumeClaimSpec>().required(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaimSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_modes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TypedLocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_ref: Option<TypedObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

impl SchemaObject for PersistentVolumeClaimSpec {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("access_modes", Attribute::string_list())
            .with(
                "data_source",
                Attribute::nested::<TypedLocalObjectReference>(),
            )
            .with("data_source_ref", Attribute::nested::<TypedObjectReference>())
            .with("resources", Attribute::nested::<ResourceRequirements>())
            .with("selector", Attribute::nested::<LabelSelector>())
            .with("storage_class_name", Attribute::string())
            .with("volume_mode", Attribute::string())
            .with("volume_name", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaimStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_modes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_resource_statuses: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_resources: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<PersistentVolumeClaimCondition>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl SchemaObject for PersistentVolumeClaimStatus {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("access_modes", Attribute::string_list())
            .with("allocated_resource_statuses", Attribute::string_map())
            .with("allocated_resources", Attribute::string_map())
            .with("capacity", Attribute::string_map())
            .with(
                "conditions",
                Attribute::nested_list::<PersistentVolumeClaimCondition>(),
            )
            .with("phase", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaimCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub status: String,

    pub r#type: String,
}

impl SchemaObject for PersistentVolumeClaimCondition {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "last_probe_time",
                Attribute::string().validate(Validator::DateTime64),
            )
            .with(
                "last_transition_time",
                Attribute::string().validate(Validator::DateTime64),
            )
            .with("message", Attribute::string())
            .with("reason", Attribute::string())
            .with("status", Attribute::string().required())
            .with("type", Attribute::string().required())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claim_renders_storage_request() {
        let claim: PersistentVolumeClaim = serde_json::from_value(json!({
            "metadata": {"name": "data"},
            "spec": {
                "access_modes": ["ReadWriteOnce"],
                "storage_class_name": "local-path",
                "resources": {"requests": {"storage": "1Ti"}},
            },
        }))
        .unwrap();
        let yaml = serde_yaml::to_string(&claim).unwrap();
        assert!(yaml.contains("accessModes:"));
        assert!(yaml.contains("storageClassName: local-path"));
        assert!(yaml.contains("storage: 1Ti"));
        assert!(!yaml.contains("status"));
    }

    #[test]
    fn test_condition_timestamps_are_validated() {
        let attributes = PersistentVolumeClaimCondition::attributes();
        let probe = attributes.get("last_probe_time").unwrap();
        assert_eq!(probe.validators, vec![Validator::DateTime64]);
    }
}
