//! Affinity, tolerations and topology spread constraints

use serde::{Deserialize, Serialize};
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject};

use crate::meta::LabelSelector;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Affinity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity: Option<NodeAffinity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<PodAffinity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<PodAffinity>,
}

impl SchemaObject for Affinity {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("node_affinity", Attribute::nested::<NodeAffinity>())
            .with("pod_affinity", Attribute::nested::<PodAffinity>())
            .with("pod_anti_affinity", Attribute::nested::<PodAffinity>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NodeAffinity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_during_scheduling_ignored_during_execution:
        Option<Vec<PreferredSchedulingTerm>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_during_scheduling_ignored_during_execution: Option<NodeSelector>,
}

impl SchemaObject for NodeAffinity {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "preferred_during_scheduling_ignored_during_execution",
                Attribute::nested_list::<PreferredSchedulingTerm>(),
            )
            .with(
                "required_during_scheduling_ignored_during_execution",
                Attribute::nested::<NodeSelector>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PreferredSchedulingTerm {
    pub preference: NodeSelectorTerm,

    pub weight: i64,
}

impl SchemaObject for PreferredSchedulingTerm {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("preference", Attribute::nested::<NodeSelectorTerm>().required())
            .with("weight", Attribute::int64().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NodeSelector {
    pub node_selector_terms: Vec<NodeSelectorTerm>,
}

impl SchemaObject for NodeSelector {
    fn attributes() -> Attributes {
        Attributes::new().with(
            "node_selector_terms",
            Attribute::nested_list::<NodeSelectorTerm>().required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NodeSelectorTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<NodeSelectorRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_fields: Option<Vec<NodeSelectorRequirement>>,
}

impl SchemaObject for NodeSelectorTerm {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "match_expressions",
                Attribute::nested_list::<NodeSelectorRequirement>(),
            )
            .with(
                "match_fields",
                Attribute::nested_list::<NodeSelectorRequirement>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NodeSelectorRequirement {
    pub key: String,

    pub operator: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl SchemaObject for NodeSelectorRequirement {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("key", Attribute::string().required())
            .with("operator", Attribute::string().required())
            .with("values", Attribute::string_list())
    }
}

/// Pod affinity or anti-affinity; both share the same shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PodAffinity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_during_scheduling_ignored_during_execution:
        Option<Vec<WeightedPodAffinityTerm>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_during_scheduling_ignored_during_execution: Option<Vec<PodAffinityTerm>>,
}

impl SchemaObject for PodAffinity {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "preferred_during_scheduling_ignored_during_execution",
                Attribute::nested_list::<WeightedPodAffinityTerm>(),
            )
            .with(
                "required_during_scheduling_ignored_during_execution",
                Attribute::nested_list::<PodAffinityTerm>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WeightedPodAffinityTerm {
    pub pod_affinity_term: PodAffinityTerm,

    pub weight: i64,
}

impl SchemaObject for WeightedPodAffinityTerm {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "pod_affinity_term",
                Attribute::nested::<PodAffinityTerm>().required(),
            )
            .with("weight", Attribute::int64().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PodAffinityTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<LabelSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_selector: Option<LabelSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,

    pub topology_key: String,
}

impl SchemaObject for PodAffinityTerm {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("label_selector", Attribute::nested::<LabelSelector>())
            .with("namespace_selector", Attribute::nested::<LabelSelector>())
            .with("namespaces", Attribute::string_list())
            .with("topology_key", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Toleration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub toleration_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SchemaObject for Toleration {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("effect", Attribute::string())
            .with("key", Attribute::string())
            .with("operator", Attribute::string())
            .with("toleration_seconds", Attribute::int64())
            .with("value", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TopologySpreadConstraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<LabelSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_label_keys: Option<Vec<String>>,

    pub max_skew: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_domains: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_taints_policy: Option<String>,

    pub topology_key: String,

    pub when_unsatisfiable: String,
}

impl SchemaObject for TopologySpreadConstraint {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("label_selector", Attribute::nested::<LabelSelector>())
            .with("match_label_keys", Attribute::string_list())
            .with("max_skew", Attribute::int64().required())
            .with("min_domains", Attribute::int64())
            .with("node_affinity_policy", Attribute::string())
            .with("node_taints_policy", Attribute::string())
            .with("topology_key", Attribute::string().required())
            .with("when_unsatisfiable", Attribute::string().required())
    }
}
