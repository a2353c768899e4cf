//! Containers and the types they are built from

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject};

use crate::meta::{IntOrString, OptionalObjectReference};
use crate::security::SecurityContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_from: Option<Vec<EnvFromSource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<ContainerPort>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_policy: Option<Vec<ContainerResizePolicy>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<SecurityContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin_once: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_message_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_message_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tty: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_devices: Option<Vec<VolumeDevice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl SchemaObject for Container {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("args", Attribute::string_list())
            .with("command", Attribute::string_list())
            .with("env", Attribute::nested_list::<EnvVar>())
            .with("env_from", Attribute::nested_list::<EnvFromSource>())
            .with("image", Attribute::string())
            .with("image_pull_policy", Attribute::string())
            .with("lifecycle", Attribute::nested::<Lifecycle>())
            .with("liveness_probe", Attribute::nested::<Probe>())
            .with("name", Attribute::string().required())
            .with("ports", Attribute::nested_list::<ContainerPort>())
            .with("readiness_probe", Attribute::nested::<Probe>())
            .with(
                "resize_policy",
                Attribute::nested_list::<ContainerResizePolicy>(),
            )
            .with("resources", Attribute::nested::<ResourceRequirements>())
            .with("restart_policy", Attribute::string())
            .with("security_context", Attribute::nested::<SecurityContext>())
            .with("startup_probe", Attribute::nested::<Probe>())
            .with("stdin", Attribute::bool())
            .with("stdin_once", Attribute::bool())
            .with("termination_message_path", Attribute::string())
            .with("termination_message_policy", Attribute::string())
            .with("tty", Attribute::bool())
            .with("volume_devices", Attribute::nested_list::<VolumeDevice>())
            .with("volume_mounts", Attribute::nested_list::<VolumeMount>())
            .with("working_dir", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ContainerPort {
    pub container_port: i64,

    #[serde(rename(serialize = "hostIP"), skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl SchemaObject for ContainerPort {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("container_port", Attribute::int64().required())
            .with("host_ip", Attribute::string())
            .with("host_port", Attribute::int64())
            .with("name", Attribute::string())
            .with("protocol", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ContainerResizePolicy {
    pub resource_name: String,

    pub restart_policy: String,
}

impl SchemaObject for ContainerResizePolicy {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("resource_name", Attribute::string().required())
            .with("restart_policy", Attribute::string().required())
    }
}

/// Compute resources; quantities are kept as strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ResourceRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<ResourceClaim>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, String>>,
}

impl SchemaObject for ResourceRequirements {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("claims", Attribute::nested_list::<ResourceClaim>())
            .with("limits", Attribute::string_map())
            .with("requests", Attribute::string_map())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ResourceClaim {
    pub name: String,
}

impl SchemaObject for ResourceClaim {
    fn attributes() -> Attributes {
        Attributes::new().with("name", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EnvVar {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<EnvVarSource>,
}

impl SchemaObject for EnvVar {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string().required())
            .with("value", Attribute::string())
            .with("value_from", Attribute::nested::<EnvVarSource>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EnvVarSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_key_ref: Option<KeySelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_ref: Option<ObjectFieldSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_field_ref: Option<ResourceFieldSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<KeySelector>,
}

impl SchemaObject for EnvVarSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("config_map_key_ref", Attribute::nested::<KeySelector>())
            .with("field_ref", Attribute::nested::<ObjectFieldSelector>())
            .with(
                "resource_field_ref",
                Attribute::nested::<ResourceFieldSelector>(),
            )
            .with("secret_key_ref", Attribute::nested::<KeySelector>())
    }
}

/// Selects a key of a config map or secret
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct KeySelector {
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl SchemaObject for KeySelector {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("key", Attribute::string().required())
            .with("name", Attribute::string())
            .with("optional", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ObjectFieldSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    pub field_path: String,
}

impl SchemaObject for ObjectFieldSelector {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("api_version", Attribute::string())
            .with("field_path", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ResourceFieldSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<IntOrString>,

    pub resource: String,
}

impl SchemaObject for ResourceFieldSelector {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("container_name", Attribute::string())
            .with("divisor", Attribute::int_or_string())
            .with("resource", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EnvFromSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_ref: Option<OptionalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<OptionalObjectReference>,
}

impl SchemaObject for EnvFromSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "config_map_ref",
                Attribute::nested::<OptionalObjectReference>(),
            )
            .with("prefix", Attribute::string())
            .with("secret_ref", Attribute::nested::<OptionalObjectReference>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<GrpcAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
}

impl SchemaObject for Probe {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("exec", Attribute::nested::<ExecAction>())
            .with("failure_threshold", Attribute::int64())
            .with("grpc", Attribute::nested::<GrpcAction>())
            .with("http_get", Attribute::nested::<HttpGetAction>())
            .with("initial_delay_seconds", Attribute::int64())
            .with("period_seconds", Attribute::int64())
            .with("success_threshold", Attribute::int64())
            .with("tcp_socket", Attribute::nested::<TcpSocketAction>())
            .with("termination_grace_period_seconds", Attribute::int64())
            .with("timeout_seconds", Attribute::int64())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ExecAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

impl SchemaObject for ExecAction {
    fn attributes() -> Attributes {
        Attributes::new().with("command", Attribute::string_list())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GrpcAction {
    pub port: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl SchemaObject for GrpcAction {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("port", Attribute::int64().required())
            .with("service", Attribute::string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct HttpGetAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<Vec<HttpHeader>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub port: IntOrString,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl SchemaObject for HttpGetAction {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("host", Attribute::string())
            .with("http_headers", Attribute::nested_list::<HttpHeader>())
            .with("path", Attribute::string())
            .with("port", Attribute::int_or_string().required())
            .with("scheme", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct HttpHeader {
    pub name: String,

    pub value: String,
}

impl SchemaObject for HttpHeader {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string().required())
            .with("value", Attribute::string().required())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TcpSocketAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    pub port: IntOrString,
}

impl SchemaObject for TcpSocketAction {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("host", Attribute::string())
            .with("port", Attribute::int_or_string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Lifecycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_start: Option<LifecycleHandler>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_stop: Option<LifecycleHandler>,
}

impl SchemaObject for Lifecycle {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("post_start", Attribute::nested::<LifecycleHandler>())
            .with("pre_stop", Attribute::nested::<LifecycleHandler>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LifecycleHandler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
}

impl SchemaObject for LifecycleHandler {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("exec", Attribute::nested::<ExecAction>())
            .with("http_get", Attribute::nested::<HttpGetAction>())
            .with("tcp_socket", Attribute::nested::<TcpSocketAction>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VolumeDevice {
    pub device_path: String,

    pub name: String,
}

impl SchemaObject for VolumeDevice {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("device_path", Attribute::string().required())
            .with("name", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VolumeMount {
    pub mount_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_propagation: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path_expr: Option<String>,
}

impl SchemaObject for VolumeMount {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("mount_path", Attribute::string().required())
            .with("mount_propagation", Attribute::string())
            .with("name", Attribute::string().required())
            .with("read_only", Attribute::bool())
            .with("sub_path", Attribute::string())
            .with("sub_path_expr", Attribute::string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_port_host_ip_name() {
        let port: ContainerPort = serde_json::from_value(json!({
            "container_port": 9000,
            "host_ip": "0.0.0.0",
        }))
        .unwrap();
        let rendered = serde_json::to_value(&port).unwrap();
        assert_eq!(rendered, json!({"containerPort": 9000, "hostIP": "0.0.0.0"}));
    }

    #[test]
    fn test_probe_omits_unset_fields() {
        let probe: Probe = serde_json::from_value(json!({
            "http_get": {"path": "/minio/health/live", "port": 9000, "scheme": null},
            "initial_delay_seconds": 10,
        }))
        .unwrap();
        let rendered = serde_json::to_value(&probe).unwrap();
        assert_eq!(
            rendered,
            json!({
                "httpGet": {"path": "/minio/health/live", "port": 9000},
                "initialDelaySeconds": 10,
            })
        );
    }
}
