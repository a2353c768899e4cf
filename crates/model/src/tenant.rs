//! The MinIO `Tenant` resource

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject};

use crate::container::{Container, EnvVar, Lifecycle, Probe, ResourceRequirements, VolumeMount};
use crate::meta::{LocalObjectReference, ManifestMetadata};
use crate::pvc::PersistentVolumeClaim;
use crate::scheduling::{Affinity, Toleration, TopologySpreadConstraint};
use crate::security::{PodSecurityContext, SecurityContext};
use crate::volume::Volume;

pub const API_VERSION: &str = "minio.min.io/v2";
pub const KIND: &str = "Tenant";

/// A complete Tenant manifest as rendered to YAML.
///
/// `api_version` and `kind` are never read from configuration; they are
/// filled in by [`TenantManifest::with_type_meta`] right before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TenantManifest {
    #[serde(skip_deserializing)]
    pub api_version: String,

    #[serde(skip_deserializing)]
    pub kind: String,

    pub metadata: ManifestMetadata,

    pub spec: TenantSpec,
}

impl TenantManifest {
    pub fn with_type_meta(mut self) -> Self {
        self.api_version = API_VERSION.to_string();
        self.kind = KIND.to_string();
        self
    }

    /// `<namespace>/<name>` identifier of the rendered object
    pub fn id(&self) -> String {
        format!("{}/{}", self.metadata.namespace, self.metadata.name)
    }
}

impl SchemaObject for TenantManifest {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "metadata",
                Attribute::nested::<ManifestMetadata>()
                    .required()
                    .describe("Data that helps uniquely identify this object."),
            )
            .with(
                "spec",
                Attribute::nested::<TenantSpec>()
                    .required()
                    .describe("Desired state of the MinIO tenant."),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TenantSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_volume_mounts: Option<Vec<VolumeMount>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_volumes: Option<Vec<Volume>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<Bucket>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_config: Option<CertificateConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creds_secret: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose_services: Option<ExposeServices>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ca_cert_secret: Option<Vec<LocalCertificateReference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_cert_secret: Option<Vec<LocalCertificateReference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_client_cert_secret: Option<LocalCertificateReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_client_cert_secrets: Option<Vec<LocalCertificateReference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_containers: Option<Vec<Container>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kes: Option<KesConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_management_policy: Option<String>,

    pub pools: Vec<Pool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pools_metadata: Option<PoolsMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prometheus_operator: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_auto_cert: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Features>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_metadata: Option<ServiceMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_cars: Option<SideCars>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<LocalObjectReference>>,
}

impl SchemaObject for TenantSpec {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("additional_volume_mounts", Attribute::nested_list::<VolumeMount>())
            .with("additional_volumes", Attribute::nested_list::<Volume>())
            .with(
                "buckets",
                Attribute::nested_list::<Bucket>()
                    .describe("Buckets to create during tenant provisioning."),
            )
            .with("cert_config", Attribute::nested::<CertificateConfig>())
            .with(
                "configuration",
                Attribute::nested::<LocalObjectReference>()
                    .describe("Secret holding the MinIO environment configuration."),
            )
            .with("creds_secret", Attribute::nested::<LocalObjectReference>())
            .with("env", Attribute::nested_list::<EnvVar>())
            .with("expose_services", Attribute::nested::<ExposeServices>())
            .with(
                "external_ca_cert_secret",
                Attribute::nested_list::<LocalCertificateReference>(),
            )
            .with(
                "external_cert_secret",
                Attribute::nested_list::<LocalCertificateReference>(),
            )
            .with(
                "external_client_cert_secret",
                Attribute::nested::<LocalCertificateReference>(),
            )
            .with(
                "external_client_cert_secrets",
                Attribute::nested_list::<LocalCertificateReference>(),
            )
            .with("features", Attribute::nested::<Features>())
            .with(
                "image",
                Attribute::string().describe("Container image of the MinIO server."),
            )
            .with("image_pull_policy", Attribute::string())
            .with("image_pull_secret", Attribute::nested::<LocalObjectReference>())
            .with("init_containers", Attribute::nested_list::<Container>())
            .with("kes", Attribute::nested::<KesConfig>())
            .with("lifecycle", Attribute::nested::<Lifecycle>())
            .with("liveness", Attribute::nested::<Probe>())
            .with("logging", Attribute::nested::<Logging>())
            .with("mount_path", Attribute::string())
            .with("pod_management_policy", Attribute::string())
            .with(
                "pools",
                Attribute::nested_list::<Pool>()
                    .required()
                    .describe("Server pools of the tenant."),
            )
            .with("pools_metadata", Attribute::nested::<PoolsMetadata>())
            .with("priority_class_name", Attribute::string())
            .with("prometheus_operator", Attribute::bool())
            .with("readiness", Attribute::nested::<Probe>())
            .with("request_auto_cert", Attribute::bool())
            .with("s3", Attribute::nested::<S3Features>())
            .with("scheduler_name", Attribute::string())
            .with("service_account_name", Attribute::string())
            .with("service_metadata", Attribute::nested::<ServiceMetadata>())
            .with("side_cars", Attribute::nested::<SideCars>())
            .with("startup", Attribute::nested::<Probe>())
            .with("sub_path", Attribute::string())
            .with("users", Attribute::nested_list::<LocalObjectReference>())
    }
}

/// One server pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Pool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_security_context: Option<SecurityContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,

    pub servers: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,

    pub volume_claim_template: PersistentVolumeClaim,

    pub volumes_per_server: i64,
}

impl SchemaObject for Pool {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("affinity", Attribute::nested::<Affinity>())
            .with("annotations", Attribute::string_map())
            .with(
                "container_security_context",
                Attribute::nested::<SecurityContext>(),
            )
            .with("labels", Attribute::string_map())
            .with("name", Attribute::string())
            .with("node_selector", Attribute::string_map())
            .with("resources", Attribute::nested::<ResourceRequirements>())
            .with("runtime_class_name", Attribute::string())
            .with("security_context", Attribute::nested::<PodSecurityContext>())
            .with(
                "servers",
                Attribute::int64()
                    .required()
                    .describe("Number of MinIO server pods in the pool."),
            )
            .with("tolerations", Attribute::nested_list::<Toleration>())
            .with(
                "topology_spread_constraints",
                Attribute::nested_list::<TopologySpreadConstraint>(),
            )
            .with(
                "volume_claim_template",
                Attribute::nested::<PersistentVolumeClaim>().required(),
            )
            .with(
                "volumes_per_server",
                Attribute::int64()
                    .required()
                    .describe("Number of volumes attached to each server."),
            )
    }
}

/// Key encryption service sidecar configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct KesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert_secret: Option<LocalCertificateReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_security_context: Option<SecurityContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_cert_secret: Option<LocalCertificateReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_credential_secret_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_workload_identity_pool: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,

    pub kes_secret: LocalObjectReference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,
}

impl SchemaObject for KesConfig {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("affinity", Attribute::nested::<Affinity>())
            .with("annotations", Attribute::string_map())
            .with(
                "client_cert_secret",
                Attribute::nested::<LocalCertificateReference>(),
            )
            .with(
                "container_security_context",
                Attribute::nested::<SecurityContext>(),
            )
            .with("env", Attribute::nested_list::<EnvVar>())
            .with(
                "external_cert_secret",
                Attribute::nested::<LocalCertificateReference>(),
            )
            .with("gcp_credential_secret_name", Attribute::string())
            .with("gcp_workload_identity_pool", Attribute::string())
            .with("image", Attribute::string())
            .with("image_pull_policy", Attribute::string())
            .with(
                "kes_secret",
                Attribute::nested::<LocalObjectReference>()
                    .required()
                    .describe("Secret holding the KES server configuration."),
            )
            .with("key_name", Attribute::string())
            .with("labels", Attribute::string_map())
            .with("node_selector", Attribute::string_map())
            .with("replicas", Attribute::int64())
            .with("resources", Attribute::nested::<ResourceRequirements>())
            .with("security_context", Attribute::nested::<PodSecurityContext>())
            .with("service_account_name", Attribute::string())
            .with("tolerations", Attribute::nested_list::<Toleration>())
            .with(
                "topology_spread_constraints",
                Attribute::nested_list::<TopologySpreadConstraint>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Bucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_lock: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl SchemaObject for Bucket {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string())
            .with("object_lock", Attribute::bool())
            .with("region", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CertificateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<Vec<String>>,
}

impl SchemaObject for CertificateConfig {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("common_name", Attribute::string())
            .with("dns_names", Attribute::string_list())
            .with("organization_name", Attribute::string_list())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ExposeServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minio: Option<bool>,
}

impl SchemaObject for ExposeServices {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("console", Attribute::bool())
            .with("minio", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Features {
    #[serde(rename(serialize = "bucketDNS"), skip_serializing_if = "Option::is_none")]
    pub bucket_dns: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<TenantDomains>,

    #[serde(rename(serialize = "enableSFTP"), skip_serializing_if = "Option::is_none")]
    pub enable_sftp: Option<bool>,
}

impl SchemaObject for Features {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("bucket_dns", Attribute::bool())
            .with("domains", Attribute::nested::<TenantDomains>())
            .with("enable_sftp", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TenantDomains {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minio: Option<Vec<String>>,
}

impl SchemaObject for TenantDomains {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("console", Attribute::string())
            .with("minio", Attribute::string_list())
    }
}

/// Reference to a secret holding a certificate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct LocalCertificateReference {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl SchemaObject for LocalCertificateReference {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string().required())
            .with("type", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Logging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
}

impl SchemaObject for Logging {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("anonymous", Attribute::bool())
            .with("json", Attribute::bool())
            .with("quiet", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PoolsMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

impl SchemaObject for PoolsMetadata {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("annotations", Attribute::string_map())
            .with("labels", Attribute::string_map())
    }
}

/// Deprecated location of the bucket DNS flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct S3Features {
    #[serde(rename(serialize = "bucketDNS"), skip_serializing_if = "Option::is_none")]
    pub bucket_dns: Option<bool>,
}

impl SchemaObject for S3Features {
    fn attributes() -> Attributes {
        Attributes::new().with(
            "bucket_dns",
            Attribute::bool().deprecated("Use spec.features.bucket_dns instead."),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ServiceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_service_annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_service_labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minio_service_annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minio_service_labels: Option<BTreeMap<String, String>>,
}

impl SchemaObject for ServiceMetadata {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("console_service_annotations", Attribute::string_map())
            .with("console_service_labels", Attribute::string_map())
            .with("minio_service_annotations", Attribute::string_map())
            .with("minio_service_labels", Attribute::string_map())
    }
}

/// Extra containers run next to each MinIO server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SideCars {
    pub containers: Vec<Container>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<PersistentVolumeClaim>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

impl SchemaObject for SideCars {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("containers", Attribute::nested_list::<Container>().required())
            .with("resources", Attribute::nested::<ResourceRequirements>())
            .with(
                "volume_claim_templates",
                Attribute::nested_list::<PersistentVolumeClaim>(),
            )
            .with("volumes", Attribute::nested_list::<Volume>())
    }
}
