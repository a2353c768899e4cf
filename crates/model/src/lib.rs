//! Model of the MinIO `Tenant` custom resource (`minio.min.io/v2`).
//!
//! Every struct decodes from snake_case configuration and renders the
//! Kubernetes camelCase field names. Each type also declares its own schema
//! fragment through [`SchemaObject`], so the schema and the model are kept in
//! one place.

pub mod container;
pub mod meta;
pub mod pvc;
pub mod scheduling;
pub mod security;
pub mod tenant;
pub mod volume;

pub use container::{Container, EnvVar, Probe, ResourceRequirements, VolumeMount};
pub use meta::{IntOrString, LabelSelector, LocalObjectReference, ManifestMetadata};
pub use pvc::{PersistentVolumeClaim, PersistentVolumeClaimSpec};
pub use scheduling::{Affinity, Toleration, TopologySpreadConstraint};
pub use security::{PodSecurityContext, SecurityContext};
pub use tenant::{KesConfig, Pool, TenantManifest, TenantSpec, API_VERSION, KIND};
pub use volume::Volume;

pub use tenant_manifest_schema::SchemaObject;
