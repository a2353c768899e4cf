//! Pod volumes and their sources

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject};

use crate::container::{ObjectFieldSelector, ResourceFieldSelector};
use crate::meta::{IntOrString, LocalObjectReference};
use crate::pvc::PersistentVolumeClaimTemplate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Volume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_elastic_block_store: Option<AwsElasticBlockStoreVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_disk: Option<AzureDiskVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_file: Option<AzureFileVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cephfs: Option<CephFsVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinder: Option<CinderVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub csi: Option<CsiVolumeSource>,

    #[serde(rename(serialize = "downwardAPI"), skip_serializing_if = "Option::is_none")]
    pub downward_api: Option<DownwardApiVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<EmptyDirVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<EphemeralVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fc: Option<FcVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_volume: Option<FlexVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flocker: Option<FlockerVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gce_persistent_disk: Option<GcePersistentDiskVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<GitRepoVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glusterfs: Option<GlusterfsVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<HostPathVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iscsi: Option<IscsiVolumeSource>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs: Option<NfsVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon_persistent_disk: Option<PhotonPersistentDiskVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub portworx_volume: Option<PortworxVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<ProjectedVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quobyte: Option<QuobyteVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbd: Option<RbdVolumeSource>,

    #[serde(rename(serialize = "scaleIO"), skip_serializing_if = "Option::is_none")]
    pub scale_io: Option<ScaleIoVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storageos: Option<StorageOsVolumeSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsphere_volume: Option<VsphereVirtualDiskVolumeSource>,
}

impl SchemaObject for Volume {
    fn attributes() -> Attributes {
        Attributes::new()
            .with(
                "aws_elastic_block_store",
                Attribute::nested::<AwsElasticBlockStoreVolumeSource>(),
            )
            .with("azure_disk", Attribute::nested::<AzureDiskVolumeSource>())
            .with("azure_file", Attribute::nested::<AzureFileVolumeSource>())
            .with("cephfs", Attribute::nested::<CephFsVolumeSource>())
            .with("cinder", Attribute::nested::<CinderVolumeSource>())
            .with("config_map", Attribute::nested::<ConfigMapVolumeSource>())
            .with("csi", Attribute::nested::<CsiVolumeSource>())
            .with(
                "downward_api",
                Attribute::nested::<DownwardApiVolumeSource>(),
            )
            .with("empty_dir", Attribute::nested::<EmptyDirVolumeSource>())
            .with("ephemeral", Attribute::nested::<EphemeralVolumeSource>())
            .with("fc", Attribute::nested::<FcVolumeSource>())
            .with("flex_volume", Attribute::nested::<FlexVolumeSource>())
            .with("flocker", Attribute::nested::<FlockerVolumeSource>())
            .with(
                "gce_persistent_disk",
                Attribute::nested::<GcePersistentDiskVolumeSource>(),
            )
            .with("git_repo", Attribute::nested::<GitRepoVolumeSource>())
            .with("glusterfs", Attribute::nested::<GlusterfsVolumeSource>())
            .with("host_path", Attribute::nested::<HostPathVolumeSource>())
            .with("iscsi", Attribute::nested::<IscsiVolumeSource>())
            .with("name", Attribute::string().required())
            .with("nfs", Attribute::nested::<NfsVolumeSource>())
            .with(
                "persistent_volume_claim",
                Attribute::nested::<PersistentVolumeClaimVolumeSource>(),
            )
            .with(
                "photon_persistent_disk",
                Attribute::nested::<PhotonPersistentDiskVolumeSource>(),
            )
            .with("portworx_volume", Attribute::nested::<PortworxVolumeSource>())
            .with("projected", Attribute::nested::<ProjectedVolumeSource>())
            .with("quobyte", Attribute::nested::<QuobyteVolumeSource>())
            .with("rbd", Attribute::nested::<RbdVolumeSource>())
            .with("scale_io", Attribute::nested::<ScaleIoVolumeSource>())
            .with("secret", Attribute::nested::<SecretVolumeSource>())
            .with("storageos", Attribute::nested::<StorageOsVolumeSource>())
            .with(
                "vsphere_volume",
                Attribute::nested::<VsphereVirtualDiskVolumeSource>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AwsElasticBlockStoreVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(rename(serialize = "volumeID"))]
    pub volume_id: String,
}

impl SchemaObject for AwsElasticBlockStoreVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("partition", Attribute::int64())
            .with("read_only", Attribute::bool())
            .with("volume_id", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AzureDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching_mode: Option<String>,

    pub disk_name: String,

    #[serde(rename(serialize = "diskURI"))]
    pub disk_uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl SchemaObject for AzureDiskVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("caching_mode", Attribute::string())
            .with("disk_name", Attribute::string().required())
            .with("disk_uri", Attribute::string().required())
            .with("fs_type", Attribute::string())
            .with("kind", Attribute::string())
            .with("read_only", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AzureFileVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    pub secret_name: String,

    pub share_name: String,
}

impl SchemaObject for AzureFileVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("read_only", Attribute::bool())
            .with("secret_name", Attribute::string().required())
            .with("share_name", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CephFsVolumeSource {
    pub monitors: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl SchemaObject for CephFsVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("monitors", Attribute::string_list().required())
            .with("path", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("secret_file", Attribute::string())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
            .with("user", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CinderVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,

    #[serde(rename(serialize = "volumeID"))]
    pub volume_id: String,
}

impl SchemaObject for CinderVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
            .with("volume_id", Attribute::string().required())
    }
}

/// Maps a config map or secret key to a file path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct KeyToPath {
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i64>,

    pub path: String,
}

impl SchemaObject for KeyToPath {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("key", Attribute::string().required())
            .with("mode", Attribute::int64())
            .with("path", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ConfigMapVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl SchemaObject for ConfigMapVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("default_mode", Attribute::int64())
            .with("items", Attribute::nested_list::<KeyToPath>())
            .with("name", Attribute::string())
            .with("optional", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CsiVolumeSource {
    pub driver: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_publish_secret_ref: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_attributes: Option<BTreeMap<String, String>>,
}

impl SchemaObject for CsiVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("driver", Attribute::string().required())
            .with("fs_type", Attribute::string())
            .with(
                "node_publish_secret_ref",
                Attribute::nested::<LocalObjectReference>(),
            )
            .with("read_only", Attribute::bool())
            .with("volume_attributes", Attribute::string_map())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DownwardApiVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DownwardApiVolumeFile>>,
}

impl SchemaObject for DownwardApiVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("default_mode", Attribute::int64())
            .with("items", Attribute::nested_list::<DownwardApiVolumeFile>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DownwardApiVolumeFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_ref: Option<ObjectFieldSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i64>,

    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_field_ref: Option<ResourceFieldSelector>,
}

impl SchemaObject for DownwardApiVolumeFile {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("field_ref", Attribute::nested::<ObjectFieldSelector>())
            .with("mode", Attribute::int64())
            .with("path", Attribute::string().required())
            .with(
                "resource_field_ref",
                Attribute::nested::<ResourceFieldSelector>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EmptyDirVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<IntOrString>,
}

impl SchemaObject for EmptyDirVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("medium", Attribute::string())
            .with("size_limit", Attribute::int_or_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EphemeralVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<PersistentVolumeClaimTemplate>,
}

impl SchemaObject for EphemeralVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new().with(
            "volume_claim_template",
            Attribute::nested::<PersistentVolumeClaimTemplate>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FcVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lun: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(rename(serialize = "targetWWNs"), skip_serializing_if = "Option::is_none")]
    pub target_ww_ns: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wwids: Option<Vec<String>>,
}

impl SchemaObject for FcVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("lun", Attribute::int64())
            .with("read_only", Attribute::bool())
            .with("target_ww_ns", Attribute::string_list())
            .with("wwids", Attribute::string_list())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FlexVolumeSource {
    pub driver: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
}

impl SchemaObject for FlexVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("driver", Attribute::string().required())
            .with("fs_type", Attribute::string())
            .with("options", Attribute::string_map())
            .with("read_only", Attribute::bool())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FlockerVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,

    #[serde(rename(serialize = "datasetUUID"), skip_serializing_if = "Option::is_none")]
    pub dataset_uuid: Option<String>,
}

impl SchemaObject for FlockerVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("dataset_name", Attribute::string())
            .with("dataset_uuid", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GcePersistentDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i64>,

    pub pd_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl SchemaObject for GcePersistentDiskVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("partition", Attribute::int64())
            .with("pd_name", Attribute::string().required())
            .with("read_only", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GitRepoVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    pub repository: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl SchemaObject for GitRepoVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("directory", Attribute::string())
            .with("repository", Attribute::string().required())
            .with("revision", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GlusterfsVolumeSource {
    pub endpoints: String,

    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl SchemaObject for GlusterfsVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("endpoints", Attribute::string().required())
            .with("path", Attribute::string().required())
            .with("read_only", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct HostPathVolumeSource {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl SchemaObject for HostPathVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("path", Attribute::string().required())
            .with("type", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct IscsiVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chap_auth_discovery: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chap_auth_session: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator_name: Option<String>,

    pub iqn: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iscsi_interface: Option<String>,

    pub lun: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub portals: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,

    pub target_portal: String,
}

impl SchemaObject for IscsiVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("chap_auth_discovery", Attribute::bool())
            .with("chap_auth_session", Attribute::bool())
            .with("fs_type", Attribute::string())
            .with("initiator_name", Attribute::string())
            .with("iqn", Attribute::string().required())
            .with("iscsi_interface", Attribute::string())
            .with("lun", Attribute::int64().required())
            .with("portals", Attribute::string_list())
            .with("read_only", Attribute::bool())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
            .with("target_portal", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NfsVolumeSource {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    pub server: String,
}

impl SchemaObject for NfsVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("path", Attribute::string().required())
            .with("read_only", Attribute::bool())
            .with("server", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PersistentVolumeClaimVolumeSource {
    pub claim_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl SchemaObject for PersistentVolumeClaimVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("claim_name", Attribute::string().required())
            .with("read_only", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PhotonPersistentDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(rename(serialize = "pdID"))]
    pub pd_id: String,
}

impl SchemaObject for PhotonPersistentDiskVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("pd_id", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PortworxVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(rename(serialize = "volumeID"))]
    pub volume_id: String,
}

impl SchemaObject for PortworxVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("volume_id", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProjectedVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<VolumeProjection>>,
}

impl SchemaObject for ProjectedVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("default_mode", Attribute::int64())
            .with("sources", Attribute::nested_list::<VolumeProjection>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VolumeProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<KeyProjection>,

    #[serde(rename(serialize = "downwardAPI"), skip_serializing_if = "Option::is_none")]
    pub downward_api: Option<DownwardApiProjection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<KeyProjection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_token: Option<ServiceAccountTokenProjection>,
}

impl SchemaObject for VolumeProjection {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("config_map", Attribute::nested::<KeyProjection>())
            .with("downward_api", Attribute::nested::<DownwardApiProjection>())
            .with("secret", Attribute::nested::<KeyProjection>())
            .with(
                "service_account_token",
                Attribute::nested::<ServiceAccountTokenProjection>(),
            )
    }
}

/// Projection of config map or secret keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct KeyProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl SchemaObject for KeyProjection {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("items", Attribute::nested_list::<KeyToPath>())
            .with("name", Attribute::string())
            .with("optional", Attribute::bool())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DownwardApiProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DownwardApiVolumeFile>>,
}

impl SchemaObject for DownwardApiProjection {
    fn attributes() -> Attributes {
        Attributes::new().with("items", Attribute::nested_list::<DownwardApiVolumeFile>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ServiceAccountTokenProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_seconds: Option<i64>,

    pub path: String,
}

impl SchemaObject for ServiceAccountTokenProjection {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("audience", Attribute::string())
            .with("expiration_seconds", Attribute::int64())
            .with("path", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct QuobyteVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    pub registry: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    pub volume: String,
}

impl SchemaObject for QuobyteVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("group", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("registry", Attribute::string().required())
            .with("tenant", Attribute::string())
            .with("user", Attribute::string())
            .with("volume", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RbdVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyring: Option<String>,

    pub monitors: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl SchemaObject for RbdVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("image", Attribute::string().required())
            .with("keyring", Attribute::string())
            .with("monitors", Attribute::string_list().required())
            .with("pool", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
            .with("user", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ScaleIoVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    pub gateway: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    pub secret_ref: LocalObjectReference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_pool: Option<String>,

    pub system: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

impl SchemaObject for ScaleIoVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("gateway", Attribute::string().required())
            .with("protection_domain", Attribute::string())
            .with("read_only", Attribute::bool())
            .with(
                "secret_ref",
                Attribute::nested::<LocalObjectReference>().required(),
            )
            .with("ssl_enabled", Attribute::bool())
            .with("storage_mode", Attribute::string())
            .with("storage_pool", Attribute::string())
            .with("system", Attribute::string().required())
            .with("volume_name", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SecretVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl SchemaObject for SecretVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("default_mode", Attribute::int64())
            .with("items", Attribute::nested_list::<KeyToPath>())
            .with("optional", Attribute::bool())
            .with("secret_name", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct StorageOsVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_namespace: Option<String>,
}

impl SchemaObject for StorageOsVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("read_only", Attribute::bool())
            .with("secret_ref", Attribute::nested::<LocalObjectReference>())
            .with("volume_name", Attribute::string())
            .with("volume_namespace", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VsphereVirtualDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,

    #[serde(rename(serialize = "storagePolicyID"), skip_serializing_if = "Option::is_none")]
    pub storage_policy_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_policy_name: Option<String>,

    pub volume_path: String,
}

impl SchemaObject for VsphereVirtualDiskVolumeSource {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_type", Attribute::string())
            .with("storage_policy_id", Attribute::string())
            .with("storage_policy_name", Attribute::string())
            .with("volume_path", Attribute::string().required())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_irregular_names_on_output() {
        let volume: Volume = serde_json::from_value(json!({
            "name": "data",
            "aws_elastic_block_store": {"volume_id": "vol-1"},
            "downward_api": {"items": [{"path": "labels", "field_ref": {"field_path": "metadata.labels"}}]},
            "fc": {"target_ww_ns": ["500a0982991b8dc5"]},
            "scale_io": {"gateway": "gw", "system": "sys", "secret_ref": {"name": "creds"}},
        }))
        .unwrap();
        let rendered = serde_json::to_value(&volume).unwrap();
        assert_eq!(rendered["awsElasticBlockStore"]["volumeID"], "vol-1");
        assert_eq!(
            rendered["downwardAPI"]["items"][0]["fieldRef"]["fieldPath"],
            "metadata.labels"
        );
        assert_eq!(rendered["fc"]["targetWWNs"][0], "500a0982991b8dc5");
        assert_eq!(rendered["scaleIO"]["secretRef"]["name"], "creds");
        assert!(rendered.get("emptyDir").is_none());
    }

    #[test]
    fn test_volume_declares_every_source() {
        let attributes = Volume::attributes();
        assert_eq!(attributes.len(), 30);
        assert!(attributes.get("name").unwrap().required);
    }
}
