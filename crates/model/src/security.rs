//! Pod and container security contexts

use serde::{Deserialize, Serialize};
use tenant_manifest_schema::{Attribute, Attributes, SchemaObject};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PodSecurityContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_group: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_group_change_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_group: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_non_root: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_linux_options: Option<SeLinuxOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seccomp_profile: Option<SeccompProfile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental_groups: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sysctls: Option<Vec<Sysctl>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_options: Option<WindowsSecurityContextOptions>,
}

impl SchemaObject for PodSecurityContext {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("fs_group", Attribute::int64())
            .with("fs_group_change_policy", Attribute::string())
            .with("run_as_group", Attribute::int64())
            .with("run_as_non_root", Attribute::bool())
            .with("run_as_user", Attribute::int64())
            .with("se_linux_options", Attribute::nested::<SeLinuxOptions>())
            .with("seccomp_profile", Attribute::nested::<SeccompProfile>())
            .with("supplemental_groups", Attribute::int64_list())
            .with("sysctls", Attribute::nested_list::<Sysctl>())
            .with(
                "windows_options",
                Attribute::nested::<WindowsSecurityContextOptions>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SecurityContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_privilege_escalation: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proc_mount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_root_filesystem: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_group: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_non_root: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_linux_options: Option<SeLinuxOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seccomp_profile: Option<SeccompProfile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_options: Option<WindowsSecurityContextOptions>,
}

impl SchemaObject for SecurityContext {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("allow_privilege_escalation", Attribute::bool())
            .with("capabilities", Attribute::nested::<Capabilities>())
            .with("privileged", Attribute::bool())
            .with("proc_mount", Attribute::string())
            .with("read_only_root_filesystem", Attribute::bool())
            .with("run_as_group", Attribute::int64())
            .with("run_as_non_root", Attribute::bool())
            .with("run_as_user", Attribute::int64())
            .with("se_linux_options", Attribute::nested::<SeLinuxOptions>())
            .with("seccomp_profile", Attribute::nested::<SeccompProfile>())
            .with(
                "windows_options",
                Attribute::nested::<WindowsSecurityContextOptions>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Capabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop: Option<Vec<String>>,
}

impl SchemaObject for Capabilities {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("add", Attribute::string_list())
            .with("drop", Attribute::string_list())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SeLinuxOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl SchemaObject for SeLinuxOptions {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("level", Attribute::string())
            .with("role", Attribute::string())
            .with("type", Attribute::string())
            .with("user", Attribute::string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SeccompProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localhost_profile: Option<String>,

    pub r#type: String,
}

impl SchemaObject for SeccompProfile {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("localhost_profile", Attribute::string())
            .with("type", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Sysctl {
    pub name: String,

    pub value: String,
}

impl SchemaObject for Sysctl {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("name", Attribute::string().required())
            .with("value", Attribute::string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WindowsSecurityContextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmsa_credential_spec: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmsa_credential_spec_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_process: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user_name: Option<String>,
}

impl SchemaObject for WindowsSecurityContextOptions {
    fn attributes() -> Attributes {
        Attributes::new()
            .with("gmsa_credential_spec", Attribute::string())
            .with("gmsa_credential_spec_name", Attribute::string())
            .with("host_process", Attribute::bool())
            .with("run_as_user_name", Attribute::string())
    }
}
