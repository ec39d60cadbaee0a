//! Loading of named cloud entries from `clouds.yaml`.

use crate::core::domain::error::{IronicError, IronicResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_ENV: &str = "OS_CLIENT_CONFIG_FILE";

/// Authentication settings of a cloud entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CloudAuth {
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub user_domain_name: Option<String>,
    #[serde(default)]
    pub project_domain_name: Option<String>,
    /// Endpoint used with `auth_type: none`.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// One entry under `clouds:` in a `clouds.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CloudConfig {
    /// `password` (default) or `none` for Ironic standalone deployments.
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub auth: CloudAuth,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub baremetal_endpoint_override: Option<String>,
    /// TLS certificate verification; `false` accepts invalid certificates.
    #[serde(default)]
    pub verify: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct CloudsFile {
    #[serde(default)]
    clouds: HashMap<String, CloudConfig>,
}

impl CloudConfig {
    /// Returns true when the entry disables authentication.
    #[must_use]
    pub fn is_noauth(&self) -> bool {
        matches!(self.auth_type.as_deref(), Some("none" | "noauth"))
    }

    /// The Bare Metal endpoint explicitly configured for this cloud, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.baremetal_endpoint_override
            .as_deref()
            .or(self.auth.endpoint.as_deref())
    }

    /// Parses `clouds.yaml` contents and returns the named cloud.
    pub fn from_yaml(contents: &str, cloud: &str) -> IronicResult<Self> {
        let file: CloudsFile = serde_yaml::from_str(contents)
            .map_err(|e| IronicError::Config(format!("Failed to parse clouds.yaml: {e}")))?;
        file.clouds.get(cloud).cloned().ok_or_else(|| {
            IronicError::Config(format!("Cloud '{cloud}' was not found in clouds.yaml"))
        })
    }

    /// Loads the named cloud from `path`, or from the first `clouds.yaml`
    /// found in the standard locations.
    pub async fn load(path: Option<&Path>, cloud: &str) -> IronicResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => find_clouds_file().await.ok_or_else(|| {
                IronicError::Config("No clouds.yaml found in the standard locations".to_string())
            })?,
        };
        debug!(path = %path.display(), cloud, "Loading cloud configuration");

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            IronicError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&contents, cloud)
    }
}

/// Candidate locations in lookup order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = env::var(CONFIG_FILE_ENV) {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("clouds.yaml"));
    if let Ok(home) = env::var("HOME") {
        candidates.push(Path::new(&home).join(".config/openstack/clouds.yaml"));
    }
    candidates.push(PathBuf::from("/etc/openstack/clouds.yaml"));
    candidates
}

async fn find_clouds_file() -> Option<PathBuf> {
    for candidate in candidate_paths() {
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return Some(candidate);
        }
    }
    None
}
