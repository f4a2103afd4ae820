//! Object storage and upload directory configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Supabase object storage configuration
///
/// Mirroring is enabled only when both the URL and the service role key are set.
#[derive(Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Project URL (`SUPABASE_URL`)
    #[serde(default)]
    pub supabase_url: Option<String>,
    /// Service role key (`SUPABASE_SERVICE_ROLE_KEY`)
    #[serde(default)]
    pub service_role_key: Option<String>,
    /// Bucket receiving mirrored images
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Key prefix for mirrored objects
    #[serde(default = "default_object_prefix")]
    pub object_prefix: String,
    /// Lifetime of signed retrieval URLs in seconds
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl: u64,
    /// Overall deadline in seconds for downloads and storage calls
    #[serde(default = "default_storage_timeout")]
    pub timeout: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            supabase_url: None,
            service_role_key: None,
            bucket: default_bucket(),
            object_prefix: default_object_prefix(),
            signed_url_ttl: default_signed_url_ttl(),
            timeout: default_storage_timeout(),
        }
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("supabase_url", &self.supabase_url)
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("bucket", &self.bucket)
            .field("object_prefix", &self.object_prefix)
            .field("signed_url_ttl", &self.signed_url_ttl)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StorageConfig {
    /// URL and key, when both are present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.supabase_url.as_deref().filter(|u| !u.is_empty())?;
        let key = self.service_role_key.as_deref().filter(|k| !k.is_empty())?;
        Some((url, key))
    }

    /// Check if mirroring into object storage is possible
    pub fn is_enabled(&self) -> bool {
        self.credentials().is_some()
    }
}

/// Local directory used by the file output mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory on disk
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
    /// URL path the directory is served under
    #[serde(default = "default_uploads_public_path")]
    pub public_path: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
            public_path: default_uploads_public_path(),
        }
    }
}
