//! Type definitions for object storage

use bytes::Bytes;

use crate::utils::error::Result;

/// An object to be written into a bucket
#[derive(Debug, Clone)]
pub struct ObjectUpload {
    /// Key inside the bucket
    pub path: String,
    /// Raw object bytes
    pub bytes: Bytes,
    /// MIME content type
    pub content_type: String,
}

/// Object store trait
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug {
    /// Backend name reported to clients
    fn provider_name(&self) -> &'static str;

    /// Write an object, replacing any existing one at the same key
    async fn upload(&self, upload: ObjectUpload) -> Result<()>;

    /// Time-limited URL granting read access to `path`
    async fn create_signed_url(&self, path: &str, expires_in: u64) -> Result<String>;
}
