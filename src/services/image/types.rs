//! Types used by the image service

use crate::config::{GatewayConfig, ImageDefaults};
use crate::core::models::openai::{ImageData, ImageGenerationResponse, ImageUsage};
use crate::core::providers::ProviderError;
use crate::storage::object::supabase::BUCKET_FILE_SIZE_LIMIT;
use bytes::Bytes;
use std::path::PathBuf;
use std::time::Duration;

/// Image returned when the provider misses its deadline
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/1024x1024/FF0000/FFFFFF?text=Fallback+Image";

/// Result of racing the provider call against the deadline
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The provider answered in time, successfully or not
    Completed(Result<ImageGenerationResponse, ProviderError>),
    /// The deadline elapsed first
    TimedOut,
}

/// Stand-in response used in place of a timed-out provider call
pub fn placeholder_response() -> ImageGenerationResponse {
    ImageGenerationResponse {
        created: Some(chrono::Utc::now().timestamp()),
        data: vec![ImageData {
            url: Some(PLACEHOLDER_IMAGE_URL.to_string()),
            ..Default::default()
        }],
        usage: Some(ImageUsage {
            prompt_tokens: 10,
            completion_tokens: 0,
            total_tokens: 10,
        }),
    }
}

/// A remote image fetched into memory
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

impl DownloadedImage {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Knobs the service reads from configuration
#[derive(Debug, Clone)]
pub struct ImageServiceSettings {
    /// Deadline for a provider call
    pub timeout: Duration,
    pub defaults: ImageDefaults,
    /// Directory receiving files in file mode
    pub uploads_dir: PathBuf,
    /// URL path `uploads_dir` is served under
    pub uploads_public_path: String,
    /// Key prefix for mirrored objects
    pub object_prefix: String,
    /// Lifetime of signed URLs in seconds
    pub signed_url_ttl: u64,
    /// Deadline for fetching a remote image, body included
    pub download_timeout: Duration,
    /// Largest remote image accepted, matching the bucket limit
    pub max_download_bytes: usize,
}

impl ImageServiceSettings {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.provider.timeout),
            defaults: config.provider.defaults.clone(),
            uploads_dir: PathBuf::from(&config.uploads.dir),
            uploads_public_path: config.uploads.public_path.clone(),
            object_prefix: config.storage.object_prefix.clone(),
            signed_url_ttl: config.storage.signed_url_ttl,
            download_timeout: Duration::from_secs(config.storage.timeout),
            max_download_bytes: BUCKET_FILE_SIZE_LIMIT,
        }
    }
}

impl Default for ImageServiceSettings {
    fn default() -> Self {
        Self::from_config(&GatewayConfig::default())
    }
}
