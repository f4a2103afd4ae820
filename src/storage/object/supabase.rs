//! Supabase Storage backend

use crate::config::StorageConfig;
use crate::utils::error::{GatewayError, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::types::{ObjectStore, ObjectUpload};

/// Upper bound set on the bucket when it is created
pub const BUCKET_FILE_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// Supabase Storage over its REST API
#[derive(Clone)]
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl std::fmt::Debug for SupabaseStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStorage")
            .field("base_url", &self.base_url)
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL", alias = "signedUrl")]
    signed_url: String,
}

impl SupabaseStorage {
    /// Build a store from configuration, or `None` when credentials are missing
    pub fn from_config(config: &StorageConfig, client: reqwest::Client) -> Option<Self> {
        match config.credentials() {
            Some((url, key)) => {
                info!("Object storage enabled (bucket {})", config.bucket);
                Some(Self::new(client, url, key, &config.bucket))
            }
            None => {
                warn!("Object storage not configured; mirroring disabled");
                None
            }
        }
    }

    /// Create a store for `bucket` at the project `base_url`
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    /// Create the bucket if needed; failures are logged, never returned
    async fn ensure_bucket(&self) {
        let payload = serde_json::json!({
            "id": self.bucket,
            "name": self.bucket,
            "public": false,
            "file_size_limit": BUCKET_FILE_SIZE_LIMIT,
        });

        let request = self.authorized(self.client.post(self.storage_url("bucket")).json(&payload));
        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Created bucket {}", self.bucket);
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                if body.contains("already exists") || status == reqwest::StatusCode::CONFLICT {
                    debug!("Bucket {} already exists", self.bucket);
                } else {
                    warn!("Could not create bucket {} ({}): {}", self.bucket, status, body);
                }
            }
            Err(e) => warn!("Failed to ensure bucket {}: {}", self.bucket, e),
        }
    }
}

/// Turn a non-2xx storage response into an error carrying its message
async fn storage_error(action: &str, response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);
    GatewayError::storage(format!("{} failed ({}): {}", action, status, message))
}

#[async_trait::async_trait]
impl ObjectStore for SupabaseStorage {
    fn provider_name(&self) -> &'static str {
        "supabase"
    }

    async fn upload(&self, upload: ObjectUpload) -> Result<()> {
        self.ensure_bucket().await;

        let url = self.storage_url(&format!("object/{}/{}", self.bucket, upload.path));
        debug!("Uploading {} bytes to {}", upload.bytes.len(), upload.path);

        let response = self
            .authorized(self.client.post(&url))
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, upload.content_type)
            .body(upload.bytes)
            .send()
            .await
            .map_err(|e| GatewayError::network(format!("Upload request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(storage_error("Upload", response).await);
        }

        Ok(())
    }

    async fn create_signed_url(&self, path: &str, expires_in: u64) -> Result<String> {
        let url = self.storage_url(&format!("object/sign/{}/{}", self.bucket, path));

        let response = self
            .authorized(self.client.post(&url))
            .json(&serde_json::json!({ "expiresIn": expires_in }))
            .send()
            .await
            .map_err(|e| GatewayError::network(format!("Signing request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(storage_error("Signing", response).await);
        }

        let signed: SignedUrlResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::storage(format!("Invalid signing response: {}", e)))?;

        // The API answers with a path relative to /storage/v1
        if signed.signed_url.starts_with("http://") || signed.signed_url.starts_with("https://") {
            Ok(signed.signed_url)
        } else {
            Ok(format!(
                "{}/storage/v1/{}",
                self.base_url,
                signed.signed_url.trim_start_matches('/')
            ))
        }
    }
}
