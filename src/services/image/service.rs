//! Main image service implementation

use super::types::{DownloadedImage, GenerationOutcome, ImageServiceSettings, placeholder_response};
use crate::config::GatewayConfig;
use crate::core::models::openai::{ImageGenerationRequest, ImageGenerationResponse};
use crate::core::models::{
    GeneratedImage, ImageLocation, ImageOptions, ImageOverrides, OutputMode, StoredObject,
};
use crate::core::providers::{ImageProvider, OpenAIImageClient};
use crate::storage::object::{ObjectStore, ObjectUpload, object_key, sniff_content_type};
use crate::storage::SupabaseStorage;
use crate::utils::error::{GatewayError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::BytesMut;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Image generation, download and mirroring
#[derive(Debug, Clone)]
pub struct ImageService {
    provider: Arc<dyn ImageProvider>,
    store: Option<Arc<dyn ObjectStore>>,
    http_client: reqwest::Client,
    settings: ImageServiceSettings,
}

impl ImageService {
    /// Create a service around `provider` with object storage disabled
    pub fn new(provider: Arc<dyn ImageProvider>, settings: ImageServiceSettings) -> Self {
        Self {
            provider,
            store: None,
            http_client: reqwest::Client::new(),
            settings,
        }
    }

    /// Build the OpenAI client, the optional Supabase store and the download client from configuration
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let provider: Arc<dyn ImageProvider> = Arc::new(OpenAIImageClient::new(&config.provider)?);

        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.storage.timeout))
            .build()?;

        let store = SupabaseStorage::from_config(&config.storage, http_client.clone())
            .map(|s| Arc::new(s) as Arc<dyn ObjectStore>);

        Ok(Self::new(provider, ImageServiceSettings::from_config(config))
            .with_store(store)
            .with_http_client(http_client))
    }

    /// Attach (or detach) the object store used for mirroring
    pub fn with_store(mut self, store: Option<Arc<dyn ObjectStore>>) -> Self {
        self.store = store;
        self
    }

    /// Replace the client used for downloads
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn settings(&self) -> &ImageServiceSettings {
        &self.settings
    }

    /// Whether mirroring into object storage is available
    pub fn storage_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Generate one image for `prompt`
    ///
    /// Never fails outright: provider errors become failed results, and a
    /// provider that misses the deadline is answered with the placeholder image.
    pub async fn generate(
        &self,
        prompt: &str,
        overrides: &ImageOverrides,
        mode: OutputMode,
    ) -> GeneratedImage {
        let options = ImageOptions::resolve(overrides, &self.settings.defaults);
        let request = ImageGenerationRequest {
            prompt: prompt.to_string(),
            model: options.model.clone(),
            n: 1,
            size: options.size.clone(),
            quality: options.quality.clone(),
            style: options.style.clone(),
            response_format: mode.response_format(),
            user: None,
        };

        info!(
            "Generating image with {} (model {}, mode {:?})",
            self.provider.name(),
            options.model,
            mode
        );

        let response = match self.race_provider(&request).await {
            GenerationOutcome::Completed(Ok(response)) => response,
            GenerationOutcome::Completed(Err(e)) if e.is_timeout() => {
                warn!("Provider reported a timeout, using placeholder image: {}", e);
                placeholder_response()
            }
            GenerationOutcome::Completed(Err(e)) => {
                error!("Image generation failed: {}", e);
                return GeneratedImage::failure(
                    prompt,
                    options,
                    format!("Image generation failed: {}", e.message()),
                );
            }
            GenerationOutcome::TimedOut => {
                warn!(
                    "Provider did not answer within {:?}, using placeholder image",
                    self.settings.timeout
                );
                placeholder_response()
            }
        };

        self.deliver(&response, prompt, options, mode).await
    }

    /// Race the provider call against the configured deadline; the slower side is dropped
    async fn race_provider(&self, request: &ImageGenerationRequest) -> GenerationOutcome {
        match tokio::time::timeout(self.settings.timeout, self.provider.generate_image(request))
            .await
        {
            Ok(result) => GenerationOutcome::Completed(result),
            Err(_) => GenerationOutcome::TimedOut,
        }
    }

    /// Turn a provider response into a result in the requested mode
    async fn deliver(
        &self,
        response: &ImageGenerationResponse,
        prompt: &str,
        options: ImageOptions,
        mode: OutputMode,
    ) -> GeneratedImage {
        let Some(image) = response.first_image() else {
            return GeneratedImage::failure(
                prompt,
                options,
                "Image generation failed: provider returned no image data",
            );
        };

        let b64 = image.b64_json.as_deref().filter(|b| !b.is_empty());
        let url = image.url.as_deref().filter(|u| !u.is_empty());

        // A URL-only answer (the placeholder included) is delivered as a URL in every mode
        let location = match (mode, b64, url) {
            (OutputMode::Base64, Some(b64), _) => ImageLocation::Base64(b64.to_string()),
            (OutputMode::File, Some(b64), _) => match self.write_file(b64).await {
                Ok(location) => location,
                Err(e) => {
                    error!("Failed to save generated image: {}", e);
                    return GeneratedImage::failure(
                        prompt,
                        options,
                        format!("Image generation failed: {}", e),
                    );
                }
            },
            (_, _, Some(url)) => ImageLocation::Url(url.to_string()),
            (OutputMode::Url, Some(b64), None) => ImageLocation::Base64(b64.to_string()),
            (_, None, None) => {
                return GeneratedImage::failure(
                    prompt,
                    options,
                    "Image generation failed: provider returned no image data",
                );
            }
        };

        info!("Image generated successfully");
        GeneratedImage::success(response, prompt, options, location)
    }

    /// Decode a base64 payload into a new file under the uploads directory
    async fn write_file(&self, b64: &str) -> Result<ImageLocation> {
        let bytes = STANDARD
            .decode(b64)
            .map_err(|e| GatewayError::internal(format!("Invalid base64 image data: {}", e)))?;

        let id = uuid::Uuid::new_v4().simple().to_string();
        let filename = format!(
            "image-{}-{}.png",
            chrono::Utc::now().timestamp_millis(),
            &id[..8]
        );

        let dir = &self.settings.uploads_dir;
        tokio::fs::create_dir_all(dir).await?;
        let file_path = dir.join(&filename);
        tokio::fs::write(&file_path, &bytes).await?;
        debug!("Wrote {} bytes to {:?}", bytes.len(), file_path);

        let image_url = format!(
            "{}/{}",
            self.settings.uploads_public_path.trim_end_matches('/'),
            filename
        );
        Ok(ImageLocation::File {
            filename,
            image_url,
            file_path,
        })
    }

    /// Fetch a remote image into memory
    ///
    /// Bounded by `download_timeout` and `max_download_bytes`; both surface as network errors.
    pub async fn download(&self, url: &str) -> Result<DownloadedImage> {
        debug!("Downloading image from {}", url);

        let mut response = self
            .http_client
            .get(url)
            .timeout(self.settings.download_timeout)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default();
            return Err(GatewayError::network(
                format!("{} {}", status.as_u16(), reason).trim_end().to_string(),
            ));
        }

        let header_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let limit = self.settings.max_download_bytes;
        if let Some(length) = response.content_length() {
            if length > limit as u64 {
                return Err(GatewayError::network(format!(
                    "Image of {} bytes exceeds the {} byte limit",
                    length, limit
                )));
            }
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| GatewayError::network(format!("Failed to read image body: {}", e)))?
        {
            if body.len() + chunk.len() > limit {
                return Err(GatewayError::network(format!(
                    "Image exceeds the {} byte limit",
                    limit
                )));
            }
            body.extend_from_slice(&chunk);
        }
        let bytes = body.freeze();

        let content_type = header_type
            .or_else(|| sniff_content_type(&bytes).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        debug!("Downloaded {} bytes ({})", bytes.len(), content_type);
        Ok(DownloadedImage {
            bytes,
            content_type,
        })
    }

    /// Copy a remote image into object storage and sign a URL for it
    pub async fn mirror_to_storage(&self, image_url: &str, prompt: &str) -> Result<StoredObject> {
        let store = self.store.as_ref().ok_or(GatewayError::StorageDisabled)?;

        let image = self.download(image_url).await?;
        let path = object_key(
            &self.settings.object_prefix,
            prompt,
            &image.content_type,
            chrono::Utc::now().timestamp_millis(),
        );
        let size = image.size();

        store
            .upload(ObjectUpload {
                path: path.clone(),
                bytes: image.bytes,
                content_type: image.content_type.clone(),
            })
            .await?;

        let url = store
            .create_signed_url(&path, self.settings.signed_url_ttl)
            .await?;

        info!("Mirrored image to {} as {}", store.provider_name(), path);
        Ok(StoredObject {
            provider: store.provider_name().to_string(),
            url,
            path,
            content_type: image.content_type,
            size,
            expires_in_seconds: self.settings.signed_url_ttl,
        })
    }
}
