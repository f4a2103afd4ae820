//! Generated image results and their API envelope

use super::openai::{ImageGenerationResponse, ImageResponseFormat, ImageUsage};
use crate::config::ImageDefaults;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Message attached to successful envelopes
pub const SUCCESS_MESSAGE: &str = "Image generated successfully";
/// Message attached to failed envelopes
pub const FAILURE_MESSAGE: &str = "Failed to generate image";

/// Per-request option overrides; any field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageOverrides {
    pub model: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
    pub style: Option<String>,
}

/// Fully resolved generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageOptions {
    pub model: String,
    pub size: String,
    pub quality: String,
    pub style: String,
}

impl ImageOptions {
    /// Fill every option missing from `overrides` with the configured default.
    /// Empty strings count as missing.
    pub fn resolve(overrides: &ImageOverrides, defaults: &ImageDefaults) -> Self {
        fn pick(value: &Option<String>, default: &str) -> String {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            model: pick(&overrides.model, &defaults.model),
            size: pick(&overrides.size, &defaults.size),
            quality: pick(&overrides.quality, &defaults.quality),
            style: pick(&overrides.style, &defaults.style),
        }
    }
}

impl From<&ImageDefaults> for ImageOptions {
    fn from(defaults: &ImageDefaults) -> Self {
        Self::resolve(&ImageOverrides::default(), defaults)
    }
}

/// How the caller wants the image delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Provider-hosted URL
    Url,
    /// Inline base64 payload
    Base64,
    /// Written under the uploads directory and served from there
    File,
}

impl OutputMode {
    /// Format to request from the provider
    pub fn response_format(self) -> ImageResponseFormat {
        match self {
            OutputMode::Url => ImageResponseFormat::Url,
            OutputMode::Base64 | OutputMode::File => ImageResponseFormat::B64Json,
        }
    }
}

/// Where a successful image can be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Base64(String),
    Url(String),
    File {
        filename: String,
        image_url: String,
        file_path: PathBuf,
    },
}

/// Outcome of a generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Success(ImageLocation),
    Failed { error: String },
}

/// A generation result, successful or not
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Provider creation time (unix seconds)
    pub created: Option<i64>,
    pub prompt: String,
    pub options: ImageOptions,
    pub usage: Option<ImageUsage>,
    pub created_at: DateTime<Utc>,
    pub status: ImageStatus,
}

impl GeneratedImage {
    /// Build a successful result from a provider response
    pub fn success(
        response: &ImageGenerationResponse,
        prompt: impl Into<String>,
        options: ImageOptions,
        location: ImageLocation,
    ) -> Self {
        Self {
            created: response.created,
            prompt: prompt.into(),
            options,
            usage: response.usage,
            created_at: Utc::now(),
            status: ImageStatus::Success(location),
        }
    }

    /// Build a failed result; failures carry no provider data
    pub fn failure(prompt: impl Into<String>, options: ImageOptions, error: impl Into<String>) -> Self {
        Self {
            created: None,
            prompt: prompt.into(),
            options,
            usage: None,
            created_at: Utc::now(),
            status: ImageStatus::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, ImageStatus::Success(_))
    }

    /// Error message of a failed result
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ImageStatus::Failed { error } => Some(error),
            ImageStatus::Success(_) => None,
        }
    }

    /// Provider URL, when the image was delivered as one
    pub fn remote_url(&self) -> Option<&str> {
        match &self.status {
            ImageStatus::Success(ImageLocation::Url(url)) => Some(url),
            _ => None,
        }
    }

    /// Serializable envelope returned by the image endpoints
    pub fn to_api_response(&self) -> ImageEnvelope {
        let mut data = ImageEnvelopeData {
            created: self.created,
            prompt: self.prompt.clone(),
            model: self.options.model.clone(),
            size: self.options.size.clone(),
            quality: self.options.quality.clone(),
            style: self.options.style.clone(),
            usage: self.usage,
            created_at: self.created_at,
            base64: None,
            url: None,
            filename: None,
            image_url: None,
        };

        match &self.status {
            ImageStatus::Success(location) => {
                match location {
                    ImageLocation::Base64(b64) => data.base64 = Some(b64.clone()),
                    ImageLocation::Url(url) => data.url = Some(url.clone()),
                    ImageLocation::File {
                        filename,
                        image_url,
                        ..
                    } => {
                        data.filename = Some(filename.clone());
                        data.image_url = Some(image_url.clone());
                    }
                }
                ImageEnvelope {
                    success: true,
                    message: SUCCESS_MESSAGE.to_string(),
                    data,
                    error: None,
                    stored: None,
                }
            }
            ImageStatus::Failed { error } => ImageEnvelope {
                success: false,
                message: FAILURE_MESSAGE.to_string(),
                data,
                error: Some(error.clone()),
                stored: None,
            },
        }
    }
}

/// JSON envelope for image generation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEnvelope {
    pub success: bool,
    pub message: String,
    pub data: ImageEnvelopeData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Present only after a successful mirror into object storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored: Option<StoredObject>,
}

impl ImageEnvelope {
    pub fn with_stored(mut self, stored: StoredObject) -> Self {
        self.stored = Some(stored);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEnvelopeData {
    pub created: Option<i64>,
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub quality: String,
    pub style: String,
    pub usage: Option<ImageUsage>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A copy of a generated image held in object storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Storage backend name
    pub provider: String,
    /// Signed retrieval URL
    pub url: String,
    /// Object key inside the bucket
    pub path: String,
    pub content_type: String,
    /// Size in bytes
    pub size: usize,
    pub expires_in_seconds: u64,
}
