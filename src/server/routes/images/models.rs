//! Request models for image endpoints

use crate::core::models::ImageOverrides;
use serde::Deserialize;

/// Body shared by the generation endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub prompt: Option<String>,
    #[serde(flatten)]
    pub options: ImageOverrides,
    /// `/generate` only: write the image under the uploads directory
    #[serde(default)]
    pub save_to_file: Option<bool>,
    /// `/generate-url` only: mirror the result into object storage
    #[serde(default)]
    pub store: Option<bool>,
}

impl ImageRequest {
    /// The prompt exactly as sent, unless it is missing or blank
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Body of the download proxy
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProxyRequest {
    pub image_url: Option<String>,
}
