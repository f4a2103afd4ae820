//! Request structures for the images endpoint

use serde::{Deserialize, Serialize};

/// The format in which generated images are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

/// Image generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Prompt for image generation
    pub prompt: String,
    /// Model to use
    pub model: String,
    /// Number of images
    pub n: u32,
    /// Image size
    pub size: String,
    /// Image quality (`standard`, `hd`)
    pub quality: String,
    /// Image style (`vivid`, `natural`)
    pub style: String,
    /// Response format
    pub response_format: ImageResponseFormat,
    /// User identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
