//! Response structures for the images endpoint

use serde::{Deserialize, Serialize};

/// Image generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    /// Creation timestamp (unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
    /// Generated images
    #[serde(default)]
    pub data: Vec<ImageData>,
    /// Token accounting, only reported by some models
    #[serde(default)]
    pub usage: Option<ImageUsage>,
}

/// Image object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageData {
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64 encoded image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// Prompt as rewritten by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// Usage accounting reported with a generation
///
/// Newer image models report `input_tokens`/`output_tokens`; both spellings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUsage {
    #[serde(default, alias = "input_tokens")]
    pub prompt_tokens: u32,
    #[serde(default, alias = "output_tokens")]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl ImageGenerationResponse {
    /// First generated image, if any
    pub fn first_image(&self) -> Option<&ImageData> {
        self.data.first()
    }
}
