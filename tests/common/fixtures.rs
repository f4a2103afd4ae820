//! Test fixtures

use base64::Engine;
use imagegen_gateway::core::models::openai::{ImageData, ImageGenerationResponse, ImageUsage};

/// PNG signature followed by a few payload bytes
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

/// Provider response carrying a URL
pub fn url_response(url: &str) -> ImageGenerationResponse {
    ImageGenerationResponse {
        created: Some(1_700_000_000),
        data: vec![ImageData {
            url: Some(url.to_string()),
            revised_prompt: Some("a revised prompt".to_string()),
            ..Default::default()
        }],
        usage: Some(ImageUsage {
            prompt_tokens: 12,
            completion_tokens: 0,
            total_tokens: 12,
        }),
    }
}

/// Provider response carrying base64 image data
pub fn b64_response(bytes: &[u8]) -> ImageGenerationResponse {
    ImageGenerationResponse {
        created: Some(1_700_000_000),
        data: vec![ImageData {
            b64_json: Some(base64::engine::general_purpose::STANDARD.encode(bytes)),
            ..Default::default()
        }],
        usage: None,
    }
}
