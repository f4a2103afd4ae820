//! Image provider adapters
//!
//! A provider turns an [`ImageGenerationRequest`] into an [`ImageGenerationResponse`].
//! The gateway holds exactly one provider, injected at startup.

pub mod openai;
pub mod unified_provider;

pub use openai::OpenAIImageClient;
pub use unified_provider::ProviderError;

use crate::core::models::openai::{ImageGenerationRequest, ImageGenerationResponse};
use async_trait::async_trait;

/// An external image-generation API
#[async_trait]
pub trait ImageProvider: Send + Sync + std::fmt::Debug {
    /// Provider name used in logs and errors
    fn name(&self) -> &'static str;

    /// Generate images for a single request
    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ProviderError>;
}
