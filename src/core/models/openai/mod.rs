//! OpenAI-compatible image API models
//!
//! - `requests` - the `/images/generations` request body
//! - `responses` - the response body, image items and usage accounting

pub mod requests;
pub mod responses;

pub use requests::{ImageGenerationRequest, ImageResponseFormat};
pub use responses::{ImageData, ImageGenerationResponse, ImageUsage};
