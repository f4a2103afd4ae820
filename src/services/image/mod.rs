//! Image generation service
//!
//! Runs a prompt through the configured provider under a deadline, delivers
//! the result in the requested output mode, and can relay or mirror remote
//! images.

mod service;
mod types;


pub use service::ImageService;
pub use types::{
    DownloadedImage, GenerationOutcome, ImageServiceSettings, PLACEHOLDER_IMAGE_URL,
    placeholder_response,
};
